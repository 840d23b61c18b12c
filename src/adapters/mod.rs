// Adapters layer: concrete DataSource implementations.

pub mod fixture;
pub mod json_file;

pub use fixture::{builtin_store, BuiltinFixture};
pub use json_file::JsonFileSource;
