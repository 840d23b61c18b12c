pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BuiltinFixture, JsonFileSource};
pub use config::ZooConfig;
pub use core::{AnimalMapOptions, ZooQueryService};
pub use domain::model::{AnimalGroup, Employee, EmployeePatch, Location, Resident, Sex};
pub use domain::store::DataStore;
pub use utils::error::{Result, ZooError};
