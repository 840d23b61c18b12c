// Domain layer: data model, the owned store, and the DataSource port.

pub mod model;
pub mod ports;
pub mod store;
