pub mod animals;
pub mod employees;
pub mod pricing;
pub mod schedule;
pub mod service;
pub mod views;

pub use crate::domain::model::{AnimalGroup, Employee, EmployeePatch, Entrants, Resident};
pub use crate::domain::ports::DataSource;
pub use crate::domain::store::DataStore;
pub use crate::utils::error::Result;
pub use animals::AnimalMapOptions;
pub use service::ZooQueryService;
pub use views::{AnimalCount, AnimalMap, Coverage, LocationEntry, Schedule};
