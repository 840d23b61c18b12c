use serde::{Deserialize, Serialize};

use crate::domain::model::{AnimalGroup, Employee, HoursTable, PriceTable};

/// 四個集合的擁有者，由 DataSource 產生後注入 ZooQueryService
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStore {
    #[serde(default)]
    pub animals: Vec<AnimalGroup>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub prices: PriceTable,
    #[serde(default)]
    pub hours: HoursTable,
}

impl DataStore {
    pub fn new(
        animals: Vec<AnimalGroup>,
        employees: Vec<Employee>,
        prices: PriceTable,
        hours: HoursTable,
    ) -> Self {
        Self {
            animals,
            employees,
            prices,
            hours,
        }
    }

    pub fn group_by_id(&self, id: &str) -> Option<&AnimalGroup> {
        self.animals.iter().find(|group| group.id == id)
    }

    pub fn group_by_name(&self, name: &str) -> Option<&AnimalGroup> {
        self.animals.iter().find(|group| group.name == name)
    }

    pub fn employee_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}
