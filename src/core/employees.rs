use crate::core::animals::oldest_resident;
use crate::core::service::ZooQueryService;
use crate::core::views::Coverage;
use crate::domain::model::{Employee, EmployeePatch};
use crate::utils::error::{Entity, Result, ZooError};

impl ZooQueryService {
    /// 以名或姓尋找第一位員工。
    ///
    /// 空白名稱視為沒有查詢，回傳 `Ok(None)`；有名稱但找不到則是 `NotFound`。
    pub fn employee_by_name(&self, name: Option<&str>) -> Result<Option<&Employee>> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };
        self.store
            .employees
            .iter()
            .find(|employee| employee.matches_name(name))
            .map(Some)
            .ok_or_else(|| ZooError::not_found(Entity::Employee, name))
    }

    /// 合併兩份員工欄位，`associated_with` 優先
    pub fn create_employee(
        &self,
        personal_info: &EmployeePatch,
        associated_with: &EmployeePatch,
    ) -> EmployeePatch {
        personal_info.merged_with(associated_with)
    }

    pub fn is_manager(&self, id: &str) -> bool {
        self.store
            .employees
            .iter()
            .any(|employee| employee.managers.iter().any(|manager| manager == id))
    }

    /// 直接附加到員工集合，不檢查 id 是否重複
    pub fn add_employee(&mut self, employee: Employee) {
        tracing::info!("Adding employee {} ({})", employee.full_name(), employee.id);
        self.store.employees.push(employee);
    }

    pub fn get_animals_from_employees(&self, employee: &Employee) -> Result<Vec<String>> {
        employee
            .responsible_for
            .iter()
            .map(|group_id| self.find_group_by_id(group_id).map(|group| group.name.clone()))
            .collect()
    }

    pub fn construct_employee_full_name(&self, employee: &Employee) -> String {
        employee.full_name()
    }

    pub fn get_all_employees_and_animals(&self) -> Result<Coverage> {
        let mut coverage = Coverage::new();
        for employee in &self.store.employees {
            let animals = self.get_animals_from_employees(employee)?;
            coverage.insert(employee.full_name(), animals);
        }
        if coverage.is_empty() {
            tracing::debug!("No employees on record");
        }
        Ok(coverage)
    }

    /// 以 id、名或姓尋找第一位員工，找不到回傳 None
    pub fn get_employee_by_name_or_id(&self, id_or_name: &str) -> Option<&Employee> {
        self.store
            .employees
            .iter()
            .find(|employee| employee.id == id_or_name || employee.matches_name(id_or_name))
    }

    pub fn employee_coverage(&self, id_or_name: Option<&str>) -> Result<Coverage> {
        let id_or_name = match id_or_name {
            Some(key) if !key.is_empty() => key,
            _ => return self.get_all_employees_and_animals(),
        };

        let employee = self
            .get_employee_by_name_or_id(id_or_name)
            .ok_or_else(|| ZooError::not_found(Entity::Employee, id_or_name))?;
        tracing::debug!("Building coverage for {}", employee.full_name());

        let animals = self.get_animals_from_employees(employee)?;
        let mut coverage = Coverage::new();
        coverage.insert(employee.full_name(), animals);
        Ok(coverage)
    }

    /// 員工負責的第一個物種中最年長的 resident，回傳 (name, age)
    pub fn oldest_from_first_species(&self, employee_id: &str) -> Result<(String, u32)> {
        let employee = self
            .store
            .employee_by_id(employee_id)
            .ok_or_else(|| ZooError::not_found(Entity::Employee, employee_id))?;
        let first_group_id = employee
            .responsible_for
            .first()
            .ok_or_else(|| ZooError::not_found(Entity::AnimalGroup, "(none assigned)"))?;
        let group = self.find_group_by_id(first_group_id)?;
        let oldest = oldest_resident(&group.residents).ok_or_else(|| ZooError::NoResidents {
            species: group.name.clone(),
        })?;
        Ok((oldest.name.clone(), oldest.age))
    }
}
