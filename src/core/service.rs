use crate::domain::ports::DataSource;
use crate::domain::store::DataStore;
use crate::utils::error::Result;

/// 園區資料查詢服務，擁有注入的 DataStore。
///
/// 操作依集合分散在 `animals`、`employees`、`pricing`、`schedule` 模組中。
/// 只有 `add_employee` 與 `increase_prices` 會修改資料。
#[derive(Debug, Clone)]
pub struct ZooQueryService {
    pub(crate) store: DataStore,
}

impl ZooQueryService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    pub fn from_source<D: DataSource>(source: &D) -> Result<Self> {
        let store = source.load()?;
        tracing::info!(
            "Zoo data ready: {} animal groups, {} employees",
            store.animals.len(),
            store.employees.len()
        );
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn into_store(self) -> DataStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BuiltinFixture;

    #[test]
    fn test_from_builtin_source() {
        let service = ZooQueryService::from_source(&BuiltinFixture).unwrap();
        assert_eq!(service.store().animals.len(), 9);
        assert_eq!(service.into_store().employees.len(), 8);
    }
}
