use std::fs;
use std::path::PathBuf;

use crate::domain::ports::DataSource;
use crate::domain::store::DataStore;
use crate::utils::error::Result;

/// 從 JSON 檔讀取園區資料（格式與內建資料相同，camelCase 欄位）
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<DataStore> {
        tracing::debug!("Loading zoo data from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let store: DataStore = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} animal groups and {} employees",
            store.animals.len(),
            store.employees.len()
        );
        Ok(store)
    }
}
