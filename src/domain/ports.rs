use crate::domain::store::DataStore;
use crate::utils::error::Result;

/// 提供已填好資料的 DataStore
pub trait DataSource {
    fn load(&self) -> Result<DataStore>;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn load(&self) -> Result<DataStore> {
        (**self).load()
    }
}
