//! 查詢結果的型別，序列化成 JSON 物件時保留插入順序。

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::model::Location;

/// 依插入順序保存的字串鍵映射
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 已存在的鍵會被覆蓋，位置不變
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// 員工全名 → 負責的物種名稱
pub type Coverage = OrderedMap<Vec<String>>;

/// 星期 → 營業說明
pub type Schedule = OrderedMap<String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnimalCount {
    All(OrderedMap<usize>),
    Species(usize),
}

/// animal_map 中每個分區的一筆資料
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEntry {
    Species(String),
    Residents { species: String, names: Vec<String> },
}

impl LocationEntry {
    pub fn species(&self) -> &str {
        match self {
            LocationEntry::Species(species) => species,
            LocationEntry::Residents { species, .. } => species,
        }
    }
}

impl Serialize for LocationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LocationEntry::Species(species) => serializer.serialize_str(species),
            LocationEntry::Residents { species, names } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(species, names)?;
                map.end()
            }
        }
    }
}

pub type AnimalMap = BTreeMap<Location, Vec<LocationEntry>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("b", 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.get("b"), Some(&3));
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":3,"a":2}"#);
    }

    #[test]
    fn test_location_entry_json_shape() {
        let entries = vec![
            LocationEntry::Species("lions".to_string()),
            LocationEntry::Residents {
                species: "tigers".to_string(),
                names: vec!["Shu".to_string()],
            },
        ];
        assert_eq!(
            serde_json::to_value(&entries).unwrap(),
            serde_json::json!(["lions", { "tigers": ["Shu"] }])
        );
    }
}
