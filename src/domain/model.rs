use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::utils::error::{Result, ZooError};

/// 園區分區，固定四個
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    NE,
    NW,
    SE,
    SW,
}

impl Location {
    pub const ALL: [Location; 4] = [Location::NE, Location::NW, Location::SE, Location::SW];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(format!("unknown sex: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    pub age: u32,
}

impl Resident {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            sex: None,
            age,
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

/// 一個物種的群組，擁有自己的 residents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalGroup {
    pub id: String,
    pub name: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u8>,
    #[serde(default)]
    pub residents: Vec<Resident>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub managers: Vec<String>,
    #[serde(default)]
    pub responsible_for: Vec<String>,
}

impl Employee {
    /// 建立新員工，managers 與 responsible_for 預設為空
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            managers: Vec::new(),
            responsible_for: Vec::new(),
        }
    }

    pub fn with_managers<I, S>(mut self, managers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.managers = managers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_responsible_for<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responsible_for = group_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.first_name == name || self.last_name == name
    }
}

/// 部分員工欄位，用於合併兩份資料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_for: Option<Vec<String>>,
}

impl EmployeePatch {
    /// `other` 有值的欄位覆蓋 `self`
    pub fn merged_with(&self, other: &EmployeePatch) -> EmployeePatch {
        EmployeePatch {
            id: other.id.clone().or_else(|| self.id.clone()),
            first_name: other.first_name.clone().or_else(|| self.first_name.clone()),
            last_name: other.last_name.clone().or_else(|| self.last_name.clone()),
            managers: other.managers.clone().or_else(|| self.managers.clone()),
            responsible_for: other
                .responsible_for
                .clone()
                .or_else(|| self.responsible_for.clone()),
        }
    }

    pub fn into_employee(self) -> Result<Employee> {
        let missing = |field: &str| ZooError::IncompleteEmployee {
            field: field.to_string(),
        };
        Ok(Employee {
            id: self.id.ok_or_else(|| missing("id"))?,
            first_name: self.first_name.ok_or_else(|| missing("firstName"))?,
            last_name: self.last_name.ok_or_else(|| missing("lastName"))?,
            managers: self.managers.unwrap_or_default(),
            responsible_for: self.responsible_for.unwrap_or_default(),
        })
    }
}

/// 營業時間，open 為上午，close 為 24 小時制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: i32,
    pub close: i32,
}

/// 年齡級距 → 票價
pub type PriceTable = BTreeMap<String, f64>;

/// 星期名稱 → 營業時間
pub type HoursTable = BTreeMap<String, OpeningHours>;

/// 年齡級距 → 入園人數
pub type Entrants = HashMap<String, u32>;
