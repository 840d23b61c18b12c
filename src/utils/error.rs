use std::fmt;
use thiserror::Error;

/// 查詢失敗時找不到的實體種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Species,
    AnimalGroup,
    Employee,
    Weekday,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Species => "species",
            Entity::AnimalGroup => "animal group",
            Entity::Employee => "employee",
            Entity::Weekday => "weekday",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Data,
    Configuration,
    System,
}

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("Species {species} has no residents")]
    NoResidents { species: String },

    #[error("Resident list is empty")]
    EmptyResidents,

    #[error("Employee record is missing required field: {field}")]
    IncompleteEmployee { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ZooError {
    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        ZooError::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ZooError::NotFound { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ZooError::NotFound { .. } => ErrorCategory::Lookup,
            ZooError::NoResidents { .. }
            | ZooError::EmptyResidents
            | ZooError::IncompleteEmployee { .. } => ErrorCategory::Data,
            ZooError::ConfigError { .. }
            | ZooError::ConfigValidationError { .. }
            | ZooError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ZooError::IoError(_) | ZooError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::NotFound { entity, key } => {
                format!("No {} matches '{}'", entity, key)
            }
            ZooError::NoResidents { species } => {
                format!("The {} enclosure is empty", species)
            }
            ZooError::IoError(e) => format!("Could not read zoo data: {}", e),
            ZooError::SerializationError(e) => format!("Zoo data is malformed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ZooError::not_found(Entity::Species, "dragons");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "species not found: dragons");
        assert_eq!(err.user_friendly_message(), "No species matches 'dragons'");
        assert_eq!(err.category(), ErrorCategory::Lookup);
    }

    #[test]
    fn test_category_for_config_errors() {
        let err = ZooError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
