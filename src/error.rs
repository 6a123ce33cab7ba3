use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("duplicate value for {field}: {value}")]
    DuplicateKey { field: String, value: String },

    #[error("listing has no contact handle")]
    MissingContact,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("seed data error: {0}")]
    Seed(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DirectoryError {
    pub fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn duplicate(field: &str, value: &str) -> Self {
        Self::DuplicateKey {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
