//! Shared error types for the calculator system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl SharedError {
    pub fn invalid_config(field: &str, value: impl Into<String>) -> Self {
        SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
