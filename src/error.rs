//! Error types for the ESPN Fantasy Basketball player library

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Season not provided and {env_var} environment variable not set")]
    MissingSeason { env_var: String },

    #[error("Player data is missing required field: {field}")]
    MissingField { field: String },

    #[error("Field {field} has an unexpected type (expected {expected})")]
    InvalidField { field: String, expected: String },

    #[error("Unknown position id: {id}")]
    UnknownPosition { id: i64 },

    #[error("Unknown pro team id: {id}")]
    UnknownProTeam { id: i64 },

    #[error("Invalid date in {field}: {value}")]
    InvalidDate { field: String, value: String },
}

impl EspnError {
    pub(crate) fn missing(field: &str) -> Self {
        EspnError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, expected: &str) -> Self {
        EspnError::InvalidField {
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }
}
