use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum LimitError {
    #[error("empty limit pattern")]
    EmptyPattern,

    #[error("invalid regex '{pattern}': {reason}")]
    RegexCompile { pattern: String, reason: String },

    #[error("failed to read inventory: {0}")]
    InventoryRead(String),

    #[error("invalid inventory format: {0}")]
    InventoryFormat(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to render report: {0}")]
    ReportRender(String),
}

impl LimitError {
    pub(crate) fn regex_compile(pattern: &str, err: &regex::Error) -> Self {
        LimitError::RegexCompile {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LimitError {
    fn from(err: serde_json::Error) -> Self {
        LimitError::InventoryFormat(err.to_string())
    }
}
