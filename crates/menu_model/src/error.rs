use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    Conflict,
    OutOfRange,
}

/// Why a draft was rejected. The catalog is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name is empty")]
    EmptyName,
    #[error("price is empty")]
    MissingPrice,
    #[error("price '{0}' is not a number")]
    InvalidPrice(String),
    #[error("price '{0}' is not finite")]
    NonFinitePrice(String),
    #[error("price '{0}' is negative")]
    NegativePrice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationError),
    #[error("no menu entry with id '{0}'")]
    NotFound(EntryId),
    #[error("menu entry id '{0}' is already in use")]
    DuplicateId(EntryId),
    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::Validation,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::DuplicateId(_) => ErrorCode::Conflict,
            Self::IndexOutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }

    /// Validation failures are user mistakes; everything else means the caller held a stale reference.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for ErrorReport {
    fn from(value: CatalogError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<&CatalogError> for ErrorReport {
    fn from(value: &CatalogError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
