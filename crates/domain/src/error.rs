use thiserror::Error;

/// Rejections produced while validating an incoming measurement payload.
///
/// Every variant is user-correctable; the HTTP layer reports them as 400.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing field: '{0}' is required")]
    MissingField(&'static str),

    #[error("Invalid type: '{field}' must be a real number, got {found}")]
    InvalidType { field: &'static str, found: String },

    #[error("Out of range: {value} g is outside [{min}, {max}] g")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
