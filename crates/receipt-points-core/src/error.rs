//! Error types for the receipt points core.

use thiserror::Error;

/// Boundary validation errors.
///
/// Every variant names the offending field in its wire spelling
/// (`purchaseDate`, `items[2].price`) so the message can be returned to
/// the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The receipt is invalid. Missing required field `{0}`.")]
    MissingField(String),

    #[error("The receipt is invalid. Field `{field}` {reason}.")]
    InvalidField { field: String, reason: String },

    #[error("The receipt is invalid. Field `{0}` is out of range.")]
    AmountOutOfRange(String),
}

impl ValidationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field)
            | Self::InvalidField { field, .. }
            | Self::AmountOutOfRange(field) => field,
        }
    }
}

/// Failure to parse a receipt identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed receipt id: {0:?}")]
pub struct IdError(pub String);
