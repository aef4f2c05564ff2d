//! Error types for the SplitLedger engine.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Validation errors (bad input, rejected before any submission)
//! - 2xx: Split errors (shares do not reconcile to the total)
//! - 9xx: General / internal errors
//!
//! Every error is recoverable: the operation is rejected and no partial
//! result is produced.

use thiserror::Error;

use crate::{Money, ParticipantId};

/// Why an input was rejected. The `Display` text is the human-readable
/// reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// The participant list is empty.
    #[error("no participants")]
    NoParticipants,

    /// The expense amount is zero or negative.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// The same participant identifier was listed twice.
    #[error("duplicate participant")]
    DuplicateParticipant(ParticipantId),

    /// The description is blank after trimming.
    #[error("description required")]
    EmptyDescription,

    /// The amount text is not a base-10 number.
    #[error("amount must be a number: {input:?}")]
    InvalidAmount { input: String },

    /// The amount does not fit in the minor-unit representation.
    #[error("amount out of range")]
    AmountOutOfRange,
}

/// Central error enum for all SplitLedger operations.
#[derive(Debug, Error)]
pub enum SplitLedgerError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// Malformed or out-of-range input.
    #[error("SL_ERR_100: Validation failed: {0}")]
    Validation(#[from] ValidationIssue),

    // =================================================================
    // Split Errors (2xx)
    // =================================================================
    /// Custom shares do not add up to the expense amount within tolerance.
    #[error("SL_ERR_200: Split totals ({sum}) do not match expense amount ({total})")]
    SplitMismatch { sum: Money, total: Money },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid values, malformed config document).
    #[error("SL_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("SL_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl SplitLedgerError {
    /// Whether this is a `ValidationError` in the engine's taxonomy.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this is a `SplitMismatchError` in the engine's taxonomy.
    #[must_use]
    pub fn is_split_mismatch(&self) -> bool {
        matches!(self, Self::SplitMismatch { .. })
    }

    /// The validation issue, if this is a validation failure.
    #[must_use]
    pub fn validation_issue(&self) -> Option<&ValidationIssue> {
        match self {
            Self::Validation(issue) => Some(issue),
            _ => None,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitLedgerError>;

impl From<serde_json::Error> for SplitLedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
