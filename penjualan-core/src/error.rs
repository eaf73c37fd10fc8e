//! Typed error taxonomy for the ledger engine.
//!
//! Every fallible operation on the public surface returns `LedgerError`.
//! The storage layer reports failures as `anyhow::Error` internally; those
//! surface here as the `Persistence` variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input rejected before any state change.
    #[error("validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Edit or delete of an id that is not in the ledger. No state change.
    #[error("transaction not found: {id}")]
    NotFound { id: String },

    /// Storage read/write failure. The mutation was aborted and the
    /// in-memory state left intact.
    #[error("persistence failure: {0}")]
    Persistence(#[from] anyhow::Error),

    /// Serialization or file-write failure during export. Ledger state is
    /// unaffected.
    #[error("export failed: {0}")]
    Export(String),
}

impl LedgerError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
