//! Error types for termledger.
//!
//! All errors are strongly typed using thiserror. The resolution engine
//! itself never fails—its functions are total over their input domain—so
//! everything here belongs to the validation and storage layers that feed
//! the engine.

use thiserror::Error;

use crate::document::DocumentId;
use crate::investor::InvestorId;
use crate::store::StorageError;

/// Validation errors raised while admitting documents and clauses into a
/// store, before the engine ever sees them.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Document title cannot be empty")]
    EmptyTitle,

    #[error("Document {document_id} cannot supersede itself")]
    SelfSupersession { document_id: DocumentId },

    #[error("Supersession target {target_id} does not exist")]
    UnknownSupersessionTarget { target_id: DocumentId },

    #[error(
        "Supersession target {target_id} belongs to investor {target_investor_id}, \
         not {investor_id}"
    )]
    CrossInvestorSupersession {
        target_id: DocumentId,
        target_investor_id: InvestorId,
        investor_id: InvestorId,
    },

    #[error("Document {target_id} is already superseded by {superseding_id}")]
    AlreadySuperseded {
        target_id: DocumentId,
        superseding_id: DocumentId,
    },

    #[error("Required field '{field}' is missing")]
    MissingField { field: String },
}

/// Top-level error type for termledger.
#[derive(Debug, Error)]
pub enum TermsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TermsError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a storage error.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for termledger operations.
pub type TermsResult<T> = Result<T, TermsError>;
