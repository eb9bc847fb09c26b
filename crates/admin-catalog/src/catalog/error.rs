//! Error types for the catalog.

use super::validate::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The draft broke one or more field rules; nothing was created.
    #[error("Invalid product: {0}")]
    Invalid(FieldErrors),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CatalogError {
    /// Per-field errors when the draft was rejected.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CatalogError::Invalid(errors) => Some(errors),
            CatalogError::ActorCommunicationError(_) => None,
        }
    }

    /// Short label used as the `error_kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Invalid(_) => "validation",
            CatalogError::ActorCommunicationError(_) => "actor",
        }
    }
}
