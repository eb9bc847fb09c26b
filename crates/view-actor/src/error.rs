//! # Runtime Errors
//!
//! Errors produced by the view actor runtime itself. Entity-level failures are
//! carried inside [`ViewError::Entity`] so callers can still downcast them.

/// Errors that can occur while talking to a [`ViewActor`](crate::ViewActor).
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    Duplicate(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl ViewError {
    /// Returns the entity error if this is one and it has type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            ViewError::Entity(e) => e.downcast_ref::<E>(),
            _ => None,
        }
    }
}
