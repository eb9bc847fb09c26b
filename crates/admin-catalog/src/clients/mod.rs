//! Domain clients wrapping the generic [`ViewClient`](view_actor::ViewClient)s.
//!
//! The editor clients are where requests leave the process: they move a
//! field into `Saving` through the actor, await the server outside it, and
//! send the answer back as a settle action.

pub mod catalog_client;
pub mod discount_editor;
pub mod order_editor;

pub use catalog_client::CatalogClient;
pub use discount_editor::DiscountEditor;
pub use order_editor::{DeleteOutcome, OrderEditor};

use crate::editor::EditorError;
use view_actor::ViewError;

/// What became of a commit that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The server accepted it and the displayed values were patched.
    Saved,
    /// A newer commit for the same field was issued before the answer
    /// arrived; the answer was dropped.
    Superseded,
}

pub(crate) fn editor_error(e: ViewError) -> EditorError {
    if let Some(inner) = e.entity_error::<EditorError>() {
        return inner.clone();
    }
    match e {
        ViewError::NotFound(id) => EditorError::UnknownRow(id),
        other => EditorError::ActorCommunicationError(other.to_string()),
    }
}

pub(crate) fn unexpected_result(result: impl std::fmt::Debug) -> EditorError {
    EditorError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}
