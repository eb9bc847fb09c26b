//! What the editor needs from the page it runs on: a confirmation dialog,
//! a place for notices, and a way to reload.

use async_trait::async_trait;
use std::fmt::Display;

/// What caused a commit. All three commit the same way; the trigger is only
/// recorded in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Change,
    Blur,
    Enter,
}

impl Display for CommitTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CommitTrigger::Change => "change",
            CommitTrigger::Blur => "blur",
            CommitTrigger::Enter => "enter",
        })
    }
}

/// A modal confirmation, described rather than rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmDialog {
    pub fn delete_order_item() -> Self {
        Self {
            title: "Confirm deletion".to_string(),
            message: "Remove this item from the order?".to_string(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// User-facing notices. Server rejections and network failures share one
/// generic text per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SaveFailed,
    DeleteFailed,
    NetworkError,
    Invalid(String),
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::SaveFailed => f.write_str("Save failed"),
            Notice::DeleteFailed => f.write_str("Delete failed"),
            Notice::NetworkError => f.write_str("Network error"),
            Notice::Invalid(message) => f.write_str(message),
        }
    }
}

#[async_trait]
pub trait Surface: Send + Sync {
    /// Shows `dialog` and waits for the answer. Closing the dialog any other
    /// way counts as [`Decision::Cancel`].
    async fn confirm(&self, dialog: &ConfirmDialog) -> Decision;

    fn notify(&self, notice: Notice);

    /// Reloads the whole page.
    fn reload(&self);
}
