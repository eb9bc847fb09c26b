//! An order change page: its inline-editable lines and the order total.

use crate::editor::field::EditableField;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-issued order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-issued order item id, as found in the item's `data-item-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the order total block currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TotalDisplay {
    /// Returned by the server; shown verbatim.
    Authoritative(String),
    /// Summed client-side from the displayed line sums. Best effort only.
    Estimated(String),
}

impl TotalDisplay {
    pub fn text(&self) -> &str {
        match self {
            TotalDisplay::Authoritative(text) | TotalDisplay::Estimated(text) => text,
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, TotalDisplay::Authoritative(_))
    }
}

/// One inline row of the order page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: EditableField<u32>,
    /// Line sum exactly as last rendered or returned by the server.
    pub item_sum: String,
}

/// The order change page.
///
/// Managed by a [`ViewActor`](view_actor::ViewActor); see
/// [`crate::editor::order_sheet`] for the events it reacts to.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSheet {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: TotalDisplay,
}

impl OrderSheet {
    pub fn line(&self, item_id: ItemId) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    pub(crate) fn line_mut(&mut self, item_id: ItemId) -> Option<&mut OrderLine> {
        self.lines.iter_mut().find(|line| line.item_id == item_id)
    }
}

/// One line as rendered by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSnapshot {
    pub item_id: ItemId,
    pub quantity: u32,
    pub item_sum: String,
}

/// Payload for loading an order page.
///
/// `total` is `None` when the page was rendered without a total block.
#[derive(Debug, Clone)]
pub struct OrderSheetCreate {
    pub order_id: OrderId,
    pub lines: Vec<LineSnapshot>,
    pub total: Option<String>,
}
