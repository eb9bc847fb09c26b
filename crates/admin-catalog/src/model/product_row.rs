//! A row of the admin product change list with an inline discount editor.

use crate::editor::field::EditableField;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-issued product id, as found in the row's `data-product-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminProductId(pub u64);

impl Display for AdminProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The price column. The admin renders it as an editable input when price is
/// in `list_editable`, and as plain text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceCell {
    Input(String),
    Text(String),
}

impl PriceCell {
    pub fn text(&self) -> &str {
        match self {
            PriceCell::Input(value) | PriceCell::Text(value) => value,
        }
    }

    /// Replaces the shown value, keeping the cell kind.
    pub(crate) fn set(&mut self, value: String) {
        match self {
            PriceCell::Input(current) | PriceCell::Text(current) => *current = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: AdminProductId,
    /// Discount percent, 0..=99.
    pub discount: EditableField<u8>,
    pub price: PriceCell,
    pub old_price: String,
}

/// Payload for loading a row as rendered by the server.
#[derive(Debug, Clone)]
pub struct ProductRowCreate {
    pub id: AdminProductId,
    pub discount: u8,
    pub price: PriceCell,
    pub old_price: String,
}
