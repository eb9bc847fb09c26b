//! Catalog product records and the add-form draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product.
///
/// # View Actor
/// This struct implements [`ViewEntity`](view_actor::ViewEntity), so the
/// catalog list lives in a [`ViewActor`](view_actor::ViewActor). See
/// [`crate::catalog::entity`] for the creation rules.
///
/// Products are immutable once created: the catalog only ever adds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub is_available: bool,
    pub created: DateTime<Utc>,
}

/// The add-product form as typed by the user.
///
/// Numeric fields stay text until validation so a rejected draft can be shown
/// back exactly as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub is_available: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            price: String::new(),
            quantity: String::new(),
            is_available: true,
        }
    }
}

/// Payload for creating a product.
///
/// `created` is `None` for form submissions (stamped with the submission
/// time) and set for seeded records.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub draft: ProductDraft,
    pub created: Option<DateTime<Utc>>,
}

impl From<ProductDraft> for ProductCreate {
    fn from(draft: ProductDraft) -> Self {
        Self {
            draft,
            created: None,
        }
    }
}
