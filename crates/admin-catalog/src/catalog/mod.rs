//! # Catalog
//!
//! An in-memory product catalog: a list of products (newest first), sorted
//! views of it, and the add-product form.
//!
//! ## Structure
//!
//! - [`entity`]: [`ViewEntity`](view_actor::ViewEntity) implementation for [`Product`]
//! - [`validate`]: add-form rules
//! - [`sort`]: [`SortSpec`] and [`sorted_view`]
//! - [`form`]: [`AddProductForm`]
//! - [`seed`]: initial products
//! - [`render`]: text cards
//!
//! ## Usage
//!
//! ```rust
//! use admin_catalog::catalog::{self, SortDirection, SortKey, SortSpec};
//! use admin_catalog::clients::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog::new(32);
//!     let client = CatalogClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     client.seed().await?;
//!     let view = client
//!         .sorted(SortSpec::new(SortKey::Price, SortDirection::Desc))
//!         .await?;
//!     assert_eq!(view[0].name, "MacBook Air M3");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod form;
pub mod render;
pub mod seed;
pub mod sort;
pub mod validate;

pub use entity::ProductAction;
pub use error::CatalogError;
pub use form::AddProductForm;
pub use render::ProductCard;
pub use sort::{sorted_view, SortDirection, SortKey, SortSpec};
pub use validate::{DraftField, FieldErrors};

use crate::model::Product;
use view_actor::{ViewActor, ViewClient};

/// Creates the catalog actor and its client.
pub fn new(buffer: usize) -> (ViewActor<Product>, ViewClient<Product>) {
    ViewActor::new(buffer)
}
