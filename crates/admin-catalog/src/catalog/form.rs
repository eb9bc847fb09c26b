//! The add-product form: draft, per-field errors and the success flash.

use super::error::CatalogError;
use super::validate::FieldErrors;
use crate::clients::CatalogClient;
use crate::model::{ProductDraft, ProductId};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// How long the success flash stays up.
pub const FLASH_DURATION: Duration = Duration::from_millis(2500);

pub const FLASH_TEXT: &str = "Record added";

#[derive(Debug, Clone, Default)]
pub struct AddProductForm {
    /// What the user has typed so far.
    pub draft: ProductDraft,
    errors: FieldErrors,
    flash_until: Option<Instant>,
}

impl AddProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The success flash, while it is showing.
    pub fn flash(&self) -> Option<&'static str> {
        self.flash_until
            .filter(|until| Instant::now() < *until)
            .map(|_| FLASH_TEXT)
    }

    /// Submits the draft.
    ///
    /// On success the form resets and the flash starts. On a validation
    /// failure the draft is kept and the field errors are shown.
    pub async fn submit(&mut self, catalog: &CatalogClient) -> Result<ProductId, CatalogError> {
        match catalog.add_product(self.draft.clone()).await {
            Ok(id) => {
                info!(%id, "Product added from form");
                self.draft = ProductDraft::default();
                self.errors = FieldErrors::default();
                self.flash_until = Some(Instant::now() + FLASH_DURATION);
                Ok(id)
            }
            Err(CatalogError::Invalid(errors)) => {
                debug!(%errors, "Draft rejected");
                self.errors = errors.clone();
                Err(CatalogError::Invalid(errors))
            }
            Err(e) => Err(e),
        }
    }
}
