//! [`ViewEntity`] implementation for [`Product`].

use super::error::CatalogError;
use super::validate::validate_draft;
use crate::model::{Product, ProductCreate, ProductId};
use chrono::Utc;
use view_actor::ViewEntity;

/// Products are never edited after creation, so there are no actions.
#[derive(Debug, Clone)]
pub enum ProductAction {}

impl ViewEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ();
    type Error = CatalogError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Validates the draft and stamps a fresh id. `created` defaults to now.
    fn from_create(params: ProductCreate) -> Result<Self, CatalogError> {
        let valid = validate_draft(&params.draft).map_err(CatalogError::Invalid)?;
        Ok(Self {
            id: ProductId::new(),
            name: valid.name,
            brand: valid.brand,
            category: valid.category,
            price: valid.price,
            quantity: valid.quantity,
            is_available: valid.is_available,
            created: params.created.unwrap_or_else(Utc::now),
        })
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<(), CatalogError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;
    use chrono::TimeZone;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            brand: " Nothing ".to_string(),
            category: "Smartphones".to_string(),
            price: "34990".to_string(),
            quantity: String::new(),
            is_available: false,
        }
    }

    #[test]
    fn test_create_from_draft() {
        let product = Product::from_create(draft("Phone (2a)").into()).unwrap();
        assert_eq!(product.brand, "Nothing");
        assert_eq!(product.quantity, 0);
        assert!(!product.is_available);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Product::from_create(draft("Phone (2a)").into()).unwrap();
        let b = Product::from_create(draft("Phone (2a)").into()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_explicit_creation_time_is_kept() {
        let created = Utc.with_ymd_and_hms(2025, 8, 15, 0, 0, 0).unwrap();
        let product = Product::from_create(ProductCreate {
            draft: draft("Phone (2a)"),
            created: Some(created),
        })
        .unwrap();
        assert_eq!(product.created, created);
    }

    #[test]
    fn test_invalid_draft_is_rejected() {
        let err = Product::from_create(draft("ab").into()).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ref errors) if errors.len() == 1));
    }
}
