//! # Catalog Client
//!
//! High-level API over the catalog actor.

use crate::catalog::seed::seed_products;
use crate::catalog::{sorted_view, CatalogError, SortSpec};
use crate::model::{Product, ProductCreate, ProductDraft, ProductId};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use view_actor::{ActorClient, ViewClient, ViewError};

#[derive(Clone)]
pub struct CatalogClient {
    inner: ViewClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ViewClient<Product>) -> Self {
        Self { inner }
    }

    /// Validates `draft` and prepends the new product.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<ProductId, CatalogError> {
        self.create_product(draft.into()).await
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending create to actor");
        self.inner.create(params).await.map_err(|e| {
            let err = Self::map_error(e);
            warn!(error_kind = err.kind(), error = %err, "Create failed");
            err
        })
    }

    /// Loads the initial products so that the first seed record is listed
    /// first.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<usize, CatalogError> {
        let seed = seed_products();
        let count = seed.len();
        for params in seed.into_iter().rev() {
            self.create_product(params).await?;
        }
        info!(count, "Catalog seeded");
        Ok(count)
    }

    /// Every product ordered by `spec`. The stored order is untouched.
    #[instrument(skip(self, spec), fields(%spec))]
    pub async fn sorted(&self, spec: SortSpec) -> Result<Vec<Product>, CatalogError> {
        let products = self.list().await?;
        Ok(sorted_view(&products, spec))
    }

    pub async fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.list().await?.len())
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ViewClient<Product> {
        &self.inner
    }

    fn map_error(e: ViewError) -> CatalogError {
        match e.entity_error::<CatalogError>() {
            Some(inner) => inner.clone(),
            None => CatalogError::ActorCommunicationError(e.to_string()),
        }
    }
}
