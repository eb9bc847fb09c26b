//! # ActorClient Trait
//!
//! Common surface for domain clients wrapping a [`ViewClient`]: each wrapper
//! maps runtime errors into its own error type and inherits `get`, `list` and
//! `remove`.
use crate::{ViewClient, ViewEntity, ViewError};
use async_trait::async_trait;

/// Trait for domain-specific clients built on a generic [`ViewClient`].
#[async_trait]
pub trait ActorClient<T: ViewEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ViewClient<T>;

    /// Map runtime errors to the domain error type.
    fn map_error(e: ViewError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every entity, newest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Remove an entity by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}
