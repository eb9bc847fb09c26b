//! # Generic Client
//!
//! The sending half of a view actor.

use crate::entity::ViewEntity;
use crate::error::ViewError;
use crate::message::ViewRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for talking to a `ViewActor`.
///
/// Holds only a channel sender, so it is cheap to clone and share across
/// tasks. Dropping every clone shuts the actor down.
pub struct ViewClient<T: ViewEntity> {
    sender: mpsc::Sender<ViewRequest<T>>,
}

impl<T: ViewEntity> Clone for ViewClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ViewEntity> ViewClient<T> {
    pub fn new(sender: mpsc::Sender<ViewRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, ViewError>>) -> ViewRequest<T>,
    ) -> Result<R, ViewError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ViewError::ActorClosed)?;
        response.await.map_err(|_| ViewError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, ViewError> {
        self.request(|respond_to| ViewRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ViewError> {
        self.request(|respond_to| ViewRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, ViewError> {
        self.request(|respond_to| ViewRequest::List { respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ViewError> {
        self.request(|respond_to| ViewRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), ViewError> {
        self.request(|respond_to| ViewRequest::Remove { id, respond_to })
            .await
    }
}
