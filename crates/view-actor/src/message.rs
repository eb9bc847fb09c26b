//! # Generic Messages
//!
//! Requests sent from a [`ViewClient`](crate::ViewClient) to its
//! [`ViewActor`](crate::ViewActor). Each request carries a oneshot sender the
//! actor answers on.

use crate::entity::ViewEntity;
use crate::error::ViewError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ViewError>>;

/// Message type sent to the actor.
///
/// - **Create**: build an entity from [`ViewEntity::Create`] and store it first.
/// - **Get**: clone of one entity.
/// - **List**: clones of every entity, newest first.
/// - **Action**: run a [`ViewEntity::Action`] against one entity.
/// - **Remove**: drop one entity.
#[derive(Debug)]
pub enum ViewRequest<T: ViewEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
}
