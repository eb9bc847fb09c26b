//! # ViewEntity Trait
//!
//! The contract every piece of view state (a catalog product, an order sheet,
//! a product row) implements to be owned by a [`ViewActor`](crate::ViewActor).
//!
//! The actor only knows how to store, look up and list entities. Everything
//! domain specific happens in two places:
//!
//! - [`ViewEntity::from_create`] builds (and validates) a new entity. The
//!   entity chooses its own id, so server-issued ids (order items) and locally
//!   generated ids (catalog products) work the same way.
//! - [`ViewEntity::handle_action`] applies a domain event to an existing
//!   entity. Actions run synchronously inside the actor task, so an entity
//!   never observes two events at once.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any view entity must implement to be managed by `ViewActor`.
pub trait ViewEntity: Clone + Send + Sync + 'static {
    /// Stable identifier. Unique within one actor.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Domain events applied through [`ViewEntity::handle_action`].
    type Action: Send + Sync + Debug;

    /// Result returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Entity-level error, boxed into [`ViewError::Entity`](crate::ViewError::Entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's id.
    fn id(&self) -> &Self::Id;

    /// Construct the entity from its creation payload.
    ///
    /// Returning an error rejects the request; nothing is stored.
    fn from_create(params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a domain event to this entity.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
