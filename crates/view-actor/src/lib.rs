//! # View Actor
//!
//! A small runtime for owning view state in an actor. Each [`ViewActor`] runs
//! in its own Tokio task, owns every entity of one type and processes requests
//! strictly one at a time. Callers talk to it through a cloneable
//! [`ViewClient`].
//!
//! ## Why an actor for view state?
//!
//! Interactive views are event driven: user input, server responses and
//! timers all mutate the same state. Funnelling every mutation through one
//! task gives the same guarantee a UI event loop does, without locks:
//!
//! - one event is applied at a time, in arrival order;
//! - slow work (network calls) happens *outside* the actor, so a pending
//!   request never blocks other events;
//! - the state a caller reads is always a consistent snapshot.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ViewEntity`]): the domain state and the events it reacts to.
//! 2. **Runtime** ([`ViewActor`]): storage (newest first), lookup, dispatch.
//! 3. **Interface** ([`ViewClient`], [`ActorClient`]): typed async requests.
//!
//! ## Testing
//!
//! See [`mock`] for `MockClient` and the channel-level helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ViewActor;
pub use client::ViewClient;
pub use client_trait::ActorClient;
pub use entity::ViewEntity;
pub use error::ViewError;
pub use message::{Response, ViewRequest};
