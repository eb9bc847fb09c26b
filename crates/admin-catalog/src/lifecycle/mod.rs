//! # System Lifecycle
//!
//! Starting, wiring and stopping the view actors.
//!
//! Two independent systems exist: [`CatalogSystem`] (the in-memory catalog)
//! and [`EditorSystem`] (the inline editors for the order and product admin
//! pages). Neither depends on the other.
//!
//! ## Shutdown
//!
//! 1. drop every client, which closes the actors' channels
//! 2. each actor drains its queue and leaves its loop
//! 3. the actor tasks are awaited
//!
//! Editor clones held elsewhere keep their actor alive, so drop them before
//! calling `shutdown`.
//!
//! Tracing is installed separately with [`setup_tracing`].

pub mod system;
pub mod tracing;

pub use system::*;
pub use self::tracing::*;
