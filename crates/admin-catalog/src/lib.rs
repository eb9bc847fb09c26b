//! # Admin Catalog
//!
//! View-state logic for a shop's admin panel and its product catalog,
//! without a UI toolkit.
//!
//! ## Components
//!
//! - **[model]**: pure data ([`Product`](model::Product), [`OrderSheet`](model::OrderSheet),
//!   [`ProductRow`](model::ProductRow)) owned by view actors.
//! - **[catalog]**: the in-memory catalog with sorted views and the add form.
//! - **[editor]**: inline quantity and discount editing against the admin
//!   server, with per-field request sequencing.
//! - **[clients]**: typed wrappers around the generic
//!   [`ViewClient`](view_actor::ViewClient).
//! - **[lifecycle]**: starting and stopping the actors, tracing setup.
//! - **[config]**: environment-driven settings.
//!
//! ## Testing
//!
//! [`editor::testing`] has a scripted transport and a recording surface;
//! [`view_actor::mock`] covers the actor side.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod editor;
pub mod lifecycle;
pub mod model;
