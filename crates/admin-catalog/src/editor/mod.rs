//! # Inline Editor
//!
//! Inline edits on the admin order and product pages: order item quantities,
//! order item deletion and product discounts.
//!
//! Each page is an entity held by a [`ViewActor`](view_actor::ViewActor), so
//! all state changes for a page are applied one at a time. Requests are sent
//! by the clients in [`crate::clients`] outside the actor; their answers come
//! back as settle actions that carry the commit's sequence number (see
//! [`field`]).

pub mod context;
pub mod discount;
pub mod endpoint;
pub mod error;
pub mod field;
pub mod order_sheet;
pub mod surface;
pub mod testing;
pub mod transport;
pub mod validate;

pub use context::{AdminModel, RequestContext, CSRF_COOKIE, CSRF_HEADER};
pub use discount::{DiscountAction, DiscountActionResult, DiscountOutcome};
pub use endpoint::{Endpoint, Requester};
pub use error::{EditorError, TransportError, ValidationError};
pub use field::{CommitFailure, CommitState, EditableField, Reconciled};
pub use order_sheet::{OrderAction, OrderActionResult, QuantityOutcome};
pub use surface::{CommitTrigger, ConfirmDialog, Decision, Notice, Surface};
pub use transport::{HttpTransport, Transport};

use crate::model::{OrderSheet, ProductRow};
use view_actor::ViewActor;

/// Creates the actor holding order pages.
pub fn new_order_actor(
    buffer: usize,
) -> (ViewActor<OrderSheet>, view_actor::ViewClient<OrderSheet>) {
    ViewActor::new(buffer)
}

/// Creates the actor holding product list rows.
pub fn new_discount_actor(
    buffer: usize,
) -> (ViewActor<ProductRow>, view_actor::ViewClient<ProductRow>) {
    ViewActor::new(buffer)
}
