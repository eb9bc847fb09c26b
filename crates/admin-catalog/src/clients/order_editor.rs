//! # Order Editor
//!
//! Inline quantity editing and item deletion on an order change page.
//!
//! A quantity commit is three steps:
//!
//! 1. validate locally; a bad value is recorded on the field and nothing is sent
//! 2. `BeginQuantity` puts the field in `Saving` and hands out a sequence number
//! 3. the server's answer goes back as `SettleQuantity` with that number
//!
//! The actor is free to process other events while step 3 is awaited.

use super::{editor_error, unexpected_result, CommitOutcome};
use crate::editor::endpoint::{DeleteItemResponse, Endpoint, Requester, UpdateItemResponse};
use crate::editor::validate::parse_quantity;
use crate::editor::{
    CommitFailure, CommitTrigger, ConfirmDialog, Decision, EditorError, Notice, OrderAction,
    OrderActionResult, QuantityOutcome, Reconciled, Surface,
};
use crate::model::{ItemId, OrderId, OrderSheet, OrderSheetCreate};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use view_actor::{ActorClient, ViewClient, ViewError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user cancelled; nothing was sent.
    Cancelled,
    /// The item was deleted and the page was asked to reload.
    ReloadRequested,
}

#[derive(Clone)]
pub struct OrderEditor {
    inner: ViewClient<OrderSheet>,
    requester: Requester,
    surface: Arc<dyn Surface>,
}

impl OrderEditor {
    pub fn new(
        inner: ViewClient<OrderSheet>,
        requester: Requester,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            inner,
            requester,
            surface,
        }
    }

    /// Attaches the editor to a rendered order page.
    #[instrument(skip(self, sheet), fields(order = %sheet.order_id, lines = sheet.lines.len()))]
    pub async fn load(&self, sheet: OrderSheetCreate) -> Result<OrderId, EditorError> {
        debug!("Loading order sheet");
        self.inner.create(sheet).await.map_err(Self::map_error)
    }

    /// Replaces a loaded page with a freshly rendered one.
    #[instrument(skip(self, sheet), fields(order = %sheet.order_id))]
    pub async fn reload_sheet(&self, sheet: OrderSheetCreate) -> Result<OrderId, EditorError> {
        match self.inner.remove(sheet.order_id).await {
            Ok(()) | Err(ViewError::NotFound(_)) => {}
            Err(e) => return Err(Self::map_error(e)),
        }
        self.inner.create(sheet).await.map_err(Self::map_error)
    }

    /// Commits the quantity typed into `item`'s input.
    #[instrument(skip(self), fields(%order, %item, %trigger))]
    pub async fn commit_quantity(
        &self,
        order: OrderId,
        item: ItemId,
        raw: &str,
        trigger: CommitTrigger,
    ) -> Result<CommitOutcome, EditorError> {
        let quantity = match parse_quantity(raw) {
            Ok(quantity) => quantity,
            Err(invalid) => {
                self.act(
                    order,
                    OrderAction::RejectQuantity {
                        item,
                        raw: raw.to_string(),
                        message: invalid.message.clone(),
                    },
                )
                .await?;
                warn!(error_kind = "validation", error = %invalid, "Quantity rejected");
                self.surface.notify(Notice::Invalid(invalid.message.clone()));
                return Err(invalid.into());
            }
        };

        let seq = match self
            .act(
                order,
                OrderAction::BeginQuantity {
                    item,
                    raw: raw.to_string(),
                    quantity,
                },
            )
            .await?
        {
            OrderActionResult::BeginQuantity(seq) => seq,
            other => return Err(unexpected_result(other)),
        };
        debug!(seq, quantity, "Sending quantity");

        let (outcome, failure) = match self
            .requester
            .send::<UpdateItemResponse>(Endpoint::UpdateItem { item, quantity })
            .await
        {
            Ok(response) if response.success => (
                QuantityOutcome::Saved {
                    item_sum: response.item_sum,
                    order_total: response.order_total,
                },
                None,
            ),
            Ok(_) => (
                QuantityOutcome::Failed(CommitFailure::Rejected),
                Some(EditorError::Rejected {
                    action: "update-item",
                }),
            ),
            Err(e) => (
                QuantityOutcome::Failed(CommitFailure::Network),
                Some(EditorError::Transport(e)),
            ),
        };

        let reconciled = match self
            .act(order, OrderAction::SettleQuantity { item, seq, outcome })
            .await?
        {
            OrderActionResult::SettleQuantity(reconciled) => reconciled,
            other => return Err(unexpected_result(other)),
        };
        if reconciled == Reconciled::Stale {
            debug!(seq, "Stale response discarded");
            return Ok(CommitOutcome::Superseded);
        }

        match failure {
            None => {
                info!(seq, quantity, "Quantity saved");
                Ok(CommitOutcome::Saved)
            }
            Some(err) => {
                warn!(seq, error_kind = err.kind(), error = %err, "Quantity commit failed");
                self.surface.notify(match err {
                    EditorError::Transport(_) => Notice::NetworkError,
                    _ => Notice::SaveFailed,
                });
                Err(err)
            }
        }
    }

    /// Deletes `item` after the user confirms. A successful delete reloads
    /// the page instead of patching it.
    #[instrument(skip(self), fields(%order, %item))]
    pub async fn delete_item(
        &self,
        order: OrderId,
        item: ItemId,
    ) -> Result<DeleteOutcome, EditorError> {
        let sheet = self
            .get(order)
            .await?
            .ok_or_else(|| EditorError::UnknownRow(format!("order {order}")))?;
        if sheet.line(item).is_none() {
            return Err(EditorError::UnknownRow(format!("order {order} item {item}")));
        }

        if self.surface.confirm(&ConfirmDialog::delete_order_item()).await == Decision::Cancel {
            info!("Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self
            .requester
            .send::<DeleteItemResponse>(Endpoint::DeleteItem { item })
            .await
        {
            Ok(response) if response.success => {
                info!("Item deleted, reloading");
                self.surface.reload();
                Ok(DeleteOutcome::ReloadRequested)
            }
            Ok(_) => {
                let err = EditorError::Rejected {
                    action: "delete-item",
                };
                warn!(error_kind = err.kind(), "Delete rejected");
                self.surface.notify(Notice::DeleteFailed);
                Err(err)
            }
            Err(e) => {
                let err = EditorError::Transport(e);
                warn!(error_kind = err.kind(), error = %err, "Delete failed");
                self.surface.notify(Notice::NetworkError);
                Err(err)
            }
        }
    }

    async fn act(
        &self,
        order: OrderId,
        action: OrderAction,
    ) -> Result<OrderActionResult, EditorError> {
        self.inner
            .perform_action(order, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderSheet> for OrderEditor {
    type Error = EditorError;

    fn inner(&self) -> &ViewClient<OrderSheet> {
        &self.inner
    }

    fn map_error(e: ViewError) -> EditorError {
        editor_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::testing::{RecordingSurface, ScriptedTransport};
    use crate::editor::RequestContext;
    use view_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_invalid_quantity_is_recorded_not_sent() {
        let (client, mut receiver) = create_mock_client::<OrderSheet>(10);
        let transport = Arc::new(ScriptedTransport::new());
        let surface = Arc::new(RecordingSurface::default());
        let editor = OrderEditor::new(
            client,
            Requester::new(transport.clone(), RequestContext::new("/admin/catalog/order", None)),
            surface.clone(),
        );

        let handle = tokio::spawn(async move {
            editor
                .commit_quantity(OrderId(1), ItemId(2), "0", CommitTrigger::Blur)
                .await
        });

        let (id, action, respond_to) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(1));
        assert!(matches!(action, OrderAction::RejectQuantity { ref raw, .. } if raw == "0"));
        respond_to.send(Ok(OrderActionResult::RejectQuantity)).unwrap();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert!(transport.calls().is_empty());
        assert_eq!(
            surface.notices(),
            vec![Notice::Invalid("Quantity must be >= 1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_sheet_maps_to_unknown_row() {
        let (client, mut receiver) = create_mock_client::<OrderSheet>(10);
        let editor = OrderEditor::new(
            client,
            Requester::new(
                Arc::new(ScriptedTransport::new()),
                RequestContext::new("/admin/catalog/order", None),
            ),
            Arc::new(RecordingSurface::default()),
        );

        let handle = tokio::spawn(async move {
            editor
                .commit_quantity(OrderId(9), ItemId(1), "3", CommitTrigger::Enter)
                .await
        });
        let (_, _, respond_to) = expect_action(&mut receiver).await.unwrap();
        respond_to.send(Err(ViewError::NotFound("9".to_string()))).unwrap();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err, EditorError::UnknownRow("9".to_string()));
    }
}
