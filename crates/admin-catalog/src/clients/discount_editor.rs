//! # Discount Editor
//!
//! Inline discount editing on the product change list. Discounts are never
//! rejected locally: the typed value is clamped to 0..=99 and sent.

use super::{editor_error, unexpected_result, CommitOutcome};
use crate::editor::endpoint::{Endpoint, Requester, UpdateDiscountResponse};
use crate::editor::validate::clamp_discount;
use crate::editor::{
    CommitFailure, CommitTrigger, DiscountAction, DiscountActionResult, DiscountOutcome,
    EditorError, Notice, Reconciled, Surface,
};
use crate::model::{AdminProductId, ProductRow, ProductRowCreate};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use view_actor::{ActorClient, ViewClient, ViewError};

#[derive(Clone)]
pub struct DiscountEditor {
    inner: ViewClient<ProductRow>,
    requester: Requester,
    surface: Arc<dyn Surface>,
}

impl DiscountEditor {
    pub fn new(
        inner: ViewClient<ProductRow>,
        requester: Requester,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            inner,
            requester,
            surface,
        }
    }

    #[instrument(skip(self, row), fields(product = %row.id))]
    pub async fn load_row(&self, row: ProductRowCreate) -> Result<AdminProductId, EditorError> {
        debug!("Loading product row");
        self.inner.create(row).await.map_err(Self::map_error)
    }

    /// Commits the discount typed into `product`'s input.
    #[instrument(skip(self), fields(%product, %trigger))]
    pub async fn commit_discount(
        &self,
        product: AdminProductId,
        raw: &str,
        trigger: CommitTrigger,
    ) -> Result<CommitOutcome, EditorError> {
        let percent = clamp_discount(raw);
        let seq = match self
            .act(
                product,
                DiscountAction::BeginDiscount {
                    raw: raw.to_string(),
                    percent,
                },
            )
            .await?
        {
            DiscountActionResult::BeginDiscount(seq) => seq,
            other => return Err(unexpected_result(other)),
        };
        debug!(seq, percent, "Sending discount");

        let (outcome, failure) = match self
            .requester
            .send::<UpdateDiscountResponse>(Endpoint::UpdateDiscount { product, percent })
            .await
        {
            Ok(response) if response.success => (
                DiscountOutcome::Saved {
                    price: response.price,
                    old_price: response.old_price,
                },
                None,
            ),
            Ok(_) => (
                DiscountOutcome::Failed(CommitFailure::Rejected),
                Some(EditorError::Rejected {
                    action: "update-discount",
                }),
            ),
            Err(e) => (
                DiscountOutcome::Failed(CommitFailure::Network),
                Some(EditorError::Transport(e)),
            ),
        };

        let reconciled = match self
            .act(product, DiscountAction::SettleDiscount { seq, outcome })
            .await?
        {
            DiscountActionResult::SettleDiscount(reconciled) => reconciled,
            other => return Err(unexpected_result(other)),
        };
        if reconciled == Reconciled::Stale {
            debug!(seq, "Stale response discarded");
            return Ok(CommitOutcome::Superseded);
        }

        match failure {
            None => {
                info!(seq, percent, "Discount saved");
                Ok(CommitOutcome::Saved)
            }
            Some(err) => {
                warn!(seq, error_kind = err.kind(), error = %err, "Discount commit failed");
                self.surface.notify(match err {
                    EditorError::Transport(_) => Notice::NetworkError,
                    _ => Notice::SaveFailed,
                });
                Err(err)
            }
        }
    }

    async fn act(
        &self,
        product: AdminProductId,
        action: DiscountAction,
    ) -> Result<DiscountActionResult, EditorError> {
        self.inner
            .perform_action(product, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ProductRow> for DiscountEditor {
    type Error = EditorError;

    fn inner(&self) -> &ViewClient<ProductRow> {
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
    use view_actor::mock::MockClient;

    #[tokio::test]
    async fn test_clamped_percent_is_begun() {
        let mut mock = MockClient::<ProductRow>::new();
        mock.expect_action(AdminProductId(4))
            .return_ok(DiscountActionResult::BeginDiscount(1));
        mock.expect_action(AdminProductId(4))
            .return_ok(DiscountActionResult::SettleDiscount(Reconciled::Applied));

        let transport = Arc::new(ScriptedTransport::new());
        transport.reply_json(serde_json::json!({"success": true, "price": "10.00"}));
        let editor = DiscountEditor::new(
            mock.client(),
            Requester::new(transport.clone(), RequestContext::new("/admin/catalog/product", None)),
            Arc::new(RecordingSurface::default()),
        );

        let outcome = editor
            .commit_discount(AdminProductId(4), "250", CommitTrigger::Change)
            .await
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Saved);
        assert_eq!(
            transport.calls()[0].form,
            vec![("percent".to_string(), "99".to_string())]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_result_is_reported() {
        let mut mock = MockClient::<ProductRow>::new();
        mock.expect_action(AdminProductId(4))
            .return_ok(DiscountActionResult::SettleDiscount(Reconciled::Applied));
        let editor = DiscountEditor::new(
            mock.client(),
            Requester::new(
                Arc::new(ScriptedTransport::new()),
                RequestContext::new("/admin/catalog/product", None),
            ),
            Arc::new(RecordingSurface::default()),
        );

        let err = editor
            .commit_discount(AdminProductId(4), "5", CommitTrigger::Blur)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "actor");
    }
}
