//! Endpoints consumed by the inline editor and their response shapes.
//!
//! | Endpoint | Form | Response |
//! |----------|------|----------|
//! | `{base}/update-item/{id}/` | `quantity` | `{success, item_sum?, order_total?}` |
//! | `{base}/delete-item/{id}/` | none | `{success}` |
//! | `{base}/update-discount/{id}/` | `percent` | `{success, price?, old_price?}` |

use super::context::RequestContext;
use super::error::TransportError;
use super::transport::Transport;
use crate::model::{AdminProductId, ItemId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    UpdateItem { item: ItemId, quantity: u32 },
    DeleteItem { item: ItemId },
    UpdateDiscount { product: AdminProductId, percent: u8 },
}

impl Endpoint {
    /// Action segment of the path; also used in logs and errors.
    pub fn action(&self) -> &'static str {
        match self {
            Endpoint::UpdateItem { .. } => "update-item",
            Endpoint::DeleteItem { .. } => "delete-item",
            Endpoint::UpdateDiscount { .. } => "update-discount",
        }
    }

    pub fn path(&self, context: &RequestContext) -> String {
        match self {
            Endpoint::UpdateItem { item, .. } | Endpoint::DeleteItem { item } => {
                context.endpoint_path(self.action(), item)
            }
            Endpoint::UpdateDiscount { product, .. } => {
                context.endpoint_path(self.action(), product)
            }
        }
    }

    pub fn form(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::UpdateItem { quantity, .. } => vec![("quantity", quantity.to_string())],
            Endpoint::DeleteItem { .. } => Vec::new(),
            Endpoint::UpdateDiscount { percent, .. } => vec![("percent", percent.to_string())],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateItemResponse {
    pub success: bool,
    pub item_sum: Option<String>,
    pub order_total: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteItemResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateDiscountResponse {
    pub success: bool,
    pub price: Option<String>,
    pub old_price: Option<String>,
}

/// Sends endpoint requests with an explicit [`RequestContext`].
#[derive(Clone)]
pub struct Requester {
    transport: Arc<dyn Transport>,
    context: RequestContext,
}

impl Requester {
    pub fn new(transport: Arc<dyn Transport>, context: RequestContext) -> Self {
        Self { transport, context }
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub async fn send<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, TransportError> {
        let path = endpoint.path(&self.context);
        debug!(%path, action = endpoint.action(), "Posting");
        let body = self
            .transport
            .post_form(&path, &endpoint.form(), self.context.csrf_token())
            .await?;
        serde_json::from_value(body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_forms() {
        let ctx = RequestContext::new("/admin/catalog/order", None);
        let update = Endpoint::UpdateItem {
            item: ItemId(5),
            quantity: 3,
        };
        assert_eq!(update.path(&ctx), "/admin/catalog/order/update-item/5/");
        assert_eq!(update.form(), vec![("quantity", "3".to_string())]);

        let delete = Endpoint::DeleteItem { item: ItemId(5) };
        assert_eq!(delete.path(&ctx), "/admin/catalog/order/delete-item/5/");
        assert!(delete.form().is_empty());

        let ctx = RequestContext::new("/admin/catalog/product", None);
        let discount = Endpoint::UpdateDiscount {
            product: AdminProductId(9),
            percent: 99,
        };
        assert_eq!(discount.path(&ctx), "/admin/catalog/product/update-discount/9/");
        assert_eq!(discount.form(), vec![("percent", "99".to_string())]);
    }

    #[test]
    fn test_responses_tolerate_missing_fields() {
        let parsed: UpdateItemResponse =
            serde_json::from_value(serde_json::json!({"success": false})).unwrap();
        assert_eq!(parsed, UpdateItemResponse::default());

        let parsed: UpdateDiscountResponse = serde_json::from_value(
            serde_json::json!({"success": true, "price": "90.00", "old_price": null}),
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.price.as_deref(), Some("90.00"));
        assert_eq!(parsed.old_price, None);
    }
}
