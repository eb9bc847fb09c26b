use crate::clients::{CatalogClient, DiscountEditor, OrderEditor};
use crate::config::AdminConfig;
use crate::editor::{
    AdminModel, HttpTransport, Requester, RequestContext, Surface, Transport, TransportError,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The catalog actor and its client.
///
/// ```ignore
/// let system = CatalogSystem::new(&AdminConfig::default());
/// system.catalog.seed().await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub catalog: CatalogClient,
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    pub fn new(config: &AdminConfig) -> Self {
        let (actor, client) = crate::catalog::new(config.actor_buffer);
        let handle = tokio::spawn(actor.run());
        Self {
            catalog: CatalogClient::new(client),
            handles: vec![handle],
        }
    }

    /// Drops the client and waits for the actor to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");
        drop(self.catalog);
        join_all(self.handles).await
    }
}

/// The order and product-row actors with their editors.
pub struct EditorSystem {
    pub orders: OrderEditor,
    pub discounts: DiscountEditor,
    handles: Vec<JoinHandle<()>>,
}

impl EditorSystem {
    /// Starts both actors. `orders` and `products` are the request contexts
    /// of the order change page and the product change list.
    pub fn new(
        buffer: usize,
        transport: Arc<dyn Transport>,
        surface: Arc<dyn Surface>,
        orders: RequestContext,
        products: RequestContext,
    ) -> Self {
        let (order_actor, order_client) = crate::editor::new_order_actor(buffer);
        let (row_actor, row_client) = crate::editor::new_discount_actor(buffer);

        let order_handle = tokio::spawn(order_actor.run());
        let row_handle = tokio::spawn(row_actor.run());

        Self {
            orders: OrderEditor::new(
                order_client,
                Requester::new(transport.clone(), orders),
                surface.clone(),
            ),
            discounts: DiscountEditor::new(
                row_client,
                Requester::new(transport, products),
                surface,
            ),
            handles: vec![order_handle, row_handle],
        }
    }

    /// Starts the editors against the configured server over HTTP.
    ///
    /// `order_page` and `product_page` are the locations of the pages the
    /// editors are attached to; `cookies` is their `Cookie` header.
    pub fn connect(
        config: &AdminConfig,
        surface: Arc<dyn Surface>,
        order_page: &str,
        product_page: &str,
        cookies: &str,
    ) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.origin()?, config.request_timeout)?;
        let orders =
            RequestContext::from_page(order_page, cookies, &config.csrf_cookie, AdminModel::Order)?;
        let products = RequestContext::from_page(
            product_page,
            cookies,
            &config.csrf_cookie,
            AdminModel::Product,
        )?;
        info!(
            origin = %transport.origin(),
            orders = orders.base(),
            products = products.base(),
            has_token = orders.csrf_token().is_some(),
            "Editor connected"
        );
        Ok(Self::new(
            config.actor_buffer,
            Arc::new(transport),
            surface,
            orders,
            products,
        ))
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down editors...");
        drop(self.orders);
        drop(self.discounts);
        join_all(self.handles).await
    }
}

async fn join_all(handles: Vec<JoinHandle<()>>) -> Result<(), String> {
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }
    }
    info!("Shutdown complete.");
    Ok(())
}
