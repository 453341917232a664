//! Remote order gateway.

use async_trait::async_trait;
use mockall::automock;

use crate::api::{ApiClient, endpoints};

use super::{
    errors::OrderGatewayError,
    models::{Order, OrderSubmission, PlacedOrder},
};

/// Client for the remote order endpoints.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order; returns the identifier assigned by the server.
    async fn create_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<PlacedOrder, OrderGatewayError>;

    /// Fetch the authenticated user's order history.
    async fn list_my_orders(&self) -> Result<Vec<Order>, OrderGatewayError>;

    /// Cancel a pending order; returns the updated order.
    async fn cancel_order(&self, order_id: u64) -> Result<Order, OrderGatewayError>;
}

/// Order gateway backed by the café HTTP API.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    api: ApiClient,
}

impl HttpOrderGateway {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<PlacedOrder, OrderGatewayError> {
        let placed: PlacedOrder = self.api.post(endpoints::ORDERS, submission).await?;

        tracing::info!(order_id = placed.id, "order created");

        Ok(placed)
    }

    async fn list_my_orders(&self) -> Result<Vec<Order>, OrderGatewayError> {
        Ok(self.api.get(endpoints::MY_ORDERS).await?)
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Order, OrderGatewayError> {
        let order: Order = self
            .api
            .post_empty(&endpoints::cancel_order(order_id))
            .await?;

        tracing::info!(order_id, "order cancelled");

        Ok(order)
    }
}
