//! Remote product gateway.

use async_trait::async_trait;
use mockall::automock;

use crate::api::{ApiClient, endpoints};

use super::{errors::ProductGatewayError, models::Product};

/// Live product data source consulted before any cart or order commitment.
///
/// Every call is an independent, idempotent round trip; results are never
/// cached by the core.
#[automock]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetch current product data (price and availability) by id.
    async fn fetch_product(&self, product_id: u64) -> Result<Product, ProductGatewayError>;
}

/// Product gateway backed by the café HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    api: ApiClient,
}

impl HttpProductGateway {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn fetch_product(&self, product_id: u64) -> Result<Product, ProductGatewayError> {
        let product: Product = self.api.get(&endpoints::product(product_id)).await?;

        tracing::debug!(
            product_id,
            available = product.is_available,
            "fetched product data"
        );

        Ok(product)
    }
}
