//! App Context

use std::sync::Arc;

use crate::{
    api::{ApiClient, ApiConfig},
    config::ClientConfig,
    domain::{
        cart::CartStore,
        orders::{Checkout, HttpOrderGateway, OrderGateway, validator::OrderValidator},
        products::{HttpProductGateway, ProductGateway},
    },
    storage::{JsonFileStore, KeyValueStore},
};

/// Explicitly owned wiring of the client core.
///
/// Built once at app start and injected into the UI layer; its lifecycle is
/// tied to the app session and it is torn down by dropping. There are no
/// ambient singletons.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductGateway>,
    pub orders: Arc<dyn OrderGateway>,
    pub cart: Arc<CartStore>,
    pub checkout: Arc<Checkout>,
}

impl AppContext {
    /// Wire the client core from configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let api = ApiClient::new(ApiConfig {
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        });

        let storage: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::new(config.storage_dir.clone()));
        let products: Arc<dyn ProductGateway> = Arc::new(HttpProductGateway::new(api.clone()));
        let orders: Arc<dyn OrderGateway> = Arc::new(HttpOrderGateway::new(api));

        let cart = Arc::new(CartStore::new(Arc::clone(&products), storage));
        let validator = OrderValidator::new(Arc::clone(&products));
        let checkout = Arc::new(Checkout::new(
            Arc::clone(&cart),
            Arc::clone(&orders),
            validator,
        ));

        Self {
            products,
            orders,
            cart,
            checkout,
        }
    }

    /// Restore persisted state (the saved cart) into memory.
    pub async fn init(&self) {
        self.cart.restore().await;
    }
}
