//! Client configuration and business parameters.

use std::{path::PathBuf, time::Duration};

use rust_decimal::Decimal;

/// Flat delivery surcharge (1.00) charged below the free-delivery threshold.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// Subtotal at or above which delivery is free (10.00).
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Absolute tolerance (0.01) when comparing a snapshotted unit price against
/// the live product price. Drift at or below this value is ignored.
pub const PRICE_DRIFT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Interval between passive availability re-scans of a visible cart.
pub const AVAILABILITY_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for wiring the client core.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the café API, e.g. `"http://localhost:3000"`.
    pub api_base_url: String,

    /// Bearer token attached to authenticated requests, when present.
    pub api_token: Option<String>,

    /// Directory where device-local snapshots (the cart) are persisted.
    pub storage_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            api_token: None,
            storage_dir: PathBuf::from(".cafetin"),
        }
    }
}
