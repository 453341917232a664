//! Cart store errors.

use thiserror::Error;

use crate::domain::products::ProductGatewayError;

/// Errors raised by cart mutations.
///
/// Every variant leaves the cart unchanged; nothing here is retried
/// automatically.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is not currently orderable.
    #[error("product is not available right now")]
    ProductUnavailable,

    /// Live product data could not be fetched.
    #[error("could not fetch product data")]
    Gateway(#[from] ProductGatewayError),
}
