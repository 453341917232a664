//! Order gateway and checkout errors.

use thiserror::Error;

use crate::{api::ApiError, domain::cart::CartItem};

use super::validator::PriceDrift;

/// Errors from the remote order endpoints.
#[derive(Debug, Error)]
pub enum OrderGatewayError {
    /// The server rejected the request with an explicit reason.
    #[error("{0}")]
    Rejected(String),

    /// Transport-level failure; the caller may retry manually.
    #[error("could not reach the order service")]
    Network(#[source] ApiError),

    /// The server answered with an unexpected body.
    #[error("unexpected order response: {0}")]
    UnexpectedResponse(String),
}

impl From<ApiError> for OrderGatewayError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected { message, .. } => Self::Rejected(message),
            ApiError::Network(_) => Self::Network(error),
            ApiError::UnexpectedResponse(message) => Self::UnexpectedResponse(message),
        }
    }
}

/// Errors from a checkout attempt.
///
/// Every variant returns control with the cart exactly as it was before the
/// attempt; only a successful submission mutates it (by clearing it).
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Local form rules were violated; no network call was made.
    #[error("checkout form is incomplete")]
    ValidationFailed(Vec<String>),

    /// These line items are no longer available.
    #[error("{} cart item(s) are no longer available", .0.len())]
    ItemsUnavailable(Vec<CartItem>),

    /// Prices drifted beyond tolerance and the caller declined to proceed.
    #[error("cart prices are out of date")]
    PriceDriftDeclined(Vec<PriceDrift>),

    /// The order endpoint rejected the submission with an explicit reason.
    #[error("{0}")]
    ServerRejected(String),

    /// The order endpoint could not be reached; retryable by the user.
    #[error("could not submit the order; check your connection")]
    Network(#[source] OrderGatewayError),
}
