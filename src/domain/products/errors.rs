//! Product gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

/// Errors raised while fetching live product data.
#[derive(Debug, Error)]
pub enum ProductGatewayError {
    /// The product does not exist on the server.
    #[error("product not found")]
    NotFound,

    /// Transport-level failure reaching the product endpoint.
    #[error("network error while fetching product data")]
    Network(#[source] ApiError),

    /// The server answered with something other than a product.
    #[error("unexpected product response: {0}")]
    UnexpectedResponse(String),
}

impl From<ApiError> for ProductGatewayError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected { status, .. } if status == StatusCode::NOT_FOUND => Self::NotFound,
            ApiError::Rejected { message, .. } => Self::UnexpectedResponse(message),
            ApiError::Network(_) => Self::Network(error),
            ApiError::UnexpectedResponse(message) => Self::UnexpectedResponse(message),
        }
    }
}
