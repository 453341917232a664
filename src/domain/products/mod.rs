//! Products

pub mod errors;
pub mod gateway;
pub mod models;

pub use errors::ProductGatewayError;
pub use gateway::{HttpProductGateway, ProductGateway};
pub use models::{Category, Product};
