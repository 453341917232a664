//! Orders

pub mod checkout;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod monitor;
pub mod validator;

pub use checkout::{Checkout, PriceDriftPolicy};
pub use errors::{CheckoutError, OrderGatewayError};
pub use gateway::{HttpOrderGateway, OrderGateway};
pub use models::{
    CheckoutForm, Order, OrderStatus, OrderSubmission, PaymentMethod, PlacedOrder, SubmissionItem,
};
pub use monitor::AvailabilityMonitor;
pub use validator::{CheckoutAssessment, OrderValidator, PriceDrift};
