//! Pre-submission validation pipeline.
//!
//! Prices and availability are mutable server-side state that can change
//! between adding an item and checking out. Re-validating immediately
//! before commit avoids submitting stale or now-invalid data without
//! forcing a full cart reload.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    config::PRICE_DRIFT_TOLERANCE,
    domain::{cart::CartItem, products::ProductGateway},
};

use super::models::CheckoutForm;

/// Minimum length of a trimmed delivery location.
const MIN_DELIVERY_LOCATION_LEN: usize = 3;

/// A line item whose snapshotted unit price no longer matches the live
/// product price.
#[derive(Debug, Clone)]
pub struct PriceDrift {
    pub item: CartItem,
    pub current_price: Decimal,
}

/// Outcome of the validation pipeline. The first failing stage
/// short-circuits the rest.
#[derive(Debug)]
pub enum CheckoutAssessment {
    /// All stages passed; the order can be submitted as-is.
    Ready,

    /// Local form rules were violated; nothing was fetched.
    FormInvalid(Vec<String>),

    /// These line items are unavailable (or unreachable) right now.
    UnavailableItems(Vec<CartItem>),

    /// These line items' prices drifted beyond tolerance. Submission may
    /// still proceed with the original cart prices once the user confirms.
    OutdatedPrices(Vec<PriceDrift>),
}

/// Gatekeeper that runs before any order submission.
#[derive(Clone)]
pub struct OrderValidator {
    gateway: Arc<dyn ProductGateway>,
}

impl OrderValidator {
    #[must_use]
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    /// Run the full pipeline against a cart snapshot.
    pub async fn assess(&self, form: &CheckoutForm, items: &[CartItem]) -> CheckoutAssessment {
        let form_errors = Self::form_errors(form, items);
        if !form_errors.is_empty() {
            return CheckoutAssessment::FormInvalid(form_errors);
        }

        let unavailable = self.unavailable_items(items).await;
        if !unavailable.is_empty() {
            return CheckoutAssessment::UnavailableItems(unavailable);
        }

        let outdated = self.outdated_items(items).await;
        if !outdated.is_empty() {
            return CheckoutAssessment::OutdatedPrices(outdated);
        }

        CheckoutAssessment::Ready
    }

    /// Stage 1: local form rules. Never touches the network; returns every
    /// violated rule as a display-ready message.
    #[must_use]
    pub fn form_errors(form: &CheckoutForm, items: &[CartItem]) -> Vec<String> {
        let mut errors = Vec::new();

        if form.delivery_location.trim().len() < MIN_DELIVERY_LOCATION_LEN {
            errors.push("Enter a delivery location of at least 3 characters".to_string());
        }

        if form.payment_method.is_none() {
            errors.push("Select a payment method".to_string());
        }

        if items.is_empty() {
            errors.push("Your cart is empty".to_string());
        }

        errors
    }

    /// Stage 2: one live fetch per line item. A fetch failure counts as
    /// unavailable.
    pub async fn unavailable_items(&self, items: &[CartItem]) -> Vec<CartItem> {
        let mut unavailable = Vec::new();

        for item in items {
            match self.gateway.fetch_product(item.product_id).await {
                Ok(product) if product.is_available => {}
                Ok(_) => unavailable.push(item.clone()),
                Err(error) => {
                    tracing::warn!(
                        product_id = item.product_id,
                        %error,
                        "availability check failed; treating item as unavailable"
                    );
                    unavailable.push(item.clone());
                }
            }
        }

        unavailable
    }

    /// Stage 3: one live fetch per line item. Collects items whose live
    /// price moved beyond [`PRICE_DRIFT_TOLERANCE`] in either direction.
    /// A fetch failure here is not treated as drift.
    pub async fn outdated_items(&self, items: &[CartItem]) -> Vec<PriceDrift> {
        let mut outdated = Vec::new();

        for item in items {
            let Ok(product) = self.gateway.fetch_product(item.product_id).await else {
                continue;
            };

            if (product.price - item.unit_price).abs() > PRICE_DRIFT_TOLERANCE {
                outdated.push(PriceDrift {
                    item: item.clone(),
                    current_price: product.price,
                });
            }
        }

        outdated
    }
}
