//! Cart models.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};

/// Customization selections for one line item, keyed by slot name
/// (e.g. `size`, `milk`).
///
/// An ordered map, so equality between two selections is structural and
/// independent of the order the slots were picked in.
pub type Customizations = BTreeMap<String, String>;

/// One distinct (product, customization-set) entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique id of this line item; not the product id.
    pub id: Uuid,
    pub product_id: u64,
    pub product_name: String,
    pub product_description: String,
    pub product_image: Option<String>,
    /// Price per unit, snapshotted when the item was added.
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub customizations: Customizations,
    #[serde(default)]
    pub special_notes: Option<String>,
    /// Always `unit_price * quantity`; recomputed on every quantity change
    /// and never mutated independently.
    pub subtotal: Decimal,
    pub added_at: Timestamp,
}

impl CartItem {
    /// Whether an addition of `product_id` with `customizations` merges into
    /// this line item rather than creating a new one.
    #[must_use]
    pub fn merges_with(&self, product_id: u64, customizations: &Customizations) -> bool {
        self.product_id == product_id && self.customizations == *customizations
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.subtotal = self.unit_price * Decimal::from(quantity);
    }
}

/// Derived cart totals, computed fresh from the line items on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub item_count: u32,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    /// Derive the summary for the given line items.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(|item| item.subtotal).sum();
        let item_count = items.iter().map(|item| item.quantity).sum();

        let delivery_fee = if subtotal >= FREE_DELIVERY_THRESHOLD {
            Decimal::ZERO
        } else {
            DELIVERY_FEE
        };

        Self {
            subtotal,
            item_count,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}
