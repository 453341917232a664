//! Order models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{CartItem, Customizations};

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Yape,
    Plin,
    Tunki,
}

/// Checkout form state collected from the user.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub delivery_location: String,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

/// One order line as submitted to the order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    pub product_id: u64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Customizations::is_empty")]
    pub customizations: Customizations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

/// Order-creation payload; exists only for the duration of one submission
/// attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub items: Vec<SubmissionItem>,
    pub delivery_location: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderSubmission {
    /// Build the payload from a coherent cart snapshot and the checkout
    /// form fields, preserving cart order.
    #[must_use]
    pub fn from_snapshot(
        items: &[CartItem],
        delivery_location: String,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Self {
        Self {
            items: items
                .iter()
                .map(|item| SubmissionItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    customizations: item.customizations.clone(),
                    special_notes: item.special_notes.clone(),
                })
                .collect(),
            delivery_location,
            payment_method,
            notes,
        }
    }
}

/// Identifier handed back by a successful order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlacedOrder {
    pub id: u64,
}

/// Lifecycle states of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the kitchen is still working towards delivery.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Preparing | Self::Ready)
    }
}

/// Product summary embedded in an order line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedProduct {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: Decimal,
}

/// One line of a previously submitted order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: u64,
    pub quantity: u32,
    #[serde(default)]
    pub customizations: Customizations,
    #[serde(default)]
    pub special_notes: Option<String>,
    pub product: OrderedProduct,
}

/// A previously submitted order as returned by the order endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    pub delivery_location: String,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Only orders the kitchen has not started preparing can be cancelled.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::cart::models::tests::item;

    use super::*;

    #[test]
    fn payment_methods_use_screaming_snake_on_the_wire() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash)?, r#""CASH""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::Yape)?, r#""YAPE""#);

        let parsed: PaymentMethod = serde_json::from_str(r#""PLIN""#)?;
        assert_eq!(parsed, PaymentMethod::Plin);

        Ok(())
    }

    #[test]
    fn submission_serializes_in_camel_case_and_skips_empty_fields() -> TestResult {
        let submission = OrderSubmission::from_snapshot(
            &[item(7, "4.53", 2)],
            "Library, 2nd floor".to_string(),
            PaymentMethod::Cash,
            None,
        );

        let body = serde_json::to_value(&submission)?;

        assert_eq!(body["deliveryLocation"], "Library, 2nd floor");
        assert_eq!(body["paymentMethod"], "CASH");
        assert_eq!(body["items"][0]["productId"], 7);
        assert_eq!(body["items"][0]["quantity"], 2);
        assert!(body["items"][0].get("customizations").is_none());
        assert!(body.get("notes").is_none());

        Ok(())
    }

    #[test]
    fn submission_preserves_cart_order() {
        let snapshot = [item(1, "1.00", 1), item(2, "2.00", 1), item(3, "3.00", 1)];

        let submission = OrderSubmission::from_snapshot(
            &snapshot,
            "Cafeteria".to_string(),
            PaymentMethod::Yape,
            None,
        );

        let ids: Vec<u64> = submission.items.iter().map(|item| item.product_id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn order_decodes_from_the_wire_shape() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 41,
                "status": "PENDING",
                "deliveryLocation": "Engineering building",
                "paymentMethod": "YAPE",
                "subtotal": "9.06",
                "deliveryFee": "1.00",
                "total": "10.06",
                "notes": null,
                "createdAt": "2025-11-03T14:30:00Z",
                "updatedAt": "2025-11-03T14:30:00Z",
                "orderItems": [
                    {
                        "id": 1,
                        "quantity": 2,
                        "customizations": { "size": "large" },
                        "specialNotes": null,
                        "product": { "id": 3, "name": "Cappuccino", "imageUrl": null, "price": "4.53" }
                    }
                ]
            }"#,
        )?;

        assert_eq!(order.id, 41);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.is_cancellable());
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.order_items[0].product.name, "Cappuccino");

        Ok(())
    }

    #[test]
    fn only_pending_orders_are_cancellable() -> TestResult {
        let mut order: Order = serde_json::from_str(
            r#"{
                "id": 41,
                "status": "PENDING",
                "deliveryLocation": "Engineering building",
                "paymentMethod": "CASH",
                "subtotal": "2.50",
                "deliveryFee": "1.00",
                "total": "3.50",
                "createdAt": "2025-11-03T14:30:00Z"
            }"#,
        )?;

        assert!(order.is_cancellable());

        for status in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            order.status = status;
            assert!(!order.is_cancellable(), "{status:?} should not be cancellable");
        }

        Ok(())
    }

    #[test]
    fn delivered_and_cancelled_orders_are_inactive() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Preparing.is_active());
        assert!(OrderStatus::Ready.is_active());
        assert!(!OrderStatus::Delivered.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }
}
