//! Integration test for the full cart-to-order flow.
//!
//! Drives the client core the way the cart screen would: items are added
//! against a mocked product endpoint, the cart persists through a real
//! file-backed store, and checkout runs the validation pipeline before
//! submitting against a mocked order endpoint.

use std::sync::Arc;

use cafetin::{
    domain::{
        cart::{CartStore, Customizations},
        orders::{
            Checkout, CheckoutError, OrderValidator, PaymentMethod, PlacedOrder, PriceDriftPolicy,
            gateway::MockOrderGateway,
            models::CheckoutForm,
        },
        products::{Product, gateway::MockProductGateway},
    },
    storage::{JsonFileStore, KeyValueStore},
};
use rust_decimal::Decimal;
use testresult::TestResult;

fn product(id: u64, price: &str, available: bool) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: Some("with Chocolate".to_string()),
        price: price.parse().expect("price literal should parse"),
        image_url: None,
        is_available: available,
        category: None,
    }
}

fn catalog_gateway() -> MockProductGateway {
    let mut gateway = MockProductGateway::new();
    gateway.expect_fetch_product().returning(|id| match id {
        3 => Ok(product(3, "4.53", true)),
        9 => Ok(product(9, "3.90", true)),
        _ => Ok(product(id, "2.50", false)),
    });
    gateway
}

fn form() -> CheckoutForm {
    CheckoutForm {
        delivery_location: "Engineering building, room 204".to_string(),
        payment_method: Some(PaymentMethod::Yape),
        notes: Some("call when outside".to_string()),
    }
}

fn size(value: &str) -> Customizations {
    let mut customizations = Customizations::new();
    customizations.insert("size".to_string(), value.to_string());
    customizations
}

async fn seeded_cart(storage: Arc<dyn KeyValueStore>) -> TestResult<Arc<CartStore>> {
    let cart = Arc::new(CartStore::new(Arc::new(catalog_gateway()), storage));

    cart.add_item(3, 1, size("large"), None).await?;
    cart.add_item(3, 1, size("large"), None).await?;
    cart.add_item(9, 1, size("small"), Some("extra hot".to_string()))
        .await?;

    Ok(cart)
}

#[tokio::test]
async fn cart_survives_a_restart_through_the_file_store() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = Arc::new(JsonFileStore::new(dir.path()));

    let cart = seeded_cart(storage.clone()).await?;

    assert_eq!(cart.len(), 2, "equal customizations should have merged");
    assert_eq!(cart.summary().subtotal, "12.96".parse::<Decimal>()?);

    // A fresh store over the same directory sees the same cart.
    let restarted = CartStore::new(Arc::new(catalog_gateway()), storage);
    restarted.restore().await;

    assert_eq!(restarted.items(), cart.items());

    Ok(())
}

#[tokio::test]
async fn full_checkout_commits_and_clears_the_persisted_cart() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = Arc::new(JsonFileStore::new(dir.path()));

    let cart = seeded_cart(storage.clone()).await?;

    let mut orders = MockOrderGateway::new();
    orders
        .expect_create_order()
        .withf(|submission| {
            submission.items.len() == 2
                && submission.items[0].product_id == 3
                && submission.items[0].quantity == 2
                && submission.items[1].special_notes.as_deref() == Some("extra hot")
        })
        .returning(|_| Ok(PlacedOrder { id: 77 }));

    let checkout = Checkout::new(
        Arc::clone(&cart),
        Arc::new(orders),
        OrderValidator::new(Arc::new(catalog_gateway())),
    );

    let placed = checkout.place_order(&form(), PriceDriftPolicy::Abort).await?;

    assert_eq!(placed.id, 77);
    assert!(cart.is_empty());

    // The clear reached disk as well.
    let restarted = CartStore::new(Arc::new(catalog_gateway()), storage);
    restarted.restore().await;

    assert!(restarted.is_empty());

    Ok(())
}

#[tokio::test]
async fn blocked_checkout_leaves_the_cart_on_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = Arc::new(JsonFileStore::new(dir.path()));

    let cart = seeded_cart(storage.clone()).await?;

    // Product 9 has gone off the menu between add and checkout.
    let mut stale_catalog = MockProductGateway::new();
    stale_catalog.expect_fetch_product().returning(|id| match id {
        3 => Ok(product(3, "4.53", true)),
        _ => Ok(product(id, "3.90", false)),
    });

    let mut orders = MockOrderGateway::new();
    orders.expect_create_order().times(0);

    let checkout = Checkout::new(
        Arc::clone(&cart),
        Arc::new(orders),
        OrderValidator::new(Arc::new(stale_catalog)),
    );

    let result = checkout.place_order(&form(), PriceDriftPolicy::Abort).await;

    let unavailable = match result {
        Err(CheckoutError::ItemsUnavailable(items)) => items,
        other => panic!("expected ItemsUnavailable, got {other:?}"),
    };

    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0].product_id, 9);
    assert_eq!(cart.len(), 2);

    // Bulk remediation: drop the offending items and retry cleanly.
    let ids: Vec<_> = unavailable.iter().map(|item| item.id).collect();
    cart.remove_items(&ids).await;

    assert_eq!(cart.len(), 1);
    assert!(!cart.contains_product(9));

    Ok(())
}
