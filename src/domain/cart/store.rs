//! Cart store.
//!
//! Single source of truth for the pending order contents. All reads and
//! writes go through this store: every mutation persists the full cart
//! snapshot, and derived totals are recomputed from the in-memory list on
//! every read so the two can never drift apart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::Timestamp;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::products::ProductGateway,
    storage::{CART_ITEMS_KEY, KeyValueStore},
};

use super::{
    errors::CartError,
    models::{CartItem, CartSummary, Customizations},
};

/// Owner of the cart line items.
///
/// The item list is mutated only through this store's operations; the
/// persisted snapshot is eventually consistent with the in-memory list,
/// which stays authoritative.
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
    gateway: Arc<dyn ProductGateway>,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn ProductGateway>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            gateway,
            storage,
        }
    }

    /// Load the persisted cart snapshot into memory.
    ///
    /// An absent or unreadable snapshot leaves the cart empty; restoring is
    /// never fatal.
    pub async fn restore(&self) {
        let blob = match self.storage.load(CART_ITEMS_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(error) => {
                tracing::warn!(%error, "failed to load saved cart");
                return;
            }
        };

        match serde_json::from_slice::<Vec<CartItem>>(&blob) {
            Ok(saved) => {
                tracing::debug!(items = saved.len(), "restored saved cart");
                *self.lock() = saved;
            }
            Err(error) => {
                tracing::warn!(%error, "discarding corrupt cart snapshot");
            }
        }
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// Fetches fresh product data first; the fetched price becomes the line
    /// item's snapshotted unit price. An addition of a product already in
    /// the cart with structurally equal customizations merges into the
    /// existing line item.
    ///
    /// # Errors
    ///
    /// [`CartError::ProductUnavailable`] when the product is not currently
    /// orderable, [`CartError::Gateway`] when product data could not be
    /// fetched. Either way the cart is left unchanged and nothing is
    /// retried.
    pub async fn add_item(
        &self,
        product_id: u64,
        quantity: u32,
        customizations: Customizations,
        special_notes: Option<String>,
    ) -> Result<(), CartError> {
        let product = self.gateway.fetch_product(product_id).await?;

        if !product.is_available {
            return Err(CartError::ProductUnavailable);
        }

        let quantity = quantity.max(1);

        let snapshot = {
            let mut items = self.lock();

            match items
                .iter_mut()
                .find(|item| item.merges_with(product.id, &customizations))
            {
                Some(existing) => {
                    let merged = existing.quantity.saturating_add(quantity);
                    existing.set_quantity(merged);

                    tracing::debug!(
                        product_id,
                        quantity = existing.quantity,
                        "merged addition into existing line item"
                    );
                }
                None => {
                    items.push(CartItem {
                        id: Uuid::now_v7(),
                        product_id: product.id,
                        product_name: product.name.clone(),
                        product_description: product.display_description(),
                        product_image: product.image_url.clone(),
                        unit_price: product.price,
                        quantity,
                        customizations,
                        special_notes,
                        subtotal: product.price * Decimal::from(quantity),
                        added_at: Timestamp::now(),
                    });

                    tracing::debug!(product_id, quantity, "added new line item");
                }
            }

            items.clone()
        };

        self.persist(&snapshot).await;

        Ok(())
    }

    /// Set a line item's quantity, recomputing its subtotal in place.
    ///
    /// Quantities of zero or less remove the item. Unknown ids are ignored.
    pub async fn update_item_quantity(&self, item_id: Uuid, new_quantity: i32) {
        if new_quantity <= 0 {
            self.remove_item(item_id).await;
            return;
        }

        let snapshot = {
            let mut items = self.lock();

            if let Some(item) = items.iter_mut().find(|item| item.id == item_id) {
                item.set_quantity(new_quantity.unsigned_abs());
                tracing::debug!(%item_id, quantity = item.quantity, "updated line item quantity");
            }

            items.clone()
        };

        self.persist(&snapshot).await;
    }

    /// Remove a line item. Removing an absent item is a no-op.
    pub async fn remove_item(&self, item_id: Uuid) {
        let snapshot = {
            let mut items = self.lock();
            items.retain(|item| item.id != item_id);
            items.clone()
        };

        self.persist(&snapshot).await;
    }

    /// Remove several line items at once (bulk remediation after an
    /// availability check).
    pub async fn remove_items(&self, item_ids: &[Uuid]) {
        let snapshot = {
            let mut items = self.lock();
            items.retain(|item| !item_ids.contains(&item.id));
            items.clone()
        };

        self.persist(&snapshot).await;
    }

    /// Empty the cart and persist the empty snapshot.
    pub async fn clear(&self) {
        let snapshot = {
            let mut items = self.lock();
            items.clear();
            items.clone()
        };

        self.persist(&snapshot).await;
        tracing::debug!("cart cleared");
    }

    /// Coherent snapshot of the current line items.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().clone()
    }

    /// Derived totals for the current cart contents.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::for_items(&self.lock())
    }

    /// Total quantity of a product across all customization variants.
    #[must_use]
    pub fn item_quantity(&self, product_id: u64) -> u32 {
        self.lock()
            .iter()
            .filter(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .sum()
    }

    /// Whether any line item references the given product.
    #[must_use]
    pub fn contains_product(&self, product_id: u64) -> bool {
        self.lock().iter().any(|item| item.product_id == product_id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CartItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the given snapshot to local storage.
    ///
    /// A failed write is logged and swallowed; the in-memory cart stays
    /// authoritative and the on-disk snapshot catches up on the next
    /// mutation.
    async fn persist(&self, snapshot: &[CartItem]) {
        let blob = match serde_json::to_vec(snapshot) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize cart snapshot");
                return;
            }
        };

        if let Err(error) = self.storage.save(CART_ITEMS_KEY, blob).await {
            tracing::warn!(%error, "failed to save cart");
        }
    }
}
