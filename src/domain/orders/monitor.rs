//! Passive availability monitor.

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time};

use crate::{
    config::AVAILABILITY_POLL_INTERVAL,
    domain::cart::{CartItem, CartStore},
};

use super::validator::OrderValidator;

/// Handle for a background availability re-scan of the cart.
///
/// The monitor only warns; it never blocks an action or mutates the cart.
/// Dropping the handle tears the recurring poll down, which is how the
/// owning view stops it when it goes inactive.
#[derive(Debug)]
pub struct AvailabilityMonitor {
    handle: JoinHandle<()>,
}

impl AvailabilityMonitor {
    /// Start re-scanning the cart's availability every
    /// [`AVAILABILITY_POLL_INTERVAL`], delivering any unavailable items to
    /// `on_unavailable`.
    pub fn start<F>(cart: Arc<CartStore>, validator: OrderValidator, on_unavailable: F) -> Self
    where
        F: Fn(Vec<CartItem>) + Send + Sync + 'static,
    {
        Self::start_with_interval(cart, validator, AVAILABILITY_POLL_INTERVAL, on_unavailable)
    }

    /// As [`Self::start`], with a custom poll interval.
    pub fn start_with_interval<F>(
        cart: Arc<CartStore>,
        validator: OrderValidator,
        every: Duration,
        on_unavailable: F,
    ) -> Self
    where
        F: Fn(Vec<CartItem>) + Send + Sync + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

            // interval() yields immediately; consume the first tick so the
            // first scan lands one full interval after the view opens.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let items = cart.items();
                if items.is_empty() {
                    continue;
                }

                let unavailable = validator.unavailable_items(&items).await;
                if !unavailable.is_empty() {
                    tracing::warn!(
                        count = unavailable.len(),
                        "cart items became unavailable since they were added"
                    );
                    on_unavailable(unavailable);
                }
            }
        });

        Self { handle }
    }
}

impl Drop for AvailabilityMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
