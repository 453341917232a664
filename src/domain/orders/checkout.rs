//! Order submission workflow.

use std::sync::Arc;

use crate::domain::cart::CartStore;

use super::{
    errors::{CheckoutError, OrderGatewayError},
    gateway::OrderGateway,
    models::{CheckoutForm, OrderSubmission, PlacedOrder},
    validator::{CheckoutAssessment, OrderValidator},
};

/// What to do when validation finds drifted prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDriftPolicy {
    /// Submit with the snapshotted cart prices; the user confirmed.
    ProceedWithOriginal,

    /// Abort and surface the drifted items.
    Abort,
}

/// Drives one checkout attempt through
/// `Idle → Validating → (Blocked | Submitting) → (Committed | Failed)`.
///
/// At most one submission may be in flight per cart; holding a busy flag
/// while an attempt is outstanding is the caller's responsibility — the
/// workflow does not de-duplicate concurrent calls. Failed attempts return
/// to `Idle` and are retryable manually; there is no automatic retry.
pub struct Checkout {
    cart: Arc<CartStore>,
    orders: Arc<dyn OrderGateway>,
    validator: OrderValidator,
}

impl Checkout {
    #[must_use]
    pub fn new(
        cart: Arc<CartStore>,
        orders: Arc<dyn OrderGateway>,
        validator: OrderValidator,
    ) -> Self {
        Self {
            cart,
            orders,
            validator,
        }
    }

    /// Run the validation pipeline against the current cart contents.
    pub async fn validate(&self, form: &CheckoutForm) -> CheckoutAssessment {
        self.validator.assess(form, &self.cart.items()).await
    }

    /// Submit the current cart as an order without re-running the remote
    /// validation stages.
    ///
    /// Takes a single coherent snapshot of the cart at call time; the
    /// snapshot is what gets submitted even if the cart changes mid-flight.
    /// On success the cart is cleared; on failure it is left exactly as it
    /// was.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::ValidationFailed`] when the form is incomplete or
    /// the cart is empty, [`CheckoutError::ServerRejected`] with the
    /// server's reason, or [`CheckoutError::Network`] when the endpoint was
    /// unreachable.
    pub async fn submit(&self, form: &CheckoutForm) -> Result<PlacedOrder, CheckoutError> {
        let snapshot = self.cart.items();

        let form_errors = OrderValidator::form_errors(form, &snapshot);
        let Some(payment_method) = form.payment_method.filter(|_| form_errors.is_empty()) else {
            return Err(CheckoutError::ValidationFailed(form_errors));
        };

        let submission = OrderSubmission::from_snapshot(
            &snapshot,
            form.delivery_location.trim().to_string(),
            payment_method,
            form.notes.clone(),
        );

        let placed = self
            .orders
            .create_order(&submission)
            .await
            .map_err(|error| match error {
                OrderGatewayError::Rejected(message) => CheckoutError::ServerRejected(message),
                other => CheckoutError::Network(other),
            })?;

        self.cart.clear().await;
        tracing::info!(order_id = placed.id, "order committed; cart cleared");

        Ok(placed)
    }

    /// Validate, then submit in one call.
    ///
    /// Blocked assessments map to typed errors. Drifted prices proceed —
    /// with the original snapshotted prices, never auto-updated — only
    /// under [`PriceDriftPolicy::ProceedWithOriginal`].
    ///
    /// # Errors
    ///
    /// Any [`CheckoutError`]; the cart is untouched on every error path.
    pub async fn place_order(
        &self,
        form: &CheckoutForm,
        drift_policy: PriceDriftPolicy,
    ) -> Result<PlacedOrder, CheckoutError> {
        match self.validate(form).await {
            CheckoutAssessment::Ready => self.submit(form).await,
            CheckoutAssessment::OutdatedPrices(_)
                if drift_policy == PriceDriftPolicy::ProceedWithOriginal =>
            {
                self.submit(form).await
            }
            CheckoutAssessment::OutdatedPrices(outdated) => {
                Err(CheckoutError::PriceDriftDeclined(outdated))
            }
            CheckoutAssessment::FormInvalid(errors) => Err(CheckoutError::ValidationFailed(errors)),
            CheckoutAssessment::UnavailableItems(items) => {
                Err(CheckoutError::ItemsUnavailable(items))
            }
        }
    }
}
