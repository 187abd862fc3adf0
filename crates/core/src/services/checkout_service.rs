use crate::errors::CoreError;
use crate::models::delivery::PendingDeliveryLine;
use crate::models::receipt::{CheckoutReceipt, UnlockOutcome};
use crate::models::session::Session;
use crate::providers::traits::EtaSource;
use crate::services::cart_service::CartService;
use crate::services::session_service::SessionService;

/// Settles spending against the wallet: cart checkout and one-time unlocks.
///
/// Both paths run the same sufficiency check (`Wallet::ensure_affordable`)
/// before the store's unchecked `adjust_wallet` is called.
pub struct CheckoutService {
    session_service: SessionService,
    cart_service: CartService,
}

impl CheckoutService {
    pub fn new() -> Self {
        Self {
            session_service: SessionService::new(),
            cart_service: CartService::new(),
        }
    }

    /// Convert the cart into a wallet deduction plus pending deliveries.
    ///
    /// All-or-nothing: on `EmptyCart` or `InsufficientFunds` neither the
    /// wallet, the cart nor the delivery queue is touched. On success the
    /// cart is cleared and each line is merged into the queue by item name.
    pub fn checkout(
        &self,
        session: &mut Session,
        eta_source: &mut dyn EtaSource,
    ) -> Result<CheckoutReceipt, CoreError> {
        if session.cart.is_empty() {
            tracing::warn!("Checkout rejected: cart is empty");
            return Err(CoreError::EmptyCart);
        }

        let total = self.cart_service.cart_total(session);
        if let Err(e) = session.wallet.ensure_affordable(total) {
            tracing::warn!(
                "Checkout rejected: total {} exceeds balance {}",
                total,
                session.wallet.balance()
            );
            return Err(e);
        }

        // Phase 1: build the new delivery queue on a copy
        let min_days = session.settings.delivery_eta_min_days;
        let max_days = session.settings.delivery_eta_max_days;
        let ordered_on = session.meta.current_date;
        let mut pending = session.user.pending_delivery.clone();

        for line in session.cart.lines() {
            match pending.iter_mut().find(|p| p.name == line.name) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => {
                    let eta_days = eta_source
                        .next_eta_days(min_days, max_days)
                        .clamp(min_days, max_days);
                    pending.push(PendingDeliveryLine::new(
                        line.name.clone(),
                        line.quantity,
                        eta_days,
                        ordered_on,
                    ));
                }
            }
        }

        // Phase 2: commit
        let balance = self.debit(session, total)?;
        session.user.pending_delivery = pending;
        let purchased = session.cart.take_lines();

        tracing::info!(
            "Checkout settled: {} line(s) for {} (balance {}, {} pending, eta source {})",
            purchased.len(),
            total,
            balance,
            session.user.pending_delivery.len(),
            eta_source.name()
        );

        Ok(CheckoutReceipt {
            total,
            balance,
            purchased,
            pending: session.user.pending_delivery.clone(),
        })
    }

    /// Pay once for gated content. A second call for the same id reports
    /// `AlreadyUnlocked` and charges nothing.
    pub fn unlock_item(
        &self,
        session: &mut Session,
        id: &str,
        cost: u64,
    ) -> Result<UnlockOutcome, CoreError> {
        if self.session_service.is_unlocked(session, id) {
            tracing::debug!("Unlock {} skipped: already unlocked", id);
            return Ok(UnlockOutcome::AlreadyUnlocked { id: id.to_string() });
        }

        if let Err(e) = session.wallet.ensure_affordable(cost) {
            tracing::warn!(
                "Unlock {} rejected: cost {} exceeds balance {}",
                id,
                cost,
                session.wallet.balance()
            );
            return Err(e);
        }

        let balance = self.debit(session, cost)?;
        self.session_service.mark_unlocked(session, id);
        tracing::info!("Unlocked {} for {} (balance {})", id, cost, balance);

        Ok(UnlockOutcome::Unlocked {
            id: id.to_string(),
            cost,
            balance,
        })
    }

    /// Deduct an amount already checked by `ensure_affordable`.
    fn debit(&self, session: &mut Session, amount: u64) -> Result<i64, CoreError> {
        // ensure_affordable guarantees amount <= balance <= i64::MAX
        let delta = i64::try_from(amount).map_err(|_| CoreError::InsufficientFunds {
            required: amount,
            available: session.wallet.balance(),
        })?;
        Ok(self.session_service.adjust_wallet(session, -delta))
    }
}

impl Default for CheckoutService {
    fn default() -> Self {
        Self::new()
    }
}
