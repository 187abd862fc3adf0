use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::delivery::PendingDeliveryLine;

/// Result of a settled checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Amount deducted from the wallet
    pub total: u64,

    /// Wallet balance after settlement
    pub balance: i64,

    /// The cart lines that were settled
    pub purchased: Vec<CartLine>,

    /// The full pending-delivery queue after settlement
    pub pending: Vec<PendingDeliveryLine>,
}

/// Result of an unlock request. Paying twice for the same id is not an
/// error; it reports `AlreadyUnlocked` and charges nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockOutcome {
    Unlocked { id: String, cost: u64, balance: i64 },
    AlreadyUnlocked { id: String },
}

impl UnlockOutcome {
    /// `true` if this call actually charged the wallet.
    pub fn charged(&self) -> bool {
        matches!(self, UnlockOutcome::Unlocked { .. })
    }
}
