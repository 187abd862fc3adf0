use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The player's spendable balance.
///
/// `adjust` is a dumb ledger entry and performs no bounds checking, so the
/// balance may go negative through it. Callers that spend check
/// `ensure_affordable` first; checkout and unlocks share that one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wallet {
    balance: i64,
}

impl Wallet {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `delta` (may be negative) and return the new balance.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        self.balance = self.balance.saturating_add(delta);
        self.balance
    }

    /// Returns `true` if `required` can be paid without going negative.
    pub fn can_afford(&self, required: u64) -> bool {
        u64::try_from(self.balance).is_ok_and(|available| available >= required)
    }

    /// Fail with `InsufficientFunds` unless `required` is affordable.
    pub fn ensure_affordable(&self, required: u64) -> Result<(), CoreError> {
        if self.can_afford(required) {
            Ok(())
        } else {
            Err(CoreError::InsufficientFunds {
                required,
                available: self.balance,
            })
        }
    }
}
