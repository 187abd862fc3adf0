/// Source of simulated transit times for new pending deliveries.
///
/// Checkout is the only nondeterministic step in the ledger, and it draws
/// through this trait. The default implementation is a seedable ChaCha
/// generator; tests can inject a seeded or fixed source to assert exact
/// scheduling.
pub trait EtaSource: Send {
    /// Human-readable name of this source (for logs).
    fn name(&self) -> &str;

    /// Draw an eta in `min_days..=max_days`. Callers guarantee
    /// `1 <= min_days <= max_days`.
    fn next_eta_days(&mut self, min_days: u32, max_days: u32) -> u32;
}
