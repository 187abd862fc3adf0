use super::traits::EtaSource;

/// Always answers the same eta, clamped into the requested window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEta(pub u32);

impl EtaSource for FixedEta {
    fn name(&self) -> &str {
        "fixed"
    }

    fn next_eta_days(&mut self, min_days: u32, max_days: u32) -> u32 {
        self.0.clamp(min_days, max_days.max(min_days))
    }
}
