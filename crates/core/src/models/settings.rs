use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Tunables embedded in the dataset under the optional `settings` key.
/// Every field has a default, so an absent block is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label of the in-game currency (e.g., "CR").
    pub currency: String,

    /// Shortest simulated transit time for a new pending delivery, in days.
    pub delivery_eta_min_days: u32,

    /// Longest simulated transit time, in days (inclusive).
    pub delivery_eta_max_days: u32,

    /// Tab activated when the character panel is entered.
    pub default_character_tab: String,

    /// Tab activated when the user panel is entered.
    pub default_user_tab: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "CR".to_string(),
            delivery_eta_min_days: 1,
            delivery_eta_max_days: 3,
            default_character_tab: "track".to_string(),
            default_user_tab: "user-status".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_delivery_window(self.delivery_eta_min_days, self.delivery_eta_max_days)?;
        if self.currency.trim().is_empty() {
            return Err(CoreError::ValidationError("Currency label must not be empty".into()));
        }
        if self.default_character_tab.is_empty() || self.default_user_tab.is_empty() {
            return Err(CoreError::ValidationError("Default tab ids must not be empty".into()));
        }
        Ok(())
    }

    /// Format an amount with thousands separators and the currency label,
    /// e.g. `12,500 CR`.
    pub fn format_amount(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if amount < 0 { "-" } else { "" };
        format!("{sign}{grouped} {}", self.currency)
    }
}

/// A delivery window must start at one day or later and be non-empty.
pub fn validate_delivery_window(min_days: u32, max_days: u32) -> Result<(), CoreError> {
    if min_days == 0 {
        return Err(CoreError::ValidationError(
            "Delivery window must start at 1 day or later".into(),
        ));
    }
    if min_days > max_days {
        return Err(CoreError::ValidationError(format!(
            "Delivery window is empty: min {min_days} days > max {max_days} days"
        )));
    }
    Ok(())
}
