use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::CoreError;

use super::profile::{Character, Meta, UserProfile};
use super::settings::Settings;

/// The pre-authored JSON tree the dashboard is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub meta: Meta,

    #[serde(default)]
    pub characters: Vec<Character>,

    #[serde(default)]
    pub user: UserProfile,

    #[serde(default)]
    pub settings: Settings,
}

impl DataSet {
    /// Check the structural rules the ledger relies on.
    ///
    /// Rules:
    /// - Character ids are non-empty and unique
    /// - Shop item ids and names are non-empty, ids are unique
    /// - Pending deliveries carry a quantity of at least 1
    /// - Settings are valid
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut character_ids = HashSet::new();
        for character in &self.characters {
            if character.id.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "Character '{}' has an empty id",
                    character.name
                )));
            }
            if !character_ids.insert(character.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate character id: {}",
                    character.id
                )));
            }
        }

        let mut shop_ids = HashSet::new();
        for item in &self.user.shop {
            if item.id.trim().is_empty() || item.name.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "Shop item '{}' must have a non-empty id and name",
                    item.id
                )));
            }
            if !shop_ids.insert(item.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate shop item id: {}",
                    item.id
                )));
            }
        }

        if let Some(line) = self.user.pending_delivery.iter().find(|l| l.quantity == 0) {
            return Err(CoreError::ValidationError(format!(
                "Pending delivery '{}' has zero quantity",
                line.name
            )));
        }

        self.settings.validate()
    }
}
