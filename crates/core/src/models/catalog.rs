use serde::{Deserialize, Serialize};

/// A purchasable entry in the user's shop catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Stable unique identifier, used as the cart key
    pub id: String,

    pub name: String,

    /// Price in whole currency units
    pub price: u64,

    #[serde(default)]
    pub desc: String,

    #[serde(default)]
    pub category: String,
}

/// An item already sitting in the user's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,

    pub count: u32,

    #[serde(default)]
    pub desc: String,

    /// Only an explicit `false` marks an item unavailable.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, count: u32, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count,
            desc: desc.into(),
            available: true,
        }
    }
}

/// Counts shown next to the inventory panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Number of distinct inventory entries
    pub item_types: usize,

    /// Sum of all inventory counts
    pub total_count: u64,

    /// Sum of all pending-delivery quantities
    pub pending_count: u64,
}
