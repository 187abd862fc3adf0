use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::{InventoryItem, ShopItem};
use super::delivery::PendingDeliveryLine;

/// Dataset-wide values: starting wallet, in-session date, countdowns.
///
/// Fields the core does not interpret are kept in `extra` so a snapshot
/// round-trips the authored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Starting wallet balance
    pub wallet: i64,

    /// The in-session date; stamped onto new pending deliveries.
    /// Absent in the dataset means 1970-01-01.
    #[serde(default)]
    pub current_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_rate: Option<String>,

    /// Days left on the default countdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A selectable character.
///
/// Only identity is typed; the profile sections (tracking, metrics, outfit…)
/// are opaque to the core and passed through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            profile: Map::new(),
        }
    }
}

/// The player's own profile: inventory, shop catalog and the delivery queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,

    #[serde(default)]
    pub shop: Vec<ShopItem>,

    #[serde(default)]
    pub pending_delivery: Vec<PendingDeliveryLine>,

    /// Status, tasks, social feed, etc.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn find_shop_item(&self, id: &str) -> Option<&ShopItem> {
        self.shop.iter().find(|item| item.id == id)
    }
}
