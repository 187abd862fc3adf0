use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Description stamped on lines created by checkout.
pub const PURCHASED_ITEM_DESC: &str = "Purchased item";

/// An item that has been paid for but has not reached the inventory yet.
///
/// Field names on the wire follow the dataset (`count`, `daysLeft`, `orderedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDeliveryLine {
    /// Unique identifier (`pending_<uuid>`)
    pub id: String,

    /// Item name; the queue is merged on this field
    pub name: String,

    /// Units in transit, always >= 1
    #[serde(rename = "count")]
    pub quantity: u32,

    #[serde(default)]
    pub desc: String,

    /// Days remaining until arrival
    #[serde(rename = "daysLeft")]
    pub eta_days: u32,

    /// In-session date of the order that created this line
    #[serde(rename = "orderedAt")]
    pub ordered_on: NaiveDate,
}

impl PendingDeliveryLine {
    pub fn new(name: impl Into<String>, quantity: u32, eta_days: u32, ordered_on: NaiveDate) -> Self {
        Self {
            id: format!("pending_{}", Uuid::new_v4().simple()),
            name: name.into(),
            quantity,
            desc: PURCHASED_ITEM_DESC.to_string(),
            eta_days,
            ordered_on,
        }
    }
}
