use chrono::Days;

use crate::models::catalog::{InventoryItem, InventorySummary};
use crate::models::delivery::PendingDeliveryLine;
use crate::models::session::Session;

/// Moves the in-session calendar forward and delivers pending items.
///
/// Arrival policy: each advanced day decrements every line's `eta_days`;
/// a line reaching zero leaves the queue and is merged into the inventory
/// by name. Nothing arrives unless the calendar is advanced. The calendar
/// stops at `NaiveDate::MAX`; days past it are not simulated.
pub struct DeliveryService;

impl DeliveryService {
    pub fn new() -> Self {
        Self
    }

    /// Advance the calendar by `days`. Returns the lines that arrived,
    /// in arrival order.
    pub fn advance_days(&self, session: &mut Session, days: u32) -> Vec<PendingDeliveryLine> {
        let mut arrived = Vec::new();
        let mut remaining = days;

        // Jump straight to the next arrival (or the end of the span)
        while remaining > 0 {
            let step = session
                .user
                .pending_delivery
                .iter()
                .map(|line| line.eta_days)
                .min()
                .map_or(remaining, |eta| eta.clamp(1, remaining));

            let Some(next) = session
                .meta
                .current_date
                .checked_add_days(Days::new(u64::from(step)))
            else {
                tracing::warn!(
                    "Calendar end reached at {}; {} day(s) not simulated",
                    session.meta.current_date,
                    remaining
                );
                break;
            };

            session.meta.current_date = next;
            remaining -= step;
            arrived.extend(self.tick(session, step));
        }
        arrived
    }

    /// Counts for the inventory panel.
    pub fn inventory_summary(&self, session: &Session) -> InventorySummary {
        InventorySummary {
            item_types: session.user.inventory.len(),
            total_count: session
                .user
                .inventory
                .iter()
                .map(|item| u64::from(item.count))
                .sum(),
            pending_count: session
                .user
                .pending_delivery
                .iter()
                .map(|line| u64::from(line.quantity))
                .sum(),
        }
    }

    fn tick(&self, session: &mut Session, days: u32) -> Vec<PendingDeliveryLine> {
        let mut arrived = Vec::new();
        session.user.pending_delivery.retain_mut(|line| {
            line.eta_days = line.eta_days.saturating_sub(days);
            if line.eta_days == 0 {
                arrived.push(line.clone());
                false
            } else {
                true
            }
        });

        for line in &arrived {
            Self::receive(&mut session.user.inventory, line);
            tracing::info!(
                "Delivered {} x{} on {}",
                line.name,
                line.quantity,
                session.meta.current_date
            );
        }
        arrived
    }

    /// Merge an arrived line into the inventory by item name.
    fn receive(inventory: &mut Vec<InventoryItem>, line: &PendingDeliveryLine) {
        match inventory.iter_mut().find(|item| item.name == line.name) {
            Some(item) => {
                item.count = item.count.saturating_add(line.quantity);
                item.available = true;
            }
            None => inventory.push(InventoryItem::new(
                line.name.clone(),
                line.quantity,
                line.desc.clone(),
            )),
        }
    }
}

impl Default for DeliveryService {
    fn default() -> Self {
        Self::new()
    }
}
