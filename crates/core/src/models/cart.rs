use serde::{Deserialize, Serialize};

/// One line of the shopping cart. Keyed by `id`; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    /// Always >= 1. A line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`, saturating at `u64::MAX`.
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Ephemeral list of intended purchases, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit. Increments the existing line for `id`, or appends a new
    /// line with quantity 1. Returns the line's quantity after the add.
    pub fn add(&mut self, id: &str, name: &str, unit_price: u64) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine::new(id, name, unit_price));
        1
    }

    /// Remove the line matching `id`. Returns the removed line, if any.
    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.id == id)?;
        Some(self.lines.remove(idx))
    }

    /// Σ unit_price × quantity. Saturates rather than wrapping, so an
    /// overflowing cart is never affordable.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal()))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Remove every line, handing them back to the caller.
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}
