use crate::errors::CoreError;
use crate::models::cart::CartLine;
use crate::models::session::Session;

/// Shopping-cart accumulation. Pure in-memory edits, no wallet access.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Add one unit of an item. Repeated calls for the same id accumulate
    /// quantity on a single line. Returns the line's new quantity.
    pub fn add_to_cart(&self, session: &mut Session, id: &str, name: &str, unit_price: u64) -> u32 {
        let quantity = session.cart.add(id, name, unit_price);
        tracing::debug!("Cart: {} x{} @ {}", id, quantity, unit_price);
        quantity
    }

    /// Add one unit of a shop catalog item, looked up by id.
    pub fn add_shop_item(&self, session: &mut Session, id: &str) -> Result<u32, CoreError> {
        let (name, price) = match session.user.find_shop_item(id) {
            Some(item) => (item.name.clone(), item.price),
            None => {
                tracing::warn!("Cart add rejected: shop item {} not found", id);
                return Err(CoreError::ItemNotFound(id.to_string()));
            }
        };
        Ok(self.add_to_cart(session, id, &name, price))
    }

    /// Delete the line for `id`; no-op if absent.
    pub fn remove_cart_line(&self, session: &mut Session, id: &str) -> Option<CartLine> {
        let removed = session.cart.remove(id);
        if removed.is_some() {
            tracing::debug!("Cart: removed {}", id);
        }
        removed
    }

    /// Σ unit_price × quantity over all lines.
    pub fn cart_total(&self, session: &Session) -> u64 {
        session.cart.total()
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
