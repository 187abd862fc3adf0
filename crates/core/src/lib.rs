pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    cart::CartLine,
    catalog::InventorySummary,
    dataset::DataSet,
    delivery::PendingDeliveryLine,
    profile::{Character, Meta, UserProfile},
    receipt::{CheckoutReceipt, UnlockOutcome},
    selection::{PanelMode, SelectionState},
    session::Session,
    settings::{validate_delivery_window, Settings},
};
use providers::{seeded::SeededEta, traits::EtaSource};
use services::{
    cart_service::CartService, checkout_service::CheckoutService,
    delivery_service::DeliveryService, session_service::SessionService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the dossier core library.
/// Holds the session state and all services needed to operate on it.
#[must_use]
pub struct Dashboard {
    session: Session,
    session_service: SessionService,
    cart_service: CartService,
    checkout_service: CheckoutService,
    delivery_service: DeliveryService,
    eta_source: Box<dyn EtaSource>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("characters", &self.session.characters.len())
            .field("selection", &self.session.selection)
            .field("wallet", &self.session.wallet.balance())
            .field("cart_lines", &self.session.cart.len())
            .field("pending", &self.session.user.pending_delivery.len())
            .field("eta_source", &self.eta_source.name())
            .finish()
    }
}

impl Dashboard {
    /// Start a session from a dataset, with an entropy-seeded eta source.
    pub fn new(dataset: DataSet) -> Result<Self, CoreError> {
        let source = SeededEta::from_entropy()?;
        Self::with_eta_source(dataset, Box::new(source))
    }

    /// Start a session with a deterministic eta source.
    pub fn with_seed(dataset: DataSet, seed: u64) -> Result<Self, CoreError> {
        Self::with_eta_source(dataset, Box::new(SeededEta::from_seed(seed)))
    }

    /// Start a session with a caller-supplied eta source.
    pub fn with_eta_source(
        dataset: DataSet,
        eta_source: Box<dyn EtaSource>,
    ) -> Result<Self, CoreError> {
        dataset.validate()?;
        Ok(Self::build(Session::from_dataset(dataset), eta_source))
    }

    /// Parse, validate and start a session from a JSON string.
    pub fn load_from_json(json: &str) -> Result<Self, CoreError> {
        Self::new(StorageManager::load_from_str(json)?)
    }

    /// Parse, validate and start a session from raw JSON bytes.
    /// Use this for WASM where the frontend handles file I/O.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        Self::new(StorageManager::load_from_bytes(data)?)
    }

    /// Load the dataset from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        Self::new(StorageManager::load_from_file(path)?)
    }

    /// Resume a session from a `to_json` snapshot: balance, unlock set,
    /// selection and delivery queue are restored; the cart starts empty.
    pub fn load_snapshot(json: &str) -> Result<Self, CoreError> {
        let session = StorageManager::load_snapshot(json)?;
        Ok(Self::build(session, Box::new(SeededEta::from_entropy()?)))
    }

    /// Export a JSON snapshot of the session (dataset with live delivery
    /// queue, wallet, selection and unlock set; the cart is left out).
    pub fn to_json(&self) -> Result<String, CoreError> {
        StorageManager::snapshot_to_json(&self.session)
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Select a character and switch to the character panel.
    /// An unknown id returns `CharacterNotFound` and changes nothing.
    pub fn select_character(&mut self, id: &str) -> Result<&Character, CoreError> {
        self.session_service.select_character(&mut self.session, id)?;
        self.session
            .find_character(id)
            .ok_or_else(|| CoreError::CharacterNotFound(id.to_string()))
    }

    /// Switch between the character and user panels. Always succeeds.
    pub fn set_panel_mode(&mut self, mode: PanelMode) {
        self.session_service.set_panel_mode(&mut self.session, mode);
    }

    /// Activate a tab within the current panel.
    pub fn switch_tab(&mut self, tab_id: &str) -> Result<(), CoreError> {
        self.session_service.switch_tab(&mut self.session, tab_id)
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.session.selection
    }

    #[must_use]
    pub fn current_mode(&self) -> PanelMode {
        self.session.selection.mode
    }

    /// The selected character, or `None` if nothing is selected.
    #[must_use]
    pub fn current_character(&self) -> Option<&Character> {
        self.session_service.current_character(&self.session)
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.session.characters
    }

    #[must_use]
    pub fn user(&self) -> &UserProfile {
        &self.session.user
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        &self.session.meta
    }

    /// Add a character. An empty id gets a generated `CHAR_<uuid>` id.
    pub fn add_character(&mut self, character: Character) -> Result<String, CoreError> {
        self.session_service.add_character(&mut self.session, character)
    }

    /// Remove a character; the selection falls back to the first remaining one.
    pub fn remove_character(&mut self, id: &str) -> Result<Character, CoreError> {
        self.session_service.remove_character(&mut self.session, id)
    }

    // ── Wallet & Unlocks ────────────────────────────────────────────

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.session.wallet.balance()
    }

    /// Raw balance adjustment with no sufficiency check. Returns the new balance.
    pub fn adjust_wallet(&mut self, delta: i64) -> i64 {
        self.session_service.adjust_wallet(&mut self.session, delta)
    }

    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.session_service.is_unlocked(&self.session, id)
    }

    /// Mark an id unlocked without charging. Returns `true` if newly added.
    pub fn mark_unlocked(&mut self, id: &str) -> bool {
        self.session_service.mark_unlocked(&mut self.session, id)
    }

    /// Pay `cost` once to unlock `id`.
    pub fn unlock_item(&mut self, id: &str, cost: u64) -> Result<UnlockOutcome, CoreError> {
        self.checkout_service.unlock_item(&mut self.session, id, cost)
    }

    /// Ids unlocked so far, in sorted order.
    #[must_use]
    pub fn unlocked_ids(&self) -> Vec<&str> {
        self.session.unlocked.iter().map(String::as_str).collect()
    }

    // ── Cart & Checkout ─────────────────────────────────────────────

    /// Add one unit to the cart. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, id: &str, name: &str, unit_price: u64) -> u32 {
        self.cart_service
            .add_to_cart(&mut self.session, id, name, unit_price)
    }

    /// Add one unit of a shop item by its catalog id.
    pub fn add_shop_item(&mut self, id: &str) -> Result<u32, CoreError> {
        self.cart_service.add_shop_item(&mut self.session, id)
    }

    /// Remove a cart line; no-op if absent.
    pub fn remove_cart_line(&mut self, id: &str) -> Option<CartLine> {
        self.cart_service.remove_cart_line(&mut self.session, id)
    }

    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.session.cart.lines()
    }

    #[must_use]
    pub fn cart_line_count(&self) -> usize {
        self.session.cart.len()
    }

    #[must_use]
    pub fn cart_is_empty(&self) -> bool {
        self.session.cart.is_empty()
    }

    #[must_use]
    pub fn cart_total(&self) -> u64 {
        self.cart_service.cart_total(&self.session)
    }

    /// Settle the cart against the wallet and schedule deliveries.
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, CoreError> {
        self.checkout_service
            .checkout(&mut self.session, self.eta_source.as_mut())
    }

    // ── Deliveries & Inventory ──────────────────────────────────────

    #[must_use]
    pub fn pending_deliveries(&self) -> &[PendingDeliveryLine] {
        &self.session.user.pending_delivery
    }

    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.session.meta.current_date
    }

    /// Advance the in-session date by one day. Returns the arrived lines.
    pub fn advance_day(&mut self) -> Vec<PendingDeliveryLine> {
        self.advance_days(1)
    }

    /// Advance the in-session date by `days`. Returns the arrived lines.
    pub fn advance_days(&mut self, days: u32) -> Vec<PendingDeliveryLine> {
        self.delivery_service.advance_days(&mut self.session, days)
    }

    #[must_use]
    pub fn inventory_summary(&self) -> InventorySummary {
        self.delivery_service.inventory_summary(&self.session)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.session.settings
    }

    /// Change the simulated transit window for future checkouts.
    pub fn set_delivery_window(&mut self, min_days: u32, max_days: u32) -> Result<(), CoreError> {
        validate_delivery_window(min_days, max_days)?;
        self.session.settings.delivery_eta_min_days = min_days;
        self.session.settings.delivery_eta_max_days = max_days;
        Ok(())
    }

    /// Replace the eta source (e.g., to script deliveries in a demo).
    pub fn set_eta_source(&mut self, eta_source: Box<dyn EtaSource>) {
        self.eta_source = eta_source;
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(session: Session, eta_source: Box<dyn EtaSource>) -> Self {
        Self {
            session,
            session_service: SessionService::new(),
            cart_service: CartService::new(),
            checkout_service: CheckoutService::new(),
            delivery_service: DeliveryService::new(),
            eta_source,
        }
    }
}
