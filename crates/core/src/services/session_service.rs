use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::profile::Character;
use crate::models::selection::PanelMode;
use crate::models::session::Session;

/// Single source of truth for "what is visible" and "what has been paid for".
///
/// A dumb store: selection transitions, the unlock set and raw wallet
/// adjustments. Spending policy lives in `CheckoutService`.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Select a character and switch to the character panel.
    /// Unknown ids leave the selection untouched.
    pub fn select_character(&self, session: &mut Session, id: &str) -> Result<(), CoreError> {
        if session.find_character(id).is_none() {
            tracing::warn!("Select rejected: character {} not found", id);
            return Err(CoreError::CharacterNotFound(id.to_string()));
        }
        session.selection.active_character_id = Some(id.to_string());
        self.set_panel_mode(session, PanelMode::Character);
        tracing::debug!("Selected character {}", id);
        Ok(())
    }

    /// Switch panel mode. Always succeeds; entering a mode resets the active
    /// tab to that mode's default tab.
    pub fn set_panel_mode(&self, session: &mut Session, mode: PanelMode) {
        session.selection.mode = mode;
        session.selection.active_tab = match mode {
            PanelMode::Character => session.settings.default_character_tab.clone(),
            PanelMode::User => session.settings.default_user_tab.clone(),
        };
        tracing::debug!("Panel mode set to {}", mode);
    }

    /// Activate a tab within the current panel mode.
    pub fn switch_tab(&self, session: &mut Session, tab_id: &str) -> Result<(), CoreError> {
        let tab_id = tab_id.trim();
        if tab_id.is_empty() {
            return Err(CoreError::ValidationError("Tab id must not be empty".into()));
        }
        session.selection.active_tab = tab_id.to_string();
        tracing::debug!("Switched {} panel to tab {}", session.selection.mode, tab_id);
        Ok(())
    }

    /// The selected character, if the selection references one.
    pub fn current_character<'a>(&self, session: &'a Session) -> Option<&'a Character> {
        session
            .selection
            .active_character_id
            .as_deref()
            .and_then(|id| session.find_character(id))
    }

    // ── Roster ──────────────────────────────────────────────────────

    /// Append a character. An empty id is replaced with a generated
    /// `CHAR_<uuid>` id. Returns the id actually stored.
    pub fn add_character(
        &self,
        session: &mut Session,
        mut character: Character,
    ) -> Result<String, CoreError> {
        if character.id.trim().is_empty() {
            character.id = format!("CHAR_{}", Uuid::new_v4().simple());
        }
        if session.find_character(&character.id).is_some() {
            return Err(CoreError::ValidationError(format!(
                "Duplicate character id: {}",
                character.id
            )));
        }
        let id = character.id.clone();
        session.characters.push(character);
        tracing::info!("Added character {}", id);
        Ok(id)
    }

    /// Remove a character. If it was selected, the selection falls back to
    /// the first remaining character (or none).
    pub fn remove_character(&self, session: &mut Session, id: &str) -> Result<Character, CoreError> {
        let idx = session
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::CharacterNotFound(id.to_string()))?;

        let removed = session.characters.remove(idx);

        if session.selection.active_character_id.as_deref() == Some(id) {
            session.selection.active_character_id = session.characters.first().map(|c| c.id.clone());
        }

        tracing::info!("Removed character {}", id);
        Ok(removed)
    }

    // ── Unlock set ──────────────────────────────────────────────────

    pub fn is_unlocked(&self, session: &Session, id: &str) -> bool {
        session.unlocked.contains(id)
    }

    /// Monotonic insert. Returns `true` if the id was newly added.
    pub fn mark_unlocked(&self, session: &mut Session, id: &str) -> bool {
        session.unlocked.insert(id.to_string())
    }

    // ── Wallet ──────────────────────────────────────────────────────

    /// Add `delta` to the balance without any sufficiency check.
    /// Returns the new balance.
    pub fn adjust_wallet(&self, session: &mut Session, delta: i64) -> i64 {
        let balance = session.wallet.adjust(delta);
        tracing::debug!("Wallet adjusted by {} (balance {})", delta, balance);
        balance
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
