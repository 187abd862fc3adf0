use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Which half of the dashboard is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    /// Profile of the selected character
    #[default]
    Character,
    /// The player's own status, inventory and shop
    User,
}

impl std::fmt::Display for PanelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelMode::Character => write!(f, "character"),
            PanelMode::User => write!(f, "user"),
        }
    }
}

impl FromStr for PanelMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(PanelMode::Character),
            "user" => Ok(PanelMode::User),
            other => Err(CoreError::ValidationError(format!(
                "Unknown panel mode '{other}' (expected 'character' or 'user')"
            ))),
        }
    }
}

/// What is currently selected and visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// References an existing character, or `None`
    pub active_character_id: Option<String>,

    pub mode: PanelMode,

    /// Tab id within the current mode
    pub active_tab: String,
}

impl SelectionState {
    pub fn new(active_character_id: Option<String>, active_tab: impl Into<String>) -> Self {
        Self {
            active_character_id,
            mode: PanelMode::Character,
            active_tab: active_tab.into(),
        }
    }
}
