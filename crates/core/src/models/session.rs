use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::CoreError;

use super::cart::Cart;
use super::dataset::DataSet;
use super::profile::{Character, Meta, UserProfile};
use super::selection::SelectionState;
use super::settings::Settings;
use super::wallet::Wallet;

/// The single mutable state object behind the dashboard.
///
/// Contains: the loaded dataset (meta, characters, user profile with its
/// delivery queue), the wallet, the selection state, the unlock set and the
/// shopping cart. Services receive it by `&mut` and own nothing themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub meta: Meta,

    pub characters: Vec<Character>,

    pub user: UserProfile,

    pub settings: Settings,

    pub wallet: Wallet,

    pub selection: SelectionState,

    /// Ids of gated content already paid for. Only ever grows.
    #[serde(default)]
    pub unlocked: BTreeSet<String>,

    /// Rebuilt per session; never part of a snapshot.
    #[serde(skip)]
    pub cart: Cart,
}

impl Session {
    /// Start a session from a loaded dataset: the wallet opens at
    /// `meta.wallet` and the first character (if any) is selected.
    pub fn from_dataset(dataset: DataSet) -> Self {
        let DataSet {
            meta,
            characters,
            user,
            settings,
        } = dataset;

        let active = characters.first().map(|c| c.id.clone());
        let selection = SelectionState::new(active, settings.default_character_tab.clone());
        let wallet = Wallet::new(meta.wallet);

        Self {
            meta,
            characters,
            user,
            settings,
            wallet,
            selection,
            unlocked: BTreeSet::new(),
            cart: Cart::new(),
        }
    }

    pub fn find_character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Dataset rules plus: the selection references an existing character.
    pub fn validate(&self) -> Result<(), CoreError> {
        DataSet {
            meta: self.meta.clone(),
            characters: self.characters.clone(),
            user: self.user.clone(),
            settings: self.settings.clone(),
        }
        .validate()?;

        if let Some(id) = self.selection.active_character_id.as_deref() {
            if self.find_character(id).is_none() {
                return Err(CoreError::ValidationError(format!(
                    "Selection references unknown character: {id}"
                )));
            }
        }
        Ok(())
    }
}
