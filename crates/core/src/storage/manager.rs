use crate::errors::CoreError;
use crate::models::dataset::DataSet;
use crate::models::session::Session;

/// Loads the authored dataset and exports session snapshots.
///
/// Every load path validates the schema (`DataSet::validate`) before a
/// dataset is handed out.
pub struct StorageManager;

impl StorageManager {
    /// Parse and validate a dataset from a JSON string.
    pub fn load_from_str(json: &str) -> Result<DataSet, CoreError> {
        let dataset: DataSet = serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse dataset: {e}")))?;
        dataset.validate()?;
        tracing::debug!(
            "Loaded dataset: {} character(s), {} shop item(s)",
            dataset.characters.len(),
            dataset.user.shop.len()
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset from raw JSON bytes.
    /// Use this for WASM where the frontend handles file I/O.
    pub fn load_from_bytes(data: &[u8]) -> Result<DataSet, CoreError> {
        let dataset: DataSet = serde_json::from_slice(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse dataset: {e}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<DataSet, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }

    /// Serialize a session snapshot (the cart is never included).
    ///
    /// `meta.wallet` is rewritten to the live balance, so the snapshot also
    /// loads as a plain dataset that opens at the current balance.
    pub fn snapshot_to_json(session: &Session) -> Result<String, CoreError> {
        let mut snapshot = session.clone();
        snapshot.meta.wallet = snapshot.wallet.balance();
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
    }

    /// Restore a session written by `snapshot_to_json`, including the
    /// unlock set and selection. The cart starts empty.
    pub fn load_snapshot(json: &str) -> Result<Session, CoreError> {
        let session: Session = serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse snapshot: {e}")))?;
        session.validate()?;
        tracing::debug!(
            "Restored snapshot: balance {}, {} unlocked, {} pending",
            session.wallet.balance(),
            session.unlocked.len(),
            session.user.pending_delivery.len()
        );
        Ok(session)
    }
}
