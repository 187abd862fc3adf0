use thiserror::Error;

/// Unified error type for the entire dossier-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Selection ───────────────────────────────────────────────────
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    // ── Commerce ────────────────────────────────────────────────────
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: i64 },

    #[error("Shop item not found: {0}")]
    ItemNotFound(String),

    // ── Data / Validation ───────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Environment ─────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<getrandom::Error> for CoreError {
    fn from(e: getrandom::Error) -> Self {
        CoreError::Entropy(e.to_string())
    }
}
