use thiserror::Error;

/// Unified error type for the entire debt-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invalid monthly amount {0}: must be a positive, finite number")]
    InvalidAmount(f64),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Debt entry not found: {0}")]
    EntryNotFound(String),

    // ── Rate Source / Network ───────────────────────────────────────
    #[error("API error ({source_name}): {message}")]
    Api {
        source_name: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No rate available for {year}-{month:02}")]
    RateNotAvailable { year: i32, month: u32 },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
