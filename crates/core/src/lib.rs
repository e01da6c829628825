pub mod data;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use uuid::Uuid;

use errors::CoreError;
use models::debt::DebtEntry;
use models::report::SummaryReport;
use providers::static_table::StaticRateSource;
use providers::traits::RateSource;
use services::conversion_service::ConversionService;

/// Main entry point for the Debt Tracker core library.
///
/// Holds the session's debt entries and the conversion engine. There is no
/// persistence: entries live in memory for the session, with JSON
/// export/import for callers that want to carry them across sessions.
#[must_use]
pub struct DebtTracker {
    entries: Vec<DebtEntry>,
    conversion_service: ConversionService,
}

impl std::fmt::Debug for DebtTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebtTracker")
            .field("entries", &self.entries.len())
            .field("rate_source", &self.conversion_service.source_name())
            .finish()
    }
}

impl DebtTracker {
    /// Create a tracker backed by the embedded 2005–2026 rate table.
    pub fn new() -> Self {
        Self::with_source(Box::new(StaticRateSource::builtin()))
    }

    /// Create a tracker with an injected rate source (a synthetic table in
    /// tests, or the generative remote source).
    pub fn with_source(source: Box<dyn RateSource>) -> Self {
        Self {
            entries: Vec::new(),
            conversion_service: ConversionService::new(source),
        }
    }

    // ── Entry Management ────────────────────────────────────────────

    /// Record a new debt entry. Newest entries come first, so the most
    /// recently added entry is `get_entries()[0]`.
    pub fn add_entry(
        &mut self,
        client_name: impl Into<String>,
        start_year: i32,
        start_month: u32,
        monthly_amount: f64,
    ) -> Result<Uuid, CoreError> {
        let client_name = client_name.into();
        if client_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Client name must not be blank".to_string(),
            ));
        }
        if !(1..=12).contains(&start_month) {
            return Err(CoreError::ValidationError(format!(
                "Start month {start_month} is outside 1..=12"
            )));
        }
        if !monthly_amount.is_finite() || monthly_amount <= 0.0 {
            return Err(CoreError::InvalidAmount(monthly_amount));
        }

        let entry = DebtEntry::new(client_name, start_year, start_month, monthly_amount);
        let id = entry.id;
        self.entries.insert(0, entry);
        Ok(id)
    }

    /// Remove an entry by its ID.
    pub fn remove_entry(&mut self, entry_id: Uuid) -> Result<DebtEntry, CoreError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| CoreError::EntryNotFound(entry_id.to_string()))?;
        Ok(self.entries.remove(idx))
    }

    /// Get a single entry by its ID.
    #[must_use]
    pub fn get_entry(&self, entry_id: Uuid) -> Option<&DebtEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// All entries, newest first.
    #[must_use]
    pub fn get_entries(&self) -> &[DebtEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    // ── Reports ─────────────────────────────────────────────────────

    /// Compute the conversion series for a stored entry, from its start
    /// month up to the given end month inclusive.
    pub async fn report_for_entry(
        &self,
        entry_id: Uuid,
        end_year: i32,
        end_month: u32,
    ) -> Result<SummaryReport, CoreError> {
        let entry = self
            .get_entry(entry_id)
            .ok_or_else(|| CoreError::EntryNotFound(entry_id.to_string()))?;

        self.conversion_service
            .compute_series(
                entry.start_year,
                entry.start_month,
                end_year,
                end_month,
                entry.monthly_amount,
            )
            .await
    }

    /// Compute a conversion series directly, without a stored entry.
    pub async fn compute_series(
        &self,
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
        monthly_amount: f64,
    ) -> Result<SummaryReport, CoreError> {
        self.conversion_service
            .compute_series(start_year, start_month, end_year, end_month, monthly_amount)
            .await
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all entries as a JSON string.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize entries: {e}")))
    }

    /// Import entries from a JSON string, appending to the current session.
    /// Returns the number of entries imported.
    pub fn import_entries_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let imported: Vec<DebtEntry> = serde_json::from_str(json)?;
        let count = imported.len();
        // Keep newest-first ordering: imported entries go after existing ones.
        self.entries.extend(imported);
        Ok(count)
    }
}

impl Default for DebtTracker {
    fn default() -> Self {
        Self::new()
    }
}
