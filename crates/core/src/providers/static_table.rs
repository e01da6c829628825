use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::rate::{RateObservation, RateTable};
use super::traits::RateSource;

/// Rate source backed by an in-memory `RateTable`.
///
/// - **Deterministic**: same query, same answer, always.
/// - **Total**: the table's fallback rule means every month resolves.
/// - **Offline**: no network, zero latency.
///
/// This is the default source and the one the test suite targets.
pub struct StaticRateSource {
    table: RateTable,
}

impl StaticRateSource {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    /// Source backed by the embedded 2005–2026 data set.
    pub fn builtin() -> Self {
        Self::new(RateTable::builtin())
    }

    /// The backing table, e.g. for querying its coverage bounds.
    #[must_use]
    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateSource for StaticRateSource {
    fn name(&self) -> &str {
        "StaticTable"
    }

    async fn rate_for(&self, year: i32, month: u32) -> Result<RateObservation, CoreError> {
        Ok(self.table.lookup(year, month))
    }
}
