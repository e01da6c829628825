use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::rate::RateObservation;

/// Trait abstraction over rate data sources.
///
/// The conversion engine only ever talks to this trait. The static table
/// variant answers instantly and never fails; the generative variant goes
/// over the network and can fail — the engine treats both identically and
/// propagates any failure unmodified.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Resolve the rate observation to use for a given calendar month.
    async fn rate_for(&self, year: i32, month: u32) -> Result<RateObservation, CoreError>;
}
