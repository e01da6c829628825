use crate::errors::CoreError;
use crate::models::rate::month_key;
use crate::models::report::{month_label, MonthlyLineItem, SummaryReport};
use crate::providers::traits::RateSource;

/// The monthly-amortization engine.
///
/// Enumerates every calendar month in an inclusive range, converts a fixed
/// monthly amount into USD, EUR, and grams of gold at each month's rate,
/// and totals the results.
///
/// Single-pass and deterministic against a static source. Holds no mutable
/// state of its own, so independent computations can run concurrently.
pub struct ConversionService {
    source: Box<dyn RateSource>,
}

impl ConversionService {
    pub fn new(source: Box<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying rate source (for logs/errors).
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Compute the full per-month conversion series and totals for a fixed
    /// monthly amount over `[start, end]` inclusive.
    ///
    /// Rejects a non-positive or non-finite amount before touching the
    /// source. A reversed range (end before start) yields an empty report
    /// rather than an error. Any source failure aborts the whole call —
    /// no partial series is ever returned.
    ///
    /// Per-month conversions are rounded to two decimals (half-up) and the
    /// totals are accumulated from those rounded values, so rounding error
    /// compounds across months exactly as it does on each printed line.
    pub async fn compute_series(
        &self,
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
        monthly_amount: f64,
    ) -> Result<SummaryReport, CoreError> {
        if !monthly_amount.is_finite() || monthly_amount <= 0.0 {
            return Err(CoreError::InvalidAmount(monthly_amount));
        }
        for (label, month) in [("start", start_month), ("end", end_month)] {
            if !(1..=12).contains(&month) {
                return Err(CoreError::ValidationError(format!(
                    "{label} month {month} is outside 1..=12"
                )));
            }
        }

        let end_key = month_key(end_year, end_month);
        if month_key(start_year, start_month) > end_key {
            return Ok(SummaryReport::empty());
        }

        log::debug!(
            "computing series {start_year}-{start_month:02}..{end_year}-{end_month:02} via {}",
            self.source.name()
        );

        let mut line_items = Vec::new();
        let mut total_local = 0.0;
        let mut total_usd = 0.0;
        let mut total_eur = 0.0;
        let mut total_gold = 0.0;

        let (mut year, mut month) = (start_year, start_month);
        while month_key(year, month) <= end_key {
            let rate = self.source.rate_for(year, month).await?;

            let amount_usd = round2(monthly_amount / rate.usd);
            let amount_eur = round2(monthly_amount / rate.eur);
            let amount_gold = round2(monthly_amount / rate.gold);

            total_local += monthly_amount;
            total_usd += amount_usd;
            total_eur += amount_eur;
            total_gold += amount_gold;

            line_items.push(MonthlyLineItem {
                month_label: month_label(year, month),
                amount_local: monthly_amount,
                amount_usd,
                amount_eur,
                amount_gold,
                usd_rate: rate.usd,
                eur_rate: rate.eur,
                gold_rate: rate.gold,
            });

            // Advance month-by-month with carry into the year.
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Ok(SummaryReport {
            total_months: line_items.len(),
            total_local,
            total_usd: round2(total_usd),
            total_eur: round2(total_eur),
            total_gold: round2(total_gold),
            line_items,
        })
    }
}

/// Round to exactly two fraction digits, half away from zero (half-up for
/// the positive amounts this engine produces).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
