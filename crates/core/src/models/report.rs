use serde::{Deserialize, Serialize};

/// English month names, indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Human-readable label for a calendar month, e.g. "January 2025".
///
/// Months outside 1..=12 fall back to a numeric "year-month" form rather
/// than panicking; callers validate the month domain before getting here.
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    match month.checked_sub(1).and_then(|i| MONTH_NAMES.get(i as usize)) {
        Some(name) => format!("{name} {year}"),
        None => format!("{year}-{month:02}"),
    }
}

/// One enumerated month's conversion result.
///
/// The converted amounts carry at most two fraction digits; the rates are
/// the raw observation values the conversion used (fallback included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLineItem {
    /// e.g. "January 2025"
    pub month_label: String,

    /// The fixed monthly amount, unchanged, in local currency.
    pub amount_local: f64,
    pub amount_usd: f64,
    pub amount_eur: f64,
    /// Grams of gold.
    pub amount_gold: f64,

    pub usd_rate: f64,
    pub eur_rate: f64,
    pub gold_rate: f64,
}

/// Full output of one series computation: per-month line items in
/// chronological order (oldest first) plus totals.
///
/// Foreign-currency totals are sums of the already-rounded per-month
/// values, rounded once more at the end — rounding error compounds across
/// months, matching how the per-month figures are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_months: usize,
    pub total_local: f64,
    pub total_usd: f64,
    pub total_eur: f64,
    pub total_gold: f64,
    pub line_items: Vec<MonthlyLineItem>,
}

impl SummaryReport {
    /// A report covering zero months — the result of a reversed date range.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_months: 0,
            total_local: 0.0,
            total_usd: 0.0,
            total_eur: 0.0,
            total_gold: 0.0,
            line_items: Vec::new(),
        }
    }
}
