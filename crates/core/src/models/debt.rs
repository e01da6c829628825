use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded debt: fixed monthly amount in local currency, owed from a
/// given start month onward.
///
/// Session state only — the conversion engine never stores or mutates
/// entries; it receives the relevant fields as call parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtEntry {
    pub id: Uuid,

    /// Person or company the debt is owed to.
    pub client_name: String,

    pub start_year: i32,
    /// Calendar month, 1..=12
    pub start_month: u32,

    /// Fixed amount owed per month, in local currency.
    pub monthly_amount: f64,

    pub created_at: DateTime<Utc>,
}

impl DebtEntry {
    pub fn new(
        client_name: impl Into<String>,
        start_year: i32,
        start_month: u32,
        monthly_amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            start_year,
            start_month,
            monthly_amount,
            created_at: Utc::now(),
        }
    }
}
