//! Embedded historical rate data set, 2005–2026.
//!
//! Monthly averages of local currency (Turkish lira) per 1 USD, per 1 EUR,
//! and per 1 gram of gold. Deliberately sparse: early years carry only a
//! few anchor months, and the table's fallback rule fills the gaps.

use crate::models::rate::RateObservation;

/// The raw builtin observation set, newest first. Order does not matter —
/// `RateTable` sorts at construction.
pub fn builtin_observations() -> Vec<RateObservation> {
    let rows: [(i32, u32, f64, f64, f64); 37] = [
        // 2026
        (2026, 2, 43.3990, 51.4495, 4450.00),
        (2026, 1, 43.0925, 50.5169, 4310.00),
        // 2025
        (2025, 12, 42.5841, 49.8603, 4250.00),
        (2025, 11, 42.1690, 48.7474, 4120.00),
        (2025, 10, 41.7263, 48.6032, 4050.00),
        (2025, 9, 41.2246, 48.3380, 3920.00),
        (2025, 8, 40.7256, 47.3025, 3850.00),
        (2025, 7, 40.0984, 46.9142, 3720.00),
        (2025, 6, 39.3271, 45.2272, 3650.00),
        (2025, 5, 38.6594, 43.6294, 3600.00),
        (2025, 4, 38.0113, 42.6732, 3520.00),
        (2025, 3, 36.9959, 39.8499, 3450.00),
        (2025, 2, 36.0729, 37.5777, 3380.00),
        (2025, 1, 35.4370, 36.6893, 3250.00),
        // 2024
        (2024, 12, 34.80, 37.90, 2950.00),
        (2024, 11, 34.40, 37.10, 2880.00),
        (2024, 10, 34.15, 37.20, 2910.00),
        (2024, 9, 33.90, 37.80, 2820.00),
        (2024, 8, 33.60, 37.10, 2750.00),
        (2024, 7, 32.90, 35.80, 2600.00),
        (2024, 6, 32.50, 35.10, 2520.00),
        (2024, 5, 32.20, 34.80, 2450.00),
        (2024, 4, 32.10, 34.50, 2380.00),
        (2024, 3, 31.90, 34.60, 2250.00),
        (2024, 2, 30.70, 33.20, 2050.00),
        (2024, 1, 30.10, 32.80, 1980.00),
        // 2023
        (2023, 12, 29.10, 31.80, 1900.00),
        (2023, 6, 23.60, 25.50, 1480.00),
        (2023, 1, 18.70, 20.20, 1160.00),
        // 2022
        (2022, 12, 18.60, 19.70, 1080.00),
        (2022, 6, 17.10, 18.00, 1010.00),
        (2022, 1, 13.50, 15.30, 790.00),
        // 2021
        (2021, 12, 13.50, 15.20, 780.00),
        (2021, 1, 7.40, 9.00, 440.00),
        // Sparse anchors for the early years
        (2015, 12, 2.90, 3.20, 100.00),
        (2010, 12, 1.50, 2.00, 65.00),
        (2005, 12, 1.34, 1.60, 22.00),
    ];

    rows.iter()
        .map(|&(year, month, usd, eur, gold)| RateObservation::new(year, month, usd, eur, gold))
        .collect()
}
