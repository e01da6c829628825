// ═══════════════════════════════════════════════════════════════════
// Provider Tests — StaticRateSource and GenerativeRateSource parsing
// ═══════════════════════════════════════════════════════════════════

use debt_tracker_core::errors::CoreError;
use debt_tracker_core::models::rate::{RateObservation, RateTable};
use debt_tracker_core::providers::generative::GenerativeRateSource;
use debt_tracker_core::providers::static_table::StaticRateSource;
use debt_tracker_core::providers::traits::RateSource;

fn obs(year: i32, month: u32, usd: f64, eur: f64, gold: f64) -> RateObservation {
    RateObservation::new(year, month, usd, eur, gold)
}

// ═══════════════════════════════════════════════════════════════════
//  StaticRateSource
// ═══════════════════════════════════════════════════════════════════

mod static_source {
    use super::*;

    #[test]
    fn name() {
        assert_eq!(StaticRateSource::builtin().name(), "StaticTable");
    }

    #[tokio::test]
    async fn exact_month_resolves_from_table() {
        let source = StaticRateSource::new(
            RateTable::new(vec![obs(2025, 1, 35.4370, 36.6893, 3250.0)]).unwrap(),
        );
        let rate = source.rate_for(2025, 1).await.unwrap();
        assert_eq!(rate.usd, 35.4370);
    }

    #[tokio::test]
    async fn never_fails_even_outside_coverage() {
        let source = StaticRateSource::new(
            RateTable::new(vec![obs(2025, 1, 35.4370, 36.6893, 3250.0)]).unwrap(),
        );
        // Before coverage and after coverage both resolve.
        assert!(source.rate_for(1990, 6).await.is_ok());
        assert!(source.rate_for(2099, 12).await.is_ok());
    }

    #[tokio::test]
    async fn fallback_overrides_date_but_not_rates() {
        let source = StaticRateSource::new(
            RateTable::new(vec![
                obs(2025, 1, 35.4370, 36.6893, 3250.0),
                obs(2025, 2, 36.0729, 37.5777, 3380.0),
            ])
            .unwrap(),
        );
        let rate = source.rate_for(2025, 9).await.unwrap();
        assert_eq!((rate.year, rate.month), (2025, 9));
        assert_eq!(rate.usd, 36.0729);
    }

    #[test]
    fn builtin_exposes_its_table() {
        let source = StaticRateSource::builtin();
        assert_eq!(source.table().latest().year, 2026);
    }

    #[test]
    fn default_is_builtin() {
        let source = StaticRateSource::default();
        assert_eq!(source.table().len(), 37);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GenerativeRateSource — response parsing (no network)
// ═══════════════════════════════════════════════════════════════════

mod generative_parsing {
    use super::*;

    #[test]
    fn name() {
        let source = GenerativeRateSource::new("test-key".into());
        assert_eq!(source.name(), "Generative");
    }

    #[test]
    fn response_schema_constrains_an_array_of_rate_objects() {
        let schema = GenerativeRateSource::response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
        let required: Vec<&str> = schema["items"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["year", "month", "usd", "eur", "gold"]);
        for key in required {
            assert_eq!(schema["items"]["properties"][key]["type"], "NUMBER");
        }
    }

    #[test]
    fn parses_single_object_array() {
        let text = r#"[{"year":2019,"month":5,"usd":6.05,"eur":6.78,"gold":248.0}]"#;
        let rate = GenerativeRateSource::parse_response(text, 2019, 5).unwrap();
        assert_eq!(rate.usd, 6.05);
        assert_eq!(rate.gold, 248.0);
    }

    #[test]
    fn picks_the_requested_month_out_of_many() {
        let text = r#"[
            {"year":2019,"month":4,"usd":5.80,"eur":6.52,"gold":240.0},
            {"year":2019,"month":5,"usd":6.05,"eur":6.78,"gold":248.0}
        ]"#;
        let rate = GenerativeRateSource::parse_response(text, 2019, 5).unwrap();
        assert_eq!(rate.month, 5);
        assert_eq!(rate.usd, 6.05);
    }

    #[test]
    fn missing_month_is_rate_not_available() {
        let text = r#"[{"year":2019,"month":4,"usd":5.80,"eur":6.52,"gold":240.0}]"#;
        let err = GenerativeRateSource::parse_response(text, 2019, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::RateNotAvailable { year: 2019, month: 5 }
        ));
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = GenerativeRateSource::parse_response("not json at all", 2019, 5).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn non_positive_rate_is_api_error() {
        let text = r#"[{"year":2019,"month":5,"usd":0.0,"eur":6.78,"gold":248.0}]"#;
        let err = GenerativeRateSource::parse_response(text, 2019, 5).unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[test]
    fn empty_array_is_rate_not_available() {
        let err = GenerativeRateSource::parse_response("[]", 2019, 5).unwrap_err();
        assert!(matches!(err, CoreError::RateNotAvailable { .. }));
    }
}
