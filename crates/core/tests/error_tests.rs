// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use debt_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_amount() {
        let err = CoreError::InvalidAmount(-5.0);
        assert_eq!(
            err.to_string(),
            "Invalid monthly amount -5: must be a positive, finite number"
        );
    }

    #[test]
    fn invalid_amount_zero() {
        let err = CoreError::InvalidAmount(0.0);
        assert_eq!(
            err.to_string(),
            "Invalid monthly amount 0: must be a positive, finite number"
        );
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("start month 13 is outside 1..=12".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: start month 13 is outside 1..=12"
        );
    }

    #[test]
    fn entry_not_found() {
        let err = CoreError::EntryNotFound("abc-123".into());
        assert_eq!(err.to_string(), "Debt entry not found: abc-123");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            source_name: "Generative".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (Generative): rate limited");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn rate_not_available_pads_month() {
        let err = CoreError::RateNotAvailable { year: 2019, month: 5 };
        assert_eq!(err.to_string(), "No rate available for 2019-05");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("{bad").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }

    #[test]
    fn error_implements_std_error() {
        let err = CoreError::Network("down".into());
        let _: &dyn std::error::Error = &err;
    }
}
