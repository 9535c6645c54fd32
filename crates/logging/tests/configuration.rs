//! Integration tests for threshold resolution.
//!
//! The live process environment is only read through variables that are
//! never set, so these tests stay independent of the caller's shell.

use std::ffi::OsString;

use logging::{ConfigError, MESSAGE_LEVEL_ENV, MessageLevel, MessageRouter, RouterConfig};

const UNSET: &str = "MSGLEVEL_INTEGRATION_UNSET_VARIABLE";

fn lookup(value: &'static str) -> impl FnOnce(&str) -> Option<OsString> {
    move |_| Some(OsString::from(value))
}

#[test]
fn variable_name_is_singularity_messagelevel() {
    assert_eq!(MESSAGE_LEVEL_ENV, "SINGULARITY_MESSAGELEVEL");
}

#[test]
fn every_named_level_parses() {
    for (raw, expected) in [
        ("-4", MessageLevel::ABRT),
        ("-3", MessageLevel::ERROR),
        ("-2", MessageLevel::WARNING),
        ("-1", MessageLevel::LOG),
        ("0", MessageLevel::QUIET),
        ("1", MessageLevel::INFO),
        ("2", MessageLevel::VERBOSE),
        ("3", MessageLevel::VERBOSE2),
        ("4", MessageLevel::VERBOSE3),
        ("5", MessageLevel::DEBUG),
    ] {
        let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup(raw)).unwrap();
        assert_eq!(config.threshold(), expected, "value {raw}");
    }
}

#[test]
fn unset_variable_defaults_to_debug() {
    let config = RouterConfig::from_env_var(UNSET).unwrap();
    assert_eq!(config.threshold(), MessageLevel::DEBUG);
}

#[test]
fn malformed_value_is_reported() {
    let error = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup("verbose")).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidLevel { .. }));
    assert_eq!(
        error.to_string(),
        "SINGULARITY_MESSAGELEVEL must be an integer message level, got \"verbose\""
    );
}

#[test]
fn explicit_threshold_skips_environment() {
    let router = MessageRouter::resolve(Some(MessageLevel::WARNING)).unwrap();
    assert_eq!(router.threshold(), MessageLevel::WARNING);
}

#[test]
fn router_from_config_reports_threshold() {
    let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup("-2")).unwrap();
    let router = MessageRouter::with_config(config);
    assert_eq!(router.config(), config);
    assert!(router.is_enabled(MessageLevel::ERROR));
    assert!(!router.is_enabled(MessageLevel::LOG));
}

#[cfg(feature = "serde")]
mod serde_support {
    use logging::{MessageLevel, ProgressOptions, RouterConfig, Severity};

    #[test]
    fn config_serializes_threshold_as_integer() {
        let config = RouterConfig::with_threshold(MessageLevel::VERBOSE2);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"threshold":3}"#);

        let back: RouterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn severity_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Verbose1).unwrap();
        assert_eq!(json, r#""verbose1""#);
    }

    #[test]
    fn progress_options_deserialize() {
        let options: ProgressOptions = serde_json::from_str(
            r#"{"length":20,"min_level":2,"carriage_return":false}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            ProgressOptions::default()
                .with_length(20)
                .with_min_level(MessageLevel::VERBOSE)
                .with_carriage_return(false)
        );
    }
}
