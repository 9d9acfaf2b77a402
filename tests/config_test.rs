// ABOUTME: Integration tests for analytics configuration defaults, validation and overrides
// ABOUTME: Covers weight sums, sensitivity bounds, TASKPULSE_* environment variables and JSON sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use serial_test::serial;
use taskpulse::errors::{AppError, ErrorCode};
use taskpulse::intelligence::{AnalyticsConfig, CompletionAlgorithm, ConfigError};

const OVERRIDE_VARS: [&str; 5] = [
    "TASKPULSE_ANOMALY_SENSITIVITY",
    "TASKPULSE_VOLUME_BASELINE",
    "TASKPULSE_HIGH_PRIORITY_THRESHOLD",
    "TASKPULSE_MIN_FORECAST_WEEKS",
    "TASKPULSE_NEUTRAL_BURNOUT_RISK",
];

fn clear_overrides() {
    for name in OVERRIDE_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_are_valid() {
    common::init_test_logging();
    let config = AnalyticsConfig::default();

    assert!(config.validate().is_ok());
    assert!((config.anomaly.sensitivity - 0.7).abs() < 1e-9);
    assert!((config.anomaly.threshold_multiplier() - 0.8).abs() < 1e-9);
    assert_eq!(config.metrics.volume_baseline, 10);
    assert_eq!(config.metrics.high_priority_threshold, 7);
    assert_eq!(config.prediction.min_forecast_weeks, 3);
    assert_eq!(config.prediction.default_peak_hours, vec![9, 10, 11]);
    assert_eq!(config.prediction.algorithm.name(), "heuristic");
    assert!((config.health.neutral_burnout_risk - 0.3).abs() < 1e-9);
}

#[test]
fn test_productivity_weights_must_sum_to_one() {
    let mut config = AnalyticsConfig::default();
    config.metrics.volume_weight = 0.5;

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidWeights(_)));
    assert!(error.to_string().starts_with("Invalid weights"));
}

#[test]
fn test_weight_sum_tolerance() {
    let mut config = AnalyticsConfig::default();
    config.health.productivity_weight = 0.305;
    assert!(config.validate().is_ok());

    config.health.productivity_weight = 0.35;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_sensitivity_bounds() {
    for sensitivity in [0.0, 0.5, 1.0] {
        let config = AnalyticsConfig::default().with_sensitivity(sensitivity);
        assert!(config.validate().is_ok(), "sensitivity {sensitivity}");
    }

    for sensitivity in [-0.1, 1.01, f64::NAN] {
        let config = AnalyticsConfig::default().with_sensitivity(sensitivity);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}

#[test]
fn test_nan_thresholds_are_rejected() {
    let mut config = AnalyticsConfig::default();
    config.anomaly.drop_std_devs = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = AnalyticsConfig::default();
    config.anomaly.critical_session_hours = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = AnalyticsConfig::default();
    config.metrics.target_deep_work_hours = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.prediction.forecast_trend_slope = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.health.quick_mood_delta = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_anomaly_confidence_monitor_counts() {
    let config = AnalyticsConfig::default();
    assert_eq!(config.health.medium_confidence_monitors, 3);
    assert_eq!(config.health.high_confidence_monitors, 5);
    assert!(config.anomaly.idle_weekends_are_rest);

    let mut config = AnalyticsConfig::default();
    config.health.medium_confidence_monitors = 4;
    config.health.high_confidence_monitors = 2;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = AnalyticsConfig::default();
    config.health.high_confidence_monitors = 6;
    assert!(config.validate().is_err());
}

#[test]
fn test_logistic_priority_coefficient_must_not_be_negative() {
    let mut config = AnalyticsConfig::default();
    config.prediction.algorithm = CompletionAlgorithm::default_logistic();
    assert!(config.validate().is_ok());

    config.prediction.algorithm = CompletionAlgorithm::Logistic {
        intercept: -1.5,
        priority: -0.25,
        estimated_hours: -0.3,
        peak_hour: 0.4,
        open_tasks: -0.05,
        historical_rate: 2.0,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_algorithm_parses_from_name() {
    let logistic: CompletionAlgorithm = "Logistic".parse().unwrap();
    assert_eq!(logistic, CompletionAlgorithm::default_logistic());

    let heuristic: CompletionAlgorithm = " heuristic ".parse().unwrap();
    assert_eq!(heuristic, CompletionAlgorithm::default());

    let error = "neural".parse::<CompletionAlgorithm>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::InvalidRange("burnout tiers out of order").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("burnout tiers out of order"));
    assert_eq!(error.context.details["kind"], "invalid_range");
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: AnalyticsConfig = serde_json::from_str(
        r#"{
            "anomaly": { "sensitivity": 0.4 },
            "metrics": { "volume_baseline": 6 }
        }"#,
    )
    .unwrap();

    assert!((config.anomaly.sensitivity - 0.4).abs() < 1e-9);
    assert_eq!(config.metrics.volume_baseline, 6);
    assert!((config.metrics.completion_weight - 0.4).abs() < 1e-9);
    assert_eq!(config.prediction, AnalyticsConfig::default().prediction);
    assert_eq!(config.health, AnalyticsConfig::default().health);
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_selects_logistic_algorithm() {
    let config: AnalyticsConfig = serde_json::from_str(
        r#"{
            "prediction": {
                "algorithm": {
                    "type": "logistic",
                    "intercept": -1.0,
                    "priority": 0.3,
                    "estimated_hours": -0.2,
                    "peak_hour": 0.5,
                    "open_tasks": -0.1,
                    "historical_rate": 1.5
                }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(config.prediction.algorithm.name(), "logistic");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    clear_overrides();
    env::set_var("TASKPULSE_ANOMALY_SENSITIVITY", "0.9");
    env::set_var("TASKPULSE_VOLUME_BASELINE", " 12 ");
    env::set_var("TASKPULSE_HIGH_PRIORITY_THRESHOLD", "8");
    env::set_var("TASKPULSE_MIN_FORECAST_WEEKS", "4");
    env::set_var("TASKPULSE_NEUTRAL_BURNOUT_RISK", "0.25");

    let config = AnalyticsConfig::from_environment();
    clear_overrides();

    let config = config.unwrap();
    assert!((config.anomaly.sensitivity - 0.9).abs() < 1e-9);
    assert_eq!(config.metrics.volume_baseline, 12);
    assert_eq!(config.metrics.high_priority_threshold, 8);
    assert_eq!(config.prediction.min_forecast_weeks, 4);
    assert!((config.health.neutral_burnout_risk - 0.25).abs() < 1e-9);
}

#[test]
#[serial]
fn test_environment_without_overrides_matches_defaults() {
    clear_overrides();
    let config = AnalyticsConfig::from_environment().unwrap();
    assert_eq!(config, AnalyticsConfig::default());
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var("TASKPULSE_VOLUME_BASELINE", "lots");

    let result = AnalyticsConfig::from_environment();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(detail)) => assert_eq!(detail, "TASKPULSE_VOLUME_BASELINE=lots"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("TASKPULSE_ANOMALY_SENSITIVITY", "1.5");

    let result = AnalyticsConfig::from_environment();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}
