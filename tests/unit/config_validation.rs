//! Unit tests for configuration validation.

use nzs_hal::config::{parse_config, validate_config, BoardConfig, MAX_CONTROL_LOOP_HZ};
use nzs_hal::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
variant = "standalone"
control_loop_hz = 6000
serial_baud = 115200
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test the control loop rate at its upper bound.
#[test]
fn test_control_loop_rate_at_maximum() {
    let config = BoardConfig {
        control_loop_hz: MAX_CONTROL_LOOP_HZ,
        ..BoardConfig::default()
    };
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a control loop rate above the maximum.
#[test]
fn test_control_loop_rate_too_high() {
    let toml_str = format!("control_loop_hz = {}", MAX_CONTROL_LOOP_HZ + 1);

    let result = parse_config(&toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidControlLoopRate(hz))) if hz == MAX_CONTROL_LOOP_HZ + 1
    ));
}

/// Test validation fails for a zero baud rate.
#[test]
fn test_zero_serial_baud() {
    let toml_str = r#"
serial_baud = 0
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSerialBaud(0)))
    ));
}

/// Test that the loop timer period follows the configured rate.
#[test]
fn test_control_loop_period_ticks() {
    let config = BoardConfig::default();
    // 48 MHz timer clock at 6 kHz
    assert_eq!(config.control_loop_period_ticks(48_000_000), 8000);

    let config = BoardConfig {
        control_loop_hz: 7000,
        ..BoardConfig::default()
    };
    // 6857.14 rounds down
    assert_eq!(config.control_loop_period_ticks(48_000_000), 6857);
}
