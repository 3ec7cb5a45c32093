//! Unit tests for TOML configuration parsing.

use nzs_hal::config::{
    parse_config, BoardConfig, ErrorPinUsage, HardwareVariant, DEFAULT_SERIAL_BAUD,
};
use nzs_hal::error::{ConfigError, Error};

/// Test parsing a complete standalone board configuration.
#[test]
fn test_parse_standalone_config() {
    let toml_str = r#"
variant = "standalone"
error_pin = "error"
control_loop_hz = 6000
serial_baud = 115200
firmware_version = "FW: 0.07"
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.variant, HardwareVariant::Standalone);
    assert_eq!(config.error_pin, ErrorPinUsage::Error);
    assert_eq!(config.control_loop_hz, 6000);
    assert_eq!(config.serial_baud, 115_200);
    assert_eq!(config.firmware_version.as_str(), "FW: 0.07");
}

/// Test that omitted fields fall back to defaults.
#[test]
fn test_parse_partial_config_uses_defaults() {
    let toml_str = r#"
variant = "shield"
error_pin = "enable"
"#;

    let config: BoardConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.variant, HardwareVariant::Shield);
    assert_eq!(config.error_pin, ErrorPinUsage::Enable);
    assert_eq!(config.serial_baud, DEFAULT_SERIAL_BAUD);
    assert_eq!(config.control_loop_hz, BoardConfig::default().control_loop_hz);
}

/// Test that variant names are matched in lowercase only.
#[test]
fn test_parse_rejects_capitalized_variant() {
    let result = parse_config(r#"variant = "Shield""#);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that a firmware version longer than 16 characters is rejected.
#[test]
fn test_parse_rejects_long_firmware_version() {
    let result = parse_config(r#"firmware_version = "FW: 0.07-with-a-long-suffix""#);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that parse errors render a readable message.
#[test]
fn test_parse_error_display() {
    let err = parse_config("control_loop_hz = \"fast\"").unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Parse error"), "unexpected message: {}", msg);
}
