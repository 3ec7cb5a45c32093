//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::board::MAX_CONTROL_LOOP_HZ;
use super::BoardConfig;

/// Validate a board configuration.
///
/// Checks:
/// - Control loop rate is in 1..=`MAX_CONTROL_LOOP_HZ`
/// - Serial baud rate is non-zero
pub fn validate_config(config: &BoardConfig) -> Result<()> {
    if config.control_loop_hz == 0 || config.control_loop_hz > MAX_CONTROL_LOOP_HZ {
        return Err(Error::Config(ConfigError::InvalidControlLoopRate(
            config.control_loop_hz,
        )));
    }

    if config.serial_baud == 0 {
        return Err(Error::Config(ConfigError::InvalidSerialBaud(
            config.serial_baud,
        )));
    }

    Ok(())
}
