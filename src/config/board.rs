//! Board configuration - root configuration structure.

use heapless::String;
use serde::Deserialize;

use super::variant::{ErrorPinUsage, HardwareVariant, ACTIVE_ERROR_PIN_USAGE, ACTIVE_VARIANT};

/// Default control loop update rate in Hz.
pub const DEFAULT_CONTROL_LOOP_HZ: u32 = 6000;

/// Highest control loop rate the loop timer can be programmed for.
pub const MAX_CONTROL_LOOP_HZ: u32 = 20_000;

/// Default baud rate of the serial ports.
pub const DEFAULT_SERIAL_BAUD: u32 = 115_200;

/// Version string shown on the splash screen.
pub const FIRMWARE_VERSION: &str = "FW: 0.07";

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Board the configuration targets.
    #[serde(default = "default_variant")]
    pub variant: HardwareVariant,

    /// Error/enable pin wiring.
    #[serde(default = "default_error_pin")]
    pub error_pin: ErrorPinUsage,

    /// Control loop update rate in Hz.
    #[serde(default = "default_control_loop_hz")]
    pub control_loop_hz: u32,

    /// Baud rate of the serial ports.
    #[serde(default = "default_serial_baud")]
    pub serial_baud: u32,

    /// Version string shown on the splash screen (max 16 chars).
    #[serde(default = "default_firmware_version")]
    pub firmware_version: String<16>,
}

fn default_variant() -> HardwareVariant {
    ACTIVE_VARIANT
}

fn default_error_pin() -> ErrorPinUsage {
    ACTIVE_ERROR_PIN_USAGE
}

fn default_control_loop_hz() -> u32 {
    DEFAULT_CONTROL_LOOP_HZ
}

fn default_serial_baud() -> u32 {
    DEFAULT_SERIAL_BAUD
}

fn default_firmware_version() -> String<16> {
    String::try_from(FIRMWARE_VERSION).unwrap_or_default()
}

impl BoardConfig {
    /// Timer ticks per control loop period for a timer clocked at `timer_clock_hz`.
    ///
    /// Returns 0 when `control_loop_hz` is 0; validated configurations never are.
    pub fn control_loop_period_ticks(&self, timer_clock_hz: u32) -> u32 {
        if self.control_loop_hz == 0 {
            return 0;
        }
        divide_with_round(timer_clock_hz, self.control_loop_hz)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            error_pin: default_error_pin(),
            control_loop_hz: DEFAULT_CONTROL_LOOP_HZ,
            serial_baud: DEFAULT_SERIAL_BAUD,
            firmware_version: default_firmware_version(),
        }
    }
}

/// Integer division rounded to the nearest whole number.
///
/// `y` must be non-zero.
#[inline]
pub const fn divide_with_round(x: u32, y: u32) -> u32 {
    ((x as u64 + (y as u64) / 2) / y as u64) as u32
}
