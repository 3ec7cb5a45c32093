//! Configuration module for nzs-hal.
//!
//! The hardware variant and error-pin usage are build-time choices made with
//! cargo features. [`BoardConfig`] carries them together with the remaining
//! board parameters and can be loaded from TOML (with `std` feature).

mod board;
#[cfg(feature = "std")]
mod loader;
mod validation;
mod variant;

pub use board::{
    divide_with_round, BoardConfig, DEFAULT_CONTROL_LOOP_HZ, DEFAULT_SERIAL_BAUD,
    FIRMWARE_VERSION, MAX_CONTROL_LOOP_HZ,
};
pub use validation::validate_config;
pub use variant::{ErrorPinUsage, HardwareVariant, ACTIVE_ERROR_PIN_USAGE, ACTIVE_VARIANT};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
