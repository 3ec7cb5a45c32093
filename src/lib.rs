//! # nzs-hal
//!
//! Board support for a closed-loop stepper driver that ships as a standalone
//! board and as a shield: pin-role resolution, atomic GPIO, and a one-shot
//! sequencer that puts every peripheral in a safe state at power-up.
//!
//! ## Features
//!
//! - **Per-variant pin tables**: checked at build time for unique pins and complete roles
//! - **Atomic GPIO**: single set/clear register writes, safe from interrupt context
//! - **Safe power-up**: motor bridge and current references driven low before becoming outputs
//! - **embedded-hal 1.0**: resolved pins implement `OutputPin`, `StatefulOutputPin`, `InputPin`
//! - **Type-state safety**: pins only after init; optional roles only on variants that have them
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nzs_hal::board::{ActiveVariant, Board};
//! use nzs_hal::config::ACTIVE_ERROR_PIN_USAGE;
//! use nzs_hal::gpio::Samd21Port;
//!
//! // before arming the control-loop timer
//! let board = Board::<_, ActiveVariant, _>::new(unsafe { Samd21Port::steal() }, ACTIVE_ERROR_PIN_USAGE)
//!     .initialize();
//!
//! let mut leds = board.indicators();
//! leds.set_primary_indicator(true)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML configuration loading and the simulated port
//! - `defmt`: Enables defmt logging for embedded targets
//! - `shield`: Builds for the shield variant instead of the standalone board
//! - `enable-pin`: Uses the error pin as an enable input
//! - `samd21`: Enables the memory-mapped SAMD21 port backend

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod board;
pub mod config;
pub mod error;
pub mod gpio;
pub mod indicator;
pub mod init;
pub mod pins;

// Re-exports for ergonomic API
pub use board::{Board, BoardBuilder, Ready, Shield, Standalone, Unconfigured};
pub use config::{
    validate_config, BoardConfig, ErrorPinUsage, HardwareVariant, ACTIVE_ERROR_PIN_USAGE,
    ACTIVE_VARIANT,
};
pub use error::{Error, Result};
pub use gpio::{BoardPin, Gpio, PortRegisters};
pub use indicator::{Indicator, Polarity, StatusIndicators};
pub use init::initialize;
pub use pins::{lookup, resolve, PinDirection, PinId, PinLevel, PinRole, ResolvedPin};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
