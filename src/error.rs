//! Error types for nzs-hal.
//!
//! Only configuration parsing and table validation can fail. GPIO primitives,
//! the power-up sequencer and the indicator helpers have no error channel.

use core::fmt;

use crate::config::HardwareVariant;
use crate::pins::PinRole;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all nzs-hal operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin role table inconsistency
    Table(TableError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Control loop rate is zero or above the supported maximum
    InvalidControlLoopRate(u32),
    /// Serial baud rate must be non-zero
    InvalidSerialBaud(u32),
    /// Configuration names a different variant than the firmware was built for
    VariantMismatch {
        /// Variant the board handle was built for
        expected: HardwareVariant,
        /// Variant named by the configuration
        found: HardwareVariant,
    },
    /// A required builder field was not provided
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin role table errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two roles resolve to the same physical pin
    DuplicatePin {
        /// Physical pin index
        pin: u8,
        /// Role listed first
        first: PinRole,
        /// Role listed second
        second: PinRole,
    },
    /// A role listed more than once in the same table
    DuplicateRole(PinRole),
    /// A role the variant requires is missing
    MissingRole(PinRole),
    /// A role the variant does not have is present
    UnexpectedRole(PinRole),
    /// Default level disagrees with the pull direction of an input
    InconsistentDefault(PinRole),
    /// Pin index has no entry in the pin description table
    UnknownPin(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Table(e) => write!(f, "Pin table error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidControlLoopRate(hz) => write!(
                f,
                "Invalid control loop rate: {} Hz. Must be 1-{}",
                hz,
                crate::config::MAX_CONTROL_LOOP_HZ
            ),
            ConfigError::InvalidSerialBaud(baud) => {
                write!(f, "Invalid serial baud rate: {}. Must be > 0", baud)
            }
            ConfigError::VariantMismatch { expected, found } => write!(
                f,
                "Configuration is for the {} variant, firmware was built for {}",
                found.name(),
                expected.name()
            ),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicatePin { pin, first, second } => write!(
                f,
                "Pin {} is assigned to both {:?} and {:?}",
                pin, first, second
            ),
            TableError::DuplicateRole(role) => write!(f, "Role {:?} is listed twice", role),
            TableError::MissingRole(role) => write!(f, "Role {:?} has no pin", role),
            TableError::UnexpectedRole(role) => {
                write!(f, "Role {:?} does not exist on this variant", role)
            }
            TableError::InconsistentDefault(role) => write!(
                f,
                "Default level of {:?} disagrees with its pull direction",
                role
            ),
            TableError::UnknownPin(pin) => write!(f, "Pin {} has no port description", pin),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}
