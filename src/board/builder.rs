//! Builder pattern for Board.

use core::marker::PhantomData;

use crate::config::{BoardConfig, ErrorPinUsage, ACTIVE_ERROR_PIN_USAGE};
use crate::error::{ConfigError, Error, Result};
use crate::gpio::PortRegisters;

use super::handle::Board;
use super::state::Unconfigured;
use super::variant::Variant;

/// Builder for creating Board instances.
#[derive(Debug)]
pub struct BoardBuilder<P, V>
where
    P: PortRegisters,
    V: Variant,
{
    port: Option<P>,
    error_pin: ErrorPinUsage,
    _variant: PhantomData<V>,
}

impl<P, V> Default for BoardBuilder<P, V>
where
    P: PortRegisters,
    V: Variant,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> BoardBuilder<P, V>
where
    P: PortRegisters,
    V: Variant,
{
    /// Create a new builder with the build-time error pin usage.
    pub fn new() -> Self {
        Self {
            port: None,
            error_pin: ACTIVE_ERROR_PIN_USAGE,
            _variant: PhantomData,
        }
    }

    /// Set the port registers.
    pub fn port(mut self, port: P) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the error/enable pin usage.
    pub fn error_pin(mut self, usage: ErrorPinUsage) -> Self {
        self.error_pin = usage;
        self
    }

    /// Configure from a BoardConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration targets another variant.
    pub fn from_config(mut self, config: &BoardConfig) -> Result<Self> {
        if config.variant != V::VARIANT {
            return Err(Error::Config(ConfigError::VariantMismatch {
                expected: V::VARIANT,
                found: config.variant,
            }));
        }
        self.error_pin = config.error_pin;
        Ok(self)
    }

    /// Build the unconfigured Board.
    ///
    /// # Errors
    ///
    /// Returns an error if no port was given.
    pub fn build(self) -> Result<Board<P, V, Unconfigured>> {
        let port = self
            .port
            .ok_or(Error::Config(ConfigError::MissingField("port")))?;

        Ok(Board::new(port, self.error_pin))
    }
}
