//! embedded-hal 1.0 pin handle.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::pins::{PinLevel, PinRole, ResolvedPin};

use super::port::PortRegisters;
use super::primitives::Gpio;

/// A resolved pin bound to the GPIO primitives.
///
/// Lets collaborators such as the encoder or motor driver take standard
/// `OutputPin`/`InputPin` implementations. Never changes pin direction.
#[derive(Debug)]
pub struct BoardPin<'a, P: PortRegisters> {
    gpio: &'a Gpio<P>,
    pin: ResolvedPin,
}

impl<'a, P: PortRegisters> BoardPin<'a, P> {
    /// Bind `pin` to `gpio`.
    pub fn new(gpio: &'a Gpio<P>, pin: ResolvedPin) -> Self {
        Self { gpio, pin }
    }

    /// The resolved pin.
    #[inline]
    pub fn resolved(&self) -> ResolvedPin {
        self.pin
    }

    /// Role of the pin.
    #[inline]
    pub fn role(&self) -> PinRole {
        self.pin.role
    }

    /// Drive the pin to `level`.
    #[inline]
    pub fn write(&self, level: PinLevel) {
        self.gpio.write(self.pin, level);
    }

    /// Instantaneous input level.
    #[inline]
    pub fn level(&self) -> PinLevel {
        self.gpio.read_level(self.pin)
    }
}

impl<P: PortRegisters> ErrorType for BoardPin<'_, P> {
    type Error = Infallible;
}

impl<P: PortRegisters> OutputPin for BoardPin<'_, P> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.set_low(self.pin);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.set_high(self.pin);
        Ok(())
    }
}

impl<P: PortRegisters> StatefulOutputPin for BoardPin<'_, P> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.output_level(self.pin).is_high())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.gpio.output_level(self.pin).is_high())
    }
}

impl<P: PortRegisters> InputPin for BoardPin<'_, P> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.read_level(self.pin).is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.gpio.read_level(self.pin).is_high())
    }
}
