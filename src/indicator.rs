//! Status LED helpers.
//!
//! Hide the drive polarity of each LED and the missing secondary LED on the
//! shield. They hold only the pin handles.

use embedded_hal::digital::{OutputPin, PinState};

/// Which pin level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High is on.
    ActiveHigh,
    /// Low is on.
    ActiveLow,
}

impl Polarity {
    /// Pin state that shows `on`.
    #[inline]
    pub const fn state(self, on: bool) -> PinState {
        match (self, on) {
            (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => PinState::High,
            _ => PinState::Low,
        }
    }
}

/// An LED behind an output pin.
#[derive(Debug)]
pub struct Indicator<PIN> {
    pin: PIN,
    polarity: Polarity,
}

impl<PIN: OutputPin> Indicator<PIN> {
    /// Wrap `pin` with its drive polarity.
    pub fn new(pin: PIN, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Light or darken the LED.
    #[inline]
    pub fn set(&mut self, on: bool) -> Result<(), PIN::Error> {
        self.pin.set_state(self.polarity.state(on))
    }

    /// Drive polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Release the pin.
    pub fn free(self) -> PIN {
        self.pin
    }
}

/// Primary (red, active-high) and optional secondary (yellow, active-low) LEDs.
#[derive(Debug)]
pub struct StatusIndicators<PIN> {
    primary: Indicator<PIN>,
    secondary: Option<Indicator<PIN>>,
}

impl<PIN: OutputPin> StatusIndicators<PIN> {
    /// Build from the primary LED pin and, if fitted, the secondary one.
    pub fn new(primary: PIN, secondary: Option<PIN>) -> Self {
        Self {
            primary: Indicator::new(primary, Polarity::ActiveHigh),
            secondary: secondary.map(|pin| Indicator::new(pin, Polarity::ActiveLow)),
        }
    }

    /// Light or darken the primary LED.
    #[inline]
    pub fn set_primary_indicator(&mut self, on: bool) -> Result<(), PIN::Error> {
        self.primary.set(on)
    }

    /// Light or darken the secondary LED; no-op when there is none.
    #[inline]
    pub fn set_secondary_indicator(&mut self, on: bool) -> Result<(), PIN::Error> {
        match self.secondary.as_mut() {
            Some(indicator) => indicator.set(on),
            None => Ok(()),
        }
    }

    /// Whether a secondary LED is fitted.
    #[inline]
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}
