//! Electrical pin types.

use core::ops::Not;

use super::PinRole;

/// Pin direction and pull configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// Floating input.
    Input,
    /// Input with pull-up resistor.
    InputPullUp,
    /// Input with pull-down resistor.
    InputPullDown,
    /// Push-pull output.
    Output,
}

impl PinDirection {
    /// Whether the pin is an output.
    #[inline]
    pub const fn is_output(self) -> bool {
        matches!(self, PinDirection::Output)
    }

    /// Level the pull resistor biases the pin to, if any.
    #[inline]
    pub const fn pull_level(self) -> Option<PinLevel> {
        match self {
            PinDirection::InputPullUp => Some(PinLevel::High),
            PinDirection::InputPullDown => Some(PinLevel::Low),
            _ => None,
        }
    }
}

/// Logic level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic low.
    #[default]
    Low,
    /// Logic high.
    High,
}

impl PinLevel {
    /// Level from a boolean, `true` being high.
    #[inline]
    pub const fn from_bool(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }

    /// Whether the level is high.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

impl Not for PinLevel {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

/// Logical pin index of the microcontroller support package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl PinId {
    /// Raw index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// A role bound to its physical pin and default electrical configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedPin {
    /// Role this pin plays.
    pub role: PinRole,
    /// Physical pin index.
    pub pin: PinId,
    /// Default direction and pull mode.
    pub direction: PinDirection,
    /// Level the pin holds before the sequencer changes it.
    pub default_level: PinLevel,
}

impl ResolvedPin {
    pub(crate) const fn new(
        role: PinRole,
        pin: u8,
        direction: PinDirection,
        default_level: PinLevel,
    ) -> Self {
        Self {
            role,
            pin: PinId(pin),
            direction,
            default_level,
        }
    }

    /// Same pin with a different default direction.
    pub const fn with_direction(self, direction: PinDirection) -> Self {
        Self { direction, ..self }
    }
}

impl From<ResolvedPin> for PinId {
    fn from(pin: ResolvedPin) -> Self {
        pin.pin
    }
}

impl From<&ResolvedPin> for PinId {
    fn from(pin: &ResolvedPin) -> Self {
        pin.pin
    }
}
