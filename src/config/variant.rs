//! Hardware variant and error-pin usage, fixed at build time.

use serde::Deserialize;

use crate::pins::{PinDirection, PinRole};

/// Physical board the firmware is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum HardwareVariant {
    /// Standalone driver board with switches, display, encoder power gate and a second LED.
    Standalone,
    /// Shield on a generic microcontroller carrier.
    Shield,
}

impl HardwareVariant {
    /// Both variants, in declaration order.
    pub const ALL: [HardwareVariant; 2] = [HardwareVariant::Standalone, HardwareVariant::Shield];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            HardwareVariant::Standalone => "standalone",
            HardwareVariant::Shield => "shield",
        }
    }

    /// Whether the encoder supply is switched by a dedicated pin.
    #[inline]
    pub const fn has_encoder_power(self) -> bool {
        matches!(self, HardwareVariant::Standalone)
    }

    /// Whether the user switches are fitted.
    #[inline]
    pub const fn has_switches(self) -> bool {
        matches!(self, HardwareVariant::Standalone)
    }

    /// Whether the secondary status LED is fitted.
    #[inline]
    pub const fn has_secondary_led(self) -> bool {
        matches!(self, HardwareVariant::Standalone)
    }

    /// Whether the board carries the OLED display.
    #[inline]
    pub const fn has_display(self) -> bool {
        matches!(self, HardwareVariant::Standalone)
    }

    /// Whether `role` exists on this variant.
    pub const fn has(self, role: PinRole) -> bool {
        match role {
            PinRole::EncoderPower => self.has_encoder_power(),
            PinRole::Switch1 | PinRole::Switch3 | PinRole::Switch4 => self.has_switches(),
            PinRole::StatusLedSecondary => self.has_secondary_led(),
            _ => true,
        }
    }
}

/// How the error/enable pin is wired, chosen at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPinUsage {
    /// External enable signal, like the enable input of a step-stick.
    Enable,
    /// Error output driven by the firmware.
    Error,
}

impl ErrorPinUsage {
    /// Direction the sequencer configures for the error/enable pin.
    #[inline]
    pub const fn direction(self) -> PinDirection {
        match self {
            ErrorPinUsage::Enable => PinDirection::InputPullDown,
            ErrorPinUsage::Error => PinDirection::Output,
        }
    }
}

/// Variant selected by the `shield` cargo feature.
#[cfg(feature = "shield")]
pub const ACTIVE_VARIANT: HardwareVariant = HardwareVariant::Shield;

/// Variant selected by the `shield` cargo feature.
#[cfg(not(feature = "shield"))]
pub const ACTIVE_VARIANT: HardwareVariant = HardwareVariant::Standalone;

/// Error pin usage selected by the `enable-pin` cargo feature.
#[cfg(feature = "enable-pin")]
pub const ACTIVE_ERROR_PIN_USAGE: ErrorPinUsage = ErrorPinUsage::Enable;

/// Error pin usage selected by the `enable-pin` cargo feature.
#[cfg(not(feature = "enable-pin"))]
pub const ACTIVE_ERROR_PIN_USAGE: ErrorPinUsage = ErrorPinUsage::Error;
