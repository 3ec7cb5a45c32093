//! Atomic GPIO primitives.
//!
//! Safe to call from the main sequence and from the control-loop interrupt.
//! Level changes are single writes to a set or clear register; nothing here
//! reads, modifies and writes back a whole port.

use crate::pins::{PinDirection, PinId, PinLevel};

use super::descriptor::describe;
use super::port::{PinConfig, PortRegisters};

/// GPIO primitives over a port register block.
#[derive(Debug)]
pub struct Gpio<P: PortRegisters> {
    port: P,
}

impl<P: PortRegisters> Gpio<P> {
    /// Wrap a port register block.
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Underlying port registers.
    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Release the port registers.
    pub fn free(self) -> P {
        self.port
    }

    /// Drive `pin` high.
    #[inline(always)]
    pub fn set_high(&self, pin: impl Into<PinId>) {
        let handle = describe(pin.into());
        self.port.write_outset(handle.group, handle.mask());
    }

    /// Drive `pin` low.
    #[inline(always)]
    pub fn set_low(&self, pin: impl Into<PinId>) {
        let handle = describe(pin.into());
        self.port.write_outclr(handle.group, handle.mask());
    }

    /// Drive `pin` to `level`.
    #[inline(always)]
    pub fn write(&self, pin: impl Into<PinId>, level: PinLevel) {
        match level {
            PinLevel::High => self.set_high(pin),
            PinLevel::Low => self.set_low(pin),
        }
    }

    /// Configure direction and pull of `pin`.
    ///
    /// Inputs get their input buffer enabled and, for pulled inputs, the pull
    /// direction selected through the output latch. Outputs get the input
    /// buffer and pull disabled; their latched level is left as it is, so a
    /// level driven beforehand appears on the pin the moment it turns output.
    pub fn configure_direction(&self, pin: impl Into<PinId>, direction: PinDirection) {
        let handle = describe(pin.into());
        let mask = handle.mask();
        match direction {
            PinDirection::Input => {
                self.port
                    .write_pincfg(handle.group, handle.bit, PinConfig::INEN);
                self.port.write_dirclr(handle.group, mask);
            }
            PinDirection::InputPullUp => {
                self.port.write_pincfg(
                    handle.group,
                    handle.bit,
                    PinConfig::INEN | PinConfig::PULLEN,
                );
                self.port.write_dirclr(handle.group, mask);
                self.port.write_outset(handle.group, mask);
            }
            PinDirection::InputPullDown => {
                self.port.write_pincfg(
                    handle.group,
                    handle.bit,
                    PinConfig::INEN | PinConfig::PULLEN,
                );
                self.port.write_dirclr(handle.group, mask);
                self.port.write_outclr(handle.group, mask);
            }
            PinDirection::Output => {
                self.port
                    .write_pincfg(handle.group, handle.bit, PinConfig::NONE);
                self.port.write_dirset(handle.group, mask);
            }
        }
    }

    /// Instantaneous input level of `pin`, unfiltered.
    #[inline(always)]
    pub fn read_level(&self, pin: impl Into<PinId>) -> PinLevel {
        let handle = describe(pin.into());
        PinLevel::from_bool(self.port.read_in(handle.group) & handle.mask() != 0)
    }

    /// Level held in the output latch of `pin`.
    #[inline]
    pub fn output_level(&self, pin: impl Into<PinId>) -> PinLevel {
        let handle = describe(pin.into());
        PinLevel::from_bool(self.port.read_out(handle.group) & handle.mask() != 0)
    }

    /// Current direction of `pin`, decoded from the port registers.
    pub fn direction(&self, pin: impl Into<PinId>) -> PinDirection {
        let handle = describe(pin.into());
        let mask = handle.mask();
        if self.port.read_dir(handle.group) & mask != 0 {
            return PinDirection::Output;
        }
        if self
            .port
            .read_pincfg(handle.group, handle.bit)
            .contains(PinConfig::PULLEN)
        {
            if self.port.read_out(handle.group) & mask != 0 {
                PinDirection::InputPullUp
            } else {
                PinDirection::InputPullDown
            }
        } else {
            PinDirection::Input
        }
    }
}
