//! Port register model.

use core::ops::BitOr;

/// Port group of the microcontroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortGroup {
    /// Port A
    A = 0,
    /// Port B
    B = 1,
}

impl PortGroup {
    /// Number of port groups.
    pub const COUNT: usize = 2;

    /// Zero-based group index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Contents of a per-pin configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig(pub u8);

impl PinConfig {
    /// Peripheral multiplexer enable.
    pub const PMUXEN: PinConfig = PinConfig(1 << 0);
    /// Input buffer enable.
    pub const INEN: PinConfig = PinConfig(1 << 1);
    /// Pull resistor enable.
    pub const PULLEN: PinConfig = PinConfig(1 << 2);
    /// Stronger output drive.
    pub const DRVSTR: PinConfig = PinConfig(1 << 6);
    /// Nothing enabled.
    pub const NONE: PinConfig = PinConfig(0);

    /// Whether all bits of `other` are set.
    #[inline]
    pub const fn contains(self, other: PinConfig) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PinConfig {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        PinConfig(self.0 | rhs.0)
    }
}

/// Location of a pin in the port registers.
///
/// Produced on demand by the primitives and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortRegisterHandle {
    /// Port group holding the pin.
    pub group: PortGroup,
    /// Bit position within the group.
    pub bit: u8,
}

impl PortRegisterHandle {
    /// Single-bit mask of this pin.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        1u32 << self.bit
    }
}

/// Access to the port register block.
///
/// Every write method is one store to one register. The set/clear registers
/// change only the bits that are 1 in `mask`, so writes to different pins
/// never disturb each other, from any execution context.
pub trait PortRegisters {
    /// Write the output-set register.
    fn write_outset(&self, group: PortGroup, mask: u32);

    /// Write the output-clear register.
    fn write_outclr(&self, group: PortGroup, mask: u32);

    /// Write the direction-set register (make outputs).
    fn write_dirset(&self, group: PortGroup, mask: u32);

    /// Write the direction-clear register (make inputs).
    fn write_dirclr(&self, group: PortGroup, mask: u32);

    /// Write the configuration register of one pin.
    fn write_pincfg(&self, group: PortGroup, bit: u8, config: PinConfig);

    /// Read the input register.
    fn read_in(&self, group: PortGroup) -> u32;

    /// Read the output latch register.
    fn read_out(&self, group: PortGroup) -> u32;

    /// Read the direction register.
    fn read_dir(&self, group: PortGroup) -> u32;

    /// Read the configuration register of one pin.
    fn read_pincfg(&self, group: PortGroup, bit: u8) -> PinConfig;
}

impl<T: PortRegisters + ?Sized> PortRegisters for &T {
    #[inline(always)]
    fn write_outset(&self, group: PortGroup, mask: u32) {
        (**self).write_outset(group, mask)
    }

    #[inline(always)]
    fn write_outclr(&self, group: PortGroup, mask: u32) {
        (**self).write_outclr(group, mask)
    }

    #[inline(always)]
    fn write_dirset(&self, group: PortGroup, mask: u32) {
        (**self).write_dirset(group, mask)
    }

    #[inline(always)]
    fn write_dirclr(&self, group: PortGroup, mask: u32) {
        (**self).write_dirclr(group, mask)
    }

    #[inline(always)]
    fn write_pincfg(&self, group: PortGroup, bit: u8, config: PinConfig) {
        (**self).write_pincfg(group, bit, config)
    }

    #[inline(always)]
    fn read_in(&self, group: PortGroup) -> u32 {
        (**self).read_in(group)
    }

    #[inline(always)]
    fn read_out(&self, group: PortGroup) -> u32 {
        (**self).read_out(group)
    }

    #[inline(always)]
    fn read_dir(&self, group: PortGroup) -> u32 {
        (**self).read_dir(group)
    }

    #[inline(always)]
    fn read_pincfg(&self, group: PortGroup, bit: u8) -> PinConfig {
        (**self).read_pincfg(group, bit)
    }
}
