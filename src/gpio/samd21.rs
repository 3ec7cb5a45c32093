//! Memory-mapped SAMD21 PORT registers.

#![allow(unsafe_code)]

use core::ptr::{read_volatile, write_volatile};

use super::port::{PinConfig, PortGroup, PortRegisters};

const PORT_BASE: usize = 0x4100_4400;
const GROUP_STRIDE: usize = 0x80;

const DIR: usize = 0x00;
const DIRCLR: usize = 0x04;
const DIRSET: usize = 0x08;
const OUT: usize = 0x10;
const OUTCLR: usize = 0x14;
const OUTSET: usize = 0x18;
const IN: usize = 0x20;
const PINCFG: usize = 0x40;

#[inline(always)]
const fn register(group: PortGroup, offset: usize) -> usize {
    PORT_BASE + group.index() * GROUP_STRIDE + offset
}

/// The SAMD21 PORT peripheral.
///
/// Zero-sized; every method is a single volatile access.
#[derive(Debug)]
pub struct Samd21Port {
    _private: (),
}

impl Samd21Port {
    /// Take the PORT peripheral.
    ///
    /// # Safety
    ///
    /// Must run on a SAMD21, and only one instance may drive pin
    /// directions. Level writes through other handles stay sound since they
    /// only touch set/clear registers.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }

    #[inline(always)]
    fn write32(&self, group: PortGroup, offset: usize, value: u32) {
        // SAFETY: address lies inside the PORT register block of a SAMD21
        unsafe { write_volatile(register(group, offset) as *mut u32, value) }
    }

    #[inline(always)]
    fn read32(&self, group: PortGroup, offset: usize) -> u32 {
        // SAFETY: address lies inside the PORT register block of a SAMD21
        unsafe { read_volatile(register(group, offset) as *const u32) }
    }
}

impl PortRegisters for Samd21Port {
    #[inline(always)]
    fn write_outset(&self, group: PortGroup, mask: u32) {
        self.write32(group, OUTSET, mask);
    }

    #[inline(always)]
    fn write_outclr(&self, group: PortGroup, mask: u32) {
        self.write32(group, OUTCLR, mask);
    }

    #[inline(always)]
    fn write_dirset(&self, group: PortGroup, mask: u32) {
        self.write32(group, DIRSET, mask);
    }

    #[inline(always)]
    fn write_dirclr(&self, group: PortGroup, mask: u32) {
        self.write32(group, DIRCLR, mask);
    }

    #[inline(always)]
    fn write_pincfg(&self, group: PortGroup, bit: u8, config: PinConfig) {
        let address = register(group, PINCFG) + bit as usize;
        // SAFETY: PINCFG is one byte per pin, bit < 32
        unsafe { write_volatile(address as *mut u8, config.0) }
    }

    #[inline(always)]
    fn read_in(&self, group: PortGroup) -> u32 {
        self.read32(group, IN)
    }

    #[inline(always)]
    fn read_out(&self, group: PortGroup) -> u32 {
        self.read32(group, OUT)
    }

    #[inline(always)]
    fn read_dir(&self, group: PortGroup) -> u32 {
        self.read32(group, DIR)
    }

    #[inline(always)]
    fn read_pincfg(&self, group: PortGroup, bit: u8) -> PinConfig {
        let address = register(group, PINCFG) + bit as usize;
        // SAFETY: PINCFG is one byte per pin, bit < 32
        PinConfig(unsafe { read_volatile(address as *const u8) })
    }
}
