//! Host-side port model.
//!
//! Registers are atomics, and each trait write is one atomic operation on one
//! register, matching the set/clear semantics of the hardware. Input levels
//! can be forced from outside to stand in for external drivers.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::pins::{PinId, PinLevel};

use super::descriptor::describe;
use super::port::{PinConfig, PortGroup, PortRegisters};

#[allow(clippy::declare_interior_mutable_const)]
const PINCFG_RESET: AtomicU8 = AtomicU8::new(0);

#[derive(Debug)]
struct GroupRegisters {
    dir: AtomicU32,
    out: AtomicU32,
    pincfg: [AtomicU8; 32],
    external_mask: AtomicU32,
    external_level: AtomicU32,
}

impl GroupRegisters {
    const fn new() -> Self {
        Self {
            dir: AtomicU32::new(0),
            out: AtomicU32::new(0),
            pincfg: [PINCFG_RESET; 32],
            external_mask: AtomicU32::new(0),
            external_level: AtomicU32::new(0),
        }
    }

    fn config_mask(&self, config: PinConfig) -> u32 {
        self.pincfg
            .iter()
            .enumerate()
            .filter(|(_, reg)| PinConfig(reg.load(Ordering::SeqCst)).contains(config))
            .fold(0, |mask, (bit, _)| mask | 1 << bit)
    }
}

/// Simulated port register block, all pins inputs with buffers off at reset.
#[derive(Debug)]
pub struct SimulatedPort {
    groups: [GroupRegisters; PortGroup::COUNT],
}

impl SimulatedPort {
    /// Port in its reset state.
    pub const fn new() -> Self {
        Self {
            groups: [GroupRegisters::new(), GroupRegisters::new()],
        }
    }

    fn group(&self, group: PortGroup) -> &GroupRegisters {
        &self.groups[group.index()]
    }

    /// Force the level an external circuit drives onto `pin`.
    pub fn drive_external(&self, pin: impl Into<PinId>, level: PinLevel) {
        let handle = describe(pin.into());
        let regs = self.group(handle.group);
        match level {
            PinLevel::High => regs.external_level.fetch_or(handle.mask(), Ordering::SeqCst),
            PinLevel::Low => regs
                .external_level
                .fetch_and(!handle.mask(), Ordering::SeqCst),
        };
        regs.external_mask.fetch_or(handle.mask(), Ordering::SeqCst);
    }

    /// Stop driving `pin` externally.
    pub fn release_external(&self, pin: impl Into<PinId>) {
        let handle = describe(pin.into());
        self.group(handle.group)
            .external_mask
            .fetch_and(!handle.mask(), Ordering::SeqCst);
    }
}

impl Default for SimulatedPort {
    fn default() -> Self {
        Self::new()
    }
}

impl PortRegisters for SimulatedPort {
    fn write_outset(&self, group: PortGroup, mask: u32) {
        self.group(group).out.fetch_or(mask, Ordering::SeqCst);
    }

    fn write_outclr(&self, group: PortGroup, mask: u32) {
        self.group(group).out.fetch_and(!mask, Ordering::SeqCst);
    }

    fn write_dirset(&self, group: PortGroup, mask: u32) {
        self.group(group).dir.fetch_or(mask, Ordering::SeqCst);
    }

    fn write_dirclr(&self, group: PortGroup, mask: u32) {
        self.group(group).dir.fetch_and(!mask, Ordering::SeqCst);
    }

    fn write_pincfg(&self, group: PortGroup, bit: u8, config: PinConfig) {
        self.group(group).pincfg[bit as usize].store(config.0, Ordering::SeqCst);
    }

    fn read_in(&self, group: PortGroup) -> u32 {
        let regs = self.group(group);
        let dir = regs.dir.load(Ordering::SeqCst);
        let out = regs.out.load(Ordering::SeqCst);
        let external_mask = regs.external_mask.load(Ordering::SeqCst);
        let external_level = regs.external_level.load(Ordering::SeqCst);

        let driven = dir & out;
        let external = !dir & external_mask & external_level;
        let pulled = !dir & !external_mask & regs.config_mask(PinConfig::PULLEN) & out;

        (driven | external | pulled) & regs.config_mask(PinConfig::INEN)
    }

    fn read_out(&self, group: PortGroup) -> u32 {
        self.group(group).out.load(Ordering::SeqCst)
    }

    fn read_dir(&self, group: PortGroup) -> u32 {
        self.group(group).dir.load(Ordering::SeqCst)
    }

    fn read_pincfg(&self, group: PortGroup, bit: u8) -> PinConfig {
        PinConfig(self.group(group).pincfg[bit as usize].load(Ordering::SeqCst))
    }
}
