//! Atomic GPIO primitives for nzs-hal.
//!
//! [`Gpio`] performs single-register set/clear writes through the
//! [`PortRegisters`] seam. Backends: [`Samd21Port`] (feature `samd21`) for
//! the real PORT peripheral, [`SimulatedPort`] (feature `std`) for the host.

mod descriptor;
mod pin;
mod port;
mod primitives;
#[cfg(feature = "samd21")]
mod samd21;
#[cfg(feature = "std")]
mod sim;

pub use descriptor::{describe, describe_checked, PIN_DESCRIPTIONS};
pub use pin::BoardPin;
pub use port::{PinConfig, PortGroup, PortRegisterHandle, PortRegisters};
pub use primitives::Gpio;
#[cfg(feature = "samd21")]
pub use samd21::Samd21Port;
#[cfg(feature = "std")]
pub use sim::SimulatedPort;
