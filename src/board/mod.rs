//! Board module for nzs-hal.
//!
//! Ties the pin table, GPIO primitives, sequencer and indicators together in
//! a type-state handle parameterised by the hardware variant.

mod builder;
mod handle;
pub mod state;
mod variant;

pub use builder::BoardBuilder;
pub use handle::Board;
pub use state::{BoardState, Ready, StateName, Unconfigured};
pub use variant::{ActiveVariant, HasEncoderPower, HasSecondaryLed, HasSwitches, Shield, Standalone, Variant};
