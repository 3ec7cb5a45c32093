//! Power-up initialization for nzs-hal.

mod sequencer;

pub use sequencer::initialize;
