//! Board type-state markers.
//!
//! Uses Rust's type system so pin handles only exist after power-up init.

/// Pins are in their reset state; the sequencer has not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

/// The sequencer has run; pins are in their safe state.
#[derive(Debug, Clone, Copy)]
pub struct Ready;

/// Trait for board states.
pub trait BoardState: private::Sealed + StateName {}

impl BoardState for Unconfigured {}
impl BoardState for Ready {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Unconfigured {}
    impl Sealed for super::Ready {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Unconfigured {
    fn name() -> &'static str {
        "Unconfigured"
    }
}

impl StateName for Ready {
    fn name() -> &'static str {
        "Ready"
    }
}
