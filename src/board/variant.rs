//! Type-level hardware variants.
//!
//! Optional roles are reachable only through capability traits, so asking a
//! shield for its encoder power pin does not compile.

use crate::config::HardwareVariant;

/// Standalone driver board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standalone;

/// Shield on a generic carrier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shield;

/// Trait for variant markers.
pub trait Variant: private::Sealed {
    /// Runtime value of the variant.
    const VARIANT: HardwareVariant;
}

/// Variant has a switched encoder supply.
pub trait HasEncoderPower: Variant {}

/// Variant has user switches.
pub trait HasSwitches: Variant {}

/// Variant has a secondary status LED.
pub trait HasSecondaryLed: Variant {}

impl Variant for Standalone {
    const VARIANT: HardwareVariant = HardwareVariant::Standalone;
}

impl Variant for Shield {
    const VARIANT: HardwareVariant = HardwareVariant::Shield;
}

impl HasEncoderPower for Standalone {}
impl HasSwitches for Standalone {}
impl HasSecondaryLed for Standalone {}

/// Variant marker selected by the `shield` cargo feature.
#[cfg(feature = "shield")]
pub type ActiveVariant = Shield;

/// Variant marker selected by the `shield` cargo feature.
#[cfg(not(feature = "shield"))]
pub type ActiveVariant = Standalone;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Standalone {}
    impl Sealed for super::Shield {}
}

// capability traits must agree with the runtime capability queries
const _: () = assert!(<Standalone as Variant>::VARIANT.has_encoder_power());
const _: () = assert!(<Standalone as Variant>::VARIANT.has_switches());
const _: () = assert!(<Standalone as Variant>::VARIANT.has_secondary_led());
const _: () = assert!(!<Shield as Variant>::VARIANT.has_encoder_power());
const _: () = assert!(!<Shield as Variant>::VARIANT.has_switches());
const _: () = assert!(!<Shield as Variant>::VARIANT.has_secondary_led());
const _: () = assert!(matches!(
    <ActiveVariant as Variant>::VARIANT,
    crate::config::ACTIVE_VARIANT
));
