//! Per-variant pin role tables.
//!
//! Each table is a checked literal: uniqueness of pins and roles, agreement
//! with the variant's capabilities, and consistency of pulled inputs with
//! their default level are asserted during constant evaluation, so a bad
//! edit to either table fails the build.

use crate::config::{HardwareVariant, ACTIVE_ERROR_PIN_USAGE};

use super::types::{PinDirection, PinLevel, ResolvedPin};
use super::PinRole;

use PinDirection::{Input, InputPullDown, InputPullUp, Output};
use PinLevel::{High, Low};

// follows the `enable-pin` build mode
const ERROR_PIN_DIRECTION: PinDirection = ACTIVE_ERROR_PIN_USAGE.direction();

/// Pin assignments of the standalone board.
pub const STANDALONE_TABLE: &[ResolvedPin] = &[
    ResolvedPin::new(PinRole::Switch1, 19, InputPullUp, High),
    ResolvedPin::new(PinRole::Switch3, 14, InputPullUp, High),
    ResolvedPin::new(PinRole::Switch4, 15, InputPullUp, High),
    ResolvedPin::new(PinRole::StepInput, 0, InputPullDown, Low),
    ResolvedPin::new(PinRole::DirectionInput, 1, InputPullDown, Low),
    ResolvedPin::new(PinRole::ErrorOrEnable, 10, ERROR_PIN_DIRECTION, Low),
    ResolvedPin::new(PinRole::EncoderChipSelect, 16, Output, Low),
    ResolvedPin::new(PinRole::EncoderPower, 11, Output, Low),
    ResolvedPin::new(PinRole::SpiMosi, 23, Output, Low),
    ResolvedPin::new(PinRole::SpiSck, 24, Output, Low),
    ResolvedPin::new(PinRole::SpiMiso, 22, Input, Low),
    ResolvedPin::new(PinRole::DriverPhase1, 18, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase2, 7, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase3, 5, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase4, 6, Output, Low),
    ResolvedPin::new(PinRole::DriverCurrentRefLow, 9, Output, Low),
    ResolvedPin::new(PinRole::DriverCurrentRefHigh, 4, Output, Low),
    ResolvedPin::new(PinRole::StatusLedPrimary, 13, Output, Low),
    ResolvedPin::new(PinRole::StatusLedSecondary, 8, Output, High),
];

/// Pin assignments of the shield.
pub const SHIELD_TABLE: &[ResolvedPin] = &[
    ResolvedPin::new(PinRole::StepInput, 0, InputPullDown, Low),
    ResolvedPin::new(PinRole::DirectionInput, 1, InputPullDown, Low),
    ResolvedPin::new(PinRole::ErrorOrEnable, 19, ERROR_PIN_DIRECTION, Low),
    ResolvedPin::new(PinRole::EncoderChipSelect, 16, Output, Low),
    ResolvedPin::new(PinRole::SpiMosi, 23, Output, Low),
    ResolvedPin::new(PinRole::SpiSck, 24, Output, Low),
    ResolvedPin::new(PinRole::SpiMiso, 22, Input, Low),
    ResolvedPin::new(PinRole::DriverPhase1, 8, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase2, 7, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase3, 5, Output, Low),
    ResolvedPin::new(PinRole::DriverPhase4, 6, Output, Low),
    ResolvedPin::new(PinRole::DriverCurrentRefLow, 9, Output, Low),
    ResolvedPin::new(PinRole::DriverCurrentRefHigh, 4, Output, Low),
    ResolvedPin::new(PinRole::StatusLedPrimary, 13, Output, Low),
];

const _: () = assert!(table_is_well_formed(STANDALONE_TABLE, HardwareVariant::Standalone));
const _: () = assert!(table_is_well_formed(SHIELD_TABLE, HardwareVariant::Shield));

/// Pin table of `variant`.
#[inline]
pub const fn table(variant: HardwareVariant) -> &'static [ResolvedPin] {
    match variant {
        HardwareVariant::Standalone => STANDALONE_TABLE,
        HardwareVariant::Shield => SHIELD_TABLE,
    }
}

/// Look up `role` on `variant`, `None` if the variant has no such role.
pub const fn lookup(role: PinRole, variant: HardwareVariant) -> Option<ResolvedPin> {
    let entries = table(variant);
    let mut i = 0;
    while i < entries.len() {
        if entries[i].role as u8 == role as u8 {
            return Some(entries[i]);
        }
        i += 1;
    }
    None
}

/// Resolve `role` on `variant`.
///
/// Evaluated in a `const` item, an undefined pair fails the build:
///
/// ```compile_fail
/// use nzs_hal::config::HardwareVariant;
/// use nzs_hal::pins::{resolve, PinRole, ResolvedPin};
///
/// const POWER: ResolvedPin = resolve(PinRole::EncoderPower, HardwareVariant::Shield);
/// ```
///
/// ```
/// use nzs_hal::config::HardwareVariant;
/// use nzs_hal::pins::{resolve, PinRole, ResolvedPin};
///
/// const POWER: ResolvedPin = resolve(PinRole::EncoderPower, HardwareVariant::Standalone);
/// assert_eq!(POWER.pin.index(), 11);
/// ```
///
/// # Panics
///
/// Panics if `role` does not exist on `variant`. Query optional roles with
/// [`lookup`] or guard with [`HardwareVariant::has`].
pub const fn resolve(role: PinRole, variant: HardwareVariant) -> ResolvedPin {
    match lookup(role, variant) {
        Some(pin) => pin,
        None => panic!("pin role is not defined for this hardware variant"),
    }
}

/// Roles defined on `variant`, in table order.
pub fn roles(variant: HardwareVariant) -> impl Iterator<Item = PinRole> {
    table(variant).iter().map(|entry| entry.role)
}

pub(crate) const fn table_is_well_formed(
    entries: &[ResolvedPin],
    variant: HardwareVariant,
) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let entry = entries[i];
        if !variant.has(entry.role) {
            return false;
        }
        if let Some(level) = entry.direction.pull_level() {
            if level as u8 != entry.default_level as u8 {
                return false;
            }
        }
        let mut j = i + 1;
        while j < entries.len() {
            if entries[j].pin.0 == entry.pin.0 || entries[j].role as u8 == entry.role as u8 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }

    // every role the variant has must be listed
    let mut r = 0;
    while r < PinRole::ALL.len() {
        let role = PinRole::ALL[r];
        if variant.has(role) {
            let mut found = false;
            let mut k = 0;
            while k < entries.len() {
                if entries[k].role as u8 == role as u8 {
                    found = true;
                }
                k += 1;
            }
            if !found {
                return false;
            }
        }
        r += 1;
    }
    true
}
