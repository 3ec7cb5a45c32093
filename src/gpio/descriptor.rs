//! Pin descriptions of the microcontroller support package.
//!
//! Maps a logical pin index to its port group and bit, following the
//! Arduino Zero variant the board firmware is built against. Trusted as-is.

use crate::pins::PinId;

use super::port::{PortGroup, PortRegisterHandle};

const fn pa(bit: u8) -> PortRegisterHandle {
    PortRegisterHandle {
        group: PortGroup::A,
        bit,
    }
}

const fn pb(bit: u8) -> PortRegisterHandle {
    PortRegisterHandle {
        group: PortGroup::B,
        bit,
    }
}

/// Port location of each logical pin, indexed by pin number.
pub const PIN_DESCRIPTIONS: [PortRegisterHandle; 27] = [
    pa(11), // 0  RX / step input
    pa(10), // 1  TX / dir input
    pa(14), // 2
    pa(9),  // 3
    pa(8),  // 4
    pa(15), // 5
    pa(20), // 6
    pa(21), // 7
    pa(6),  // 8
    pa(7),  // 9
    pa(18), // 10
    pa(16), // 11
    pa(19), // 12
    pa(17), // 13 LED
    pa(2),  // 14 A0
    pb(8),  // 15 A1
    pb(9),  // 16 A2
    pa(4),  // 17 A3
    pa(5),  // 18 A4
    pb(2),  // 19 A5
    pa(22), // 20 SDA
    pa(23), // 21 SCL
    pa(12), // 22 MISO
    pb(10), // 23 MOSI
    pb(11), // 24 SCK
    pb(3),  // 25 RX LED
    pa(27), // 26 TX LED
];

/// Port location of `pin`.
///
/// # Panics
///
/// Panics in every build profile if the support package does not describe
/// `pin`. Table pins are checked against [`PIN_DESCRIPTIONS`] by
/// `validate_pin_table`; use [`describe_checked`] for arbitrary indices.
#[inline(always)]
pub fn describe(pin: PinId) -> PortRegisterHandle {
    match PIN_DESCRIPTIONS.get(pin.index() as usize) {
        Some(handle) => *handle,
        None => panic!("pin index out of range"),
    }
}

/// Port location of `pin`, `None` if the support package does not describe it.
pub fn describe_checked(pin: PinId) -> Option<PortRegisterHandle> {
    PIN_DESCRIPTIONS.get(pin.index() as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions_are_unique() {
        for (i, a) in PIN_DESCRIPTIONS.iter().enumerate() {
            for b in &PIN_DESCRIPTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_spi_pins() {
        assert_eq!(describe(PinId(23)), pb(10));
        assert_eq!(describe(PinId(24)), pb(11));
        assert_eq!(describe(PinId(22)), pa(12));
    }

    #[test]
    #[should_panic(expected = "pin index out of range")]
    fn test_describe_out_of_range_panics() {
        let _ = describe(PinId(27));
    }

    #[test]
    fn test_checked_out_of_range() {
        assert!(describe_checked(PinId(27)).is_none());
        assert_eq!(describe_checked(PinId(13)), Some(pa(17)));
    }
}
