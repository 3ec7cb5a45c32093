//! Unit tests for the per-variant pin tables.

use nzs_hal::config::{HardwareVariant, ACTIVE_ERROR_PIN_USAGE};
use nzs_hal::gpio::describe_checked;
use nzs_hal::pins::{lookup, table, validate_pin_table, PinDirection, PinLevel, PinRole};

/// Both shipped tables pass runtime validation.
#[test]
fn test_shipped_tables_are_valid() {
    for variant in HardwareVariant::ALL {
        assert!(validate_pin_table(variant).is_ok(), "{:?}", variant);
    }
}

/// Every table pin maps onto a port register.
#[test]
fn test_every_pin_has_port_description() {
    for variant in HardwareVariant::ALL {
        for entry in table(variant) {
            assert!(describe_checked(entry.pin).is_some(), "{:?}", entry.role);
        }
    }
}

/// Motor-facing pins are outputs that power up low.
#[test]
fn test_motor_pins_default_low() {
    for variant in HardwareVariant::ALL {
        for entry in table(variant).iter().filter(|entry| entry.role.drives_motor()) {
            assert_eq!(entry.direction, PinDirection::Output, "{:?}", entry.role);
            assert_eq!(entry.default_level, PinLevel::Low, "{:?}", entry.role);
        }
    }
}

/// The shield rewires IN1 and the error pin and keeps the rest.
#[test]
fn test_shield_reuses_standalone_pins() {
    let rewired = [PinRole::DriverPhase1, PinRole::ErrorOrEnable];
    for entry in table(HardwareVariant::Shield) {
        let standalone = lookup(entry.role, HardwareVariant::Standalone)
            .expect("shield roles exist on standalone");
        if rewired.contains(&entry.role) {
            assert_ne!(entry.pin, standalone.pin, "{:?}", entry.role);
        } else {
            assert_eq!(entry.pin, standalone.pin, "{:?}", entry.role);
        }
    }
}

/// Command inputs are pulled down and read low when nothing drives them.
#[test]
fn test_command_inputs_pull_down() {
    for variant in HardwareVariant::ALL {
        for role in [PinRole::StepInput, PinRole::DirectionInput] {
            let pin = lookup(role, variant).unwrap();
            assert_eq!(pin.direction, PinDirection::InputPullDown);
            assert_eq!(pin.default_level, PinLevel::Low);
        }
    }
}

/// The error/enable entry carries the direction of the build-time mode.
#[test]
fn test_error_pin_entry_matches_active_usage() {
    for variant in HardwareVariant::ALL {
        let pin = lookup(PinRole::ErrorOrEnable, variant).unwrap();
        assert_eq!(pin.direction, ACTIVE_ERROR_PIN_USAGE.direction());
    }
}
