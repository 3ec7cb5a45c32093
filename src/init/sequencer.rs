//! Safe power-up sequencer.

use crate::config::{ErrorPinUsage, HardwareVariant};
use crate::gpio::{Gpio, PortRegisters};
use crate::pins::{lookup, resolve, PinDirection, PinLevel, PinRole};

/// Bring every board pin to its inert power-up state.
///
/// Runs once, before the control-loop timer is armed and before any other
/// code touches board pins. The steps run in a fixed order; every pin that
/// can source current into the motor is driven low before it becomes an
/// output. The result depends only on `variant` and `error_pin`, so a second
/// call leaves the pins exactly as the first one did.
pub fn initialize<P: PortRegisters>(
    gpio: &Gpio<P>,
    variant: HardwareVariant,
    error_pin: ErrorPinUsage,
) {
    #[cfg(feature = "defmt")]
    defmt::info!("board init: {} variant", variant.name());

    configure_switches(gpio, variant);
    configure_command_inputs(gpio, variant);
    configure_error_pin(gpio, variant, error_pin);
    configure_encoder(gpio, variant);
    configure_spi(gpio, variant);
    configure_driver_phases(gpio, variant);
    configure_current_refs(gpio, variant);
    configure_leds(gpio, variant);

    #[cfg(feature = "defmt")]
    defmt::info!("board init: done");
}

fn configure_switches<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    if !variant.has_switches() {
        return;
    }
    for role in PinRole::SWITCHES {
        gpio.configure_direction(resolve(role, variant), PinDirection::InputPullUp);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: switches pulled up");
}

// idle low so nothing steps without an active driver
fn configure_command_inputs<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    for role in [PinRole::StepInput, PinRole::DirectionInput] {
        gpio.configure_direction(resolve(role, variant), PinDirection::InputPullDown);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: step/dir pulled down");
}

fn configure_error_pin<P: PortRegisters>(
    gpio: &Gpio<P>,
    variant: HardwareVariant,
    usage: ErrorPinUsage,
) {
    let pin = resolve(PinRole::ErrorOrEnable, variant);
    match usage.direction() {
        PinDirection::Output => drive_then_output(gpio, pin.role, variant, pin.default_level),
        direction => gpio.configure_direction(pin, direction),
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: error pin as {}", usage);
}

fn configure_encoder<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    let cs = resolve(PinRole::EncoderChipSelect, variant);
    gpio.configure_direction(cs, PinDirection::Output);
    gpio.set_low(cs);

    // supply is active low: high keeps the encoder off
    if variant.has_encoder_power() {
        drive_then_output(gpio, PinRole::EncoderPower, variant, PinLevel::High);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: encoder deselected");
}

fn configure_spi<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    for role in [PinRole::SpiMosi, PinRole::SpiSck] {
        let pin = resolve(role, variant);
        gpio.configure_direction(pin, PinDirection::Output);
        gpio.set_low(pin);
    }
    gpio.configure_direction(resolve(PinRole::SpiMiso, variant), PinDirection::Input);

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: spi idle");
}

fn configure_driver_phases<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    // IN3, IN4, IN2, IN1: each driven low before it becomes an output
    for role in [
        PinRole::DriverPhase3,
        PinRole::DriverPhase4,
        PinRole::DriverPhase2,
        PinRole::DriverPhase1,
    ] {
        drive_then_output(gpio, role, variant, PinLevel::Low);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: bridge inputs low");
}

fn configure_current_refs<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    let low = resolve(PinRole::DriverCurrentRefLow, variant);
    let high = resolve(PinRole::DriverCurrentRefHigh, variant);

    gpio.set_low(low);
    gpio.set_low(high);
    gpio.configure_direction(high, PinDirection::Output);
    gpio.configure_direction(low, PinDirection::Output);

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: current references at minimum");
}

fn configure_leds<P: PortRegisters>(gpio: &Gpio<P>, variant: HardwareVariant) {
    drive_then_output(gpio, PinRole::StatusLedPrimary, variant, PinLevel::Low);

    // driven directly: high is off for the active-low secondary LED
    if let Some(secondary) = lookup(PinRole::StatusLedSecondary, variant) {
        gpio.configure_direction(secondary, PinDirection::Output);
        gpio.set_high(secondary);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("board init: status leds off");
}

fn drive_then_output<P: PortRegisters>(
    gpio: &Gpio<P>,
    role: PinRole,
    variant: HardwareVariant,
    level: PinLevel,
) {
    let pin = resolve(role, variant);
    gpio.write(pin, level);
    gpio.configure_direction(pin, PinDirection::Output);
}
