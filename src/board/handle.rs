//! Type-state board handle.

use core::marker::PhantomData;

use crate::config::{ErrorPinUsage, HardwareVariant};
use crate::gpio::{BoardPin, Gpio, PortRegisters};
use crate::indicator::StatusIndicators;
use crate::init;
use crate::pins::{resolve, PinRole, ResolvedPin};

use super::state::{BoardState, Ready, Unconfigured};
use super::variant::{HasEncoderPower, HasSecondaryLed, HasSwitches, Variant};

/// Board pins of variant `V` behind port registers `P`.
///
/// Starts `Unconfigured`; [`initialize`](Board::initialize) runs the power-up
/// sequencer exactly once and yields a `Ready` board, the only state that
/// hands out pin handles.
///
/// ```compile_fail
/// use nzs_hal::board::{Board, Shield};
/// use nzs_hal::config::ErrorPinUsage;
/// use nzs_hal::gpio::SimulatedPort;
///
/// let board = Board::<_, Shield, _>::new(SimulatedPort::new(), ErrorPinUsage::Error).initialize();
/// let _ = board.encoder_power();
/// ```
#[derive(Debug)]
pub struct Board<P, V, S = Ready>
where
    P: PortRegisters,
    V: Variant,
    S: BoardState,
{
    gpio: Gpio<P>,
    error_pin: ErrorPinUsage,
    _variant: PhantomData<V>,
    _state: PhantomData<S>,
}

impl<P, V, S> Board<P, V, S>
where
    P: PortRegisters,
    V: Variant,
    S: BoardState,
{
    /// GPIO primitives of the board.
    #[inline]
    pub fn gpio(&self) -> &Gpio<P> {
        &self.gpio
    }

    /// Hardware variant.
    #[inline]
    pub fn variant(&self) -> HardwareVariant {
        V::VARIANT
    }

    /// Error/enable pin wiring.
    #[inline]
    pub fn error_pin_usage(&self) -> ErrorPinUsage {
        self.error_pin
    }

    /// Current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        S::name()
    }

    /// Release the port registers.
    pub fn free(self) -> P {
        self.gpio.free()
    }
}

impl<P, V> Board<P, V, Unconfigured>
where
    P: PortRegisters,
    V: Variant,
{
    /// Take ownership of the port registers.
    pub fn new(port: P, error_pin: ErrorPinUsage) -> Self {
        Self {
            gpio: Gpio::new(port),
            error_pin,
            _variant: PhantomData,
            _state: PhantomData,
        }
    }

    /// Run the power-up sequencer.
    ///
    /// Must happen before the control-loop timer is armed.
    pub fn initialize(self) -> Board<P, V, Ready> {
        init::initialize(&self.gpio, V::VARIANT, self.error_pin);

        Board {
            gpio: self.gpio,
            error_pin: self.error_pin,
            _variant: PhantomData,
            _state: PhantomData,
        }
    }
}

impl<P, V> Board<P, V, Ready>
where
    P: PortRegisters,
    V: Variant,
{
    fn pin(&self, role: PinRole) -> BoardPin<'_, P> {
        BoardPin::new(&self.gpio, resolve(role, V::VARIANT))
    }

    /// Resolved pin of `role`, `None` if this variant lacks it.
    pub fn resolved(&self, role: PinRole) -> Option<ResolvedPin> {
        let pin = crate::pins::lookup(role, V::VARIANT)?;
        match role {
            PinRole::ErrorOrEnable => Some(pin.with_direction(self.error_pin.direction())),
            _ => Some(pin),
        }
    }

    /// STEP input.
    pub fn step_input(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::StepInput)
    }

    /// DIR input.
    pub fn direction_input(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::DirectionInput)
    }

    /// Error output or enable input, per [`error_pin_usage`](Board::error_pin_usage).
    ///
    /// Under [`ErrorPinUsage::Enable`] the pin is an input driven by the
    /// host; use it only through `InputPin`. Writing it changes the pull
    /// direction, not the line.
    pub fn error_or_enable(&self) -> BoardPin<'_, P> {
        let pin = resolve(PinRole::ErrorOrEnable, V::VARIANT)
            .with_direction(self.error_pin.direction());
        BoardPin::new(&self.gpio, pin)
    }

    /// Encoder chip select.
    pub fn encoder_chip_select(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::EncoderChipSelect)
    }

    /// H-bridge inputs IN1 to IN4.
    pub fn driver_phases(&self) -> [BoardPin<'_, P>; 4] {
        PinRole::DRIVER_PHASES.map(|role| self.pin(role))
    }

    /// Current references of bridge channels A and B.
    pub fn current_refs(&self) -> [BoardPin<'_, P>; 2] {
        PinRole::CURRENT_REFS.map(|role| self.pin(role))
    }

    /// SPI MOSI, SCK and MISO.
    pub fn spi(&self) -> [BoardPin<'_, P>; 3] {
        [PinRole::SpiMosi, PinRole::SpiSck, PinRole::SpiMiso].map(|role| self.pin(role))
    }

    /// Primary status LED.
    pub fn primary_led(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::StatusLedPrimary)
    }

    /// Status LED helpers for this variant.
    pub fn indicators(&self) -> StatusIndicators<BoardPin<'_, P>> {
        let secondary = crate::pins::lookup(PinRole::StatusLedSecondary, V::VARIANT)
            .map(|pin| BoardPin::new(&self.gpio, pin));
        StatusIndicators::new(self.primary_led(), secondary)
    }
}

impl<P, V> Board<P, V, Ready>
where
    P: PortRegisters,
    V: HasEncoderPower,
{
    /// Active-low encoder supply gate.
    pub fn encoder_power(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::EncoderPower)
    }
}

impl<P, V> Board<P, V, Ready>
where
    P: PortRegisters,
    V: HasSwitches,
{
    /// User switches 1, 3 and 4.
    pub fn switches(&self) -> [BoardPin<'_, P>; 3] {
        PinRole::SWITCHES.map(|role| self.pin(role))
    }
}

impl<P, V> Board<P, V, Ready>
where
    P: PortRegisters,
    V: HasSecondaryLed,
{
    /// Secondary status LED.
    pub fn secondary_led(&self) -> BoardPin<'_, P> {
        self.pin(PinRole::StatusLedSecondary)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::board::{Shield, Standalone};
    use crate::gpio::SimulatedPort;
    use crate::pins::{PinDirection, PinLevel};
    use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};

    #[test]
    fn test_initialize_transitions_state() {
        let board = Board::<_, Standalone, _>::new(SimulatedPort::new(), ErrorPinUsage::Error);
        assert_eq!(board.state_name(), "Unconfigured");

        let board = board.initialize();
        assert_eq!(board.state_name(), "Ready");
        assert_eq!(board.variant(), HardwareVariant::Standalone);
    }

    #[test]
    fn test_standalone_typed_accessors() {
        let board = Board::<_, Standalone, _>::new(SimulatedPort::new(), ErrorPinUsage::Error)
            .initialize();

        let mut power = board.encoder_power();
        assert!(power.is_set_high().unwrap());

        let mut secondary = board.secondary_led();
        assert!(secondary.is_set_high().unwrap());

        for mut switch in board.switches() {
            assert!(switch.is_high().unwrap());
        }
    }

    #[test]
    fn test_driver_phases_in_order() {
        let board =
            Board::<_, Shield, _>::new(SimulatedPort::new(), ErrorPinUsage::Error).initialize();

        let roles = board.driver_phases().map(|pin| pin.role());
        assert_eq!(roles, PinRole::DRIVER_PHASES);

        for mut phase in board.driver_phases() {
            assert!(phase.is_set_low().unwrap());
            phase.set_high().unwrap();
        }
        // motor-driver collaborator drove every phase
        for phase in PinRole::DRIVER_PHASES {
            let pin = resolve(phase, HardwareVariant::Shield);
            assert_eq!(board.gpio().output_level(pin), PinLevel::High);
            assert_eq!(board.gpio().direction(pin), PinDirection::Output);
        }
    }

    #[test]
    fn test_error_or_enable_reports_configured_usage() {
        let board =
            Board::<_, Shield, _>::new(SimulatedPort::new(), ErrorPinUsage::Enable).initialize();
        let pin = board.error_or_enable().resolved();
        assert_eq!(pin.direction, PinDirection::InputPullDown);
        assert_eq!(board.resolved(PinRole::ErrorOrEnable), Some(pin));
        assert_eq!(board.gpio().direction(pin), pin.direction);

        let board =
            Board::<_, Standalone, _>::new(SimulatedPort::new(), ErrorPinUsage::Error).initialize();
        let pin = board.error_or_enable().resolved();
        assert_eq!(pin.direction, PinDirection::Output);
        assert_eq!(board.gpio().direction(pin), pin.direction);
    }

    #[test]
    fn test_shield_indicators_have_no_secondary() {
        let board =
            Board::<_, Shield, _>::new(SimulatedPort::new(), ErrorPinUsage::Error).initialize();
        let mut leds = board.indicators();
        assert!(!leds.has_secondary());
        assert!(leds.set_secondary_indicator(true).is_ok());
        assert!(board.resolved(PinRole::StatusLedSecondary).is_none());
    }
}
