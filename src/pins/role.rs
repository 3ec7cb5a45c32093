//! Logical hardware roles.

/// Logical role a physical pin plays on the board.
///
/// Some roles only exist on one variant; see [`HardwareVariant::has`](crate::config::HardwareVariant::has).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinRole {
    /// STEP input from the motion controller.
    StepInput,
    /// DIR input from the motion controller.
    DirectionInput,
    /// Error output or enable input, depending on build mode.
    ErrorOrEnable,
    /// Chip select of the magnetic angle sensor.
    EncoderChipSelect,
    /// Active-low supply gate of the angle sensor (standalone only).
    EncoderPower,
    /// H-bridge input 1.
    DriverPhase1,
    /// H-bridge input 2.
    DriverPhase2,
    /// H-bridge input 3.
    DriverPhase3,
    /// H-bridge input 4.
    DriverPhase4,
    /// Current reference of bridge channel B (phases 3 and 4).
    DriverCurrentRefHigh,
    /// Current reference of bridge channel A (phases 1 and 2).
    DriverCurrentRefLow,
    /// SPI data out.
    SpiMosi,
    /// SPI clock.
    SpiSck,
    /// SPI data in.
    SpiMiso,
    /// User switch 1 (standalone only).
    Switch1,
    /// User switch 3 (standalone only).
    Switch3,
    /// User switch 4 (standalone only).
    Switch4,
    /// Red status LED, active high.
    StatusLedPrimary,
    /// Yellow status LED, active low (standalone only).
    StatusLedSecondary,
}

impl PinRole {
    /// Every role, in declaration order.
    pub const ALL: [PinRole; 19] = [
        PinRole::StepInput,
        PinRole::DirectionInput,
        PinRole::ErrorOrEnable,
        PinRole::EncoderChipSelect,
        PinRole::EncoderPower,
        PinRole::DriverPhase1,
        PinRole::DriverPhase2,
        PinRole::DriverPhase3,
        PinRole::DriverPhase4,
        PinRole::DriverCurrentRefHigh,
        PinRole::DriverCurrentRefLow,
        PinRole::SpiMosi,
        PinRole::SpiSck,
        PinRole::SpiMiso,
        PinRole::Switch1,
        PinRole::Switch3,
        PinRole::Switch4,
        PinRole::StatusLedPrimary,
        PinRole::StatusLedSecondary,
    ];

    /// The four H-bridge inputs, IN1 to IN4.
    pub const DRIVER_PHASES: [PinRole; 4] = [
        PinRole::DriverPhase1,
        PinRole::DriverPhase2,
        PinRole::DriverPhase3,
        PinRole::DriverPhase4,
    ];

    /// Both current reference lines.
    pub const CURRENT_REFS: [PinRole; 2] =
        [PinRole::DriverCurrentRefLow, PinRole::DriverCurrentRefHigh];

    /// User switches.
    pub const SWITCHES: [PinRole; 3] = [PinRole::Switch1, PinRole::Switch3, PinRole::Switch4];

    /// Whether the role can source current into the motor.
    #[inline]
    pub const fn drives_motor(self) -> bool {
        matches!(
            self,
            PinRole::DriverPhase1
                | PinRole::DriverPhase2
                | PinRole::DriverPhase3
                | PinRole::DriverPhase4
                | PinRole::DriverCurrentRefHigh
                | PinRole::DriverCurrentRefLow
        )
    }
}
