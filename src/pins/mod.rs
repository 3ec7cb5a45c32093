//! Pin role table for nzs-hal.
//!
//! Binds every logical [`PinRole`] to a physical pin and a default electrical
//! configuration, separately for each [`HardwareVariant`](crate::config::HardwareVariant).
//! Roles a variant lacks are simply absent from its table.

mod role;
mod table;
mod types;
mod validation;

pub use role::PinRole;
pub use table::{lookup, resolve, roles, table, SHIELD_TABLE, STANDALONE_TABLE};
pub use types::{PinDirection, PinId, PinLevel, ResolvedPin};
pub use validation::validate_pin_table;
