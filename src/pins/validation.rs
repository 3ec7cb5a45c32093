//! Pin table validation with detailed errors.

use crate::config::HardwareVariant;
use crate::error::{Error, Result, TableError};
use crate::gpio::describe_checked;

use super::table::table;
use super::types::ResolvedPin;
use super::PinRole;

/// Validate the pin table of `variant`.
///
/// Checks:
/// - Every role appears at most once and only if the variant has it
/// - Every role the variant has is present
/// - No two roles share a physical pin
/// - Pulled inputs default to their pull level
/// - Every pin has a port description
pub fn validate_pin_table(variant: HardwareVariant) -> Result<()> {
    validate_entries(table(variant), variant)
}

pub(crate) fn validate_entries(entries: &[ResolvedPin], variant: HardwareVariant) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if !variant.has(entry.role) {
            return Err(Error::Table(TableError::UnexpectedRole(entry.role)));
        }

        if let Some(level) = entry.direction.pull_level() {
            if level != entry.default_level {
                return Err(Error::Table(TableError::InconsistentDefault(entry.role)));
            }
        }

        if describe_checked(entry.pin).is_none() {
            return Err(Error::Table(TableError::UnknownPin(entry.pin.index())));
        }

        for other in &entries[i + 1..] {
            if other.role == entry.role {
                return Err(Error::Table(TableError::DuplicateRole(entry.role)));
            }
            if other.pin == entry.pin {
                return Err(Error::Table(TableError::DuplicatePin {
                    pin: entry.pin.index(),
                    first: entry.role,
                    second: other.role,
                }));
            }
        }
    }

    for role in PinRole::ALL {
        if variant.has(role) && !entries.iter().any(|entry| entry.role == role) {
            return Err(Error::Table(TableError::MissingRole(role)));
        }
    }

    Ok(())
}
