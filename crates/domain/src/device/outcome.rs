//! Transition outcomes and the result handed back to callers.

use serde::{Deserialize, Serialize};

use super::DeviceKind;

/// What a power transition actually did.
///
/// Callers pick their own rendering (colour, icon, locale) from this value
/// instead of parsing [`DeviceResult::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Off → On.
    Activated,
    /// On → On, nothing changed.
    AlreadyActive,
    /// On → Off.
    Deactivated,
    /// Off → Off, nothing changed.
    AlreadyInactive,
}

impl Outcome {
    /// Whether the transition mutated the device.
    #[must_use]
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Activated | Self::Deactivated)
    }
}

/// Message plus semantic outcome of a power command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResult {
    pub device: DeviceKind,
    pub message: String,
    pub outcome: Outcome,
}

impl DeviceResult {
    pub(crate) fn new(device: DeviceKind, outcome: Outcome) -> Self {
        let name = device.display_name();
        let message = match outcome {
            Outcome::Activated => format!("{name} turned on."),
            Outcome::AlreadyActive => format!("{name} was already on."),
            Outcome::Deactivated => format!("{name} turned off."),
            Outcome::AlreadyInactive => format!("{name} was already off."),
        };
        Self {
            device,
            message,
            outcome,
        }
    }
}
