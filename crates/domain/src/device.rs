//! Device — a named piece of industrial equipment with a binary power state.
//!
//! Every [`Device`] starts [`PowerState::Off`]. The powered flag is private and
//! only moves through [`Device::power_on`] and [`Device::power_off`], which are
//! idempotent: a redundant call leaves the state untouched and reports an
//! `Already*` [`Outcome`] instead of failing.

mod kind;
mod outcome;
mod state;

pub use kind::DeviceKind;
pub use outcome::{DeviceResult, Outcome};
pub use state::PowerState;

use crate::error::SmartTechError;

/// A controllable unit identified by its [`DeviceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    kind: DeviceKind,
    state: PowerState,
}

impl Device {
    /// Create a device of the given kind, powered off.
    #[must_use]
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            kind,
            state: PowerState::Off,
        }
    }

    /// Build a device from a factory key such as `"oven"` or `"prensa"`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::InvalidArgument`] when `key` does not name a
    /// known device kind.
    pub fn from_key(key: &str) -> Result<Self, SmartTechError> {
        Ok(Self::new(DeviceKind::from_key(key)?))
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Display name, fixed at construction.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    #[must_use]
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.state.is_on()
    }

    /// Switch the device on.
    ///
    /// Returns [`Outcome::Activated`] when the device was off, or
    /// [`Outcome::AlreadyActive`] (without mutating) when it was already on.
    pub fn power_on(&mut self) -> DeviceResult {
        let outcome = match self.state {
            PowerState::Off => {
                self.state = PowerState::On;
                Outcome::Activated
            }
            PowerState::On => Outcome::AlreadyActive,
        };
        DeviceResult::new(self.kind, outcome)
    }

    /// Switch the device off. Symmetric to [`power_on`](Self::power_on).
    pub fn power_off(&mut self) -> DeviceResult {
        let outcome = match self.state {
            PowerState::On => {
                self.state = PowerState::Off;
                Outcome::Deactivated
            }
            PowerState::Off => Outcome::AlreadyInactive,
        };
        DeviceResult::new(self.kind, outcome)
    }

    /// Status line, e.g. `Industrial Oven: ON`.
    #[must_use]
    pub fn status(&self) -> String {
        format!("{}: {}", self.name(), self.state)
    }
}
