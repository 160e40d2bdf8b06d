//! Common error types used across the workspace.
//!
//! Each failure is a typed struct or enum; [`SmartTechError`] aggregates them
//! with `#[from]` conversions so callers can use `?` throughout.

use crate::device::DeviceKind;

/// Top-level error for every fallible smarttech operation.
#[derive(Debug, thiserror::Error)]
pub enum SmartTechError {
    /// A device key could not be mapped to a [`DeviceKind`].
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] UnknownDeviceKind),

    /// A domain invariant was violated while assembling the registry.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A command addressed a device that is not registered.
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// The device factory was given a key it does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind: {key:?}")]
pub struct UnknownDeviceKind {
    pub key: String,
}

/// Registry construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device registry must contain at least one device")]
    EmptyRegistry,

    #[error("device {0} is registered more than once")]
    DuplicateDevice(DeviceKind),
}

/// Lookup of a device kind absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device {device} is not registered")]
pub struct NotFoundError {
    pub device: DeviceKind,
}
