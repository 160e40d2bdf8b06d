//! # smarttech-app
//!
//! Application layer — the device registry and the control use-cases.
//!
//! ## Responsibilities
//! - Own the fixed, ordered device list ([`registry::DeviceRegistry`])
//! - Route power commands to the addressed device and hand back its
//!   [`DeviceResult`](smarttech_domain::device::DeviceResult)
//! - Aggregate system-wide status and provide a bulk shutdown
//!   ([`services::control_service::ControlService`])
//!
//! ## Dependency rule
//! Depends on `smarttech-domain` only (plus `tracing`).
//! Front-ends depend on *this* crate, not the reverse.

pub mod registry;
pub mod services;
