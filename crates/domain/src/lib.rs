//! # smarttech-domain
//!
//! Pure domain model for the smarttech industrial control system.
//!
//! ## Responsibilities
//! - Define **Devices** (named units with a binary power state)
//! - Define **Device kinds** (the fixed catalogue of industrial equipment) and
//!   the key → kind factory
//! - Define **Outcomes** (what a power transition actually did)
//! - Contain all invariant enforcement: the powered flag only moves through
//!   [`Device::power_on`](device::Device::power_on) and
//!   [`Device::power_off`](device::Device::power_off)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the console front-end.

pub mod device;
pub mod error;
