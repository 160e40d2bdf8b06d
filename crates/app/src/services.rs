//! Application services — use-case implementations.
//!
//! Services own their state (the registry) and are driven by a single caller
//! at a time; every command runs to completion before the next is issued.

pub mod control_service;
