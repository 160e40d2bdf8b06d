//! # smarttech-console
//!
//! Console front-end for the smarttech control core.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Build the numbered menu from the registry enumeration
//! - Map transition outcomes to terminal colours
//! - Run the read-eval loop over any `BufRead` / `Write` pair
//!
//! No domain logic belongs here: every state change goes through
//! [`ControlService`](smarttech_app::services::control_service::ControlService).

pub mod config;
pub mod menu;
pub mod render;
pub mod session;
