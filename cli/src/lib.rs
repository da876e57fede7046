//! FitDash command-line library
//!
//! Exposes the CLI modules so integration tests can drive commands without
//! spawning the binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod state;
