//! Internal modules for the card room console.
//!
//! This library provides command parsing, configuration and the session
//! loop used by the cr_console binary.

pub mod commands;
pub mod config;
pub mod session;
