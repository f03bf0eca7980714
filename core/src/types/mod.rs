//! Shared data types — windows, settings, and command responses.

pub mod config;
pub mod response;
pub mod window;
