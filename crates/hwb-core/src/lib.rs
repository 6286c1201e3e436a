//! Core domain + application logic for the homework status bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the
//! homework-review API live behind ports (traits) implemented in adapter
//! crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod poller;
pub mod ports;
pub mod response;
pub mod status;

pub use errors::{Error, Result};
