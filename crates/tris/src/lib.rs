//! Tris - two-player tic-tac-toe front ends.
//!
//! The rules live in `tris_core`; this crate adds configuration, logging,
//! status text and two ways to play:
//!
//! - **Terminal UI**: full-screen board driven by arrow keys or digits
//! - **Console**: one command per line over any reader/writer pair

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod status;
pub mod tui;

pub use config::{ConfigError, TrisConfig};
