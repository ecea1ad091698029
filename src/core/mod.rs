//! Core types and constants for the location acquisition core

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
