//! Utils Module - Shared constants and process setup

pub mod constants;
pub mod logging;

pub use constants::*;
pub use logging::*;
