//! Core Module - BMI formula and classification

pub mod calculator;
pub mod categorizer;

pub use calculator::*;
pub use categorizer::*;
