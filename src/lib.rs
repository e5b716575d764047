//! BMI Calculator Library
//!
//! Computes Body Mass Index from weight (kg) and height (cm), classifies it as
//! Underweight, Normal weight, Overweight or Obesity, and drives the interactive
//! prompt/result dialogue used by the `bmi_calculator` binary.

pub mod app;
pub mod core;
pub mod io;
pub mod models;
pub mod utils;

pub use app::run;
pub use crate::core::{calculate_bmi, categorize, try_calculate_bmi};
pub use io::{parse_positive, InputReader};
pub use models::{
    AppError, AppResult, BmiCategory, BmiReport, CalculatorConfig, CategoryThresholds, ErrorCode,
};
pub use utils::init_logging;
