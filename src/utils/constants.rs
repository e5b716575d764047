//! Constants Module - Single Source of Truth
//!
//! Every threshold, prompt and user-facing message lives here.
//! Other modules refer to these names instead of repeating literals.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "bmi_calculator";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================
// UNIT CONVERSION
// ============================================

/// Centimeters in one meter
pub const CM_PER_METER: f64 = 100.0;

// ============================================
// CATEGORY THRESHOLDS (kg/m²)
// ============================================

/// Below this value: Underweight
pub const UNDERWEIGHT_UPPER: f64 = 18.5;

/// Below this value (and at least UNDERWEIGHT_UPPER): Normal weight
pub const NORMAL_UPPER: f64 = 24.9;

/// Below this value (and at least NORMAL_UPPER): Overweight. At or above: Obesity
pub const OVERWEIGHT_UPPER: f64 = 29.9;

// ============================================
// PROMPTS
// ============================================

pub const WEIGHT_PROMPT: &str = "Enter your weight in kilograms: ";
pub const HEIGHT_PROMPT: &str = "Enter your height in centimeters: ";

// ============================================
// USER-FACING MESSAGES
// ============================================

pub const WELCOME_BANNER: &str = "Welcome to the Command-Line BMI Calculator!";
pub const BANNER_RULE: &str = "------------------------------------------";

pub const RESULT_HEADER: &str = "--- BMI Result ---";
pub const RESULT_RULE: &str = "--------------------";

pub const MSG_NON_NUMERIC: &str =
    "Invalid input. Please enter a numeric value (e.g., 70.5 or 175).";
pub const MSG_NON_POSITIVE: &str = "Input must be a positive number. Please try again.";
pub const MSG_INVALID_HEIGHT: &str = "Error: Height must be greater than zero.";
pub const MSG_INPUT_CLOSED: &str = "No more input; exiting.";

/// Message for failures that are neither non-numeric nor non-positive input
pub fn unexpected_error_message(detail: &str) -> String {
    format!("An unexpected error occurred: {}. Please try again.", detail)
}
