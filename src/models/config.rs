//! Configuration for the BMI calculator
//!
//! Defaults come from utils/constants.rs.

use crate::utils::constants::{
    HEIGHT_PROMPT, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER, WEIGHT_PROMPT,
};

/// Upper bounds (exclusive) of the first three categories, in kg/m²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThresholds {
    pub underweight_upper: f64,
    pub normal_upper: f64,
    pub overweight_upper: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            underweight_upper: UNDERWEIGHT_UPPER,
            normal_upper: NORMAL_UPPER,
            overweight_upper: OVERWEIGHT_UPPER,
        }
    }
}

/// Settings for one calculator run
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Prompt shown before reading the weight
    pub weight_prompt: String,

    /// Prompt shown before reading the height
    pub height_prompt: String,

    /// Category boundaries
    pub thresholds: CategoryThresholds,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            weight_prompt: WEIGHT_PROMPT.to_string(),
            height_prompt: HEIGHT_PROMPT.to_string(),
            thresholds: CategoryThresholds::default(),
        }
    }
}
