//! Type definitions for the BMI calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// kg/m², unrounded
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "BMI: {:.2} | Category: {} | Weight: {} kg | Height: {} cm",
            self.bmi, self.category, self.weight_kg, self.height_cm
        )
    }
}
