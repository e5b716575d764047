//! BMI category classification
//!
//! Thresholds are 18.5 / 24.9 / 29.9 kg/m², each the inclusive lower bound of the
//! next category. These are not the WHO 25.0 / 30.0 cut-offs.

use crate::models::config::CategoryThresholds;
use crate::models::types::BmiCategory;

impl CategoryThresholds {
    /// Map a BMI value onto a category
    pub fn classify(&self, bmi: f64) -> BmiCategory {
        if bmi < self.underweight_upper {
            BmiCategory::Underweight
        } else if bmi < self.normal_upper {
            BmiCategory::NormalWeight
        } else if bmi < self.overweight_upper {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

/// Classify with the default thresholds
pub fn categorize(bmi: f64) -> BmiCategory {
    CategoryThresholds::default().classify(bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(categorize(18.49), BmiCategory::Underweight);
        assert_eq!(categorize(18.5), BmiCategory::NormalWeight);
        assert_eq!(categorize(24.89), BmiCategory::NormalWeight);
        assert_eq!(categorize(24.9), BmiCategory::Overweight);
        assert_eq!(categorize(29.89), BmiCategory::Overweight);
        assert_eq!(categorize(29.9), BmiCategory::Obesity);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(categorize(0.1), BmiCategory::Underweight);
        assert_eq!(categorize(25.0), BmiCategory::Overweight);
        assert_eq!(categorize(80.0), BmiCategory::Obesity);
        assert_eq!(categorize(f64::INFINITY), BmiCategory::Obesity);
    }

    #[test]
    fn test_custom_thresholds() {
        let who = CategoryThresholds {
            underweight_upper: 18.5,
            normal_upper: 25.0,
            overweight_upper: 30.0,
        };
        assert_eq!(who.classify(24.95), BmiCategory::NormalWeight);
        assert_eq!(categorize(24.95), BmiCategory::Overweight);
    }
}
