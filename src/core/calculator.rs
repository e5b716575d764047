//! BMI formula
//!
//! `bmi = weight_kg / (height_cm / 100)^2`

use tracing::error;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::CM_PER_METER;

/// Compute BMI, rejecting non-positive heights
pub fn try_calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if height_cm <= 0.0 {
        return Err(AppError::invalid_height(height_cm));
    }

    let height_m = height_cm / CM_PER_METER;
    Ok(weight_kg / height_m.powi(2))
}

/// Compute BMI, returning `0.0` when the height guard trips
///
/// Callers that validated their input never see the sentinel. The guard error is
/// logged rather than returned so the result can still flow through a plain `f64`.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    match try_calculate_bmi(weight_kg, height_cm) {
        Ok(bmi) => bmi,
        Err(e) => {
            error!(code = e.code_str(), "{}", e.user_message());
            0.0
        }
    }
}
