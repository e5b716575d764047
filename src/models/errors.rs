//! Centralized Error Handling Module
//!
//! Every failure kind carries a unique error code so log lines can be grepped.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - INPUT_xxx: Interactive input errors
//! - CALC_xxx: Calculation errors
//! - IO_xxx: Output errors

use std::fmt;

use crate::utils::constants::{
    unexpected_error_message, MSG_INPUT_CLOSED, MSG_INVALID_HEIGHT, MSG_NON_NUMERIC,
    MSG_NON_POSITIVE,
};

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// True if the input loop should prompt again after this error
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Input Errors
    // ============================================
    /// Text could not be parsed as a finite number
    NonNumericInput,
    /// Number parsed but was zero or negative
    NonPositiveInput,
    /// Reading or decoding the line failed for another reason
    UnexpectedParseFailure,
    /// Input stream reached EOF
    InputClosed,

    // ============================================
    // Calculation Errors
    // ============================================
    /// Height guard in the BMI formula
    InvalidHeightGuard,

    // ============================================
    // Output Errors
    // ============================================
    /// Writing prompts or results failed
    OutputFailed,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonNumericInput => "INPUT_NON_NUMERIC",
            Self::NonPositiveInput => "INPUT_NON_POSITIVE",
            Self::UnexpectedParseFailure => "INPUT_UNEXPECTED",
            Self::InputClosed => "INPUT_CLOSED",
            Self::InvalidHeightGuard => "CALC_INVALID_HEIGHT",
            Self::OutputFailed => "IO_OUTPUT_FAILED",
        }
    }

    /// Check if the input loop recovers from this error by re-prompting
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NonNumericInput | Self::NonPositiveInput | Self::UnexpectedParseFailure
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Input text is not a number
    pub fn non_numeric(input: &str) -> Self {
        Self::new(
            ErrorCode::NonNumericInput,
            format!("{} (got {:?})", MSG_NON_NUMERIC, input),
        )
    }

    /// Input number is zero or negative
    pub fn non_positive(value: f64) -> Self {
        Self::new(
            ErrorCode::NonPositiveInput,
            format!("{} (got {})", MSG_NON_POSITIVE, value),
        )
    }

    /// Any other read/parse failure
    pub fn unexpected(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        let message = unexpected_error_message(&source.to_string());
        Self::with_source(ErrorCode::UnexpectedParseFailure, message, source)
    }

    /// Stdin closed before a value was read
    pub fn input_closed() -> Self {
        Self::new(ErrorCode::InputClosed, MSG_INPUT_CLOSED)
    }

    /// Height was not positive
    pub fn invalid_height(height_cm: f64) -> Self {
        Self::new(
            ErrorCode::InvalidHeightGuard,
            format!("{} (got {} cm)", MSG_INVALID_HEIGHT, height_cm),
        )
    }

    /// Writing to the output stream failed
    pub fn output_failed(source: std::io::Error) -> Self {
        Self::with_source(ErrorCode::OutputFailed, "Failed to write output", source)
    }

    /// Message shown to the user at the prompt
    ///
    /// Unlike `Display`, this omits the error code and diagnostic suffix.
    pub fn user_message(&self) -> String {
        match self.code {
            ErrorCode::NonNumericInput => MSG_NON_NUMERIC.to_string(),
            ErrorCode::NonPositiveInput => MSG_NON_POSITIVE.to_string(),
            ErrorCode::InvalidHeightGuard => MSG_INVALID_HEIGHT.to_string(),
            ErrorCode::InputClosed => MSG_INPUT_CLOSED.to_string(),
            ErrorCode::UnexpectedParseFailure | ErrorCode::OutputFailed => self.message.clone(),
        }
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::output_failed(err)
    }
}
