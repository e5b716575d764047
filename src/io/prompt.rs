//! Interactive input: prompt until a positive number is entered
//!
//! Generic over `BufRead`/`Write` so the binary uses locked stdin/stdout and
//! tests use in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::models::errors::{AppError, AppResult};

/// Parse trimmed text as a finite number strictly greater than zero
///
/// `NaN` is a number but not a positive one; infinities are not accepted at all.
pub fn parse_positive(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::non_numeric(trimmed))?;

    if value.is_infinite() {
        return Err(AppError::non_numeric(trimmed));
    }
    if value.is_nan() || value <= 0.0 {
        return Err(AppError::non_positive(value));
    }
    Ok(value)
}

/// Line-oriented prompt reader
pub struct InputReader<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Prompt repeatedly until a positive number is entered
    ///
    /// Retryable errors are printed to the output and the prompt is shown again,
    /// with no attempt limit. Returns `InputClosed` on EOF and `OutputFailed` if
    /// the prompt cannot be written.
    pub fn read_positive(&mut self, prompt: &str) -> AppResult<f64> {
        loop {
            match self.read_attempt(prompt) {
                Ok(value) => {
                    debug!(value, "accepted input");
                    return Ok(value);
                }
                Err(e) if e.is_retryable() => {
                    debug!(code = e.code_str(), "rejected input: {}", e);
                    writeln!(self.output, "{}", e.user_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_attempt(&mut self, prompt: &str) -> AppResult<f64> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => Err(AppError::input_closed()),
            Ok(_) => parse_positive(&self.line),
            Err(e) => Err(AppError::unexpected(e)),
        }
    }

    /// Access the output stream (for the orchestrator's own messages)
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the reader, returning the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::io::Cursor;

    fn reader(input: &[u8]) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("70.5").unwrap(), 70.5);
        assert_eq!(parse_positive("  175 \n").unwrap(), 175.0);
        assert_eq!(parse_positive("1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_positive("abc").unwrap_err().code, ErrorCode::NonNumericInput);
        assert_eq!(parse_positive("").unwrap_err().code, ErrorCode::NonNumericInput);
        assert_eq!(parse_positive("inf").unwrap_err().code, ErrorCode::NonNumericInput);
        assert_eq!(parse_positive("-inf").unwrap_err().code, ErrorCode::NonNumericInput);
        assert_eq!(parse_positive("-5").unwrap_err().code, ErrorCode::NonPositiveInput);
        assert_eq!(parse_positive("0").unwrap_err().code, ErrorCode::NonPositiveInput);
        assert_eq!(parse_positive("-0.0").unwrap_err().code, ErrorCode::NonPositiveInput);
    }

    #[test]
    fn test_nan_is_not_positive() {
        let err = parse_positive("NaN").unwrap_err();
        assert_eq!(err.code, ErrorCode::NonPositiveInput);
        assert_eq!(
            err.user_message(),
            "Input must be a positive number. Please try again."
        );

        let mut r = reader(b"nan\n12\n");
        assert_eq!(r.read_positive("> ").unwrap(), 12.0);
        let (_, out) = r.into_inner();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Input must be a positive number. Please try again."));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut r = reader(b"abc\n-5\n0\n70.5\n");
        let value = r.read_positive("Weight: ").unwrap();
        assert_eq!(value, 70.5);

        let (_, out) = r.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Weight: ").count(), 4);
        assert_eq!(
            out.matches("Invalid input. Please enter a numeric value (e.g., 70.5 or 175).")
                .count(),
            1
        );
        assert_eq!(
            out.matches("Input must be a positive number. Please try again.")
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_utf8_is_unexpected_and_retried() {
        let mut r = reader(b"\xff\xfe\n82\n");
        assert_eq!(r.read_positive("> ").unwrap(), 82.0);

        let (_, out) = r.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("An unexpected error occurred:"));
        assert!(out.contains("Please try again."));
    }

    #[test]
    fn test_eof_returns_input_closed() {
        let mut r = reader(b"abc\n");
        let err = r.read_positive("> ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputClosed);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut r = reader(b"64");
        assert_eq!(r.read_positive("> ").unwrap(), 64.0);
    }
}
