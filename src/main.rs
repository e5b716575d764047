//! BMI Calculator
//!
//! Prompts for weight (kg) and height (cm), then prints BMI and category.
//!
//! Environment:
//!   RUST_LOG - Log level (default: warn). Logs go to stderr.

use bmi_calculator::utils::constants::{APP_NAME, APP_VERSION};
use bmi_calculator::{init_logging, run, CalculatorConfig, ErrorCode};

use eyre::Result;
use tracing::debug;

fn main() -> Result<()> {
    init_logging();
    debug!("{} v{} starting", APP_NAME, APP_VERSION);

    let config = CalculatorConfig::default();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match run(stdin.lock(), stdout.lock(), &config) {
        Ok(_) => Ok(()),
        Err(e) if e.code == ErrorCode::InputClosed => {
            debug!(code = e.code_str(), "input closed");
            println!();
            println!("{}", e.user_message());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
