//! One pass of the calculator: banner, two prompts, result block

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::core::calculator::calculate_bmi;
use crate::io::prompt::InputReader;
use crate::models::config::CalculatorConfig;
use crate::models::errors::AppResult;
use crate::models::types::BmiReport;
use crate::utils::constants::{BANNER_RULE, RESULT_HEADER, RESULT_RULE, WELCOME_BANNER};

/// Write the welcome banner
pub fn write_banner<W: Write>(out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", WELCOME_BANNER)?;
    writeln!(out, "{}", BANNER_RULE)?;
    Ok(())
}

/// Write the result block, BMI to two decimals
pub fn write_report<W: Write>(out: &mut W, report: &BmiReport) -> AppResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", RESULT_HEADER)?;
    writeln!(out, "Your BMI is: {:.2}", report.bmi)?;
    writeln!(out, "Category: {}", report.category)?;
    writeln!(out, "{}", RESULT_RULE)?;
    out.flush()?;
    Ok(())
}

/// Run the calculator once
///
/// Returns `Ok(None)` when the height guard suppressed the result, and
/// `Err` with `InputClosed` if input ends before both values are read.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &CalculatorConfig,
) -> AppResult<Option<BmiReport>> {
    write_banner(&mut output)?;

    let mut reader = InputReader::new(input, output);
    let weight_kg = reader.read_positive(&config.weight_prompt)?;
    let height_cm = reader.read_positive(&config.height_prompt)?;

    let bmi = calculate_bmi(weight_kg, height_cm);
    if bmi <= 0.0 {
        warn!(weight_kg, height_cm, "no BMI computed, result suppressed");
        return Ok(None);
    }

    let report = BmiReport {
        weight_kg,
        height_cm,
        bmi,
        category: config.thresholds.classify(bmi),
    };
    info!("{}", report.summary());

    write_report(reader.output(), &report)?;
    Ok(Some(report))
}
