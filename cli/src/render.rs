//! Output rendering for command results

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;
use health_calculator_shared::types::{AppointmentConfirmation, ResultDisplay};
use health_calculator_shared::CalculatorResult;

/// JSON shape of a calculator run: raw values plus their display strings
#[derive(Serialize)]
struct CalculatorReport<'a> {
    #[serde(flatten)]
    result: &'a CalculatorResult,
    display: ResultDisplay,
}

/// Render a calculator result
pub fn calculator_result(result: &CalculatorResult, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CalculatorReport {
            result,
            display: result.display(),
        })?),
        OutputFormat::Text => Ok(calculator_text(&result.display())),
    }
}

fn calculator_text(display: &ResultDisplay) -> String {
    let mut lines = vec![
        format!("BMI:                 {} ({})", display.bmi, display.category),
        format!("Healthy weight:      {}", display.healthy_weight),
        format!("BMR:                 {}", display.bmr),
        format!("Daily calorie needs: {}", display.calorie_needs),
        String::new(),
        display.interpretation.clone(),
        String::new(),
        "Recommendations:".to_string(),
    ];
    lines.extend(display.recommendations.iter().map(|rec| format!("  - {}", rec)));
    lines.join("\n") + "\n"
}

/// Render an appointment confirmation
pub fn appointment_confirmation(
    confirmation: &AppointmentConfirmation,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(confirmation)?),
        OutputFormat::Text => Ok(format!(
            "{}\nReference: {}\n",
            confirmation.message, confirmation.reference
        )),
    }
}
