//! Command execution

use chrono::{DateTime, Utc};
use tracing::info;

use crate::cli::{AppointmentArgs, BmiArgs, Cli, Commands};
use crate::config::{AppConfig, OutputFormat};
use crate::error::CliError;
use crate::render;
use health_calculator_shared::appointment::submit_appointment;
use health_calculator_shared::health_metrics::compute;

/// Run the calculator for the given arguments
pub fn run_bmi(args: &BmiArgs, config: &AppConfig, format: OutputFormat) -> Result<String, CliError> {
    let form = args.to_form(config.calculator.default_unit_system);
    info!(units = %form.unit_system, "Running calculator");

    let result = compute(&form)?;
    render::calculator_result(&result, format)
}

/// Submit an appointment request as of `now`
pub fn run_appointment(
    args: &AppointmentArgs,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let confirmation = submit_appointment(&args.to_request(), now)?;
    render::appointment_confirmation(&confirmation, format)
}

/// Dispatch the parsed command line
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String, CliError> {
    let format = cli.format.unwrap_or(config.output.format);
    match &cli.command {
        Commands::Bmi(args) => run_bmi(args, config, format),
        Commands::Appointment(args) => run_appointment(args, Utc::now(), format),
    }
}
