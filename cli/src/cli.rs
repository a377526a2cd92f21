//! Command-line argument definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use health_calculator_shared::types::{AppointmentRequest, CalculatorForm};
use health_calculator_shared::units::UnitSystem;

/// Health calculator - BMI, BMR and daily calorie needs
#[derive(Parser, Debug)]
#[command(name = "health-calc")]
#[command(version)]
#[command(about = "BMI, BMR and calorie calculator with appointment requests", long_about = None)]
pub struct Cli {
    /// Output format (overrides configuration)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to config/<RUST_ENV>.toml)
    #[arg(long, global = true, env = "HC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate BMI, BMR and daily calorie needs
    Bmi(BmiArgs),

    /// Request an appointment
    Appointment(AppointmentArgs),
}

/// Calculator form fields, passed through as entered
#[derive(Args, Debug, Default)]
pub struct BmiArgs {
    /// Unit system: metric or imperial
    #[arg(long)]
    pub units: Option<UnitSystem>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// Height in centimeters (metric)
    #[arg(long)]
    pub height_cm: Option<String>,

    /// Weight in kilograms (metric)
    #[arg(long)]
    pub weight_kg: Option<String>,

    /// Height, feet part (imperial)
    #[arg(long)]
    pub height_ft: Option<String>,

    /// Height, inches part (imperial)
    #[arg(long)]
    pub height_in: Option<String>,

    /// Weight in pounds (imperial)
    #[arg(long)]
    pub weight_lbs: Option<String>,

    /// sedentary, lightly_active, moderately_active, very_active or extra_active
    #[arg(long)]
    pub activity: Option<String>,
}

impl BmiArgs {
    /// Form state for these arguments, using `default_units` when none given
    pub fn to_form(&self, default_units: UnitSystem) -> CalculatorForm {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        CalculatorForm {
            unit_system: self.units.unwrap_or(default_units),
            age: text(&self.age),
            gender: text(&self.gender),
            height_cm: text(&self.height_cm),
            weight_kg: text(&self.weight_kg),
            height_ft: text(&self.height_ft),
            height_in: text(&self.height_in),
            weight_lbs: text(&self.weight_lbs),
            activity: self.activity.clone(),
        }
    }
}

/// Appointment form fields
#[derive(Args, Debug, Default)]
pub struct AppointmentArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Requested service
    #[arg(long)]
    pub service: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Preferred date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Anything the office should know
    #[arg(long)]
    pub message: Option<String>,
}

impl AppointmentArgs {
    pub fn to_request(&self) -> AppointmentRequest {
        AppointmentRequest {
            name: self.name.clone().unwrap_or_default(),
            service: self.service.clone().unwrap_or_default(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            preferred_date: self.date,
            message: self.message.clone(),
        }
    }
}
