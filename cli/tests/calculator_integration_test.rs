//! Integration tests for the `bmi` command

mod common;

use health_calculator_cli::cli::Commands;
use health_calculator_cli::commands::run_bmi;
use health_calculator_cli::config::{AppConfig, OutputFormat};
use health_calculator_cli::error::CliError;
use health_calculator_shared::{UnitSystem, ValidationError};
use rstest::rstest;
use serde_json::Value;

const METRIC_MALE: &[&str] = &[
    "bmi",
    "--units", "metric",
    "--age", "30",
    "--gender", "male",
    "--height-cm", "175",
    "--weight-kg", "70",
    "--activity", "sedentary",
];

#[test]
fn test_text_report() {
    let output = common::run(METRIC_MALE).unwrap();

    assert!(output.starts_with("BMI:                 22.9 (Normal weight)\n"));
    assert!(output.contains("Healthy weight:      56.7kg - 76.3kg"));
    assert!(output.contains("BMR:                 1696 calories/day"));
    assert!(output.contains("Daily calorie needs: 2035 calories/day"));
    assert!(output.contains("Your BMI is in the healthy range."));
    assert!(output.contains("  - Maintain your current healthy habits\n"));
}

#[test]
fn test_json_report() {
    let mut args = vec!["--format", "json"];
    args.extend_from_slice(METRIC_MALE);

    let output = common::run(&args).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["category"], "normal");
    assert_eq!(value["daily_calorie_needs"], 2035);
    assert_eq!(value["bmi_rounded"], 22.9);
    assert_eq!(value["display"]["bmr"], "1696 calories/day");
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 4);
}

#[test]
fn test_unrecognized_activity_uses_default_factor() {
    let mut args = METRIC_MALE.to_vec();
    let last = args.len() - 1;
    args[last] = "couch_potato";

    let output = common::run(&args).unwrap();
    assert!(output.contains("Daily calorie needs: 2035 calories/day"));
}

#[test]
fn test_imperial_full_recommendations() {
    let output = common::run(&[
        "bmi",
        "--units", "imperial",
        "--age", "60",
        "--gender", "female",
        "--height-ft", "5",
        "--height-in", "4",
        "--weight-lbs", "210",
        "--activity", "sedentary",
    ])
    .unwrap();

    assert!(output.contains("(Obese)"));
    assert!(output.contains("consult with Dr. Sania"));
    assert_eq!(output.matches("\n  - ").count(), 9);
}

#[rstest]
#[case(&["bmi", "--gender", "male"], ValidationError::InvalidAge)]
#[case(&["bmi", "--age", "30"], ValidationError::MissingGender)]
#[case(&["bmi", "--age", "30", "--gender", "female"], ValidationError::InvalidHeight)]
#[case(&["bmi", "--age", "30", "--gender", "female", "--height-cm", "160"], ValidationError::InvalidWeight)]
#[case(
    &["bmi", "--age", "30", "--gender", "female", "--height-cm", "160", "--weight-kg", "55"],
    ValidationError::MissingActivityLevel
)]
fn test_validation_order(#[case] args: &[&str], #[case] expected: ValidationError) {
    match common::run(args) {
        Err(CliError::Validation(err)) => assert_eq!(err, expected),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_configured_unit_system_applies_without_flag() {
    let cli = common::parse(&[
        "bmi",
        "--age", "40",
        "--gender", "male",
        "--height-ft", "5",
        "--height-in", "10",
        "--weight-lbs", "180",
        "--activity", "very_active",
    ]);
    let mut config = AppConfig::default();
    config.calculator.default_unit_system = UnitSystem::Imperial;

    let Commands::Bmi(args) = &cli.command else {
        panic!("expected bmi command");
    };
    let output = run_bmi(args, &config, OutputFormat::Text).unwrap();
    assert!(output.starts_with("BMI:                 25.8 (Overweight)"));
}
