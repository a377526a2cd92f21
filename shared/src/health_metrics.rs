//! Health metrics calculations module
//!
//! Computes BMI, the healthy weight range, Harris-Benedict BMR and daily
//! calorie needs from a validated [`CalculatorInput`], and bundles them with
//! the category interpretation and recommendations into a
//! [`CalculatorResult`].
//!
//! Every function here is pure: the same input always produces the same
//! result, and nothing is retained between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;
use crate::recommendations::{generate_recommendations, interpretation};
use crate::types::{CalculatorForm, ResultDisplay};
use crate::validation::validate_calculator_form;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender selected on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Multiplier used when the activity level is missing or unrecognized
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Form value of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Multiplier for an optional level; `None` uses [`DEFAULT_ACTIVITY_FACTOR`]
    pub fn factor_or_default(level: Option<ActivityLevel>) -> f64 {
        level.map_or(DEFAULT_ACTIVITY_FACTOR, |level| level.multiplier())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| format!("Unknown activity level: {}", s))
    }
}

/// Activity multiplier for a raw form value.
///
/// Missing or unrecognized values fall back to [`DEFAULT_ACTIVITY_FACTOR`]
/// instead of failing.
pub fn activity_factor(raw: Option<&str>) -> f64 {
    ActivityLevel::factor_or_default(raw.and_then(|value| value.parse().ok()))
}

/// Validated, metric-normalized calculator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Age in whole years
    pub age_years: u32,
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Selected activity level; `None` when a value was chosen but is not
    /// one the calculator knows
    pub activity_level: Option<ActivityLevel>,
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to a number of decimal places from the exact binary value.
///
/// Agrees with `format!("{:.*}", decimals, value)`, so a rounded number
/// always matches the digits shown for the unrounded one.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Lower BMI bound of the healthy weight range
pub const HEALTHY_BMI_MIN: f64 = 18.5;

/// Upper BMI bound of the healthy weight range
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Label shown in the results panel
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// CSS class used to color the category badge
    pub fn css_class(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Healthy weight bounds in kilograms.
///
/// Bounds are kept at full precision and shown with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}kg - {:.1}kg", self.min_kg, self.max_kg)
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-24.9
pub fn healthy_weight_range_kg(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    WeightRange {
        min_kg: HEALTHY_BMI_MIN * height_m_sq,
        max_kg: HEALTHY_BMI_MAX * height_m_sq,
    }
}

// ============================================================================
// BMR and Calorie Calculations
// ============================================================================

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Estimated daily calories: BMR × activity factor, rounded
pub fn daily_calorie_needs(bmr: f64, activity_factor: f64) -> i64 {
    (bmr * activity_factor).round() as i64
}

// ============================================================================
// Full Calculation
// ============================================================================

/// Everything the results panel shows for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// BMI at full precision
    pub bmi: f64,
    /// BMI rounded to one decimal
    pub bmi_rounded: f64,
    pub category: BmiCategory,
    pub healthy_weight_range_kg: WeightRange,
    /// Basal metabolic rate at full precision, kcal/day
    pub bmr: f64,
    /// Estimated daily calorie needs, kcal/day
    pub daily_calorie_needs: i64,
    pub interpretation: String,
    pub recommendations: Vec<String>,
}

impl CalculatorResult {
    /// BMR rounded to the nearest whole calorie
    pub fn bmr_rounded(&self) -> i64 {
        self.bmr.round() as i64
    }

    /// Strings the presentation layer renders
    pub fn display(&self) -> ResultDisplay {
        ResultDisplay {
            bmi: format!("{:.1}", self.bmi),
            category: self.category.label().to_string(),
            category_class: format!("category {}", self.category.css_class()),
            healthy_weight: self.healthy_weight_range_kg.to_string(),
            bmr: format!("{} calories/day", self.bmr_rounded()),
            calorie_needs: format!("{} calories/day", self.daily_calorie_needs),
            interpretation: self.interpretation.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Run every calculation for validated input
pub fn calculate(input: &CalculatorInput) -> CalculatorResult {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let category = classify_bmi(bmi);
    let bmr = calculate_bmr_harris_benedict(input.weight_kg, input.height_cm, input.age_years, input.gender);
    let calories = daily_calorie_needs(bmr, ActivityLevel::factor_or_default(input.activity_level));

    tracing::debug!(
        bmi,
        category = category.css_class(),
        bmr,
        calories,
        "Calculated health metrics"
    );

    CalculatorResult {
        bmi,
        bmi_rounded: round_to(bmi, 1),
        category,
        healthy_weight_range_kg: healthy_weight_range_kg(input.height_cm),
        bmr,
        daily_calorie_needs: calories,
        interpretation: interpretation(category).to_string(),
        recommendations: generate_recommendations(bmi, input.age_years, input.gender, input.activity_level)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Validate a raw form and calculate its metrics.
///
/// Returns the first validation failure in form order when the form is not
/// complete.
pub fn compute(form: &CalculatorForm) -> Result<CalculatorResult, ValidationError> {
    let input = validate_calculator_form(form)?;
    Ok(calculate(&input))
}
