//! Unit conversion and normalization module
//!
//! The calculator form accepts either metric (cm/kg) or imperial
//! (ft+in/lbs) measurements. Everything downstream of validation works in
//! centimeters and kilograms; conversion happens once, here, at full
//! precision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system selected on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Unit the weight field is entered in
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lbs,
        }
    }

    /// Unit the height fields are entered in
    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Cm,
            UnitSystem::Imperial => HeightUnit::FeetInches,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    FeetInches,
}

/// Height entered as separate feet and inches fields.
///
/// Both parts are fractional because the form accepts decimals in either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: f64,
    pub inches: f64,
}

impl FeetInchesHeight {
    pub fn new(feet: f64, inches: f64) -> Self {
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        self.feet * INCHES_PER_FOOT + self.inches
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        self.to_total_inches() * CM_PER_INCH
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Height in centimeters from the fields of the selected unit system.
///
/// Metric reads `cm`; imperial combines `feet` and `inches`. Returns `None`
/// when a field the system needs is absent.
pub fn normalize_height_cm(
    system: UnitSystem,
    cm: Option<f64>,
    feet: Option<f64>,
    inches: Option<f64>,
) -> Option<f64> {
    match system.height_unit() {
        HeightUnit::Cm => cm,
        HeightUnit::FeetInches => Some(FeetInchesHeight::new(feet?, inches?).to_cm()),
    }
}

/// Weight in kilograms from the field of the selected unit system
pub fn normalize_weight_kg(system: UnitSystem, kg: Option<f64>, lbs: Option<f64>) -> Option<f64> {
    let unit = system.weight_unit();
    let raw = match unit {
        WeightUnit::Kg => kg,
        WeightUnit::Lbs => lbs,
    };
    raw.map(|value| unit.to_kg(value))
}
