//! Input validation functions
//!
//! The calculator form is checked in a fixed order and stops at the first
//! failure: age, gender, height, weight, activity level. Numeric fields are
//! read the way a browser's `parseInt`/`parseFloat` read them, taking the
//! leading numeric prefix and ignoring trailing text.

use crate::errors::ValidationError;
use crate::health_metrics::{ActivityLevel, CalculatorInput, Gender};
use crate::types::CalculatorForm;
use crate::units::{normalize_height_cm, normalize_weight_kg};

// ============================================================================
// Numeric Parsing
// ============================================================================

/// Byte length of the leading run of ASCII digits
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading integer of a field, like `parseInt(value)`
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Leading decimal number of a field, like `parseFloat(value)`
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

// ============================================================================
// Measurement Validation
// ============================================================================

/// Validate age in years
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    parse_leading_int(raw)
        .and_then(|age| u32::try_from(age).ok())
        .filter(|age| *age > 0)
        .ok_or(ValidationError::InvalidAge)
}

/// Validate the gender selection
pub fn validate_gender(raw: &str) -> Result<Gender, ValidationError> {
    raw.parse().map_err(|_| ValidationError::MissingGender)
}

/// Validate a normalized height (in cm)
pub fn validate_height_cm(height_cm: Option<f64>) -> Result<f64, ValidationError> {
    height_cm
        .filter(|h| h.is_finite() && *h > 0.0)
        .ok_or(ValidationError::InvalidHeight)
}

/// Validate a normalized weight (in kg)
pub fn validate_weight_kg(weight_kg: Option<f64>) -> Result<f64, ValidationError> {
    weight_kg
        .filter(|w| w.is_finite() && *w > 0.0)
        .ok_or(ValidationError::InvalidWeight)
}

/// Validate the activity selection.
///
/// Only a missing or blank selection fails. A value the calculator does not
/// know yields `Ok(None)` and is later priced at the default factor.
pub fn validate_activity_level(raw: Option<&str>) -> Result<Option<ActivityLevel>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Err(ValidationError::MissingActivityLevel),
        Some(level) => Ok(level.parse().ok()),
    }
}

/// Turn a raw calculator form into validated, metric input.
///
/// Checks run in form order and the first failure is returned.
pub fn validate_calculator_form(form: &CalculatorForm) -> Result<CalculatorInput, ValidationError> {
    validated_input(form).map_err(|err| {
        tracing::debug!(field = err.field(), unit_system = %form.unit_system, "Calculator form rejected");
        err
    })
}

fn validated_input(form: &CalculatorForm) -> Result<CalculatorInput, ValidationError> {
    let system = form.unit_system;
    let height_cm = normalize_height_cm(
        system,
        parse_leading_float(&form.height_cm),
        parse_leading_float(&form.height_ft),
        parse_leading_float(&form.height_in),
    );
    let weight_kg = normalize_weight_kg(
        system,
        parse_leading_float(&form.weight_kg),
        parse_leading_float(&form.weight_lbs),
    );

    Ok(CalculatorInput {
        age_years: validate_age(&form.age)?,
        gender: validate_gender(&form.gender)?,
        height_cm: validate_height_cm(height_cm)?,
        weight_kg: validate_weight_kg(weight_kg)?,
        activity_level: validate_activity_level(form.activity.as_deref())?,
    })
}

// ============================================================================
// Contact Validation
// ============================================================================

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.len() > 255 {
        return Err(ValidationError::InvalidEmail);
    }
    let matches = regex_lite::Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email));
    if matches {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_cm" | "height_ft" | "height_in" => "Height",
        "weight" | "weight_kg" | "weight_lbs" => "Weight",
        "activity_level" | "activity" => "Activity Level",
        "unit_system" => "Units",
        "name" => "Full Name",
        "service" => "Service",
        "required_fields" => "Required Fields",
        "email" => "Email",
        "phone" => "Phone",
        "preferred_date" => "Preferred Date",
        _ => field_name,
    }
}
