//! Form, display and response types exchanged with the presentation layer

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::units::UnitSystem;

// ============================================================================
// Calculator Form
// ============================================================================

/// Raw calculator form state, exactly as the page holds it.
///
/// Every field is the text of its input element; empty means blank. Only the
/// height and weight fields of the selected unit system are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorForm {
    pub unit_system: UnitSystem,
    pub age: String,
    pub gender: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub height_ft: String,
    pub height_in: String,
    pub weight_lbs: String,
    /// Checked activity radio, if any
    pub activity: Option<String>,
}

impl CalculatorForm {
    /// Clear every entry and the activity selection; the unit system stays
    pub fn reset(&mut self) {
        *self = CalculatorForm {
            unit_system: self.unit_system,
            ..Default::default()
        };
    }
}

/// Text content of each results panel element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDisplay {
    pub bmi: String,
    pub category: String,
    pub category_class: String,
    pub healthy_weight: String,
    pub bmr: String,
    pub calorie_needs: String,
    pub interpretation: String,
    pub recommendations: Vec<String>,
}

// ============================================================================
// Error Response
// ============================================================================

/// Error detail handed to presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub message: String,
}

// ============================================================================
// Appointment Types
// ============================================================================

/// Appointment request form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppointmentRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Acknowledgement shown after a valid appointment request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentConfirmation {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_reset_keeps_unit_system() {
        let mut form = CalculatorForm {
            unit_system: UnitSystem::Imperial,
            age: "44".into(),
            gender: "female".into(),
            height_ft: "5".into(),
            height_in: "4".into(),
            weight_lbs: "150".into(),
            activity: Some("very_active".into()),
            ..Default::default()
        };

        form.reset();

        assert_eq!(
            form,
            CalculatorForm {
                unit_system: UnitSystem::Imperial,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: CalculatorForm =
            serde_json::from_str(r#"{"unit_system":"imperial","age":"30"}"#).unwrap();
        assert_eq!(form.unit_system, UnitSystem::Imperial);
        assert_eq!(form.age, "30");
        assert!(form.height_ft.is_empty());
        assert!(form.activity.is_none());
    }

    #[test]
    fn test_error_detail_skips_empty_field() {
        let detail = ErrorDetail {
            code: "MALFORMED_INPUT".into(),
            field: None,
            label: None,
            message: "bad".into(),
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert_eq!(json, r#"{"code":"MALFORMED_INPUT","message":"bad"}"#);
    }
}
