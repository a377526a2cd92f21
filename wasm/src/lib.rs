//! Health Calculator WASM Module
//!
//! WebAssembly bindings the clinic page script calls. Forms travel in as
//! JSON and every fallible call answers with a JSON envelope:
//!
//! ```json
//! {"ok":true,"result":{...}}
//! {"ok":false,"error":{"code":"VALIDATION_ERROR","field":"age","label":"Age","message":"Please enter a valid age"}}
//! ```
//!
//! The script decides how to present errors; nothing here touches the DOM.

use chrono::{DateTime, Utc};
use health_calculator_shared::health_metrics::{self, activity_factor, calculate_bmr_harris_benedict, Gender};
use health_calculator_shared::page::{self, MobileNav};
use health_calculator_shared::types::{AppointmentRequest, CalculatorForm, ErrorDetail};
use health_calculator_shared::units::UnitSystem;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Error code for input that is not valid JSON for the expected form
pub const MALFORMED_INPUT_CODE: &str = "MALFORMED_INPUT";

/// Response wrapper returned to the page script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl<T> From<Result<T, ErrorDetail>> for Envelope<T> {
    fn from(outcome: Result<T, ErrorDetail>) -> Self {
        match outcome {
            Ok(result) => Envelope {
                ok: true,
                result: Some(result),
                error: None,
            },
            Err(error) => Envelope {
                ok: false,
                result: None,
                error: Some(error),
            },
        }
    }
}

fn malformed(err: serde_json::Error) -> ErrorDetail {
    ErrorDetail {
        code: MALFORMED_INPUT_CODE.to_string(),
        field: Some("form".to_string()),
        label: None,
        message: err.to_string(),
    }
}

fn respond<T: Serialize>(outcome: Result<T, ErrorDetail>) -> String {
    serde_json::to_string(&Envelope::from(outcome)).unwrap_or_else(|err| {
        format!(
            r#"{{"ok":false,"error":{{"code":"INTERNAL_ERROR","message":{:?}}}}}"#,
            err.to_string()
        )
    })
}

// ============================================================================
// Calculator
// ============================================================================

/// Validate the calculator form and compute every result panel value
#[wasm_bindgen]
pub fn calculate(form_json: &str) -> String {
    let outcome = serde_json::from_str::<CalculatorForm>(form_json)
        .map_err(malformed)
        .and_then(|form| {
            health_metrics::compute(&form)
                .map(|result| result.display())
                .map_err(|err| err.detail())
        });
    respond(outcome)
}

/// Return the form with every entry cleared, keeping its unit system
#[wasm_bindgen]
pub fn reset_form(form_json: &str) -> String {
    let outcome = serde_json::from_str::<CalculatorForm>(form_json)
        .map_err(malformed)
        .map(|mut form| {
            form.reset();
            form
        });
    respond(outcome)
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::calculate_bmi(weight_kg, height_cm)
}

/// Daily calorie needs from raw values.
///
/// Uses Harris-Benedict; an unknown or missing activity level counts as
/// sedentary.
#[wasm_bindgen]
pub fn calculate_calorie_needs(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity: Option<String>,
) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let bmr = calculate_bmr_harris_benedict(weight_kg, height_cm, age_years, gender);
    health_metrics::daily_calorie_needs(bmr, activity_factor(activity.as_deref())) as f64
}

// ============================================================================
// Appointment Form
// ============================================================================

/// Validate an appointment request and build its confirmation
#[wasm_bindgen]
pub fn submit_appointment(request_json: &str) -> String {
    submit_appointment_at(request_json, Utc::now())
}

/// [`submit_appointment`] with an explicit clock
pub fn submit_appointment_at(request_json: &str, now: DateTime<Utc>) -> String {
    let outcome = serde_json::from_str::<AppointmentRequest>(request_json)
        .map_err(malformed)
        .and_then(|request| {
            health_calculator_shared::submit_appointment(&request, now).map_err(|err| err.detail())
        });
    respond(outcome)
}

// ============================================================================
// Page Navigation
// ============================================================================

/// Scroll position for a nav link target
#[wasm_bindgen]
pub fn scroll_target_top(element_offset_top: f64) -> f64 {
    page::scroll_target_top(element_offset_top)
}

/// Delay before the results panel is scrolled into view
#[wasm_bindgen]
pub fn results_scroll_delay_ms() -> u32 {
    page::RESULTS_SCROLL_DELAY_MS
}

/// Field groups to show for a unit system, as JSON.
///
/// Unknown systems fall back to metric.
#[wasm_bindgen]
pub fn unit_field_visibility(system: &str) -> String {
    let system = system.parse::<UnitSystem>().unwrap_or_default();
    respond(Ok(page::field_visibility(system)))
}

/// Mobile navigation menu bound to the hamburger button
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct MobileNavToggle {
    inner: MobileNav,
}

#[wasm_bindgen]
impl MobileNavToggle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `style.display` value
    pub fn display(&self) -> String {
        self.inner.display().css_value().to_string()
    }

    pub fn toggle(&mut self) -> String {
        self.inner.toggle().css_value().to_string()
    }

    pub fn link_clicked(&mut self, viewport_width: f64) -> String {
        self.inner.link_clicked(viewport_width).css_value().to_string()
    }

    pub fn resized(&mut self, viewport_width: f64) -> String {
        self.inner.resized(viewport_width).css_value().to_string()
    }
}
