//! Error types for the health calculator

use thiserror::Error;

use crate::types::ErrorDetail;
use crate::validation::get_field_display_label;

/// Error code reported for every form validation failure
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";

/// First problem found in a submitted form.
///
/// Forms are checked fail-fast: only the first failing check is reported,
/// so each variant corresponds to exactly one field and one message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid age")]
    InvalidAge,

    #[error("Please select your gender")]
    MissingGender,

    #[error("Please enter a valid height")]
    InvalidHeight,

    #[error("Please enter a valid weight")]
    InvalidWeight,

    #[error("Please select your activity level")]
    MissingActivityLevel,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please choose a date that is not in the past")]
    DateInPast,
}

impl ValidationError {
    /// Technical name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidAge => "age",
            ValidationError::MissingGender => "gender",
            ValidationError::InvalidHeight => "height",
            ValidationError::InvalidWeight => "weight",
            ValidationError::MissingActivityLevel => "activity_level",
            ValidationError::MissingRequiredFields => "required_fields",
            ValidationError::InvalidEmail => "email",
            ValidationError::DateInPast => "preferred_date",
        }
    }

    /// User-friendly label of the offending field
    pub fn display_label(&self) -> &'static str {
        get_field_display_label(self.field())
    }

    /// Serializable detail for presentation layers
    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            code: VALIDATION_ERROR_CODE.to_string(),
            field: Some(self.field().to_string()),
            label: Some(self.display_label().to_string()),
            message: self.to_string(),
        }
    }
}
