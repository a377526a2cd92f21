//! Appointment request handling
//!
//! Requests are validated and acknowledged locally. Nothing is stored or
//! transmitted; the confirmation only tells the visitor the office will be
//! in touch.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ValidationError;
use crate::types::{AppointmentConfirmation, AppointmentRequest};
use crate::validation::validate_email;

/// Trim every text field and drop optional fields left blank
pub fn normalize_request(request: &AppointmentRequest) -> AppointmentRequest {
    fn optional(value: &Option<String>) -> Option<String> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    AppointmentRequest {
        name: request.name.trim().to_string(),
        service: request.service.trim().to_string(),
        email: optional(&request.email),
        phone: optional(&request.phone),
        preferred_date: request.preferred_date,
        message: optional(&request.message),
    }
}

/// Validate an appointment request against today's date.
///
/// Name and service are required; email and preferred date are checked only
/// when given.
pub fn validate_appointment(
    request: &AppointmentRequest,
    today: NaiveDate,
) -> Result<AppointmentRequest, ValidationError> {
    let request = normalize_request(request);

    if request.validate().is_err() {
        return Err(ValidationError::MissingRequiredFields);
    }
    if let Some(email) = &request.email {
        validate_email(email)?;
    }
    if request.preferred_date.is_some_and(|date| date < today) {
        return Err(ValidationError::DateInPast);
    }

    Ok(request)
}

/// Text shown after a successful request
pub fn confirmation_message(name: &str, service: &str) -> String {
    format!(
        "Thank you, {}! Your appointment request for {} has been received. Dr. Sania's office will contact you shortly.",
        name, service
    )
}

/// Validate a request and produce its confirmation
pub fn submit_appointment(
    request: &AppointmentRequest,
    now: DateTime<Utc>,
) -> Result<AppointmentConfirmation, ValidationError> {
    let request = validate_appointment(request, now.date_naive())?;
    let confirmation = AppointmentConfirmation {
        reference: Uuid::new_v4(),
        submitted_at: now,
        message: confirmation_message(&request.name, &request.service),
    };

    tracing::info!(
        reference = %confirmation.reference,
        service = %request.service,
        "Appointment request accepted"
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    fn request(name: &str, service: &str) -> AppointmentRequest {
        AppointmentRequest {
            name: name.to_string(),
            service: service.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_confirmation_message() {
        let confirmation = submit_appointment(&request("Amina", "Nutrition Consultation"), now()).unwrap();
        assert_eq!(
            confirmation.message,
            "Thank you, Amina! Your appointment request for Nutrition Consultation has been received. Dr. Sania's office will contact you shortly."
        );
        assert_eq!(confirmation.submitted_at, now());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            submit_appointment(&request("", "Weight Management"), now()),
            Err(ValidationError::MissingRequiredFields)
        );
        assert_eq!(
            submit_appointment(&request("Amina", ""), now()),
            Err(ValidationError::MissingRequiredFields)
        );
        assert_eq!(
            submit_appointment(&request("   ", "   "), now()),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let confirmation = submit_appointment(&request("  Omar ", " Diet Plan "), now()).unwrap();
        assert!(confirmation.message.starts_with("Thank you, Omar! "));
        assert!(confirmation.message.contains("request for Diet Plan has"));
    }

    #[test]
    fn test_optional_email_checked_when_present() {
        let mut req = request("Omar", "Diet Plan");
        req.email = Some("  ".to_string());
        assert!(submit_appointment(&req, now()).is_ok());

        req.email = Some("not-an-email".to_string());
        assert_eq!(submit_appointment(&req, now()), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_preferred_date_not_in_past() {
        let today = now().date_naive();
        let mut req = request("Omar", "Diet Plan");

        req.preferred_date = Some(today);
        assert!(validate_appointment(&req, today).is_ok());

        req.preferred_date = Some(today - Duration::days(1));
        assert_eq!(validate_appointment(&req, today), Err(ValidationError::DateInPast));
    }

    #[test]
    fn test_references_are_unique() {
        let a = submit_appointment(&request("A", "B"), now()).unwrap();
        let b = submit_appointment(&request("A", "B"), now()).unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_generated_requests_accepted() {
        for _ in 0..20 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let req = AppointmentRequest {
                name: name.clone(),
                service: "General Checkup".to_string(),
                email: Some(email),
                ..Default::default()
            };
            let confirmation = submit_appointment(&req, now()).unwrap();
            assert!(confirmation.message.contains(name.trim()));
        }
    }
}
