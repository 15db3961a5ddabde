use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::model::{iso_timestamp, ContactSubmission};
use crate::utils::error::DashboardError;
use crate::utils::validation::looks_like_email;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Reasons a contact form is turned away with a 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactRejection {
    #[error("No data received")]
    NoData,

    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Please provide a valid email address")]
    InvalidEmail,
}

/// A rejection is the sender's fault; a processing error is answered with a 500.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Rejected(#[from] ContactRejection),

    #[error(transparent)]
    Processing(#[from] DashboardError),
}

/// Parse and validate a raw contact form body.
///
/// Bodies that are not JSON, truthy non-object payloads and required fields
/// holding something other than a string cannot be processed. Falsy payloads
/// (`null`, `{}`, `[]`, `""`, `0`, `false`) count as no data.
pub fn parse_submission(
    body: &[u8],
    source_ip: Option<String>,
    received_at: DateTime<Utc>,
) -> Result<ContactSubmission, ContactError> {
    let payload: Value = serde_json::from_slice(body).map_err(DashboardError::from)?;

    if is_falsy(&payload) {
        return Err(ContactRejection::NoData.into());
    }

    let fields = match payload {
        Value::Object(map) => map,
        other => {
            return Err(DashboardError::ValidationError {
                message: format!("expected a JSON object, got {}", json_type(&other)),
            }
            .into())
        }
    };

    let mut values = [""; 3];
    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = trimmed(&fields, field)?;
        if slot.is_empty() {
            return Err(ContactRejection::MissingField(field).into());
        }
    }
    let [name, email, message] = values;

    if !looks_like_email(email) {
        return Err(ContactRejection::InvalidEmail.into());
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        timestamp: iso_timestamp(received_at),
        source_ip,
    })
}

pub fn confirmation_message(submission: &ContactSubmission) -> String {
    format!(
        "Thank you {}! Your message has been received.",
        submission.name
    )
}

/// A missing field reads as empty; a present non-string field is an error.
fn trimmed<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a str, DashboardError> {
    match fields.get(key) {
        None => Ok(""),
        Some(Value::String(value)) => Ok(value.trim()),
        Some(other) => Err(DashboardError::ValidationError {
            message: format!("field '{}' must be a string, got {}", key, json_type(other)),
        }),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<ContactSubmission, ContactError> {
        parse_submission(body.as_bytes(), Some("127.0.0.1".to_string()), Utc::now())
    }

    fn rejection(body: &str) -> ContactRejection {
        match parse(body) {
            Err(ContactError::Rejected(rejection)) => rejection,
            other => panic!("expected a rejection for {body:?}, got {other:?}"),
        }
    }

    fn is_processing_error(body: &str) -> bool {
        matches!(parse(body), Err(ContactError::Processing(_)))
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission =
            parse(r#"{"name": "  Ada ", "email": " ada@example.com", "message": "hi  "}"#).unwrap();

        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "hi");
        assert_eq!(submission.source_ip.as_deref(), Some("127.0.0.1"));
        assert_eq!(
            confirmation_message(&submission),
            "Thank you Ada! Your message has been received."
        );
    }

    #[test]
    fn test_falsy_payloads_are_no_data() {
        for body in ["null", "{}", "[]", "\"\"", "0", "false"] {
            assert_eq!(rejection(body), ContactRejection::NoData, "body {body}");
        }
    }

    #[test]
    fn test_unparseable_bodies_are_processing_errors() {
        assert!(is_processing_error(""));
        assert!(is_processing_error("  \n"));
        assert!(is_processing_error("{\"name\": "));
        assert!(is_processing_error(r#"["a"]"#));
        assert!(is_processing_error("42"));
    }

    #[test]
    fn test_non_string_fields_are_processing_errors() {
        assert!(is_processing_error(
            r#"{"name": 5, "email": "a@b.com", "message": "hi"}"#
        ));
        assert!(is_processing_error(
            r#"{"name": null, "email": "a@b.com", "message": "hi"}"#
        ));
        assert!(is_processing_error(
            r#"{"name": "A", "email": "a@b.com", "message": ["hi"]}"#
        ));
    }

    #[test]
    fn test_fields_checked_in_order() {
        assert_eq!(
            rejection(r#"{"email": "a@b.com"}"#),
            ContactRejection::MissingField("name")
        );
        assert_eq!(
            rejection(r#"{"name": "A", "email": "   ", "message": "hi"}"#),
            ContactRejection::MissingField("email")
        );
        assert_eq!(
            rejection(r#"{"name": "A", "email": "a@b.com"}"#),
            ContactRejection::MissingField("message")
        );
    }

    #[test]
    fn test_email_shape() {
        let err = rejection(r#"{"name": "A", "email": "not-an-email", "message": "hi"}"#);
        assert_eq!(err, ContactRejection::InvalidEmail);
        assert_eq!(err.to_string(), "Please provide a valid email address");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ContactRejection::MissingField("message").to_string(),
            "Field 'message' is required"
        );
    }
}
