//! Secret payload types and error definitions.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while resolving the webhook credential.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Secret store unreachable or rejected the request.
    #[error("Secret store error for '{name}': {reason}")]
    Store { name: String, reason: String },

    /// Secret store did not answer in time.
    #[error("Secret store timeout after {0} seconds")]
    Timeout(u64),

    /// Secret exists but has no string value (binary secret).
    #[error("Secret '{0}' has no string value")]
    NotAString(String),

    /// Secret string is not a JSON object.
    #[error("Secret '{name}' is not valid JSON: {reason}")]
    InvalidPayload { name: String, reason: String },

    /// Expected field is absent or not a string.
    #[error("Secret '{name}' has no string field '{field}'")]
    MissingField { name: String, field: String },
}

/// Result type for secret operations.
pub type SecretResult<T> = Result<T, SecretError>;

/// Extract `field` from the JSON object stored in secret `name`.
pub fn extract_field(name: &str, secret_string: &str, field: &str) -> SecretResult<String> {
    let payload: Value =
        serde_json::from_str(secret_string).map_err(|e| SecretError::InvalidPayload {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| SecretError::MissingField {
            name: name.to_string(),
            field: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_webhook_field() {
        let path = extract_field(
            "SlackBlockPredictor",
            r#"{"Webhook": "T000/B000/XXXX", "Other": 1}"#,
            "Webhook",
        )
        .unwrap();
        assert_eq!(path, "T000/B000/XXXX");
    }

    #[test]
    fn test_missing_field() {
        let err = extract_field("s", r#"{"webhook": "lowercase"}"#, "Webhook").unwrap_err();
        assert!(matches!(err, SecretError::MissingField { .. }));
        assert_eq!(err.to_string(), "Secret 's' has no string field 'Webhook'");
    }

    #[test]
    fn test_non_string_field() {
        let err = extract_field("s", r#"{"Webhook": 42}"#, "Webhook").unwrap_err();
        assert!(matches!(err, SecretError::MissingField { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = extract_field("s", "T000/B000/XXXX", "Webhook").unwrap_err();
        assert!(matches!(err, SecretError::InvalidPayload { .. }));
    }

    #[test]
    fn test_json_array_has_no_field() {
        let err = extract_field("s", r#"["Webhook"]"#, "Webhook").unwrap_err();
        assert!(matches!(err, SecretError::MissingField { .. }));
    }
}
