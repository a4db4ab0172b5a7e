//! Request validation helpers for the users endpoints.
//!
//! Every failure becomes an `invalid_request` error carrying
//! `{"field", "code"}` details, except path identifiers: an identifier that
//! cannot name a user is reported as `not_found`.

use serde_json::json;

use crate::domain::{Error, UserId, UserValidationError};

/// Validation error codes surfaced in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    Empty,
    TooLong,
    InvalidFormat,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::Empty => "empty",
            Self::TooLong => "too_long",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");

fn field_error(field: FieldName, message: impl Into<String>, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ValidationCode::MissingField,
    )
}

/// Translate a domain validation failure into a field-scoped request error.
pub(crate) fn invalid_field_error(field: FieldName, err: &UserValidationError) -> Error {
    let code = match err {
        UserValidationError::EmptyName | UserValidationError::EmptyEmail => ValidationCode::Empty,
        UserValidationError::NameTooLong { .. } | UserValidationError::EmailTooLong { .. } => {
            ValidationCode::TooLong
        }
        UserValidationError::EmptyId | UserValidationError::InvalidId => {
            ValidationCode::InvalidFormat
        }
    };
    field_error(field, err.to_string(), code)
}

/// Validate a required field, reporting absence and invalid content.
pub(crate) fn require<T>(
    value: Option<String>,
    field: FieldName,
    parse: impl FnOnce(String) -> Result<T, UserValidationError>,
) -> Result<T, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    parse(raw).map_err(|err| invalid_field_error(field, &err))
}

/// Validate an optional field; absence is not an error.
pub(crate) fn optional<T>(
    value: Option<String>,
    field: FieldName,
    parse: impl FnOnce(String) -> Result<T, UserValidationError>,
) -> Result<Option<T>, Error> {
    value
        .map(|raw| parse(raw).map_err(|err| invalid_field_error(field, &err)))
        .transpose()
}

/// Parse a path identifier. Anything that is not a UUID cannot identify a
/// user, so it maps to `not_found`.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| {
        Error::not_found(format!("user {raw} not found")).with_details(json!({ "id": raw }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, ErrorCode, UserName};
    use rstest::rstest;

    #[rstest]
    fn missing_field_reports_field_and_code() {
        let error = require(None, NAME, UserName::new).expect_err("missing");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: name");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "name", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case(String::new(), "empty")]
    #[case(format!("{}@example.com", "a".repeat(100)), "too_long")]
    fn invalid_email_reports_code(#[case] raw: String, #[case] code: &str) {
        let error = require(Some(raw), EMAIL, EmailAddress::new).expect_err("invalid email");

        assert_eq!(error.details(), Some(&json!({"field": "email", "code": code})));
    }

    #[rstest]
    fn too_long_name_reports_code() {
        let error = optional(Some("x".repeat(300)), NAME, UserName::new).expect_err("too long");
        assert_eq!(error.details(), Some(&json!({"field": "name", "code": "too_long"})));
    }

    #[rstest]
    fn optional_absent_field_is_none() {
        let parsed = optional(None, NAME, UserName::new).expect("absent is fine");
        assert!(parsed.is_none());
    }

    #[rstest]
    #[case("42")]
    #[case("not-a-uuid")]
    fn unparsable_ids_are_not_found(#[case] raw: &str) {
        let error = parse_user_id(raw).expect_err("not a UUID");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
