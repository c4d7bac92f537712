//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::log_query::parse_strict_date;
use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidNumber,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidNumber => "invalid_number",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a date in YYYY-MM-DD form"))
        .with_value(ErrorCode::InvalidDate, value)
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a whole number"))
        .with_value(ErrorCode::InvalidNumber, value)
}

/// Treat absent and blank values alike.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Require a field to be present and non-blank.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    present(value).ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_user_id(value: Option<String>, field: FieldName) -> Result<UserId, Error> {
    let raw = require(value, field)?;
    UserId::new(raw.trim()).map_err(|_| invalid_uuid_error(field, &raw))
}

/// Parse an optional strict `YYYY-MM-DD` date; blank counts as absent.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    present(value)
        .map(|raw| parse_strict_date(&raw).ok_or_else(|| invalid_date_error(field, &raw)))
        .transpose()
}

/// Whole number submitted either as a JSON number or as text.
///
/// Form bodies only carry strings, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

pub(crate) fn parse_whole_number(
    value: Option<NumberOrText>,
    field: FieldName,
) -> Result<i64, Error> {
    match value {
        None => Err(missing_field_error(field)),
        Some(NumberOrText::Number(number)) => Ok(number),
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(missing_field_error(field));
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| invalid_number_error(field, &text))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("duration");

    fn detail_code(error: &Error) -> Option<&str> {
        error
            .details()
            .and_then(|details| details.get("code"))
            .and_then(serde_json::Value::as_str)
    }

    #[rstest]
    #[case(Some(NumberOrText::Number(30)), 30)]
    #[case(Some(NumberOrText::Text("45".into())), 45)]
    #[case(Some(NumberOrText::Text(" 12 ".into())), 12)]
    #[case(Some(NumberOrText::Number(-3)), -3)]
    fn whole_numbers_accept_both_shapes(#[case] input: Option<NumberOrText>, #[case] expected: i64) {
        assert_eq!(parse_whole_number(input, FIELD).expect("number"), expected);
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some(NumberOrText::Text("  ".into())), "missing_field")]
    #[case(Some(NumberOrText::Text("ten".into())), "invalid_number")]
    #[case(Some(NumberOrText::Text("1.5".into())), "invalid_number")]
    fn whole_number_failures_carry_detail_code(
        #[case] input: Option<NumberOrText>,
        #[case] code: &str,
    ) {
        let error = parse_whole_number(input, FIELD).expect_err("rejected");
        assert_eq!(error.code(), DomainCode::InvalidRequest);
        assert_eq!(detail_code(&error), Some(code));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("2020-02-29"), NaiveDate::from_ymd_opt(2020, 2, 29))]
    fn optional_dates_parse(#[case] raw: Option<&str>, #[case] expected: Option<NaiveDate>) {
        let parsed = parse_optional_date(raw.map(str::to_owned), FieldName::new("date"))
            .expect("valid date");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("2020-02-30")]
    #[case("2020-2-3")]
    #[case("yesterday")]
    fn malformed_dates_are_invalid_requests(#[case] raw: &str) {
        let error = parse_optional_date(Some(raw.to_owned()), FieldName::new("date"))
            .expect_err("rejected");
        assert_eq!(detail_code(&error), Some("invalid_date"));
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some("   "), "missing_field")]
    #[case(Some("not-a-uuid"), "invalid_uuid")]
    fn user_id_failures(#[case] raw: Option<&str>, #[case] code: &str) {
        let error = parse_user_id(raw.map(str::to_owned), FieldName::new("userId"))
            .expect_err("rejected");
        assert_eq!(detail_code(&error), Some(code));
    }

    #[rstest]
    fn user_id_is_trimmed() {
        let raw = " 3fa85f64-5717-4562-b3fc-2c963f66afa6 ";
        let id = parse_user_id(Some(raw.to_owned()), FieldName::new("userId")).expect("valid id");
        assert_eq!(id.as_ref(), raw.trim());
    }
}
