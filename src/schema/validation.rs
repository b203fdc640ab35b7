//! Field-level validation errors and the primitive checks behind them.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Machine-readable category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing or of the wrong JSON type.
    InvalidType,
    /// String shorter than the required minimum.
    TooSmall,
    /// String present but not in the required format.
    InvalidString,
    /// Request body was not parseable JSON.
    InvalidJson,
}

/// One rejected field.
///
/// `path` names the offending field; it is empty when the problem is the
/// body as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<String>,
}

impl FieldError {
    pub fn new(code: IssueCode, message: impl Into<String>, field: &str) -> Self {
        Self {
            code,
            message: message.into(),
            path: vec![field.to_string()],
        }
    }

    /// An issue with the request body itself rather than a field.
    pub fn body(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// All issues found in one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, error) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

/// Name of a JSON value's type as reported in `invalid_type` messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pull a required string field out of `object`, recording an error if it
/// is missing or not a string.
pub(crate) fn required_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            errors.push(FieldError::new(IssueCode::InvalidType, "Required", field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                IssueCode::InvalidType,
                format!("Expected string, received {}", json_kind(other)),
                field,
            ));
            None
        }
    }
}

/// Length in UTF-16 code units, the unit browsers use for `string.length`.
pub(crate) fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Standard e-mail syntax check.
///
/// The local part may not start with a dot and the address may not contain
/// consecutive dots.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}
