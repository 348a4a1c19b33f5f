use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    PreconditionRequiredValue,
    StateRequiredValue,
    CastMismatch,
    NoSuchElement,

    ValidationInvalidArgument,
    ValidationInvalidJson,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::PreconditionRequiredValue => "precondition.required_value",
            ErrorCode::StateRequiredValue => "state.required_value",
            ErrorCode::CastMismatch => "cast.mismatch",
            ErrorCode::NoSuchElement => "collection.no_such_element",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMismatchDetails {
    pub found: String,
    pub expected: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn empty_details() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// A caller-asserted precondition did not hold (a required value was absent).
    pub fn precondition_required_value(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PreconditionRequiredValue,
            message,
            empty_details(),
        )
    }

    /// Internal state was found without a value it must carry.
    pub fn state_required_value(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StateRequiredValue, message, empty_details())
    }

    pub fn cast_mismatch(found: impl Into<String>, expected: impl Into<String>) -> Self {
        let found = found.into();
        let expected = expected.into();
        let message = format!("Cannot cast {} to {}", found, expected);
        let details = serde_json::to_value(CastMismatchDetails { found, expected })
            .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::CastMismatch, message, details)
    }

    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoSuchElement, message, empty_details())
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        })
        .unwrap_or_else(|_| empty_details());

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| empty_details());

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_carries_caller_message() {
        let err = Error::precondition_required_value("user id is required");
        assert_eq!(err.code, ErrorCode::PreconditionRequiredValue);
        assert_eq!(err.to_string(), "user id is required");
    }

    #[test]
    fn cast_mismatch_records_both_kinds() {
        let err = Error::cast_mismatch("string", "i64");
        assert_eq!(err.message, "Cannot cast string to i64");
        assert_eq!(err.details["found"], "string");
        assert_eq!(err.details["expected"], "i64");
    }

    #[test]
    fn codes_are_dotted() {
        assert_eq!(ErrorCode::NoSuchElement.as_str(), "collection.no_such_element");
        assert_eq!(ErrorCode::StateRequiredValue.as_str(), "state.required_value");
    }

    #[test]
    fn invalid_argument_records_rejected_value() {
        let err = Error::validation_invalid_argument("pointer", "No such field", Some("/x".to_string()));
        assert_eq!(err.details["field"], "pointer");
        assert_eq!(err.details["value"], "/x");

        let bare = Error::validation_invalid_argument("output_mode", "Unsupported", None);
        assert!(bare.details.get("value").is_none());
    }

    #[test]
    fn with_hint_appends() {
        let err = Error::internal_unexpected("boom").with_hint("try again");
        assert_eq!(err.hints.len(), 1);
        assert_eq!(err.hints[0].message, "try again");
    }
}
