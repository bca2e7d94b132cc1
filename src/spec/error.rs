//! Spec decoding errors.

use crate::codes::UnknownCode;

/// Error returned when a raw spec cannot be decoded.
///
/// Every variant names the literal input that was rejected, never an
/// internal slot value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// More than one target string, and the item count disagrees.
    #[error("incorrect number of arguments: expected {expected}, got {got}: {spec}")]
    ArityMismatch {
        /// Number of target strings
        expected: usize,
        /// Effective number of spec items
        got: usize,
        /// The raw spec as written
        spec: String,
    },

    /// A token, or a single entry of an explicit list, is not recognized.
    #[error("invalid item: {token:?}{}", describe_cause(.cause))]
    InvalidOperation {
        /// The offending token exactly as given
        token: String,
        /// The code lookup that failed, for positional tokens
        #[source]
        cause: Option<UnknownCode>,
    },

    /// Two or more entries of one explicit list are not canonical names.
    #[error("invalid items: {tokens:?}")]
    InvalidOperations {
        /// All offending entries, in list order
        tokens: Vec<String>,
    },
}

impl DecodeError {
    pub(crate) fn invalid(token: &str) -> Self {
        DecodeError::InvalidOperation {
            token: token.to_string(),
            cause: None,
        }
    }

    pub(crate) fn invalid_code(token: &str, cause: UnknownCode) -> Self {
        DecodeError::InvalidOperation {
            token: token.to_string(),
            cause: Some(cause),
        }
    }
}

fn describe_cause(cause: &Option<UnknownCode>) -> String {
    match cause {
        Some(cause) => format!(" ({})", cause),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Category;

    #[test]
    fn test_arity_mismatch_display() {
        let err = DecodeError::ArityMismatch {
            expected: 2,
            got: 1,
            spec: "\"b\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("incorrect number of arguments"));
        assert!(msg.contains("expected 2, got 1"));
        assert!(msg.contains("\"b\""));
    }

    #[test]
    fn test_invalid_operation_display_with_cause() {
        let err = DecodeError::invalid_code(
            "Tb",
            UnknownCode {
                category: Category::Color,
                code: "T".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid item: \"Tb\" (invalid color code: T)"
        );
    }

    #[test]
    fn test_invalid_operation_display_without_cause() {
        let err = DecodeError::invalid("redbold");
        assert_eq!(err.to_string(), "invalid item: \"redbold\"");
    }

    #[test]
    fn test_invalid_operations_display_is_plural() {
        let err = DecodeError::InvalidOperations {
            tokens: vec!["foo".to_string(), "bar".to_string()],
        };
        assert_eq!(err.to_string(), "invalid items: [\"foo\", \"bar\"]");
    }

    #[test]
    fn test_source_is_unknown_code() {
        use std::error::Error;

        let err = DecodeError::invalid_code(
            "__xx",
            UnknownCode {
                category: Category::Background,
                code: "xx".to_string(),
            },
        );
        let source = err.source().expect("positional failure carries its cause");
        assert_eq!(source.to_string(), "invalid background color code: xx");
        assert!(DecodeError::invalid("x").source().is_none());
    }
}
