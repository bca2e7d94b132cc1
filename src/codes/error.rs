//! Code lookup errors.

use super::operation::Category;

/// Error returned when a short code is not present in its category table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {category} code: {code}")]
pub struct UnknownCode {
    /// The table that was searched
    pub category: Category,
    /// The code as it appeared in the token
    pub code: String,
}

impl UnknownCode {
    pub(crate) fn new(category: Category, code: &str) -> Self {
        Self {
            category,
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_display() {
        let err = UnknownCode::new(Category::Color, "T");
        assert_eq!(err.to_string(), "invalid color code: T");
    }

    #[test]
    fn test_unknown_background_code_display() {
        let err = UnknownCode::new(Category::Background, "xx");
        assert_eq!(err.to_string(), "invalid background color code: xx");
    }
}
