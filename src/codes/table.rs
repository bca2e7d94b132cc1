//! Code tables and resolvers.

use super::error::UnknownCode;
use super::operation::{Category, Operation};

/// Foreground color codes.
pub const COLORS: &[(&str, Operation)] = &[
    ("B", Operation::Black),
    ("r", Operation::Red),
    ("g", Operation::Green),
    ("y", Operation::Yellow),
    ("b", Operation::Blue),
    ("m", Operation::Magenta),
    ("c", Operation::Cyan),
    ("w", Operation::White),
];

/// Text style codes.
pub const STYLES: &[(&str, Operation)] = &[
    ("b", Operation::Bold),
    ("d", Operation::Dark),
    ("i", Operation::Italic),
    ("u", Operation::Underline),
    ("U", Operation::Underscore),
    ("k", Operation::Blink),
    ("r", Operation::RapidBlink),
    ("n", Operation::Negative),
    ("c", Operation::Concealed),
    ("s", Operation::Strikethrough),
];

/// Background color codes. Always two characters: `o` plus a color code.
pub const BACKGROUNDS: &[(&str, Operation)] = &[
    ("oB", Operation::OnBlack),
    ("or", Operation::OnRed),
    ("og", Operation::OnGreen),
    ("oy", Operation::OnYellow),
    ("ob", Operation::OnBlue),
    ("om", Operation::OnMagenta),
    ("oc", Operation::OnCyan),
    ("ow", Operation::OnWhite),
];

/// Returns true if `name` is the canonical name of any operation.
///
/// ```rust
/// use colfmt::codes::is_valid_operation;
///
/// assert!(is_valid_operation("on_white"));
/// assert!(!is_valid_operation("ow"));
/// ```
pub fn is_valid_operation(name: &str) -> bool {
    Operation::from_name(name).is_some()
}

/// Resolves a one-character color code. `None` or an empty code yields `Ok(None)`.
pub fn resolve_color(code: Option<&str>) -> Result<Option<Operation>, UnknownCode> {
    lookup(COLORS, code, Category::Color)
}

/// Resolves a one-character style code. `None` or an empty code yields `Ok(None)`.
pub fn resolve_style(code: Option<&str>) -> Result<Option<Operation>, UnknownCode> {
    lookup(STYLES, code, Category::Style)
}

/// Resolves a two-character background code. `None` or an empty code yields `Ok(None)`.
pub fn resolve_background(code: Option<&str>) -> Result<Option<Operation>, UnknownCode> {
    lookup(BACKGROUNDS, code, Category::Background)
}

fn lookup(
    table: &[(&str, Operation)],
    code: Option<&str>,
    category: Category,
) -> Result<Option<Operation>, UnknownCode> {
    let code = match code {
        None | Some("") => return Ok(None),
        Some(code) => code,
    };
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, op)| Some(*op))
        .ok_or_else(|| UnknownCode::new(category, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_every_operation_once() {
        let ops: Vec<Operation> = COLORS
            .iter()
            .chain(STYLES)
            .chain(BACKGROUNDS)
            .map(|(_, op)| *op)
            .collect();
        assert_eq!(ops, Operation::ALL.to_vec());
    }

    #[test]
    fn test_table_categories_match() {
        for (_, op) in COLORS {
            assert_eq!(op.category(), Category::Color);
        }
        for (_, op) in STYLES {
            assert_eq!(op.category(), Category::Style);
        }
        for (_, op) in BACKGROUNDS {
            assert_eq!(op.category(), Category::Background);
        }
    }

    #[test]
    fn test_code_lengths() {
        assert!(COLORS.iter().all(|(code, _)| code.len() == 1));
        assert!(STYLES.iter().all(|(code, _)| code.len() == 1));
        for (code, _) in BACKGROUNDS {
            assert_eq!(code.len(), 2);
            assert!(code.starts_with('o'));
        }
    }

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(resolve_color(Some("g")), Ok(Some(Operation::Green)));
        assert_eq!(resolve_color(Some("B")), Ok(Some(Operation::Black)));
        assert_eq!(resolve_style(Some("U")), Ok(Some(Operation::Underscore)));
        assert_eq!(resolve_style(Some("r")), Ok(Some(Operation::RapidBlink)));
        assert_eq!(resolve_background(Some("ow")), Ok(Some(Operation::OnWhite)));
    }

    #[test]
    fn test_resolve_none_is_never_an_error() {
        assert_eq!(resolve_color(None), Ok(None));
        assert_eq!(resolve_style(Some("")), Ok(None));
        assert_eq!(resolve_background(None), Ok(None));
    }

    #[test]
    fn test_resolve_unknown_code() {
        let err = resolve_color(Some("T")).unwrap_err();
        assert_eq!(err.category, Category::Color);
        assert_eq!(err.code, "T");

        let err = resolve_background(Some("xb")).unwrap_err();
        assert_eq!(err.category, Category::Background);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(resolve_style(Some("B")).is_err());
        assert_eq!(resolve_color(Some("b")), Ok(Some(Operation::Blue)));
    }

    #[test]
    fn test_is_valid_operation() {
        assert!(is_valid_operation("red"));
        assert!(is_valid_operation("strikethrough"));
        assert!(!is_valid_operation("r"));
        assert!(!is_valid_operation("_"));
    }
}
