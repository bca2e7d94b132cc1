//! Raw spec items as written by callers.

use std::fmt;

use serde::Deserialize;

/// The token that means "leave this string unstyled".
pub const NO_OP: &str = "_";

/// Separator between fields of a delimited spec string.
pub const SEPARATOR: char = ',';

/// One item of a raw spec.
///
/// Converting from text picks the variant by content: text containing
/// [`SEPARATOR`] becomes [`SpecItem::Delimited`], anything else a
/// [`SpecItem::Token`].
///
/// ```rust
/// use colfmt::SpecItem;
///
/// assert_eq!(SpecItem::from("rb"), SpecItem::Token("rb".into()));
/// assert_eq!(SpecItem::from("rb,y"), SpecItem::Delimited("rb,y".into()));
/// assert_eq!(
///     SpecItem::from(["red", "bold"]),
///     SpecItem::List(vec!["red".into(), "bold".into()]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TextOrList")]
pub enum SpecItem {
    /// A bare token: `_`, a canonical name, or a positional code like `gbow`.
    Token(String),
    /// Several tokens joined by [`SEPARATOR`], e.g. `"rb,y,_"`.
    Delimited(String),
    /// Canonical operation names, already split.
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl From<TextOrList> for SpecItem {
    fn from(value: TextOrList) -> Self {
        match value {
            TextOrList::Text(text) => SpecItem::from(text),
            TextOrList::List(names) => SpecItem::List(names),
        }
    }
}

impl From<String> for SpecItem {
    fn from(text: String) -> Self {
        if text.contains(SEPARATOR) {
            SpecItem::Delimited(text)
        } else {
            SpecItem::Token(text)
        }
    }
}

impl From<&str> for SpecItem {
    fn from(text: &str) -> Self {
        SpecItem::from(text.to_string())
    }
}

impl From<Vec<String>> for SpecItem {
    fn from(names: Vec<String>) -> Self {
        SpecItem::List(names)
    }
}

impl From<Vec<&str>> for SpecItem {
    fn from(names: Vec<&str>) -> Self {
        SpecItem::List(names.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SpecItem {
    fn from(names: [&str; N]) -> Self {
        SpecItem::List(names.iter().map(|name| name.to_string()).collect())
    }
}

impl fmt::Display for SpecItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecItem::Token(text) | SpecItem::Delimited(text) => write!(f, "{:?}", text),
            SpecItem::List(names) => write!(f, "{:?}", names),
        }
    }
}

/// A complete raw spec: the ordered items a caller supplied.
///
/// Deserializes from either a single string or a sequence whose entries
/// are strings or lists of names:
///
/// ```rust
/// use colfmt::{RawSpec, SpecItem};
///
/// let spec: RawSpec = serde_json::from_str(r#"["rb", ["red", "bold"]]"#).unwrap();
/// assert_eq!(spec.items()[1], SpecItem::from(["red", "bold"]));
///
/// let spec: RawSpec = serde_json::from_str(r#""rb,y""#).unwrap();
/// assert_eq!(spec, RawSpec::from("rb,y"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct RawSpec {
    items: Vec<SpecItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<SpecItem>),
    One(SpecItem),
}

impl From<OneOrMany> for RawSpec {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(items) => RawSpec { items },
            OneOrMany::One(item) => RawSpec { items: vec![item] },
        }
    }
}

impl RawSpec {
    /// Creates a spec from items.
    pub fn new(items: Vec<SpecItem>) -> Self {
        Self { items }
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[SpecItem] {
        &self.items
    }

    /// Number of items as given, before any delimited string is split.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<SpecItem> for RawSpec {
    fn from(item: SpecItem) -> Self {
        RawSpec { items: vec![item] }
    }
}

impl From<&str> for RawSpec {
    fn from(text: &str) -> Self {
        RawSpec::from(SpecItem::from(text))
    }
}

impl From<String> for RawSpec {
    fn from(text: String) -> Self {
        RawSpec::from(SpecItem::from(text))
    }
}

impl<T: Into<SpecItem>> From<Vec<T>> for RawSpec {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<SpecItem>, const N: usize> From<[T; N]> for RawSpec {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<SpecItem>> FromIterator<T> for RawSpec {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RawSpec {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for RawSpec {
    /// Shows the lone item when there is exactly one, otherwise the list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [item] = self.items.as_slice() {
            return write!(f, "{}", item);
        }
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_variant_selection() {
        assert_eq!(SpecItem::from("_"), SpecItem::Token("_".into()));
        assert_eq!(SpecItem::from("_,_"), SpecItem::Delimited("_,_".into()));
        assert_eq!(
            SpecItem::from(String::from("bold")),
            SpecItem::Token("bold".into())
        );
    }

    #[test]
    fn test_raw_spec_from_array_of_tokens() {
        let spec = RawSpec::from(["b", "r", "g", "cbow"]);
        assert_eq!(spec.len(), 4);
        assert!(spec.items().iter().all(|i| matches!(i, SpecItem::Token(_))));
    }

    #[test]
    fn test_raw_spec_mixed_items() {
        let spec = RawSpec::new(vec![SpecItem::from(["green", "concealed"]), "b".into()]);
        assert_eq!(spec.len(), 2);
        assert!(matches!(spec.items()[0], SpecItem::List(_)));
    }

    #[test]
    fn test_display_single_item() {
        assert_eq!(RawSpec::from("b").to_string(), "\"b\"");
        assert_eq!(RawSpec::from("rb,y").to_string(), "\"rb,y\"");
    }

    #[test]
    fn test_display_many_items() {
        let spec = RawSpec::new(vec!["b".into(), SpecItem::from(["red", "bold"])]);
        assert_eq!(spec.to_string(), "[\"b\", [\"red\", \"bold\"]]");
        assert_eq!(RawSpec::default().to_string(), "[]");
    }

    #[test]
    fn test_deserialize_nested_list() {
        let spec: RawSpec = serde_json::from_str(r#"[["red", "bold"], "_"]"#).unwrap();
        assert_eq!(
            spec,
            RawSpec::new(vec![SpecItem::from(["red", "bold"]), SpecItem::from("_")])
        );
    }

    #[test]
    fn test_deserialize_flat_list_is_tokens() {
        let spec: RawSpec = serde_json::from_str(r#"["rb", "y"]"#).unwrap();
        assert_eq!(spec, RawSpec::from(["rb", "y"]));
    }

    #[test]
    fn test_deserialize_rejects_numbers() {
        assert!(serde_json::from_str::<RawSpec>("42").is_err());
    }
}
