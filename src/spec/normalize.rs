//! Item decoding grammar.

use log::debug;

use super::arity::check_arity;
use super::error::DecodeError;
use super::item::{RawSpec, SpecItem, NO_OP, SEPARATOR};
use super::normalized::NormalizedSpec;
use crate::codes::{resolve_background, resolve_color, resolve_style, Operation, UnknownCode};

/// Longest token that is decoded positionally.
const MAX_POSITIONAL_LEN: usize = 4;

/// Decodes a raw spec for `target_count` strings.
///
/// The result has exactly `target_count` entries. With a single target
/// string, every item is folded into that string's list in order.
///
/// ```rust
/// use colfmt::{decode, Operation};
///
/// let spec = decode("rb,y", 2).unwrap();
/// assert_eq!(spec.get(0), Some(&[Operation::Red, Operation::Bold][..]));
/// assert_eq!(spec.get(1), Some(&[Operation::Yellow][..]));
///
/// let spec = decode("gbow", 1).unwrap();
/// assert_eq!(
///     spec.get(0),
///     Some(&[Operation::Green, Operation::Bold, Operation::OnWhite][..]),
/// );
/// ```
///
/// # Errors
///
/// Returns [`DecodeError::ArityMismatch`] before looking at any item when
/// the counts disagree, otherwise the error for the first bad item.
pub fn decode<S: Into<RawSpec>>(
    spec: S,
    target_count: usize,
) -> Result<NormalizedSpec, DecodeError> {
    let spec = spec.into();
    check_arity(target_count, &spec)?;

    let lists = expand(&spec)
        .into_iter()
        .map(|item| match item {
            Item::Token(token) => normalise_token(token),
            Item::List(names) => normalise_list(names),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let lists = match target_count {
        0 => Vec::new(),
        1 => vec![lists.into_iter().flatten().collect()],
        _ => lists,
    };

    debug!(
        "decoded {} for {} string(s): {:?}",
        spec, target_count, lists
    );
    Ok(NormalizedSpec::new(lists))
}

/// Decodes one item into its operation list.
///
/// A [`SpecItem::Delimited`] string is treated as a single token here; it
/// is only split into fields when it is the whole spec.
pub fn normalise_item(item: &SpecItem) -> Result<Vec<Operation>, DecodeError> {
    match item {
        SpecItem::Token(token) | SpecItem::Delimited(token) => normalise_token(token),
        SpecItem::List(names) => normalise_list(names),
    }
}

enum Item<'a> {
    Token(&'a str),
    List(&'a [String]),
}

fn expand(spec: &RawSpec) -> Vec<Item<'_>> {
    match spec.items() {
        [SpecItem::Delimited(text)] => text.split(SEPARATOR).map(Item::Token).collect(),
        items => items
            .iter()
            .map(|item| match item {
                SpecItem::Token(token) | SpecItem::Delimited(token) => Item::Token(token),
                SpecItem::List(names) => Item::List(names),
            })
            .collect(),
    }
}

/// Explicit lists hold canonical names only. Placeholders are dropped,
/// and no entry is decoded positionally.
fn normalise_list(names: &[String]) -> Result<Vec<Operation>, DecodeError> {
    let mut ops = Vec::with_capacity(names.len());
    let mut invalid = Vec::new();

    for name in names.iter().filter(|name| name.as_str() != NO_OP) {
        match Operation::from_name(name) {
            Some(op) => ops.push(op),
            None => invalid.push(name.clone()),
        }
    }

    match invalid.len() {
        0 => Ok(ops),
        1 => Err(DecodeError::invalid(&invalid[0])),
        _ => Err(DecodeError::InvalidOperations { tokens: invalid }),
    }
}

fn normalise_token(token: &str) -> Result<Vec<Operation>, DecodeError> {
    if token == NO_OP {
        return Ok(Vec::new());
    }
    // Canonical names go first: several are longer than four characters.
    if let Some(op) = Operation::from_name(token) {
        return Ok(vec![op]);
    }

    let len = token.chars().count();
    if !(1..=MAX_POSITIONAL_LEN).contains(&len) {
        return Err(DecodeError::invalid(token));
    }

    decode_positional(token)
        .map_err(|cause| DecodeError::invalid_code(token, cause))
}

/// Decodes `<color><style><background>`, e.g. `gbow`, `_b`, `__ob`.
fn decode_positional(token: &str) -> Result<Vec<Operation>, UnknownCode> {
    let (color, style, background) = extract(token);

    let slots = [
        resolve_color(color.as_deref())?,
        resolve_style(style.as_deref())?,
        resolve_background(background.as_deref())?,
    ];
    Ok(slots.into_iter().flatten().collect())
}

/// Splits a token into its three slots, padding short tokens with blanks.
/// Blank and `_` slots come back as `None`.
fn extract(token: &str) -> (Option<String>, Option<String>, Option<String>) {
    let mut chars = token.chars().chain(std::iter::repeat(' '));
    let mut next = || chars.next().unwrap_or(' ');

    let color = next();
    let style = next();
    let background: String = [next(), next()].iter().collect();

    let single = |c: char| (c != ' ' && c != '_').then(|| c.to_string());
    let blank = background == "  " || background == "__";
    let background = (!blank).then_some(background);

    (single(color), single(style), background)
}
