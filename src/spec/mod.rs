//! Spec decoding.
//!
//! A raw spec is what a caller writes: `"rb,y,_,g_ow"`, `["rb", "y"]`, or a
//! mixture of tokens and explicit lists of canonical names. Decoding turns
//! it into a [`NormalizedSpec`], one ordered list of [`Operation`]s per
//! target string.
//!
//! Decoding happens in two steps:
//!
//! 1. [`check_arity`] compares the number of spec items against the number
//!    of target strings. A single string accepts any number of items.
//! 2. Each item is decoded on its own. A token is tried as the no-op
//!    placeholder `_`, then as a canonical name, then positionally as
//!    `<color><style><background>`.
//!
//! Decoding is all-or-nothing: the first bad item aborts with a
//! [`DecodeError`].
//!
//! [`Operation`]: crate::codes::Operation

mod arity;
mod error;
mod item;
mod normalize;
mod normalized;

pub use arity::{check_arity, effective_count};
pub use error::DecodeError;
pub use item::{RawSpec, SpecItem, NO_OP, SEPARATOR};
pub use normalize::{decode, normalise_item};
pub use normalized::NormalizedSpec;
