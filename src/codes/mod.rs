//! Short code dictionary.
//!
//! This module owns the closed set of canonical operations and the three
//! code tables used to decode shorthand tokens:
//!
//! - [`Operation`]: one canonical style operation (`red`, `bold`, `on_white`)
//! - [`Category`]: which table an operation belongs to
//! - [`resolve_color`], [`resolve_style`], [`resolve_background`]: code lookups
//! - [`UnknownCode`]: a code that is not present in its table

mod error;
mod operation;
mod table;

pub use error::UnknownCode;
pub use operation::{Category, Operation};
pub use table::{
    is_valid_operation, resolve_background, resolve_color, resolve_style, BACKGROUNDS, COLORS,
    STYLES,
};
