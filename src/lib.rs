//! # colfmt - shorthand styling for terminal strings
//!
//! `colfmt` turns compact, human-written style specs like `"rb"`, `"_ow"`
//! or `"cUob"` into ordered lists of canonical style operations, and
//! applies them to strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use colfmt::{apply, decode, ConsoleRenderer, OutputMode};
//!
//! // One spec item per string: "one" red+bold, "two" yellow
//! let spec = decode("rb,y", 2).unwrap();
//!
//! let renderer = ConsoleRenderer::new(OutputMode::TermDebug);
//! let out = apply(&spec, &["one", "two"], &renderer).unwrap();
//! assert_eq!(out, "[bold][red]one[/red][/bold][yellow]two[/yellow]");
//! ```
//!
//! ## Spec Syntax
//!
//! A token is decoded in this order:
//!
//! 1. `_` means "leave this string unstyled"
//! 2. A canonical name (`bold`, `on_red`, `rapid_blink`) stands for itself
//! 3. Otherwise up to four characters are read positionally as
//!    `<color><style><background>`, where `_` or a missing character skips
//!    a slot: `gbow` is green, bold, on white; `_b` is bold; `__ob` is on blue
//!
//! | Color | | Style | | Background | |
//! |---|---|---|---|---|---|
//! | `B` | black | `b` | bold | `oB` | on_black |
//! | `r` | red | `d` | dark | `or` | on_red |
//! | `g` | green | `i` | italic | `og` | on_green |
//! | `y` | yellow | `u` | underline | `oy` | on_yellow |
//! | `b` | blue | `U` | underscore | `ob` | on_blue |
//! | `m` | magenta | `k` | blink | `om` | on_magenta |
//! | `c` | cyan | `r` | rapid_blink | `oc` | on_cyan |
//! | `w` | white | `n` | negative | `ow` | on_white |
//! | | | `c` | concealed | | |
//! | | | `s` | strikethrough | | |
//!
//! A spec is one comma-separated string (`"rb,y,_,g_ow"`), or a list of
//! items where each item is a token or an explicit list of canonical names
//! (`[["red", "bold"], "y"]`). There must be one item per string, except
//! that a single string accepts any number of items, applied in order.
//!
//! ## Modules
//!
//! - [`codes`]: canonical operations and code tables
//! - [`spec`]: raw spec types and the decoder
//! - [`render`]: applying decoded specs through a [`Render`] implementation

pub mod codes;
mod col;
mod error;
pub mod render;
pub mod spec;

pub use codes::{Category, Operation, UnknownCode};
pub use col::{format, format_with, inline, inline_with, plain, Col};
pub use error::Error;
#[cfg(feature = "minijinja")]
pub use render::register_filters;
pub use render::{apply, ApplyError, ConsoleRenderer, OutputMode, Render};
pub use spec::{check_arity, decode, DecodeError, NormalizedSpec, RawSpec, SpecItem};
