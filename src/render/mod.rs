//! Applying decoded specs to strings.
//!
//! - [`apply`]: fold each target string through its operation list
//! - [`Render`]: the per-operation styling capability `apply` calls
//! - [`ConsoleRenderer`]: the default `Render`, backed by `console`
//! - [`OutputMode`]: whether `ConsoleRenderer` emits ANSI, plain text, or debug tags

mod apply;
mod error;
#[cfg(feature = "minijinja")]
mod filters;
mod output;
mod renderer;

pub use apply::apply;
pub use error::ApplyError;
#[cfg(feature = "minijinja")]
pub use filters::register_filters;
pub use output::OutputMode;
pub use renderer::{style_for, ConsoleRenderer, Render};
