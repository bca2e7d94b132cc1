//! One-call formatting helpers.
//!
//! These wrap [`decode`] and [`apply`] for the common case where a spec
//! is used once:
//!
//! ```rust
//! use colfmt::{Col, OutputMode, ConsoleRenderer};
//!
//! let renderer = ConsoleRenderer::new(OutputMode::TermDebug);
//! let col = Col::new(["Name: ", "Peter"]).with_renderer(renderer);
//! assert_eq!(col.style("_,rb").unwrap(), "Name: [bold][red]Peter[/red][/bold]");
//! assert_eq!(col.to_string(), "Name: Peter");
//! ```

use std::fmt;

use crate::error::Error;
use crate::render::{apply, ConsoleRenderer, Render};
use crate::spec::{decode, RawSpec};

/// A group of strings waiting to be styled by one spec.
#[derive(Debug, Clone)]
pub struct Col<R = ConsoleRenderer> {
    strings: Vec<String>,
    renderer: R,
}

impl Col {
    /// Collects the target strings. Each value is converted with `Display`.
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        Self {
            strings: values.into_iter().map(|v| v.to_string()).collect(),
            renderer: ConsoleRenderer::default(),
        }
    }
}

impl<R: Render> Col<R> {
    /// Replaces the renderer used by [`Col::style`].
    pub fn with_renderer<T: Render>(self, renderer: T) -> Col<T> {
        Col {
            strings: self.strings,
            renderer,
        }
    }

    /// Returns the target strings.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Decodes `spec` for these strings and returns the styled result.
    pub fn style<S: Into<RawSpec>>(&self, spec: S) -> Result<String, Error> {
        format_with(&self.strings, spec, &self.renderer)
    }
}

impl<R> fmt::Display for Col<R> {
    /// Writes the strings joined, unstyled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.strings {
            f.write_str(s)?;
        }
        Ok(())
    }
}

/// Decodes and applies `spec` with the default renderer.
///
/// ```rust
/// assert_eq!(colfmt::format(&["abc", "123"], "_,_").unwrap(), "abc123");
/// ```
pub fn format<T, S>(targets: &[T], spec: S) -> Result<String, Error>
where
    T: AsRef<str>,
    S: Into<RawSpec>,
{
    format_with(targets, spec, &ConsoleRenderer::default())
}

/// Decodes and applies `spec` with a caller-supplied renderer.
pub fn format_with<T, S, R>(targets: &[T], spec: S, renderer: &R) -> Result<String, Error>
where
    T: AsRef<str>,
    S: Into<RawSpec>,
    R: Render + ?Sized,
{
    let decoded = decode(spec, targets.len())?;
    Ok(apply(&decoded, targets, renderer)?)
}

/// Styles `(text, spec)` pairs, each spec applying to its own text only.
///
/// ```rust
/// use colfmt::{inline_with, ConsoleRenderer, OutputMode};
///
/// let renderer = ConsoleRenderer::new(OutputMode::TermDebug);
/// let out = inline_with([("foo", "b"), ("qux", "_")], &renderer).unwrap();
/// assert_eq!(out, "[blue]foo[/blue]qux");
/// ```
pub fn inline<I, T, S>(pairs: I) -> Result<String, Error>
where
    I: IntoIterator<Item = (T, S)>,
    T: fmt::Display,
    S: Into<RawSpec>,
{
    inline_with(pairs, &ConsoleRenderer::default())
}

/// Like [`inline`], with a caller-supplied renderer.
pub fn inline_with<I, T, S, R>(pairs: I, renderer: &R) -> Result<String, Error>
where
    I: IntoIterator<Item = (T, S)>,
    T: fmt::Display,
    S: Into<RawSpec>,
    R: Render + ?Sized,
{
    let mut out = String::new();
    for (text, spec) in pairs {
        let styled = format_with(&[text.to_string()], spec, renderer)?;
        out.push_str(&styled);
    }
    Ok(out)
}

/// Removes ANSI escape sequences, e.g. from a previously styled string.
///
/// ```rust
/// assert_eq!(colfmt::plain("\x1b[1;4;37;41mfoo\x1b[0m"), "foo");
/// ```
pub fn plain(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}
