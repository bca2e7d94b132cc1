//! Output mode selection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Controls how [`ConsoleRenderer`](super::ConsoleRenderer) styles text.
///
/// # Example
///
/// ```rust
/// use colfmt::OutputMode;
///
/// let mode: OutputMode = "term-debug".parse().unwrap();
/// assert!(mode.is_debug());
/// assert!(!OutputMode::Text.should_use_color());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Let `console` decide from the terminal whether to emit ANSI codes.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Term,
    /// Never style; operations leave text unchanged.
    Text,
    /// Wrap text in `[name]...[/name]` markers instead of ANSI codes.
    TermDebug,
}

impl OutputMode {
    /// Returns true if this mode writes ANSI escape sequences.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    /// Returns true for the debug mode that renders operation names as tags.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    fn name(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}
