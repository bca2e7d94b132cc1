//! Canonical style operations.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The table a canonical operation belongs to.
///
/// The three categories are disjoint: every [`Operation`] has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Foreground colors, one-character codes.
    Color,
    /// Text attributes, one-character codes.
    Style,
    /// Background colors, two-character codes starting with `o`.
    Background,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Color => "color",
            Category::Style => "style",
            Category::Background => "background color",
        };
        f.write_str(name)
    }
}

/// A canonical style operation.
///
/// Serializes as its snake_case name, so `Operation::OnWhite` round-trips
/// through `"on_white"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    Bold,
    Dark,
    Italic,
    Underline,
    Underscore,
    Blink,
    RapidBlink,
    Negative,
    Concealed,
    Strikethrough,

    OnBlack,
    OnRed,
    OnGreen,
    OnYellow,
    OnBlue,
    OnMagenta,
    OnCyan,
    OnWhite,
}

static BY_NAME: Lazy<HashMap<&'static str, Operation>> = Lazy::new(|| {
    Operation::ALL.iter().map(|op| (op.name(), *op)).collect()
});

impl Operation {
    /// Every operation, colors first, then styles, then backgrounds.
    pub const ALL: [Operation; 26] = [
        Operation::Black,
        Operation::Red,
        Operation::Green,
        Operation::Yellow,
        Operation::Blue,
        Operation::Magenta,
        Operation::Cyan,
        Operation::White,
        Operation::Bold,
        Operation::Dark,
        Operation::Italic,
        Operation::Underline,
        Operation::Underscore,
        Operation::Blink,
        Operation::RapidBlink,
        Operation::Negative,
        Operation::Concealed,
        Operation::Strikethrough,
        Operation::OnBlack,
        Operation::OnRed,
        Operation::OnGreen,
        Operation::OnYellow,
        Operation::OnBlue,
        Operation::OnMagenta,
        Operation::OnCyan,
        Operation::OnWhite,
    ];

    /// Returns the canonical name, e.g. `"rapid_blink"`.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Black => "black",
            Operation::Red => "red",
            Operation::Green => "green",
            Operation::Yellow => "yellow",
            Operation::Blue => "blue",
            Operation::Magenta => "magenta",
            Operation::Cyan => "cyan",
            Operation::White => "white",
            Operation::Bold => "bold",
            Operation::Dark => "dark",
            Operation::Italic => "italic",
            Operation::Underline => "underline",
            Operation::Underscore => "underscore",
            Operation::Blink => "blink",
            Operation::RapidBlink => "rapid_blink",
            Operation::Negative => "negative",
            Operation::Concealed => "concealed",
            Operation::Strikethrough => "strikethrough",
            Operation::OnBlack => "on_black",
            Operation::OnRed => "on_red",
            Operation::OnGreen => "on_green",
            Operation::OnYellow => "on_yellow",
            Operation::OnBlue => "on_blue",
            Operation::OnMagenta => "on_magenta",
            Operation::OnCyan => "on_cyan",
            Operation::OnWhite => "on_white",
        }
    }

    /// Returns the table this operation belongs to.
    pub fn category(&self) -> Category {
        use Operation::*;
        match self {
            Black | Red | Green | Yellow | Blue | Magenta | Cyan | White => Category::Color,
            Bold | Dark | Italic | Underline | Underscore | Blink | RapidBlink | Negative
            | Concealed | Strikethrough => Category::Style,
            OnBlack | OnRed | OnGreen | OnYellow | OnBlue | OnMagenta | OnCyan | OnWhite => {
                Category::Background
            }
        }
    }

    /// Looks up an operation by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Operation> {
        BY_NAME.get(name).copied()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Operation::from_name(s) {
            Some(op) => Ok(op),
            None => Err(format!("unknown operation '{}'", s)),
        }
    }
}
