//! Style renderers.

use console::Style;
use log::trace;

use super::output::OutputMode;
use crate::codes::Operation;

/// Applies one canonical operation to a string.
///
/// Implementations must be pure: the same operation and text always give
/// the same output. Closures of the right shape implement this trait.
///
/// ```rust
/// use colfmt::{Operation, Render};
///
/// let upper = |_op: Operation, text: &str| text.to_uppercase();
/// assert_eq!(upper.render(Operation::Red, "hi"), "HI");
/// ```
pub trait Render {
    /// Returns `text` transformed by `op`.
    fn render(&self, op: Operation, text: &str) -> String;
}

impl<F> Render for F
where
    F: Fn(Operation, &str) -> String,
{
    fn render(&self, op: Operation, text: &str) -> String {
        self(op, text)
    }
}

/// Renders operations as ANSI escape sequences using `console`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleRenderer {
    mode: OutputMode,
}

impl ConsoleRenderer {
    /// Creates a renderer for the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Returns the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl Render for ConsoleRenderer {
    fn render(&self, op: Operation, text: &str) -> String {
        trace!("applying {} in {} mode", op, self.mode);
        match self.mode {
            OutputMode::Text => text.to_string(),
            OutputMode::TermDebug => format!("[{op}]{text}[/{op}]"),
            OutputMode::Term => style_for(op).force_styling(true).apply_to(text).to_string(),
            OutputMode::Auto => style_for(op).apply_to(text).to_string(),
        }
    }
}

/// Returns the `console` style for an operation.
///
/// `underline` and `underscore` are the same attribute.
pub fn style_for(op: Operation) -> Style {
    let style = Style::new();
    match op {
        Operation::Black => style.black(),
        Operation::Red => style.red(),
        Operation::Green => style.green(),
        Operation::Yellow => style.yellow(),
        Operation::Blue => style.blue(),
        Operation::Magenta => style.magenta(),
        Operation::Cyan => style.cyan(),
        Operation::White => style.white(),
        Operation::Bold => style.bold(),
        Operation::Dark => style.dim(),
        Operation::Italic => style.italic(),
        Operation::Underline | Operation::Underscore => style.underlined(),
        Operation::Blink => style.blink(),
        Operation::RapidBlink => style.blink_fast(),
        Operation::Negative => style.reverse(),
        Operation::Concealed => style.hidden(),
        Operation::Strikethrough => style.strikethrough(),
        Operation::OnBlack => style.on_black(),
        Operation::OnRed => style.on_red(),
        Operation::OnGreen => style.on_green(),
        Operation::OnYellow => style.on_yellow(),
        Operation::OnBlue => style.on_blue(),
        Operation::OnMagenta => style.on_magenta(),
        Operation::OnCyan => style.on_cyan(),
        Operation::OnWhite => style.on_white(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mode_is_identity() {
        let renderer = ConsoleRenderer::new(OutputMode::Text);
        for op in Operation::ALL {
            assert_eq!(renderer.render(op, "plain"), "plain");
        }
    }

    #[test]
    fn test_debug_mode_tags() {
        let renderer = ConsoleRenderer::new(OutputMode::TermDebug);
        assert_eq!(
            renderer.render(Operation::OnWhite, "x"),
            "[on_white]x[/on_white]"
        );
    }

    #[test]
    fn test_term_mode_emits_ansi() {
        let renderer = ConsoleRenderer::new(OutputMode::Term);
        let red = renderer.render(Operation::Red, "hello");
        assert!(red.contains("\x1b[31m"));
        assert!(red.contains("hello"));

        let bold = renderer.render(Operation::Bold, "hello");
        assert!(bold.contains("\x1b[1m"));

        let on_red = renderer.render(Operation::OnRed, "hello");
        assert!(on_red.contains("\x1b[41m"));
    }

    #[test]
    fn test_term_mode_styles_every_operation() {
        let renderer = ConsoleRenderer::new(OutputMode::Term);
        for op in Operation::ALL {
            let out = renderer.render(op, "x");
            assert!(out.starts_with("\x1b["), "{op} produced {out:?}");
            assert_eq!(console::strip_ansi_codes(&out), "x");
        }
    }

    #[test]
    fn test_closure_renderer() {
        let render = |op: Operation, text: &str| format!("{text}.{op}");
        assert_eq!(render.render(Operation::Bold, "s"), "s.bold");
    }
}
