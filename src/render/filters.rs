//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use super::apply::apply;
use super::output::OutputMode;
use super::renderer::ConsoleRenderer;
use crate::spec::decode;

/// Registers the `col` filter on a minijinja environment.
///
/// The filter decodes its argument as a spec for one string:
/// `{{ name | col("rb") }}` renders `name` red and bold.
///
/// ```rust
/// use colfmt::{register_filters, OutputMode};
/// use minijinja::{context, Environment};
///
/// let mut env = Environment::new();
/// register_filters(&mut env, OutputMode::TermDebug);
/// let out = env
///     .render_str(r#"{{ who | col("_b") }}"#, context! { who => "world" })
///     .unwrap();
/// assert_eq!(out, "[bold]world[/bold]");
/// ```
pub fn register_filters(env: &mut Environment<'_>, mode: OutputMode) {
    let renderer = ConsoleRenderer::new(mode);

    let col = move |value: Value, spec: String| -> Result<String, Error> {
        let text = value.to_string();
        let decoded = decode(spec.as_str(), 1).map_err(invalid_operation)?;
        let styled = apply(&decoded, &[text], &renderer);
        styled.map_err(invalid_operation)
    };
    env.add_filter("col", col);
}

fn invalid_operation<E: std::fmt::Display>(err: E) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}
