//! Folding target strings through their operation lists.

use log::debug;

use super::error::ApplyError;
use super::renderer::Render;
use crate::spec::NormalizedSpec;

/// Applies a decoded spec to the target strings and joins the results.
///
/// Each string is passed through its operations left to right, every
/// operation seeing the output of the previous one. The styled strings
/// are concatenated in target order with no separator.
///
/// ```rust
/// use colfmt::{apply, decode, ConsoleRenderer, OutputMode};
///
/// let renderer = ConsoleRenderer::new(OutputMode::TermDebug);
/// let spec = decode("rb,_", 2).unwrap();
/// let out = apply(&spec, &["one", "two"], &renderer).unwrap();
/// assert_eq!(out, "[bold][red]one[/red][/bold]two");
/// ```
///
/// # Errors
///
/// Returns [`ApplyError::MismatchedTargets`] if `spec` was decoded for a
/// different number of strings than `targets` holds.
pub fn apply<S, R>(spec: &NormalizedSpec, targets: &[S], renderer: &R) -> Result<String, ApplyError>
where
    S: AsRef<str>,
    R: Render + ?Sized,
{
    if spec.len() != targets.len() {
        return Err(ApplyError::MismatchedTargets {
            specs: spec.len(),
            strings: targets.len(),
        });
    }

    let mut out = String::new();
    for (target, ops) in targets.iter().zip(spec.iter()) {
        let mut styled = target.as_ref().to_string();
        for op in ops {
            styled = renderer.render(*op, &styled);
        }
        out.push_str(&styled);
    }

    debug!("applied spec to {} string(s)", targets.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Operation;
    use crate::spec::{decode, RawSpec};

    fn tag(op: Operation, text: &str) -> String {
        format!("{}({})", op, text)
    }

    #[test]
    fn test_operations_compose_left_to_right() {
        let spec = decode("rb,y", 2).unwrap();
        let out = apply(&spec, &["one", "two"], &tag).unwrap();
        assert_eq!(out, "bold(red(one))yellow(two)");
    }

    #[test]
    fn test_empty_lists_leave_text_unchanged() {
        let spec = decode("_", 1).unwrap();
        assert_eq!(apply(&spec, &["hello"], &tag).unwrap(), "hello");
    }

    #[test]
    fn test_zero_targets() {
        let spec = decode(RawSpec::default(), 0).unwrap();
        let targets: [&str; 0] = [];
        assert_eq!(apply(&spec, &targets, &tag).unwrap(), "");
    }

    #[test]
    fn test_mismatched_targets() {
        let spec = decode("rb,y", 2).unwrap();
        let err = apply(&spec, &["only"], &tag).unwrap_err();
        assert_eq!(
            err,
            ApplyError::MismatchedTargets {
                specs: 2,
                strings: 1
            }
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let spec = decode("_,_", 2).unwrap();
        let targets = vec!["abc".to_string(), "123".to_string()];
        assert_eq!(apply(&spec, &targets, &tag).unwrap(), "abc123");
    }
}
