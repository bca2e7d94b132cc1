//! Application errors.

/// Error returned when a decoded spec does not fit the target strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// The spec was decoded for a different number of strings.
    #[error("mismatching strings and specs: {specs} spec(s) for {strings} string(s)")]
    MismatchedTargets {
        /// Operation lists in the decoded spec
        specs: usize,
        /// Target strings supplied
        strings: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_targets_display() {
        let err = ApplyError::MismatchedTargets {
            specs: 2,
            strings: 3,
        };
        assert_eq!(
            err.to_string(),
            "mismatching strings and specs: 2 spec(s) for 3 string(s)"
        );
    }
}
