//! Decoded spec type.

use serde::Serialize;

use crate::codes::Operation;

/// One ordered operation list per target string.
///
/// Produced by [`decode`](super::decode). The order within a list is the
/// order the operations are applied in. An empty list leaves its string
/// unstyled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSpec(Vec<Vec<Operation>>);

impl NormalizedSpec {
    pub(crate) fn new(lists: Vec<Vec<Operation>>) -> Self {
        Self(lists)
    }

    /// Number of target strings this spec was decoded for.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the spec was decoded for zero strings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the operation list for the string at `index`.
    pub fn get(&self, index: usize) -> Option<&[Operation]> {
        self.0.get(index).map(Vec::as_slice)
    }

    /// Iterates over the per-string operation lists.
    pub fn iter(&self) -> impl Iterator<Item = &[Operation]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Consumes the spec, returning the raw lists.
    pub fn into_inner(self) -> Vec<Vec<Operation>> {
        self.0
    }
}

impl AsRef<[Vec<Operation>]> for NormalizedSpec {
    fn as_ref(&self) -> &[Vec<Operation>] {
        &self.0
    }
}
