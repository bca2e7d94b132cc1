//! Crate-level error type.

use crate::render::ApplyError;
use crate::spec::DecodeError;

/// Any error from decoding a spec or applying it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
}
