//! Engine-wide base error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CtError` via `From` impls, or keep them separate and wrap `CtError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{BuildingId, CitizenId};

/// The top-level error type for `ct-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CtError {
    #[error("citizen {0} not found")]
    CitizenNotFound(CitizenId),

    #[error("building {0} not found")]
    BuildingNotFound(BuildingId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ct-*` crates.
pub type CtResult<T> = Result<T, CtError>;
