//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into `NavError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("route has no legs")]
    EmptyRoute,

    #[error("leg {0} has no steps")]
    EmptyLeg(usize),

    #[error("step {step} of leg {leg} has an empty geometry")]
    EmptyStepGeometry { leg: usize, step: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
