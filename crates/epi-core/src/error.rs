//! Core error type.
//!
//! The simulation itself is infallible — every random draw is a bounded
//! probability roll.  Errors exist only at the configuration boundary, where
//! the controller rejects caller-contract violations before a run starts.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for the other
/// `epi-*` crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("parameter `{name}` out of range: {value} (expected {expected})")]
    ParamOutOfRange {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
