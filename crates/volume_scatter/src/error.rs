//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Malformed inputs surface as [`Error::InvalidArgument`]; bounded rejection samplers
//! that run out of attempts surface as [`Error::SamplingExhausted`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A radius, extent or attempt budget was rejected before any sampling happened.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A rejection sampler used its whole attempt budget without an acceptable value.
    #[error("sampling exhausted after {attempts} attempts: {what}")]
    SamplingExhausted { attempts: usize, what: String },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn exhausted(attempts: usize, what: impl Into<String>) -> Self {
        Error::SamplingExhausted {
            attempts,
            what: what.into(),
        }
    }

    /// Returns true for [`Error::SamplingExhausted`], which callers may retry with fresh draws.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::SamplingExhausted { .. })
    }
}

/// Fails with [`Error::InvalidArgument`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{name} must be finite and > 0 (got {value})"
        )))
    }
}
