//! Error types for the ECDSA engine.

use core::fmt;

/// Errors that can occur when constructing an engine or producing keys and
/// signatures.
///
/// Transient conditions (a degenerate `r` or `s`, a rejected key candidate)
/// are retried internally and never surface here; only terminal conditions
/// cross the API boundary. Verification never errors at all — malformed
/// signatures verify as `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// The curve parameters are internally inconsistent.
    ///
    /// Reported at engine construction when the group order is not greater
    /// than one, the generator is the identity or off the curve, or the
    /// generator does not have the stated order.
    InvalidCurve,

    /// The retry cap was reached while drawing scalars.
    ///
    /// Key generation and signing redraw on degenerate values; a correctly
    /// configured curve succeeds on the first draw with overwhelming
    /// probability. Hitting the cap indicates a broken random source or
    /// misconfigured curve parameters, not bad luck.
    AttemptsExhausted,
}

impl fmt::Display for EcdsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcdsaError::InvalidCurve => write!(f, "curve parameters are inconsistent"),
            EcdsaError::AttemptsExhausted => {
                write!(f, "retry cap reached while drawing scalars")
            }
        }
    }
}

impl std::error::Error for EcdsaError {}
