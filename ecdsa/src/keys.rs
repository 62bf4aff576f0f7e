//! Signing and verifying keys for the ECDSA scheme.

use curve::Point;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A secret signing key: a scalar `d` in `[1, order - 1]`.
///
/// Produced by [`Ecdsa::generate_keys`](crate::Ecdsa::generate_keys). It
/// must be kept secret; a single leaked signing key, or a single reused
/// signing nonce, forfeits every signature made under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key: the point `Q = d * G`.
///
/// Derived deterministically from the signing key and shared freely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Point,
}

impl SigningKey {
    /// Wrap a raw scalar as a signing key.
    ///
    /// The scalar must lie in `[1, order - 1]` for the group the key will be
    /// used with; the engine does not re-validate it on every signature.
    pub fn new(scalar: BigUint) -> Self {
        SigningKey { scalar }
    }

    /// The secret scalar.
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }
}

impl VerifyingKey {
    /// Wrap a curve point as a verifying key.
    pub fn new(point: Point) -> Self {
        VerifyingKey { point }
    }

    /// The public point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}
