//! Signature type for the ECDSA scheme.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// An ECDSA signature, the scalar pair `(r, s)`.
///
/// A validly produced signature has both components in `[1, order - 1]`:
/// `r` is the x-coordinate of the ephemeral point `k * G` reduced modulo the
/// group order, and `s = k^{-1} * (message + r * d) mod order` for signing
/// key `d`. Verification recomputes the ephemeral point from `(r, s)` and
/// the public key and compares x-coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The reduced x-coordinate of the ephemeral point
    pub r: BigUint,
    /// The response scalar binding message and signing key
    pub s: BigUint,
}
