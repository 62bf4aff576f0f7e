//! Elliptic-curve groups over prime fields in short-Weierstrass form.
//!
//! This crate provides a tagged affine point type, the [`Group`] contract
//! that signature schemes consume, a runtime-parameterized
//! [`WeierstrassCurve`] implementation of it (with the secp256k1 parameters
//! built in), and helpers for modular arithmetic and uniform scalar
//! sampling.

mod arith;
mod group;
mod point;
mod random;
mod weierstrass;

pub use arith::{mod_inverse, mod_sub};
pub use group::Group;
pub use point::Point;
pub use random::random_scalar;
pub use weierstrass::WeierstrassCurve;
