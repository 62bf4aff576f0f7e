//! ECDSA over a generic short-Weierstrass elliptic-curve group.
//!
//! This library implements the Elliptic Curve Digital Signature Algorithm:
//! - Key-pair generation with full public-point validation
//! - Message signing with a fresh ephemeral scalar per signature
//! - Deterministic boolean verification, safe on adversarial input
//!
//! The curve itself is a collaborator, consumed through the
//! [`curve::Group`] trait: any cyclic group of known prime order with a
//! fixed generator works, and the bundled [`curve::WeierstrassCurve`]
//! provides the standard secp256k1 instantiation.
//!
//! # Example
//!
//! ```
//! use curve::WeierstrassCurve;
//! use ecdsa::Ecdsa;
//! use num_bigint::BigUint;
//!
//! // Bind an engine to a curve; construction validates the parameters.
//! let engine = Ecdsa::new(WeierstrassCurve::secp256k1()).expect("standard curve");
//! let mut rng = rand::rng();
//!
//! // Generate a key pair.
//! let (signing_key, verifying_key) = engine.generate_keys(&mut rng).expect("keygen");
//!
//! // Sign a pre-digested message integer.
//! let message = BigUint::parse_bytes(b"1234deadbeef", 16).expect("hex");
//! let signature = engine.sign(&mut rng, &message, &signing_key).expect("sign");
//!
//! // Verify the signature.
//! assert!(engine.verify(&signature, &message, &verifying_key));
//!
//! // Any other message fails.
//! assert!(!engine.verify(&signature, &(message + 1u32), &verifying_key));
//! ```
//!
//! # Security Considerations
//!
//! - Always supply a cryptographically secure random number generator
//! - Every signature draws a fresh ephemeral scalar; a reused nonce leaks
//!   the signing key through simple algebra on two signatures
//! - Messages are caller-supplied integers, expected to be digests; this
//!   crate performs no hashing
//! - The arithmetic here is not constant-time and the scheme is not
//!   hardened against side channels

mod constants;
mod engine;
mod errors;
mod keys;
mod signatures;

#[cfg(test)]
mod tests;

pub use constants::{MAX_KEYGEN_ATTEMPTS, MAX_SIGN_ATTEMPTS};
pub use engine::Ecdsa;
pub use errors::EcdsaError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::Signature;
