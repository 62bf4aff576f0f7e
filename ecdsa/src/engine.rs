//! The ECDSA engine: key generation, signing, and verification over an
//! injected elliptic-curve group.

use curve::{Group, mod_inverse, random_scalar};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

use crate::constants::{MAX_KEYGEN_ATTEMPTS, MAX_SIGN_ATTEMPTS};
use crate::errors::EcdsaError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::signatures::Signature;

/// ECDSA over one elliptic-curve group instance.
///
/// The engine owns an immutable copy of the group it was constructed with
/// and reads nothing else; every operation is pure apart from consuming the
/// caller's random source, so one engine can serve any number of threads.
/// Engines over different curves are fully independent.
///
/// # Example
///
/// ```
/// use curve::WeierstrassCurve;
/// use ecdsa::Ecdsa;
/// use num_bigint::BigUint;
///
/// let engine = Ecdsa::new(WeierstrassCurve::secp256k1()).expect("standard curve");
/// let mut rng = rand::rng();
///
/// let (signing_key, verifying_key) = engine.generate_keys(&mut rng).expect("keygen");
/// let message = BigUint::from(0x1234_5678_9abc_u64);
///
/// let signature = engine.sign(&mut rng, &message, &signing_key).expect("sign");
/// assert!(engine.verify(&signature, &message, &verifying_key));
/// ```
#[derive(Clone, Debug)]
pub struct Ecdsa<G: Group> {
    group: G,
}

impl<G: Group> Ecdsa<G> {
    /// Bind an engine to a curve, validating the configuration.
    ///
    /// Checks that the group order exceeds one, that the generator is a
    /// finite on-curve point, and that multiplying the generator by the
    /// order yields the identity. A group failing any of these cannot
    /// produce meaningful signatures, so the error is terminal rather than
    /// retried.
    pub fn new(group: G) -> Result<Self, EcdsaError> {
        if group.order() <= &BigUint::one() {
            return Err(EcdsaError::InvalidCurve);
        }

        let generator = group.generator();
        if group.is_identity(generator) || !group.is_on_curve(generator) {
            return Err(EcdsaError::InvalidCurve);
        }
        if !group.is_identity(&group.scalar_mul(group.order(), generator)) {
            return Err(EcdsaError::InvalidCurve);
        }

        Ok(Ecdsa { group })
    }

    /// The group this engine is bound to.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Generate a key pair `(d, Q = d * G)`.
    ///
    /// The secret scalar is drawn uniformly from `[1, order - 1]`. A
    /// candidate is accepted only if its public point is finite, has both
    /// coordinates inside the field, lies on the curve, and has the group
    /// order; otherwise the draw is discarded and repeated. Rejection is
    /// vanishingly rare on a well-formed prime-order curve, so hitting the
    /// retry cap reports [`EcdsaError::AttemptsExhausted`].
    pub fn generate_keys<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(SigningKey, VerifyingKey), EcdsaError> {
        retry(MAX_KEYGEN_ATTEMPTS, || {
            let d = random_scalar(self.group.order(), rng);
            let q = self.group.mul_generator(&d);

            let (x, y) = q.coordinates()?;
            if x >= self.group.field() || y >= self.group.field() {
                return None;
            }
            if !self.group.is_on_curve(&q) {
                return None;
            }
            if !self
                .group
                .is_identity(&self.group.scalar_mul(self.group.order(), &q))
            {
                return None;
            }

            Some((SigningKey::new(d), VerifyingKey::new(q)))
        })
    }

    /// Derive the verifying key `Q = d * G` for a signing key.
    pub fn verifying_key(&self, key: &SigningKey) -> VerifyingKey {
        VerifyingKey::new(self.group.mul_generator(key.scalar()))
    }

    /// Sign a message under a signing key.
    ///
    /// The message is an integer already reduced to a signable
    /// representation by the caller (typically a digest); this engine
    /// imposes no hashing of its own. Each call draws a fresh ephemeral
    /// scalar `k`, computes `r = (k * G).x mod order` and
    /// `s = k^{-1} * (message + r * d) mod order`, and redraws `k` whenever
    /// `r` or `s` comes out zero.
    ///
    /// The secrecy and per-call independence of `k` carry the entire
    /// security of the scheme: two signatures sharing a nonce reveal the
    /// signing key by elementary algebra.
    pub fn sign<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        message: &BigUint,
        key: &SigningKey,
    ) -> Result<Signature, EcdsaError> {
        let order = self.group.order();

        retry(MAX_SIGN_ATTEMPTS, || {
            let k = random_scalar(order, rng);
            let ephemeral = self.group.mul_generator(&k);

            let (x, _) = ephemeral.coordinates()?;
            let r = x % order;
            if r.is_zero() {
                return None;
            }

            let k_inv = mod_inverse(&k, order)?;
            let s = k_inv * (message + &r * key.scalar()) % order;
            if s.is_zero() {
                return None;
            }

            Some(Signature { r, s })
        })
    }

    /// Verify a signature over a message against a verifying key.
    ///
    /// Returns a plain boolean for every input: components outside
    /// `[1, order - 1]` are rejected up front, before any modular inverse is
    /// attempted, and an identity result point is rejected without reading
    /// its coordinates. Otherwise the signature is valid iff
    /// `(u * G + v * Q).x mod order == r` with `w = s^{-1}`,
    /// `u = message * w`, `v = r * w` (all modulo the order).
    pub fn verify(&self, signature: &Signature, message: &BigUint, key: &VerifyingKey) -> bool {
        let order = self.group.order();

        if !in_scalar_range(&signature.r, order) || !in_scalar_range(&signature.s, order) {
            return false;
        }

        let w = match mod_inverse(&signature.s, order) {
            Some(w) => w,
            None => return false,
        };
        let u = message * &w % order;
        let v = &signature.r * &w % order;

        let candidate = self.group.add(
            &self.group.mul_generator(&u),
            &self.group.scalar_mul(&v, key.point()),
        );

        match candidate.x() {
            None => false,
            Some(x) => x % order == signature.r,
        }
    }
}

/// Run a fallible single attempt up to `max_attempts` times.
///
/// `None` marks a transient rejection that never escapes to the caller;
/// exhausting the cap converts a theoretically unbounded loop into a
/// reported terminal error.
fn retry<T>(
    max_attempts: usize,
    mut attempt: impl FnMut() -> Option<T>,
) -> Result<T, EcdsaError> {
    for _ in 0..max_attempts {
        if let Some(value) = attempt() {
            return Ok(value);
        }
    }
    Err(EcdsaError::AttemptsExhausted)
}

/// Check membership in `[1, order - 1]`.
#[inline]
fn in_scalar_range(value: &BigUint, order: &BigUint) -> bool {
    !value.is_zero() && value < order
}
