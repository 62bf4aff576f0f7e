//! Modular arithmetic helpers shared by the curve and its consumers.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Modular multiplicative inverse via the extended Euclidean algorithm.
///
/// Returns `a^{-1} mod modulus`, or `None` when no inverse exists
/// (`gcd(a, modulus) != 1`, which includes `a == 0`).
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() || modulus.is_one() {
        return None;
    }

    let mut r0 = BigInt::from(modulus.clone());
    let mut r1 = BigInt::from(a % modulus);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let t2 = &t0 - &q * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }

    if !r0.is_one() {
        return None;
    }

    let m = BigInt::from(modulus.clone());
    let t = ((t0 % &m) + &m) % &m;
    t.to_biguint()
}

/// Wrap-safe modular subtraction: `(a - b) mod modulus`.
///
/// Both operands must already be reduced below `modulus`.
#[inline]
pub fn mod_sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a + modulus - b) % modulus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_round_trip() {
        let m = BigUint::from(65537u32);
        let a = BigUint::from(12345u32);
        let inv = mod_inverse(&a, &m).expect("65537 is prime");
        assert_eq!((a * inv) % m, BigUint::one());
    }

    #[test]
    fn test_inverse_of_zero() {
        let m = BigUint::from(17u32);
        assert_eq!(mod_inverse(&BigUint::zero(), &m), None);
    }

    #[test]
    fn test_inverse_not_coprime() {
        let m = BigUint::from(8u32);
        assert_eq!(mod_inverse(&BigUint::from(4u32), &m), None);
    }

    #[test]
    fn test_inverse_reduces_input() {
        let m = BigUint::from(17u32);
        let a = BigUint::from(3u32 + 17 * 5);
        let inv = mod_inverse(&a, &m).expect("coprime");
        assert_eq!((BigUint::from(3u32) * inv) % m, BigUint::one());
    }

    #[test]
    fn test_mod_sub_wraps() {
        let m = BigUint::from(11u32);
        let got = mod_sub(&BigUint::from(2u32), &BigUint::from(9u32), &m);
        assert_eq!(got, BigUint::from(4u32));
    }
}
