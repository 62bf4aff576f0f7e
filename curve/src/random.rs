use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

/// Draw a scalar uniformly from `[1, order - 1]`.
///
/// Samples `order.bits()` random bits and rejects values of zero or at least
/// `order`, so the accepted draw is uniform. Expected iterations are below
/// two for any order. `order` must exceed one.
pub fn random_scalar<R: Rng + ?Sized>(order: &BigUint, rng: &mut R) -> BigUint {
    debug_assert!(order > &BigUint::one());

    let bits = order.bits();
    let nbytes = bits.div_ceil(8) as usize;
    // Mask away the bits above the order's top bit so most draws land in range.
    let mask = 0xffu8 >> (nbytes as u64 * 8 - bits);
    let mut buf = vec![0u8; nbytes];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < order {
            return candidate;
        }
    }
}
