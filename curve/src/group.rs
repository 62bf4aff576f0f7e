use num_bigint::BigUint;

use crate::point::Point;

/// Contract an elliptic-curve group must satisfy to back signature schemes.
///
/// An implementor is a cyclic group of known prime `order` with a fixed
/// `generator`, written additively over points with coordinates in a field
/// of prime modulus `field`. Scalar multiplication has a default
/// double-and-add implementation over the bits of the scalar; implementors
/// with faster ladders can override it.
pub trait Group {
    /// Prime order of the signing subgroup.
    fn order(&self) -> &BigUint;

    /// Prime modulus of the coordinate field.
    fn field(&self) -> &BigUint;

    /// Base point of order `order`.
    fn generator(&self) -> &Point;

    /// Group law: `p + q`, with the identity as neutral element.
    fn add(&self, p: &Point, q: &Point) -> Point;

    /// Point doubling: `2 * p`.
    fn double(&self, p: &Point) -> Point;

    /// Additive inverse: `-p`.
    fn negate(&self, p: &Point) -> Point;

    /// Check whether a point satisfies the curve equation.
    fn is_on_curve(&self, p: &Point) -> bool;

    /// Check whether a point is the group identity.
    #[inline]
    fn is_identity(&self, p: &Point) -> bool {
        p.is_identity()
    }

    /// Scalar multiplication: `scalar * p`, with `0 * p` the identity.
    fn scalar_mul(&self, scalar: &BigUint, p: &Point) -> Point {
        let mut result = Point::Identity;
        let mut temp = p.clone();

        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                result = self.add(&result, &temp);
            }
            temp = self.double(&temp);
        }

        result
    }

    /// Multiply the fixed generator: `scalar * G`.
    fn mul_generator(&self, scalar: &BigUint) -> Point {
        self.scalar_mul(scalar, self.generator())
    }
}
