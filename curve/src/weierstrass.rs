use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::arith::{mod_inverse, mod_sub};
use crate::group::Group;
use crate::point::Point;

/// Short-Weierstrass curve `y^2 = x^3 + a*x + b` over a prime field.
///
/// Carries the curve coefficients, the field modulus, the order of the
/// subgroup generated by `generator`, and the generator itself. All
/// parameters are fixed at construction; operations only read them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeierstrassCurve {
    a: BigUint,
    b: BigUint,
    field: BigUint,
    order: BigUint,
    generator: Point,
}

impl WeierstrassCurve {
    /// Assemble a curve from raw parameters.
    ///
    /// Coefficients and generator coordinates are expected reduced below the
    /// field modulus. Consistency of the parameters (primality, generator
    /// order) is the caller's contract; signature engines validate what they
    /// depend on at construction.
    pub fn new(
        a: BigUint,
        b: BigUint,
        field: BigUint,
        order: BigUint,
        generator: Point,
    ) -> Self {
        WeierstrassCurve {
            a,
            b,
            field,
            order,
            generator,
        }
    }

    /// The secp256k1 parameter set: `y^2 = x^3 + 7` over the 256-bit prime
    /// field, with the standard base point of prime order.
    pub fn secp256k1() -> Self {
        let field = uint_from_hex(b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
        let order = uint_from_hex(b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        let gx = uint_from_hex(b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        let gy = uint_from_hex(b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

        WeierstrassCurve::new(
            BigUint::zero(),
            BigUint::from(7u32),
            field,
            order,
            Point::new(gx, gy),
        )
    }

    /// Slope of the chord or tangent reduced into the field, or `None` when
    /// the denominator is not invertible (a non-prime field modulus).
    fn slope(&self, numerator: &BigUint, denominator: &BigUint) -> Option<BigUint> {
        mod_inverse(denominator, &self.field).map(|inv| numerator * inv % &self.field)
    }

    /// Finish an addition or doubling from the slope and the input points.
    fn chord_result(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let lambda2 = lambda * lambda % &self.field;
        let x3 = mod_sub(&mod_sub(&lambda2, x1, &self.field), x2, &self.field);
        let y3 = mod_sub(
            &(lambda * mod_sub(x1, &x3, &self.field) % &self.field),
            y1,
            &self.field,
        );
        Point::new(x3, y3)
    }
}

impl Group for WeierstrassCurve {
    #[inline]
    fn order(&self) -> &BigUint {
        &self.order
    }

    #[inline]
    fn field(&self) -> &BigUint {
        &self.field
    }

    #[inline]
    fn generator(&self) -> &Point {
        &self.generator
    }

    fn add(&self, p: &Point, q: &Point) -> Point {
        let ((x1, y1), (x2, y2)) = match (p.coordinates(), q.coordinates()) {
            (None, _) => return q.clone(),
            (_, None) => return p.clone(),
            (Some(pc), Some(qc)) => (pc, qc),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(p);
            }
            // Mirror-image points sum to the identity.
            return Point::Identity;
        }

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = mod_sub(y2, y1, &self.field);
        let denominator = mod_sub(x2, x1, &self.field);
        match self.slope(&numerator, &denominator) {
            Some(lambda) => self.chord_result(&lambda, x1, y1, x2),
            None => Point::Identity,
        }
    }

    fn double(&self, p: &Point) -> Point {
        let (x, y) = match p.coordinates() {
            None => return Point::Identity,
            Some(c) => c,
        };

        // A point on the x-axis is its own inverse, so 2P = O.
        if y.is_zero() {
            return Point::Identity;
        }

        // λ = (3x^2 + a) / (2y)
        let x2 = x * x % &self.field;
        let numerator = (&x2 + &x2 + &x2 + &self.a) % &self.field;
        let denominator = (y + y) % &self.field;
        match self.slope(&numerator, &denominator) {
            Some(lambda) => self.chord_result(&lambda, x, y, x),
            None => Point::Identity,
        }
    }

    fn negate(&self, p: &Point) -> Point {
        match p.coordinates() {
            None => Point::Identity,
            Some((x, y)) => Point::new(x.clone(), mod_sub(&BigUint::zero(), y, &self.field)),
        }
    }

    fn is_on_curve(&self, p: &Point) -> bool {
        let (x, y) = match p.coordinates() {
            None => return true,
            Some(c) => c,
        };

        if x >= &self.field || y >= &self.field {
            return false;
        }

        let y2 = y * y % &self.field;
        let x3 = x * x % &self.field * x % &self.field;
        let rhs = (x3 + &self.a * x + &self.b) % &self.field;

        y2 == rhs
    }
}

/// Parse a compile-time hex constant.
fn uint_from_hex(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 16).expect("valid hex curve constant")
}
