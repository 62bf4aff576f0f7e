use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Point on an elliptic curve in affine coordinates.
///
/// The group identity ("point at infinity") has no finite coordinates, so it
/// is a distinct variant rather than a sentinel coordinate pair. Identity
/// checks are structural matches on the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    /// The identity element of the group.
    Identity,
    /// A finite point with field-element coordinates.
    Affine {
        /// The x-coordinate of the point
        x: BigUint,
        /// The y-coordinate of the point
        y: BigUint,
    },
}

impl Point {
    /// Create a finite affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Check whether this point is the group identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Coordinates of a finite point, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}
