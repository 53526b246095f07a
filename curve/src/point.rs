use core::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A point of the curve group.
///
/// The identity (point at infinity) is its own variant, so no coordinate pair
/// can ever be mistaken for it. Points carry no curve; every operation takes
/// the [`Curve`](crate::Curve) explicitly and treats coordinates as residues
/// mod p, so `(-1, 2)` and `(16, 2)` name the same point on a curve over GF(17).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The neutral element of the group.
    #[default]
    Identity,
    /// A finite point `(x, y)`.
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    /// Create a new affine point. Coordinates are not reduced or validated here.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// The x-coordinate, or `None` for the identity.
    #[inline]
    pub fn x(&self) -> Option<&BigInt> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the identity.
    #[inline]
    pub fn y(&self) -> Option<&BigInt> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let inf = Point::Identity;
        assert!(inf.is_identity());
        assert_eq!(inf.coordinates(), None);
        assert_eq!(inf.x(), None);
        assert_eq!(inf.y(), None);
        assert_eq!(Point::default(), inf);
    }

    #[test]
    fn test_affine_is_never_identity() {
        // negative coordinates used to double as an identity sentinel
        let p = Point::new(-1, -1);
        assert!(!p.is_identity());
        assert_ne!(p, Point::Identity);
    }

    #[test]
    fn test_coordinates() {
        let p = Point::from((5, 1));
        assert_eq!(p.x(), Some(&BigInt::from(5)));
        assert_eq!(p.y(), Some(&BigInt::from(1)));
        assert_eq!(p, Point::new(5u32, 1u8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::Identity.to_string(), "O");
        assert_eq!(Point::new(5, 16).to_string(), "(5, 16)");
    }
}
