//! Group order and element order by exhaustive search.
//!
//! Everything here is O(p^2) in the field size and only meant for small
//! demonstration primes.

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::curve::Curve;
use crate::errors::CurveError;
use crate::field::{reduce, residues};
use crate::point::Point;

// Beyond 2^16 the brute-force count takes on the order of 2^32 steps.
const SLOW_COUNT_BITS: u64 = 16;

impl Curve {
    /// Number of points in `E(GF(p))`, including the identity.
    ///
    /// For every `x` in `[0, p)` counts the `y` in `[0, p)` with
    /// `y^2 = x^3 + ax + b`, stopping after two roots per `x`.
    pub fn order_of_group(&self) -> BigUint {
        self.warn_if_slow();

        let mut count = BigUint::one();
        for x in residues(self.p()) {
            count += self.roots_for(&x).len();
        }

        log::debug!("|E(GF({}))| = {}", self.p(), count);
        count
    }

    /// Smallest `n > 0` with `n * P = O`.
    ///
    /// Repeatedly adds `P` to itself until the identity is reached. Group
    /// operations validate `P`, so an off-curve input fails with
    /// [`CurveError::NotOnCurve`] instead of looping.
    pub fn order_of_element(&self, p: &Point) -> Result<BigUint, CurveError> {
        let mut result = p.clone();
        let mut count = BigUint::one();

        while !result.is_identity() {
            result = self.add(&result, p)?;
            count += 1u32;
        }

        log::debug!("ord({}) = {}", p, count);
        Ok(count)
    }

    /// All elements of the group: the identity, then affine points sorted by
    /// `x` and then `y`.
    pub fn elements(&self) -> Vec<Point> {
        self.warn_if_slow();

        let mut points = vec![Point::Identity];
        for x in residues(self.p()) {
            for y in self.roots_for(&x) {
                points.push(Point::Affine { x: x.clone(), y });
            }
        }
        points
    }

    /// The (at most two) `y` in `[0, p)` with `(x, y)` on the curve, ascending.
    fn roots_for(&self, x: &BigInt) -> Vec<BigInt> {
        let rhs = self.rhs(x);
        let mut roots = Vec::with_capacity(2);

        for y in residues(self.p()) {
            if reduce(&(&y * &y), self.p()) == rhs {
                roots.push(y);
                if roots.len() == 2 {
                    break;
                }
            }
        }
        roots
    }

    fn warn_if_slow(&self) {
        if self.p().bits() > SLOW_COUNT_BITS {
            log::warn!(
                "exhaustive point count over a {}-bit modulus; expect O(p^2) work",
                self.p().bits()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_of_group() {
        let cases = [
            (2, 2, 17, 19u32),
            (4, 7, 17, 17),
            (1, 1, 5, 9),
            (0, 7, 17, 18),
            (-1, 0, 23, 24),
            (2, 3, 97, 100),
        ];
        for (a, b, p, expected) in cases {
            let curve = Curve::new(a, b, p).expect("non-singular");
            assert_eq!(
                curve.order_of_group(),
                BigUint::from(expected),
                "a = {a}, b = {b}, p = {p}"
            );
        }
    }

    #[test]
    fn test_order_of_group_small_prime() {
        // y^2 = x^3 + x + 1 over GF(2): O, (0, 1) and (1, 1)
        let curve = Curve::new(1, 1, 2).expect("non-singular");
        assert_eq!(curve.order_of_group(), BigUint::from(3u32));
        assert_eq!(
            curve.elements(),
            vec![Point::Identity, Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn test_order_of_element() {
        let curve = Curve::new(2, 2, 17).expect("non-singular");
        assert_eq!(
            curve.order_of_element(&Point::new(5, 1)),
            Ok(BigUint::from(19u32))
        );

        let curve = Curve::new(4, 7, 17).expect("non-singular");
        assert_eq!(
            curve.order_of_element(&Point::new(16, 11)),
            Ok(BigUint::from(17u32))
        );
    }

    #[test]
    fn test_order_of_identity_is_one() {
        let curve = Curve::new(2, 2, 17).expect("non-singular");
        assert_eq!(curve.order_of_element(&Point::Identity), Ok(BigUint::one()));
    }

    #[test]
    fn test_order_of_two_torsion_points() {
        let curve = Curve::new(-1, 0, 23).expect("non-singular");
        for x in [0, 1, 22] {
            assert_eq!(
                curve.order_of_element(&Point::new(x, 0)),
                Ok(BigUint::from(2u32))
            );
        }
    }

    #[test]
    fn test_order_of_element_rejects_off_curve_point() {
        let curve = Curve::new(2, 2, 17).expect("non-singular");
        assert!(matches!(
            curve.order_of_element(&Point::new(1, 1)),
            Err(CurveError::NotOnCurve(_))
        ));
    }

    #[test]
    fn test_elements() {
        let curve = Curve::new(1, 1, 5).expect("non-singular");
        let expected = vec![
            Point::Identity,
            Point::new(0, 1),
            Point::new(0, 4),
            Point::new(2, 1),
            Point::new(2, 4),
            Point::new(3, 1),
            Point::new(3, 4),
            Point::new(4, 2),
            Point::new(4, 3),
        ];
        assert_eq!(curve.elements(), expected);
    }

    #[test]
    fn test_elements_match_order() {
        let curve = Curve::new(2, 3, 97).expect("non-singular");
        let elements = curve.elements();
        assert_eq!(BigUint::from(elements.len()), curve.order_of_group());
        assert!(elements.iter().all(|p| curve.is_on_curve(p)));
    }
}
