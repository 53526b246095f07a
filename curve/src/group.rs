//! The chord-and-tangent group law and scalar multiplication.

use num_bigint::BigUint;

use crate::curve::Curve;
use crate::errors::{CurveError, Operand};
use crate::field::{inverse, reduce};
use crate::point::Point;

/// Bit access for non-negative scalars used in double-and-add.
pub trait ScalarBits {
    /// Number of significant bits; zero for the scalar 0.
    fn bit_len(&self) -> u64;
    /// Bit `i`, counting from the least significant bit.
    fn bit(&self, i: u64) -> bool;
}

impl ScalarBits for BigUint {
    #[inline]
    fn bit_len(&self) -> u64 {
        self.bits()
    }

    #[inline]
    fn bit(&self, i: u64) -> bool {
        BigUint::bit(self, i)
    }
}

macro_rules! impl_scalar_bits {
    ($($t:ty),*) => {
        $(
            impl ScalarBits for $t {
                #[inline]
                fn bit_len(&self) -> u64 {
                    (<$t>::BITS - self.leading_zeros()) as u64
                }

                #[inline]
                fn bit(&self, i: u64) -> bool {
                    i < <$t>::BITS as u64 && (self >> i) & 1 == 1
                }
            }
        )*
    };
}

impl_scalar_bits!(u8, u16, u32, u64, u128, usize);

impl Curve {
    /// Add two points.
    ///
    /// Both operands are normalized mod p and checked for curve membership
    /// before any arithmetic; an off-curve operand fails with
    /// [`CurveError::NotOnCurve`] naming it. The result is normalized.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, CurveError> {
        let p = self.checked(p, Operand::P)?;
        let q = self.checked(q, Operand::Q)?;
        self.add_reduced(p, q)
    }

    /// Point doubling: 2*P.
    pub fn double(&self, p: &Point) -> Result<Point, CurveError> {
        let p = self.checked(p, Operand::P)?;
        self.add_reduced(p.clone(), p)
    }

    /// Negate a point: `(x, y) -> (x, -y)`.
    pub fn negate(&self, p: &Point) -> Result<Point, CurveError> {
        let p = self.checked(p, Operand::P)?;
        Ok(self.negate_reduced(p))
    }

    /// Compute `P - Q`.
    pub fn sub(&self, p: &Point, q: &Point) -> Result<Point, CurveError> {
        let p = self.checked(p, Operand::P)?;
        let q = self.checked(q, Operand::Q)?;
        let neg_q = self.negate_reduced(q);
        self.add_reduced(p, neg_q)
    }

    /// Compute `k * P` by most-significant-bit-first double-and-add.
    ///
    /// One doubling per bit of `k` and one addition per set bit. `k = 0`
    /// gives the identity.
    pub fn scalar_multiply<S>(&self, p: &Point, k: &S) -> Result<Point, CurveError>
    where
        S: ScalarBits + ?Sized,
    {
        let p = self.checked(p, Operand::P)?;
        let mut result = Point::Identity;

        for i in (0..k.bit_len()).rev() {
            result = self.add_reduced(result.clone(), result)?;
            if k.bit(i) {
                result = self.add_reduced(p.clone(), result)?;
            }
        }

        Ok(result)
    }

    /// Compute `n * P` for a machine-word scalar.
    pub fn mul_u64(&self, p: &Point, n: u64) -> Result<Point, CurveError> {
        self.scalar_multiply(p, &n)
    }

    /// Group law on operands that are already normalized and on the curve.
    pub(crate) fn add_reduced(&self, p: Point, q: Point) -> Result<Point, CurveError> {
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (Point::Identity, q) => return Ok(q),
            (p, Point::Identity) => return Ok(p),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };
        let modulus = self.p();

        // Q = -P, including the 2-torsion case y = 0
        if x1 == x2 && reduce(&-&y1, modulus) == y2 {
            log::trace!("({}, {}) + ({}, {}) cancels to O", x1, y1, x2, y2);
            return Ok(Point::Identity);
        }

        let slope = if x1 == x2 && y1 == y2 {
            // tangent: (3x^2 + a) / 2y
            let numerator = 3u32 * &x1 * &x1 + self.a();
            let denominator = 2u32 * &y1;
            reduce(&(numerator * inverse(&denominator, modulus)?), modulus)
        } else {
            // chord: (y2 - y1) / (x2 - x1)
            let numerator = &y2 - &y1;
            let denominator = &x2 - &x1;
            reduce(&(numerator * inverse(&denominator, modulus)?), modulus)
        };

        let x3 = reduce(&(&slope * &slope - &x1 - &x2), modulus);
        let y3 = reduce(&(&slope * (&x1 - &x3) - &y1), modulus);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    fn negate_reduced(&self, p: Point) -> Point {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x,
                y: reduce(&-y, self.p()),
            },
        }
    }
}
