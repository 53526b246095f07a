//! Curve parameters and validation for `y^2 = x^3 + ax + b` over GF(p).

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::{CurveError, Operand};
use crate::field::reduce;
use crate::point::Point;

/// Raw curve parameters, as read from a configuration source.
///
/// Each value is a string holding a decimal integer or a `0x`-prefixed hex
/// integer, e.g. `{ "a": "-3", "b": "0x64210519...", "p": "0xffff..." }`.
/// Converting into a [`Curve`] runs the same validation as [`Curve::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    #[serde(with = "integer_string")]
    pub a: BigInt,
    #[serde(with = "integer_string")]
    pub b: BigInt,
    #[serde(with = "integer_string")]
    pub p: BigInt,
}

/// A short-Weierstrass curve `y^2 = x^3 + ax + b` over the prime field GF(p).
///
/// Coefficients are kept exactly as given; all arithmetic reduces mod `p`.
/// The modulus is assumed to be prime. This is not checked, and field
/// inverses may fail with [`CurveError::NoInverse`] if it is not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CurveParams", into = "CurveParams")]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

impl Curve {
    /// Build a curve, rejecting a modulus below 2 and singular parameters.
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        p: impl Into<BigInt>,
    ) -> Result<Self, CurveError> {
        let (a, b, p) = (a.into(), b.into(), p.into());

        if p < BigInt::from(2) {
            return Err(CurveError::InvalidModulus);
        }
        if discriminant(&a, &b, &p).is_zero() {
            log::debug!("rejected singular curve a = {}, b = {}, p = {}", a, b, p);
            return Err(CurveError::SingularCurve);
        }

        log::debug!("constructed curve y^2 = x^3 + {}x + {} mod {}", a, b, p);
        Ok(Curve { a, b, p })
    }

    /// The coefficient `a`, as given.
    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The coefficient `b`, as given.
    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus.
    #[inline]
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// `(4a^3 + 27b^2) mod p`. Never zero for a constructed curve.
    pub fn discriminant(&self) -> BigInt {
        discriminant(&self.a, &self.b, &self.p)
    }

    /// Right-hand side of the curve equation, `x^3 + ax + b mod p`.
    pub(crate) fn rhs(&self, x: &BigInt) -> BigInt {
        reduce(&(x * x * x + &self.a * x + &self.b), &self.p)
    }

    /// Reduce the coordinates of `point` into `[0, p)`.
    ///
    /// The identity maps to itself. This is the only place coordinates are
    /// normalized; group operations call it once per operand.
    pub fn normalize(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: reduce(x, &self.p),
                y: reduce(y, &self.p),
            },
        }
    }

    /// Check if a point is on the curve: `y^2 = x^3 + ax + b (mod p)`.
    ///
    /// The identity is always on the curve. Coordinates may be unreduced.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match self.normalize(point) {
            Point::Identity => true,
            Point::Affine { x, y } => self.satisfies_equation(&x, &y),
        }
    }

    /// Curve equation test for coordinates already reduced mod p.
    pub(crate) fn satisfies_equation(&self, x: &BigInt, y: &BigInt) -> bool {
        reduce(&(y * y), &self.p) == self.rhs(x)
    }

    /// Build a normalized affine point, checking that it lies on the curve.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Result<Point, CurveError> {
        self.checked(&Point::new(x, y), Operand::P)
    }

    /// Normalize `point` and verify curve membership, blaming `operand` on failure.
    pub(crate) fn checked(&self, point: &Point, operand: Operand) -> Result<Point, CurveError> {
        let point = self.normalize(point);
        if let Point::Affine { x, y } = &point {
            if !self.satisfies_equation(x, y) {
                log::trace!("operand {} = {} is not on the curve", operand, point);
                return Err(CurveError::NotOnCurve(operand));
            }
        }
        Ok(point)
    }
}

fn discriminant(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(4u32 * a * a * a + 27u32 * b * b), p)
}

mod integer_string {
    use num_bigint::BigInt;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).ok_or_else(|| D::Error::custom(format!("invalid integer {:?}", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<BigInt> {
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let magnitude = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16)?,
            None => BigInt::parse_bytes(digits.as_bytes(), 10)?,
        };
        Some(if negative { -magnitude } else { magnitude })
    }
}

impl TryFrom<CurveParams> for Curve {
    type Error = CurveError;

    fn try_from(params: CurveParams) -> Result<Self, Self::Error> {
        Curve::new(params.a, params.b, params.p)
    }
}

impl From<Curve> for CurveParams {
    fn from(curve: Curve) -> Self {
        CurveParams {
            a: curve.a,
            b: curve.b,
            p: curve.p,
        }
    }
}
