//! Error types for curve construction and group operations.

use core::fmt;

use thiserror::Error;

/// Identifies which operand of a binary group operation was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The left-hand operand.
    P,
    /// The right-hand operand.
    Q,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::P => f.write_str("P"),
            Operand::Q => f.write_str("Q"),
        }
    }
}

/// Errors that can occur while building a curve or operating on its points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The modulus is smaller than 2, so there is no field to work in.
    #[error("modulus must be at least 2")]
    InvalidModulus,

    /// The discriminant `4a^3 + 27b^2` vanishes mod p.
    ///
    /// Such a curve has a cusp or a node and its points do not form a group
    /// under the chord-and-tangent law.
    #[error("curve is singular: 4a^3 + 27b^2 is 0 mod p")]
    SingularCurve,

    /// A non-identity operand does not satisfy `y^2 = x^3 + ax + b (mod p)`.
    #[error("point {0} is not on the curve")]
    NotOnCurve(Operand),

    /// A residue congruent to 0 mod p was inverted.
    ///
    /// The group law checks for inverse points before computing a slope, so
    /// seeing this error means that check was bypassed or the modulus is not
    /// prime.
    #[error("residue has no inverse mod p")]
    NoInverse,
}
