use num_bigint::{BigInt, Sign};
use num_traits::One;
use rand::Rng;

use crate::curve::Curve;
use crate::field::{is_square, reduce, sqrt};
use crate::point::Point;

impl Curve {
    /// Sample an affine point with uniformly random `x`.
    ///
    /// Retries until `x^3 + ax + b` is a square, then picks one of its two
    /// roots at random. Requires `p` to be prime.
    ///
    /// Returns `None` when the group is just `{O}`. By the Hasse bound this
    /// only happens for `p <= 3`, where the group is counted up front.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        if self.p() <= &BigInt::from(3) && self.order_of_group().is_one() {
            return None;
        }

        loop {
            let x = random_residue(rng, self.p());
            let rhs = self.rhs(&x);
            if !is_square(&rhs, self.p()) {
                continue;
            }
            if let Some(root) = sqrt(&rhs, self.p()) {
                let y = if rng.random::<bool>() {
                    reduce(&-root, self.p())
                } else {
                    root
                };
                return Some(Point::Affine { x, y });
            }
        }
    }
}

/// Uniform residue in `[0, p)`; 64 extra bits keep the modulo bias negligible.
fn random_residue<R: Rng + ?Sized>(rng: &mut R, p: &BigInt) -> BigInt {
    let len = (p.bits() as usize + 64).div_ceil(8);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    reduce(&BigInt::from_bytes_le(Sign::Plus, &bytes), p)
}
