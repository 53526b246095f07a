//! Arithmetic on residues of the prime field GF(p).
//!
//! Residues are plain `BigInt`s. Every function here takes the modulus
//! explicitly and returns values normalized into `[0, p)`.

use core::iter::successors;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// Reduce `value` into `[0, p)`. Negative inputs wrap around.
#[inline]
pub fn reduce(value: &BigInt, p: &BigInt) -> BigInt {
    value.mod_floor(p)
}

/// Multiplicative inverse of `value` mod `p` via the extended Euclidean algorithm.
///
/// Fails with [`CurveError::NoInverse`] when `value ≡ 0 (mod p)`, or when the
/// residue shares a factor with a composite modulus.
pub fn inverse(value: &BigInt, p: &BigInt) -> Result<BigInt, CurveError> {
    let value = reduce(value, p);
    if value.is_zero() {
        log::error!("attempted to invert 0 mod {}", p);
        return Err(CurveError::NoInverse);
    }

    let egcd = value.extended_gcd(p);
    if !egcd.gcd.is_one() {
        log::error!("{} is not invertible mod {} (gcd {})", value, p, egcd.gcd);
        return Err(CurveError::NoInverse);
    }

    Ok(reduce(&egcd.x, p))
}

/// Euler's criterion: is `value` a square mod the odd prime `p`?
///
/// Zero counts as a square.
pub fn is_square(value: &BigInt, p: &BigInt) -> bool {
    let value = reduce(value, p);
    if value.is_zero() || p == &BigInt::from(2) {
        return true;
    }
    let exponent: BigInt = (p - 1u32) >> 1u32;
    value.modpow(&exponent, p).is_one()
}

/// Square root mod the prime `p` (Tonelli-Shanks).
///
/// Returns one of the two roots, or `None` if `value` is not a square.
pub fn sqrt(value: &BigInt, p: &BigInt) -> Option<BigInt> {
    let n = reduce(value, p);
    if n.is_zero() || p == &BigInt::from(2) {
        return Some(n);
    }
    if !is_square(&n, p) {
        return None;
    }

    // p - 1 = q * 2^s with q odd
    let p_minus_one: BigInt = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q: BigInt = &p_minus_one >> s;

    if s == 1 {
        let exponent: BigInt = (p + 1u32) >> 2u32;
        return Some(n.modpow(&exponent, p));
    }

    let mut z = BigInt::from(2);
    while is_square(&z, p) {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + 1u32) >> 1u32), p);

    while !t.is_one() {
        // least i with t^(2^i) = 1
        let mut i = 0u64;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = c.modpow(&(BigInt::one() << (m - i - 1)), p);
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }

    Some(r)
}

/// Iterate over every residue `0, 1, ..., p - 1`.
pub(crate) fn residues(p: &BigInt) -> impl Iterator<Item = BigInt> + '_ {
    successors(Some(BigInt::zero()), |x| Some(x + 1u32)).take_while(move |x| x < p)
}
