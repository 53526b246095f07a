//! Elliptic curve groups `y^2 = x^3 + ax + b` over a prime field GF(p).
//!
//! This crate provides curve construction with singularity checks, the
//! chord-and-tangent group law on [`Point`]s, double-and-add scalar
//! multiplication, and exhaustive group and element order computation.
//! Curves are chosen at runtime and coordinates are arbitrary-precision
//! integers, so the same code serves toy curves over GF(17) and 256-bit
//! fields alike. Order counting is brute force and only practical for
//! small primes.
//!
//! # Example
//!
//! ```
//! use ecgroup::{Curve, Point};
//! use num_bigint::BigUint;
//!
//! let curve = Curve::new(2, 2, 17).expect("non-singular curve");
//! let g = Point::new(5, 1);
//! assert!(curve.is_on_curve(&g));
//!
//! let n = curve.order_of_group();
//! let ord = curve.order_of_element(&g).expect("on-curve point");
//! assert_eq!(&n % &ord, BigUint::from(0u32));
//! assert_eq!(curve.scalar_multiply(&g, &ord), Ok(Point::Identity));
//! ```

mod curve;
mod errors;
pub mod field;
mod group;
mod order;
mod point;
mod random;


pub use curve::{Curve, CurveParams};
pub use errors::{CurveError, Operand};
pub use group::ScalarBits;
pub use point::Point;
