//! Coordinate domain for the primitives.
//!
//! `Scalar` fixes the zero-tolerance policy per type: exact for signed
//! integers, an absolute `EPSILON` band for floats. Every "is this zero"
//! decision in the crate goes through [`Scalar::sign`].

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, Signed};

/// Numeric coordinate type accepted by points, segments and polygons.
///
/// Integer inputs are evaluated exactly; the caller picks a type wide enough
/// for `coord * coord` products (e.g. `i64` for data in `i32` range).
pub trait Scalar: Num + Signed + Copy + PartialOrd + Debug {
    /// Absolute tolerance below which a computed area or dot product is zero.
    const EPS: Self;

    /// `false` for NaN and infinities. Integers are always finite.
    fn is_finite(self) -> bool;

    /// Sign of `self` where `|self| <= EPS` counts as `Equal`.
    #[inline]
    fn sign(self) -> Ordering {
        if self > Self::EPS {
            Ordering::Greater
        } else if self < -Self::EPS {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Exact comparison of two coordinates (no tolerance).
    ///
    /// Total on finite values; NaN compares `Equal` to everything, which is why
    /// the sweep and the polygon test reject non-finite input up front.
    #[inline]
    fn cmp_coord(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const EPS: Self = 0;
                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ident),*) => {
        $(
            impl Scalar for $t {
                const EPS: Self = $t::EPSILON;
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sign_is_exact() {
        assert_eq!(0i64.sign(), Ordering::Equal);
        assert_eq!(1i64.sign(), Ordering::Greater);
        assert_eq!((-1i32).sign(), Ordering::Less);
    }

    #[test]
    fn float_sign_absorbs_rounding() {
        assert_eq!((f64::EPSILON / 2.0).sign(), Ordering::Equal);
        assert_eq!((-f64::EPSILON).sign(), Ordering::Equal);
        assert_eq!((3.0 * f64::EPSILON).sign(), Ordering::Greater);
        // 0.1 + 0.2 - 0.3 is a classic non-zero rounding residue.
        assert_eq!((0.1f64 + 0.2 - 0.3).sign(), Ordering::Equal);
        assert_eq!(1e-3f32.sign(), Ordering::Greater);
    }

    #[test]
    fn finiteness() {
        assert!(Scalar::is_finite(i32::MAX));
        assert!(Scalar::is_finite(1.5f64));
        assert!(!Scalar::is_finite(f64::NAN));
        assert!(!Scalar::is_finite(f32::INFINITY));
    }

    #[test]
    fn signed_zero_compares_equal() {
        assert_eq!((-0.0f64).cmp_coord(&0.0), Ordering::Equal);
        assert_eq!(1.0f64.cmp_coord(&2.0), Ordering::Less);
    }
}
