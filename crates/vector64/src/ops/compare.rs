//! Comparison and classification
//!
//! Every mask result holds all-bits-set in true lanes and zero in false lanes. The `_all` and
//! `_any` reductions read the mask through its sign bits.

use crate::backends::dispatch;
use crate::element::Element;
use crate::Vector64;

macro_rules! reductions {
    ($($mask:ident => $all:ident, $any:ident);* $(;)?) => {$(
        #[doc = concat!("True if [`", stringify!($mask), "`](Self::", stringify!($mask), ") holds in every lane")]
        #[inline]
        pub fn $all(self, rhs: Self) -> bool {
            self.$mask(rhs).extract_most_significant_bits() == Self::lane_bits()
        }

        #[doc = concat!("True if [`", stringify!($mask), "`](Self::", stringify!($mask), ") holds in at least one lane")]
        #[inline]
        pub fn $any(self, rhs: Self) -> bool {
            self.$mask(rhs).extract_most_significant_bits() != 0
        }
    )*};
}

macro_rules! classifications {
    ($($(#[$doc:meta])* $name:ident => $predicate:ident),* $(,)?) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(self) -> Self {
            self.mask_by(T::$predicate)
        }
    )*};
}

impl<T: Element> Vector64<T> {
    /// Mask of lanes where `self == rhs`
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> Self {
        dispatch!(equals(self, rhs))
    }

    /// Mask of lanes where `self > rhs`
    #[inline(always)]
    pub fn greater_than(self, rhs: Self) -> Self {
        dispatch!(greater_than(self, rhs))
    }

    /// Mask of lanes where `self < rhs`
    #[inline(always)]
    pub fn less_than(self, rhs: Self) -> Self {
        dispatch!(less_than(self, rhs))
    }

    /// Mask of lanes where `self >= rhs` (false if either lane is NaN)
    #[inline]
    pub fn greater_than_or_equal(self, rhs: Self) -> Self {
        self.greater_than(rhs).bitwise_or(self.equals(rhs))
    }

    /// Mask of lanes where `self <= rhs` (false if either lane is NaN)
    #[inline]
    pub fn less_than_or_equal(self, rhs: Self) -> Self {
        self.less_than(rhs).bitwise_or(self.equals(rhs))
    }

    reductions! {
        equals => equals_all, equals_any;
        greater_than => greater_than_all, greater_than_any;
        greater_than_or_equal => greater_than_or_equal_all, greater_than_or_equal_any;
        less_than => less_than_all, less_than_any;
        less_than_or_equal => less_than_or_equal_all, less_than_or_equal_any;
    }

    classifications! {
        /// Mask of NaN lanes (never set for integers)
        is_nan => is_nan,
        /// Mask of infinite lanes of either sign
        is_infinity => is_infinity,
        /// Mask of `+∞` lanes
        is_positive_infinity => is_positive_infinity,
        /// Mask of `-∞` lanes
        is_negative_infinity => is_negative_infinity,
        /// Mask of lanes that are neither infinite nor NaN
        is_finite => is_finite,
        /// Mask of lanes with the sign bit set (`-0.0` and negative NaN included)
        is_negative => is_negative,
        /// Mask of lanes with the sign bit clear (`+0.0` included)
        is_positive => is_positive,
        /// Mask of normal float lanes, or non-zero integer lanes
        is_normal => is_normal,
        /// Mask of subnormal lanes
        is_subnormal => is_subnormal,
        /// Mask of lanes holding a finite whole number
        is_integer => is_integer,
        /// Mask of lanes holding an even whole number
        is_even_integer => is_even_integer,
        /// Mask of lanes holding an odd whole number
        is_odd_integer => is_odd_integer,
        /// Mask of zero lanes (`-0.0` included)
        is_zero => is_zero,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_all_or_nothing() {
        let a = Vector64::<i16>::from_lanes([1, 5, -3, 7]);
        let b = Vector64::<i16>::from_lanes([1, 2, 3, 9]);
        assert_eq!(a.equals(b).to_lanes(), [-1, 0, 0, 0]);
        assert_eq!(a.greater_than(b).to_lanes(), [0, -1, 0, 0]);
        assert_eq!(a.less_than(b).to_lanes(), [0, 0, -1, -1]);
        assert_eq!(a.greater_than_or_equal(b).to_lanes(), [-1, -1, 0, 0]);
        assert_eq!(a.less_than_or_equal(b).to_lanes(), [-1, 0, -1, -1]);
    }

    #[test]
    fn test_unsigned_ordering() {
        let a = Vector64::<u8>::from_lanes([200, 1, 128, 127, 0, 255, 9, 9]);
        let b = Vector64::<u8>::from_lanes([100, 2, 127, 128, 0, 0, 9, 10]);
        assert_eq!(
            a.greater_than(b).to_lanes(),
            [255, 0, 255, 0, 0, 255, 0, 0]
        );
    }

    #[test]
    fn test_reductions() {
        let a = Vector64::<u32>::from_lanes([1, 2]);
        let b = Vector64::<u32>::from_lanes([1, 3]);
        assert!(!a.equals_all(b));
        assert!(a.equals_any(b));
        assert!(a.less_than_or_equal_all(b));
        assert!(!a.greater_than_any(b));
        assert!(b.greater_than_or_equal_all(a));
    }

    #[test]
    fn test_nan_compares_false() {
        let a = Vector64::<f64>::splat(f64::NAN);
        assert!(!a.equals_all(a));
        assert!(!a.less_than_or_equal_any(a));
        assert_ne!(a, a);
    }

    #[test]
    fn test_float_classification() {
        let v = Vector64::<f64>::from_lanes([f64::NAN]);
        assert_eq!(v.is_nan().to_bits(), u64::MAX);
        let v = Vector64::<f32>::from_lanes([f32::NEG_INFINITY, f32::from_bits(1)]);
        assert_eq!(v.is_infinity().to_lanes()[0].to_bits(), u32::MAX);
        assert_eq!(v.is_infinity().to_lanes()[1].to_bits(), 0);
        assert_eq!(v.is_subnormal().to_lanes()[1].to_bits(), u32::MAX);
        assert_eq!(v.is_negative().to_lanes()[0].to_bits(), u32::MAX);
    }

    #[test]
    fn test_integer_classification() {
        let v = Vector64::<i16>::from_lanes([0, -3, 4, 7]);
        assert_eq!(v.is_zero().to_lanes(), [-1, 0, 0, 0]);
        assert_eq!(v.is_negative().to_lanes(), [0, -1, 0, 0]);
        assert_eq!(v.is_even_integer().to_lanes(), [-1, 0, -1, 0]);
        assert_eq!(v.is_odd_integer().to_lanes(), [0, -1, 0, -1]);
        assert_eq!(v.is_nan().to_bits(), 0);
        assert_eq!(v.is_finite().to_bits(), u64::MAX);
    }
}
