//! Integer element implementations
//!
//! Arithmetic wraps, division truncates toward zero, and shift counts are taken modulo the
//! element width. The inherent primitive methods are called through their full path because
//! several of them share a name with an [`Element`] method.

use super::{Element, ElementKind, IntElement, Sealed};
use crate::backends::kernels;

macro_rules! int_common {
    ($t:ty, $kind:ident, $index:ty, $native:ident) => {
        impl Sealed for $t {}

        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ALL_BITS_SET: Self = !0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            type Lanes = [$t; super::VECTOR_BYTES / core::mem::size_of::<$t>()];
            type Index = $index;

            const NATIVE: crate::backends::NativeKernels = kernels::$native;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn divide(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline(always)]
            fn add_saturate(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline(always)]
            fn subtract_saturate(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline(always)]
            fn negate(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$t as AbsWrapping>::abs_wrapping(self)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }

            #[inline(always)]
            fn min_number(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline(always)]
            fn max_number(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }

            #[inline(always)]
            fn min_magnitude(self, rhs: Self) -> Self {
                let (a, b) = (AbsWrapping::magnitude(self), AbsWrapping::magnitude(rhs));
                if a < b {
                    self
                } else if b < a {
                    rhs
                } else {
                    Ord::min(self, rhs)
                }
            }

            #[inline(always)]
            fn max_magnitude(self, rhs: Self) -> Self {
                let (a, b) = (AbsWrapping::magnitude(self), AbsWrapping::magnitude(rhs));
                if a > b {
                    self
                } else if b > a {
                    rhs
                } else {
                    Ord::max(self, rhs)
                }
            }

            #[inline(always)]
            fn min_magnitude_number(self, rhs: Self) -> Self {
                Element::min_magnitude(self, rhs)
            }

            #[inline(always)]
            fn max_magnitude_number(self, rhs: Self) -> Self {
                Element::max_magnitude(self, rhs)
            }

            #[inline(always)]
            fn copy_sign(self, sign: Self) -> Self {
                <$t as AbsWrapping>::copy_sign_wrapping(self, sign)
            }

            #[inline(always)]
            fn most_significant_bit(self) -> bool {
                (self >> (<$t>::BITS - 1)) & 1 != 0
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_infinity(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_positive_infinity(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_negative_infinity(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_finite(self) -> bool {
                true
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                Element::most_significant_bit(self) && <$t as IntElement>::SIGNED
            }

            #[inline(always)]
            fn is_positive(self) -> bool {
                !Element::is_negative(self)
            }

            #[inline(always)]
            fn is_normal(self) -> bool {
                self != 0
            }

            #[inline(always)]
            fn is_subnormal(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_integer(self) -> bool {
                true
            }

            #[inline(always)]
            fn is_even_integer(self) -> bool {
                self & 1 == 0
            }

            #[inline(always)]
            fn is_odd_integer(self) -> bool {
                self & 1 != 0
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline(always)]
            fn from_lane_index(index: usize) -> Self {
                index as $t
            }
        }
    };
}

/// Sign-dependent helpers shared by the integer impls.
trait AbsWrapping: Copy {
    type Magnitude: Ord;

    fn abs_wrapping(self) -> Self;
    fn magnitude(self) -> Self::Magnitude;
    fn copy_sign_wrapping(self, sign: Self) -> Self;
}

macro_rules! signed_int {
    ($t:ty, $u:ty, $kind:ident, $native:ident) => {
        int_common!($t, $kind, $u, $native);

        impl AbsWrapping for $t {
            type Magnitude = $u;

            #[inline(always)]
            fn abs_wrapping(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            #[inline(always)]
            fn magnitude(self) -> $u {
                <$t>::unsigned_abs(self)
            }

            #[inline(always)]
            fn copy_sign_wrapping(self, sign: Self) -> Self {
                let magnitude = <$t>::wrapping_abs(self);
                if sign < 0 {
                    <$t>::wrapping_neg(magnitude)
                } else {
                    magnitude
                }
            }
        }

        impl IntElement for $t {
            const SIGNED: bool = true;

            #[inline(always)]
            fn shift_left(self, count: u32) -> Self {
                <$t>::wrapping_shl(self, count)
            }

            #[inline(always)]
            fn shift_right_arithmetic(self, count: u32) -> Self {
                <$t>::wrapping_shr(self, count)
            }

            #[inline(always)]
            fn shift_right_logical(self, count: u32) -> Self {
                <$u>::wrapping_shr(self as $u, count) as $t
            }

            #[inline(always)]
            fn to_lane_index(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }
        }
    };
}

macro_rules! unsigned_int {
    ($t:ty, $s:ty, $kind:ident, $native:ident) => {
        int_common!($t, $kind, $t, $native);

        impl AbsWrapping for $t {
            type Magnitude = $t;

            #[inline(always)]
            fn abs_wrapping(self) -> Self {
                self
            }

            #[inline(always)]
            fn magnitude(self) -> $t {
                self
            }

            #[inline(always)]
            fn copy_sign_wrapping(self, _sign: Self) -> Self {
                self
            }
        }

        impl IntElement for $t {
            const SIGNED: bool = false;

            #[inline(always)]
            fn shift_left(self, count: u32) -> Self {
                <$t>::wrapping_shl(self, count)
            }

            #[inline(always)]
            fn shift_right_arithmetic(self, count: u32) -> Self {
                <$s>::wrapping_shr(self as $s, count) as $t
            }

            #[inline(always)]
            fn shift_right_logical(self, count: u32) -> Self {
                <$t>::wrapping_shr(self, count)
            }

            #[inline(always)]
            fn to_lane_index(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }
        }
    };
}

signed_int!(i8, u8, I8, I8);
signed_int!(i16, u16, I16, I16);
signed_int!(i32, u32, I32, I32);
signed_int!(i64, u64, I64, I64);
signed_int!(isize, usize, ISize, ISIZE);
unsigned_int!(u8, i8, U8, U8);
unsigned_int!(u16, i16, U16, U16);
unsigned_int!(u32, i32, U32, U32);
unsigned_int!(u64, i64, U64, U64);
unsigned_int!(usize, isize, USize, USIZE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(Element::add(250u8, 10), 4);
        assert_eq!(Element::subtract(i8::MIN, 1), i8::MAX);
        assert_eq!(Element::multiply(0x4000i16, 4), 0);
        assert_eq!(Element::divide(i32::MIN, -1), i32::MIN);
        assert_eq!(Element::divide(-7i32, 2), -3);
    }

    #[test]
    #[should_panic]
    fn test_integer_divide_by_zero_panics() {
        let zero = core::hint::black_box(0u16);
        let _ = Element::divide(1u16, zero);
    }

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(Element::add_saturate(250u8, 10), u8::MAX);
        assert_eq!(Element::subtract_saturate(3u8, 10), 0);
        assert_eq!(Element::add_saturate(i16::MAX, 1), i16::MAX);
        assert_eq!(Element::subtract_saturate(i16::MIN, 1), i16::MIN);
    }

    #[test]
    fn test_abs_and_negate_wrap_at_min() {
        assert_eq!(Element::abs(i8::MIN), i8::MIN);
        assert_eq!(Element::negate(i8::MIN), i8::MIN);
        assert_eq!(Element::abs(-5i64), 5);
        assert_eq!(Element::negate(1u32), u32::MAX);
        assert_eq!(Element::abs(200u8), 200);
    }

    #[test]
    fn test_magnitude_ties_prefer_ordering() {
        assert_eq!(Element::min_magnitude(-3i32, 3), -3);
        assert_eq!(Element::max_magnitude(-3i32, 3), 3);
        assert_eq!(Element::min_magnitude(-2i32, 3), -2);
        assert_eq!(Element::max_magnitude(i32::MIN, i32::MAX), i32::MIN);
    }

    #[test]
    fn test_copy_sign() {
        assert_eq!(Element::copy_sign(5i16, -1), -5);
        assert_eq!(Element::copy_sign(-5i16, 0), 5);
        assert_eq!(Element::copy_sign(7u16, 0), 7);
    }

    #[test]
    fn test_shift_counts_wrap_at_width() {
        assert_eq!(IntElement::shift_left(1u8, 9), 2);
        assert_eq!(IntElement::shift_right_arithmetic(-16i32, 2), -4);
        assert_eq!(IntElement::shift_right_logical(-16i32, 28), 0xF);
        assert_eq!(IntElement::shift_right_arithmetic(0x8000u16, 15), 0xFFFF);
    }

    #[test]
    fn test_classification() {
        assert!(Element::is_negative(-1i8));
        assert!(!Element::is_negative(0x80u8));
        assert!(Element::most_significant_bit(0x80u8));
        assert!(Element::is_positive(0i32));
        assert!(Element::is_even_integer(-4i64));
        assert!(Element::is_odd_integer(-3i64));
        assert!(!Element::is_normal(0u16));
        assert!(Element::is_finite(u64::MAX));
    }

    #[test]
    fn test_lane_index_conversion() {
        assert_eq!(IntElement::to_lane_index(3u8), 3);
        assert_eq!(IntElement::to_lane_index(-1i8), usize::MAX);
        assert_eq!(<u16 as Element>::from_lane_index(7), 7);
    }
}
