//! Width-changing element relations
//!
//! These traits pair each element type with its double-width counterpart and each float
//! type with the integers of the same width. They carry the per-lane conversion used on the
//! fallback path; vector-level widening and narrowing is built on top of them.

use super::{Element, FloatElement, IntElement};

/// Element types that have a double-width counterpart.
pub trait Widen: Element {
    /// The double-width type
    type Wide: Narrow<Narrow = Self>;

    /// Lossless sign- or zero-extending conversion
    fn widen(self) -> Self::Wide;
}

/// Element types that have a half-width counterpart.
pub trait Narrow: Element {
    /// The half-width type
    type Narrow: Element;

    /// Keep the low bits (integers) or round to nearest (floats)
    fn narrow_truncate(self) -> Self::Narrow;

    /// Clamp to the half-width range (integers) or round to nearest (floats)
    fn narrow_saturate(self) -> Self::Narrow;
}

macro_rules! int_widen {
    ($($narrow:ty => $wide:ty),* $(,)?) => {$(
        impl Widen for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                <$wide>::from(self)
            }
        }

        impl Narrow for $wide {
            type Narrow = $narrow;

            #[inline(always)]
            fn narrow_truncate(self) -> $narrow {
                self as $narrow
            }

            #[inline(always)]
            fn narrow_saturate(self) -> $narrow {
                Ord::clamp(self, <$narrow>::MIN as $wide, <$narrow>::MAX as $wide) as $narrow
            }
        }
    )*};
}

int_widen!(
    i8 => i16,
    u8 => u16,
    i16 => i32,
    u16 => u32,
    i32 => i64,
    u32 => u64,
);

impl Widen for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Narrow for f64 {
    type Narrow = f32;

    #[inline(always)]
    fn narrow_truncate(self) -> f32 {
        self as f32
    }

    #[inline(always)]
    fn narrow_saturate(self) -> f32 {
        self as f32
    }
}

/// Float types convertible to the integers of the same width.
pub trait ConvertToInteger: FloatElement {
    /// Same-width signed integer
    type Signed: IntElement;

    /// Same-width unsigned integer
    type Unsigned: IntElement;

    /// Truncating conversion; out-of-range values saturate and NaN becomes zero
    fn to_signed_saturating(self) -> Self::Signed;

    /// Truncating conversion; out-of-range values saturate and NaN becomes zero
    fn to_unsigned_saturating(self) -> Self::Unsigned;

    /// Truncating conversion with the platform's out-of-range result
    ///
    /// In-range inputs agree with [`to_signed_saturating`](Self::to_signed_saturating).
    /// On x86 out-of-range and NaN inputs produce `MIN`; elsewhere they saturate.
    fn to_signed_native(self) -> Self::Signed;

    /// Truncating conversion with the platform's out-of-range result
    ///
    /// In-range inputs agree with [`to_unsigned_saturating`](Self::to_unsigned_saturating).
    /// On x86 out-of-range and NaN inputs produce `MAX`; elsewhere they saturate.
    fn to_unsigned_native(self) -> Self::Unsigned;
}

macro_rules! float_to_int {
    ($f:ty => $s:ty, $u:ty, signed_range = $slo:expr, $shi:expr, unsigned_limit = $uhi:expr) => {
        impl ConvertToInteger for $f {
            type Signed = $s;
            type Unsigned = $u;

            #[inline(always)]
            fn to_signed_saturating(self) -> $s {
                self as $s
            }

            #[inline(always)]
            fn to_unsigned_saturating(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn to_signed_native(self) -> $s {
                if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
                    if self >= $slo && self < $shi {
                        self as $s
                    } else {
                        <$s>::MIN
                    }
                } else {
                    self as $s
                }
            }

            #[inline(always)]
            fn to_unsigned_native(self) -> $u {
                if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
                    if self > -1.0 && self < $uhi {
                        self as $u
                    } else {
                        <$u>::MAX
                    }
                } else {
                    self as $u
                }
            }
        }
    };
}

float_to_int!(
    f32 => i32, u32,
    signed_range = -2_147_483_648.0, 2_147_483_648.0,
    unsigned_limit = 4_294_967_296.0
);
float_to_int!(
    f64 => i64, u64,
    signed_range = -9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0,
    unsigned_limit = 18_446_744_073_709_551_616.0
);

/// Integer types convertible to the float of the same width.
pub trait ConvertToFloat: IntElement {
    /// Same-width float
    type Float: FloatElement;

    /// Round-to-nearest conversion
    fn to_float(self) -> Self::Float;
}

macro_rules! int_to_float {
    ($($i:ty => $f:ty),* $(,)?) => {$(
        impl ConvertToFloat for $i {
            type Float = $f;

            #[inline(always)]
            fn to_float(self) -> $f {
                self as $f
            }
        }
    )*};
}

int_to_float!(i32 => f32, u32 => f32, i64 => f64, u64 => f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_extends_sign() {
        assert_eq!(Widen::widen(-1i8), -1i16);
        assert_eq!(Widen::widen(0xFFu8), 0x00FFu16);
        assert_eq!(Widen::widen(u32::MAX), u64::from(u32::MAX));
        assert_eq!(Widen::widen(1.5f32), 1.5f64);
    }

    #[test]
    fn test_narrow_truncate_keeps_low_bits() {
        assert_eq!(Narrow::narrow_truncate(0x1234u16), 0x34u8);
        assert_eq!(Narrow::narrow_truncate(-129i16), 127i8);
        assert_eq!(Narrow::narrow_truncate(0x1_0000_0001u64), 1u32);
    }

    #[test]
    fn test_narrow_saturate_clamps() {
        assert_eq!(Narrow::narrow_saturate(300i16), 127i8);
        assert_eq!(Narrow::narrow_saturate(-300i16), -128i8);
        assert_eq!(Narrow::narrow_saturate(300u16), 255u8);
        assert_eq!(Narrow::narrow_saturate(i64::MIN), i32::MIN);
        assert!(Narrow::narrow_saturate(1.0e300f64).is_infinite());
    }

    #[test]
    fn test_saturating_float_to_int() {
        assert_eq!(ConvertToInteger::to_signed_saturating(3.9f32), 3);
        assert_eq!(ConvertToInteger::to_signed_saturating(-3.9f32), -3);
        assert_eq!(ConvertToInteger::to_signed_saturating(1.0e20f32), i32::MAX);
        assert_eq!(ConvertToInteger::to_signed_saturating(f32::NAN), 0);
        assert_eq!(ConvertToInteger::to_unsigned_saturating(-5.0f64), 0);
        assert_eq!(ConvertToInteger::to_unsigned_saturating(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn test_native_conversion_agrees_in_range() {
        for v in [0.0f32, 1.5, -7.25, 2_147_483_520.0, -2_147_483_648.0] {
            assert_eq!(
                ConvertToInteger::to_signed_native(v),
                ConvertToInteger::to_signed_saturating(v)
            );
        }
        for v in [0.0f64, 0.99, 4_294_967_295.0] {
            assert_eq!(
                ConvertToInteger::to_unsigned_native(v),
                ConvertToInteger::to_unsigned_saturating(v)
            );
        }
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_native_conversion_sentinel_on_x86() {
        assert_eq!(ConvertToInteger::to_signed_native(f32::NAN), i32::MIN);
        assert_eq!(ConvertToInteger::to_signed_native(3.0e9f32), i32::MIN);
        assert_eq!(ConvertToInteger::to_unsigned_native(-1.0f32), u32::MAX);
    }

    #[test]
    fn test_int_to_float() {
        assert_eq!(ConvertToFloat::to_float(-3i32), -3.0f32);
        assert_eq!(ConvertToFloat::to_float(u64::MAX), 18_446_744_073_709_551_616.0f64);
    }
}
