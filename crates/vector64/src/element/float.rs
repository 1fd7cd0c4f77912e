//! Floating-point element implementations
//!
//! Min/max follow IEEE 754-2019: `minimum`/`maximum` propagate NaN and order `-0.0` below
//! `+0.0`, the `*_number` forms drop a NaN operand. Rounding and transcendental functions go
//! through `libm` so every backend produces the same bits.

use super::{Element, ElementKind, FloatElement, Sealed};
use crate::backends::kernels;

macro_rules! float_impl {
    (
        $t:ident, $bits:ident, $kind:ident, $native:ident,
        mantissa_bits = $mant:expr,
        exponent_bias = $bias:expr,
        sqrt = $sqrt:path,
        floor = $floor:path,
        ceil = $ceil:path,
        rint = $rint:path,
        trunc = $trunc:path,
        sin = $sin:path,
        cos = $cos:path,
        exp = $exp:path,
        log = $log:path,
        log2 = $log2:path,
        hypot = $hypot:path,
        fma = $fma:path $(,)?
    ) => {
        impl Sealed for $t {}

        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const BITS: u32 = <$bits>::BITS;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ALL_BITS_SET: Self = <$t>::from_bits(!0);
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            type Lanes = [$t; super::VECTOR_BYTES / core::mem::size_of::<$t>()];
            type Index = $bits;

            const NATIVE: crate::backends::NativeKernels = kernels::$native;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn divide(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn add_saturate(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn subtract_saturate(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn negate(self) -> Self {
                -self
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::from_bits(<$t>::to_bits(self) & !Self::SIGN_MASK)
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                if self != rhs {
                    if !Element::is_nan(self) {
                        return if self < rhs { self } else { rhs };
                    }
                    return self;
                }
                if Element::is_negative(self) {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                if self != rhs {
                    if !Element::is_nan(self) {
                        return if rhs < self { self } else { rhs };
                    }
                    return self;
                }
                if Element::is_negative(rhs) {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn min_number(self, rhs: Self) -> Self {
                if self != rhs {
                    if !Element::is_nan(rhs) {
                        return if self < rhs { self } else { rhs };
                    }
                    return self;
                }
                if Element::is_negative(self) {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max_number(self, rhs: Self) -> Self {
                if self != rhs {
                    if !Element::is_nan(rhs) {
                        return if rhs < self { self } else { rhs };
                    }
                    return self;
                }
                if Element::is_negative(rhs) {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn min_magnitude(self, rhs: Self) -> Self {
                let (a, b) = (Element::abs(self), Element::abs(rhs));
                if a < b || Element::is_nan(a) {
                    self
                } else if a == b {
                    if Element::is_negative(self) {
                        self
                    } else {
                        rhs
                    }
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max_magnitude(self, rhs: Self) -> Self {
                let (a, b) = (Element::abs(self), Element::abs(rhs));
                if a > b || Element::is_nan(a) {
                    self
                } else if a == b {
                    if Element::is_negative(self) {
                        rhs
                    } else {
                        self
                    }
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn min_magnitude_number(self, rhs: Self) -> Self {
                let (a, b) = (Element::abs(self), Element::abs(rhs));
                if a < b || Element::is_nan(b) {
                    self
                } else if a == b {
                    if Element::is_negative(self) {
                        self
                    } else {
                        rhs
                    }
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max_magnitude_number(self, rhs: Self) -> Self {
                let (a, b) = (Element::abs(self), Element::abs(rhs));
                if a > b || Element::is_nan(b) {
                    self
                } else if a == b {
                    if Element::is_negative(self) {
                        rhs
                    } else {
                        self
                    }
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn copy_sign(self, sign: Self) -> Self {
                let magnitude = <$t>::to_bits(self) & !Self::SIGN_MASK;
                <$t>::from_bits(magnitude | (<$t>::to_bits(sign) & Self::SIGN_MASK))
            }

            #[inline(always)]
            fn most_significant_bit(self) -> bool {
                <$t>::to_bits(self) & Self::SIGN_MASK != 0
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::to_bits(self) & !Self::SIGN_MASK > Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_infinity(self) -> bool {
                <$t>::to_bits(self) & !Self::SIGN_MASK == Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_positive_infinity(self) -> bool {
                <$t>::to_bits(self) == Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_negative_infinity(self) -> bool {
                <$t>::to_bits(self) == Self::SIGN_MASK | Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_finite(self) -> bool {
                <$t>::to_bits(self) & !Self::SIGN_MASK < Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                Element::most_significant_bit(self)
            }

            #[inline(always)]
            fn is_positive(self) -> bool {
                !Element::most_significant_bit(self)
            }

            #[inline(always)]
            fn is_normal(self) -> bool {
                let exponent = <$t>::to_bits(self) & Self::EXPONENT_MASK;
                exponent != 0 && exponent != Self::EXPONENT_MASK
            }

            #[inline(always)]
            fn is_subnormal(self) -> bool {
                let bits = <$t>::to_bits(self);
                bits & Self::EXPONENT_MASK == 0 && bits & Self::MANTISSA_MASK != 0
            }

            #[inline(always)]
            fn is_integer(self) -> bool {
                let exponent = ((<$t>::to_bits(self) & Self::EXPONENT_MASK) >> $mant) as i32 - $bias;
                if exponent < 0 {
                    return Element::is_zero(self);
                }
                if exponent >= $mant {
                    return Element::is_finite(self);
                }
                // Mantissa bits below the binary point must be clear.
                <$t>::to_bits(self) & (Self::MANTISSA_MASK >> exponent as u32) == 0
            }

            #[inline(always)]
            fn is_even_integer(self) -> bool {
                Element::is_integer(self) && !Element::is_odd_integer(self)
            }

            #[inline(always)]
            fn is_odd_integer(self) -> bool {
                let exponent = ((<$t>::to_bits(self) & Self::EXPONENT_MASK) >> $mant) as i32 - $bias;
                if !(0..=$mant).contains(&exponent) || !Element::is_integer(self) {
                    return false;
                }
                // Units bit: the implicit leading one at exponent 0, else a mantissa bit.
                exponent == 0 || (<$t>::to_bits(self) >> ($mant - exponent) as u32) & 1 == 1
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                <$t>::to_bits(self) & !Self::SIGN_MASK == 0
            }

            #[inline(always)]
            fn from_lane_index(index: usize) -> Self {
                index as $t
            }
        }

        impl FloatElement for $t {
            type Bits = $bits;

            const SIGN_MASK: $bits = 1 << (<$bits>::BITS - 1);
            const EXPONENT_MASK: $bits = !Self::SIGN_MASK & !Self::MANTISSA_MASK;
            const MANTISSA_MASK: $bits = (1 << $mant) - 1;
            const MANTISSA_BITS: u32 = $mant;
            const EXPONENT_BIAS: i32 = $bias;

            const DEGREES_TO_RADIANS: Self = core::$t::consts::PI / 180.0;
            const RADIANS_TO_DEGREES: Self = 180.0 / core::$t::consts::PI;

            #[inline(always)]
            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                if Element::is_nan(self) {
                    return self + self;
                }
                $floor(self)
            }

            #[inline(always)]
            fn ceiling(self) -> Self {
                if Element::is_nan(self) {
                    return self + self;
                }
                $ceil(self)
            }

            #[inline(always)]
            fn round(self) -> Self {
                if Element::is_nan(self) {
                    return self + self;
                }
                $rint(self)
            }

            #[inline(always)]
            fn truncate(self) -> Self {
                if Element::is_nan(self) {
                    return self + self;
                }
                $trunc(self)
            }

            #[inline(always)]
            fn sin(self) -> Self {
                $sin(self)
            }

            #[inline(always)]
            fn cos(self) -> Self {
                $cos(self)
            }

            #[inline(always)]
            fn exp(self) -> Self {
                $exp(self)
            }

            #[inline(always)]
            fn log(self) -> Self {
                $log(self)
            }

            #[inline(always)]
            fn log2(self) -> Self {
                $log2(self)
            }

            #[inline(always)]
            fn hypot(self, rhs: Self) -> Self {
                $hypot(self, rhs)
            }

            #[inline(always)]
            fn fused_multiply_add(self, b: Self, c: Self) -> Self {
                $fma(self, b, c)
            }
        }
    };
}

float_impl!(
    f32, u32, F32, F32,
    mantissa_bits = 23,
    exponent_bias = 127,
    sqrt = libm::sqrtf,
    floor = libm::floorf,
    ceil = libm::ceilf,
    rint = libm::rintf,
    trunc = libm::truncf,
    sin = libm::sinf,
    cos = libm::cosf,
    exp = libm::expf,
    log = libm::logf,
    log2 = libm::log2f,
    hypot = libm::hypotf,
    fma = libm::fmaf,
);

float_impl!(
    f64, u64, F64, F64,
    mantissa_bits = 52,
    exponent_bias = 1023,
    sqrt = libm::sqrt,
    floor = libm::floor,
    ceil = libm::ceil,
    rint = libm::rint,
    trunc = libm::trunc,
    sin = libm::sin,
    cos = libm::cos,
    exp = libm::exp,
    log = libm::log,
    log2 = libm::log2,
    hypot = libm::hypot,
    fma = libm::fma,
);
