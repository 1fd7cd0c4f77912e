//! Scalar element capability table
//!
//! Every lane operation of [`Vector64`](crate::Vector64) is defined in terms of the traits in
//! this module, applied lane by lane on the fallback path. Integer and floating-point element
//! types differ in overflow, ordering, rounding and classification semantics; this is where
//! those differences live.
//!
//! The set of element types is closed: [`Element`] is sealed and implemented only for the
//! primitive numeric types whose size divides the 8-byte register. Instantiating a vector for
//! any other type is a compile-time error.
//!
//! ```compile_fail
//! use vector64::Vector64;
//! // u128 does not fit an 8-byte register and is not an `Element`.
//! let v = Vector64::<u128>::zero();
//! ```

use core::fmt::{Debug, Display};

use bytemuck::Pod;

use crate::backends::NativeKernels;

mod convert;
mod float;
mod int;

pub use convert::{ConvertToFloat, ConvertToInteger, Narrow, Widen};

/// Total register width in bytes.
pub const VECTOR_BYTES: usize = 8;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Identifies a supported element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `u16`
    U16,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
    /// `isize`
    ISize,
    /// `usize`
    USize,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl ElementKind {
    /// Rust name of the element type
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::I8 => "i8",
            ElementKind::U8 => "u8",
            ElementKind::I16 => "i16",
            ElementKind::U16 => "u16",
            ElementKind::I32 => "i32",
            ElementKind::U32 => "u32",
            ElementKind::I64 => "i64",
            ElementKind::U64 => "u64",
            ElementKind::ISize => "isize",
            ElementKind::USize => "usize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }

    /// Size of one element in bytes
    pub const fn size(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
            ElementKind::ISize | ElementKind::USize => core::mem::size_of::<usize>(),
        }
    }

    /// Number of lanes a 64-bit vector of this element type holds
    pub const fn lanes(self) -> usize {
        VECTOR_BYTES / self.size()
    }

    /// True for `f32` and `f64`
    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// True for signed integers and floats
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
                | ElementKind::USize
        )
    }
}

/// Primitive numeric type usable as a vector lane.
///
/// Arithmetic wraps for integers and follows IEEE-754 for floats. Ordering predicates use
/// total order for integers and IEEE partial order for floats: NaN compares false to
/// everything, itself included.
///
/// This trait is sealed.
pub trait Element:
    Sealed + Pod + PartialEq + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    /// Which primitive this is
    const KIND: ElementKind;

    /// Width in bits
    const BITS: u32;

    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Every bit set, reinterpreted as `Self`
    const ALL_BITS_SET: Self;

    /// Smallest finite value
    const MIN: Self;

    /// Largest finite value
    const MAX: Self;

    /// Lane storage: `[Self; 8 / size_of::<Self>()]`
    type Lanes: Pod + AsRef<[Self]> + AsMut<[Self]> + Debug;

    /// Same-width unsigned integer used as a shuffle selector
    type Index: IntElement;

    #[doc(hidden)]
    const NATIVE: NativeKernels;

    // Arithmetic

    /// Wrapping (integer) or IEEE (float) addition
    fn add(self, rhs: Self) -> Self;

    /// Wrapping (integer) or IEEE (float) subtraction
    fn subtract(self, rhs: Self) -> Self;

    /// Wrapping (integer) or IEEE (float) multiplication
    fn multiply(self, rhs: Self) -> Self;

    /// Division
    ///
    /// # Panics
    ///
    /// Integer division by zero panics. `MIN / -1` wraps.
    fn divide(self, rhs: Self) -> Self;

    /// Saturating addition for integers; plain addition for floats
    fn add_saturate(self, rhs: Self) -> Self;

    /// Saturating subtraction for integers; plain subtraction for floats
    fn subtract_saturate(self, rhs: Self) -> Self;

    /// Wrapping negation (integers) or sign flip (floats)
    fn negate(self) -> Self;

    /// Wrapping absolute value (`MIN` stays `MIN`); clears the sign bit for floats
    fn abs(self) -> Self;

    // Comparison

    /// `self == rhs`
    #[inline(always)]
    fn equals(self, rhs: Self) -> bool {
        self == rhs
    }

    /// `self < rhs`
    #[inline(always)]
    fn less_than(self, rhs: Self) -> bool {
        self < rhs
    }

    /// `self > rhs`
    #[inline(always)]
    fn greater_than(self, rhs: Self) -> bool {
        self > rhs
    }

    // Min/Max family

    /// IEEE 754-2019 `minimum`: NaN propagates, `-0.0 < +0.0`
    fn min(self, rhs: Self) -> Self;

    /// IEEE 754-2019 `maximum`: NaN propagates, `-0.0 < +0.0`
    fn max(self, rhs: Self) -> Self;

    /// IEEE 754-2019 `minimumNumber`: a NaN operand is ignored
    fn min_number(self, rhs: Self) -> Self;

    /// IEEE 754-2019 `maximumNumber`: a NaN operand is ignored
    fn max_number(self, rhs: Self) -> Self;

    /// Operand with the smaller magnitude; NaN propagates
    fn min_magnitude(self, rhs: Self) -> Self;

    /// Operand with the larger magnitude; NaN propagates
    fn max_magnitude(self, rhs: Self) -> Self;

    /// Operand with the smaller magnitude; a NaN operand is ignored
    fn min_magnitude_number(self, rhs: Self) -> Self;

    /// Operand with the larger magnitude; a NaN operand is ignored
    fn max_magnitude_number(self, rhs: Self) -> Self;

    /// `if self < rhs { self } else { rhs }`
    #[inline(always)]
    fn min_native(self, rhs: Self) -> Self {
        if self < rhs {
            self
        } else {
            rhs
        }
    }

    /// `if self > rhs { self } else { rhs }`
    #[inline(always)]
    fn max_native(self, rhs: Self) -> Self {
        if self > rhs {
            self
        } else {
            rhs
        }
    }

    /// Magnitude of `self` with the sign of `sign` (identity for unsigned integers)
    fn copy_sign(self, sign: Self) -> Self;

    // Bit queries

    /// State of the most significant (sign) bit
    fn most_significant_bit(self) -> bool;

    // Classification

    /// NaN test (always false for integers)
    fn is_nan(self) -> bool;

    /// Infinity test, either sign (always false for integers)
    fn is_infinity(self) -> bool;

    /// `+∞` test
    fn is_positive_infinity(self) -> bool;

    /// `-∞` test
    fn is_negative_infinity(self) -> bool;

    /// Neither infinite nor NaN
    fn is_finite(self) -> bool;

    /// Sign bit set (floats: includes `-0.0` and negative NaN)
    fn is_negative(self) -> bool;

    /// Sign bit clear (integers: `>= 0`)
    fn is_positive(self) -> bool;

    /// Normal float; non-zero integer
    fn is_normal(self) -> bool;

    /// Subnormal float (always false for integers)
    fn is_subnormal(self) -> bool;

    /// Finite with no fractional part
    fn is_integer(self) -> bool;

    /// Integer divisible by two
    fn is_even_integer(self) -> bool;

    /// Integer not divisible by two
    fn is_odd_integer(self) -> bool;

    /// `+0`, `-0` or integer zero
    fn is_zero(self) -> bool;

    /// Lane index converted to `Self` (`index as Self`)
    fn from_lane_index(index: usize) -> Self;
}

/// Integer element types.
pub trait IntElement: Element {
    /// True for signed integers
    const SIGNED: bool;

    /// Left shift; `count` is taken modulo the element width
    fn shift_left(self, count: u32) -> Self;

    /// Sign-propagating right shift; `count` is taken modulo the element width
    fn shift_right_arithmetic(self, count: u32) -> Self;

    /// Zero-filling right shift; `count` is taken modulo the element width
    fn shift_right_logical(self, count: u32) -> Self;

    /// Value as a lane index; negative or unrepresentable values map to `usize::MAX`
    fn to_lane_index(self) -> usize;
}

/// Floating-point element types.
///
/// Classification on floats is done by inspecting these bit fields directly.
pub trait FloatElement: Element {
    /// Unsigned integer with the same width
    type Bits: IntElement;

    /// Sign bit
    const SIGN_MASK: Self::Bits;

    /// Biased exponent field
    const EXPONENT_MASK: Self::Bits;

    /// Trailing significand field
    const MANTISSA_MASK: Self::Bits;

    /// Width of the trailing significand field
    const MANTISSA_BITS: u32;

    /// Exponent bias
    const EXPONENT_BIAS: i32;

    /// `π / 180`
    const DEGREES_TO_RADIANS: Self;

    /// `180 / π`
    const RADIANS_TO_DEGREES: Self;

    /// Raw IEEE-754 bits
    fn to_bits(self) -> Self::Bits;

    /// Float from raw IEEE-754 bits
    fn from_bits(bits: Self::Bits) -> Self;

    /// Correctly rounded square root
    fn sqrt(self) -> Self;

    /// Round toward negative infinity
    fn floor(self) -> Self;

    /// Round toward positive infinity
    fn ceiling(self) -> Self;

    /// Round to nearest, ties to even
    fn round(self) -> Self;

    /// Round toward zero
    fn truncate(self) -> Self;

    /// Sine
    fn sin(self) -> Self;

    /// Cosine
    fn cos(self) -> Self;

    /// `e^self`
    fn exp(self) -> Self;

    /// Natural logarithm
    fn log(self) -> Self;

    /// Base-2 logarithm
    fn log2(self) -> Self;

    /// `sqrt(self² + rhs²)` without intermediate overflow
    fn hypot(self, rhs: Self) -> Self;

    /// `self * b + c` with a single rounding
    fn fused_multiply_add(self, b: Self, c: Self) -> Self;
}
