//! Vector backends
//!
//! [`ScalarBackend`] loops over the lanes with the element table and is the reference every
//! other path must match bit for bit. [`NativeBackend`] runs per-element kernel tables built
//! from platform intrinsics and falls back to the scalar loop for each (operation, element)
//! pair that has no kernel.
//!
//! Kernels operate on the raw 64-bit register value (`u64`, native lane order). Platform
//! kernels are compiled only on little-endian targets, where lane 0 is the low byte of that
//! value on both the memory and the register side.

use crate::element::{Element, FloatElement, IntElement, Narrow, Widen};
use crate::Vector64;

mod native;
mod scalar;

#[cfg(all(
    target_arch = "x86_64",
    target_endian = "little",
    not(feature = "force-scalar")
))]
mod sse41;

#[cfg(all(
    target_arch = "aarch64",
    target_endian = "little",
    not(feature = "force-scalar")
))]
mod neon;

pub use native::NativeBackend;
pub use scalar::ScalarBackend;

// Kernel signatures over the raw register value
pub(crate) type UnaryKernel = unsafe fn(u64) -> u64;
pub(crate) type BinaryKernel = unsafe fn(u64, u64) -> u64;
pub(crate) type ShiftKernel = unsafe fn(u64, u32) -> u64;
pub(crate) type MaskKernel = unsafe fn(u64) -> u32;
pub(crate) type WidenKernel = unsafe fn(u64) -> (u64, u64);

/// Per-element table of platform kernels.
///
/// A `None` entry means the platform has no instruction sequence for that (operation, element)
/// pair and the scalar loop is used instead. Every `Some` kernel requires the target features
/// that made [`NativeBackend::detect`] succeed.
#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct NativeKernels {
    // ========================================================================
    // Arithmetic
    // ========================================================================
    pub(crate) add: Option<BinaryKernel>,
    pub(crate) subtract: Option<BinaryKernel>,
    pub(crate) multiply: Option<BinaryKernel>,
    pub(crate) divide: Option<BinaryKernel>,
    pub(crate) add_saturate: Option<BinaryKernel>,
    pub(crate) subtract_saturate: Option<BinaryKernel>,
    pub(crate) min: Option<BinaryKernel>,
    pub(crate) max: Option<BinaryKernel>,
    pub(crate) abs: Option<UnaryKernel>,
    pub(crate) negate: Option<UnaryKernel>,

    // ========================================================================
    // Comparison (mask results)
    // ========================================================================
    pub(crate) equals: Option<BinaryKernel>,
    pub(crate) greater_than: Option<BinaryKernel>,
    pub(crate) less_than: Option<BinaryKernel>,

    // ========================================================================
    // Float rounding
    // ========================================================================
    pub(crate) sqrt: Option<UnaryKernel>,
    pub(crate) floor: Option<UnaryKernel>,
    pub(crate) ceiling: Option<UnaryKernel>,
    pub(crate) round: Option<UnaryKernel>,
    pub(crate) truncate: Option<UnaryKernel>,

    // ========================================================================
    // Shifts (count already reduced modulo the element width)
    // ========================================================================
    pub(crate) shift_left: Option<ShiftKernel>,
    pub(crate) shift_right_arithmetic: Option<ShiftKernel>,
    pub(crate) shift_right_logical: Option<ShiftKernel>,

    // ========================================================================
    // Shape
    // ========================================================================
    pub(crate) extract_msb: Option<MaskKernel>,
    /// This element type to its double-width counterpart, (lower, upper)
    pub(crate) widen: Option<WidenKernel>,
    /// (lower, upper) of this element type to its half-width counterpart
    pub(crate) narrow: Option<BinaryKernel>,
    pub(crate) narrow_saturate: Option<BinaryKernel>,
    pub(crate) shuffle: Option<BinaryKernel>,
}

impl NativeKernels {
    /// Table with no kernels at all
    pub(crate) const NONE: Self = Self {
        add: None,
        subtract: None,
        multiply: None,
        divide: None,
        add_saturate: None,
        subtract_saturate: None,
        min: None,
        max: None,
        abs: None,
        negate: None,
        equals: None,
        greater_than: None,
        less_than: None,
        sqrt: None,
        floor: None,
        ceiling: None,
        round: None,
        truncate: None,
        shift_left: None,
        shift_right_arithmetic: None,
        shift_right_logical: None,
        extract_msb: None,
        widen: None,
        narrow: None,
        narrow_saturate: None,
        shuffle: None,
    };
}

impl core::fmt::Debug for NativeKernels {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let present = [
            self.add.is_some(),
            self.subtract.is_some(),
            self.multiply.is_some(),
            self.divide.is_some(),
            self.add_saturate.is_some(),
            self.subtract_saturate.is_some(),
            self.min.is_some(),
            self.max.is_some(),
            self.abs.is_some(),
            self.negate.is_some(),
            self.equals.is_some(),
            self.greater_than.is_some(),
            self.less_than.is_some(),
            self.sqrt.is_some(),
            self.floor.is_some(),
            self.ceiling.is_some(),
            self.round.is_some(),
            self.truncate.is_some(),
            self.shift_left.is_some(),
            self.shift_right_arithmetic.is_some(),
            self.shift_right_logical.is_some(),
            self.extract_msb.is_some(),
            self.widen.is_some(),
            self.narrow.is_some(),
            self.narrow_saturate.is_some(),
            self.shuffle.is_some(),
        ];
        let kernels = present.iter().filter(|p| **p).count();
        f.debug_struct("NativeKernels")
            .field("kernels", &kernels)
            .finish()
    }
}

/// Kernel tables for the current target, one per element type.
pub(crate) mod kernels {
    #[cfg(all(
        target_arch = "x86_64",
        target_endian = "little",
        not(feature = "force-scalar")
    ))]
    pub(crate) use super::sse41::{F32, F64, I16, I32, I64, I8, U16, U32, U64, U8};

    #[cfg(all(
        target_arch = "aarch64",
        target_endian = "little",
        not(feature = "force-scalar")
    ))]
    pub(crate) use super::neon::{F32, F64, I16, I32, I64, I8, U16, U32, U64, U8};

    #[cfg(not(any(
        all(
            target_arch = "x86_64",
            target_endian = "little",
            not(feature = "force-scalar")
        ),
        all(
            target_arch = "aarch64",
            target_endian = "little",
            not(feature = "force-scalar")
        )
    )))]
    pub(crate) use self::portable::{F32, F64, I16, I32, I64, I8, U16, U32, U64, U8};

    #[cfg(target_pointer_width = "64")]
    pub(crate) use self::{I64 as ISIZE, U64 as USIZE};

    #[cfg(target_pointer_width = "32")]
    pub(crate) use self::{I32 as ISIZE, U32 as USIZE};

    #[cfg(target_pointer_width = "16")]
    pub(crate) use self::{I16 as ISIZE, U16 as USIZE};

    #[allow(dead_code)]
    mod portable {
        use super::super::NativeKernels;

        pub(crate) const I8: NativeKernels = NativeKernels::NONE;
        pub(crate) const U8: NativeKernels = NativeKernels::NONE;
        pub(crate) const I16: NativeKernels = NativeKernels::NONE;
        pub(crate) const U16: NativeKernels = NativeKernels::NONE;
        pub(crate) const I32: NativeKernels = NativeKernels::NONE;
        pub(crate) const U32: NativeKernels = NativeKernels::NONE;
        pub(crate) const I64: NativeKernels = NativeKernels::NONE;
        pub(crate) const U64: NativeKernels = NativeKernels::NONE;
        pub(crate) const F32: NativeKernels = NativeKernels::NONE;
        pub(crate) const F64: NativeKernels = NativeKernels::NONE;
    }
}

/// The bit-exact primitive family every vector operation is built from.
///
/// Implementations must agree with [`ScalarBackend`] bit for bit on every input, NaN payloads
/// of float results excepted.
pub trait Backend: Copy {
    /// Human-readable backend name
    fn name(self) -> &'static str;

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Lane-wise wrapping (integer) or IEEE (float) addition
    fn add<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise wrapping (integer) or IEEE (float) subtraction
    fn subtract<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise wrapping (integer) or IEEE (float) multiplication
    fn multiply<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise division
    ///
    /// # Panics
    ///
    /// Panics on integer division by zero.
    fn divide<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise saturating addition
    fn add_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise saturating subtraction
    fn subtract_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise IEEE 754-2019 minimum
    fn min<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise IEEE 754-2019 maximum
    fn max<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Lane-wise absolute value
    fn abs<T: Element>(self, v: Vector64<T>) -> Vector64<T>;

    /// Lane-wise negation
    fn negate<T: Element>(self, v: Vector64<T>) -> Vector64<T>;

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Mask of lanes where `a == b`
    fn equals<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Mask of lanes where `a > b`
    fn greater_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    /// Mask of lanes where `a < b`
    fn less_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T>;

    // ========================================================================
    // Float rounding
    // ========================================================================

    /// Lane-wise square root
    fn sqrt<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T>;

    /// Lane-wise round toward negative infinity
    fn floor<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T>;

    /// Lane-wise round toward positive infinity
    fn ceiling<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T>;

    /// Lane-wise round to nearest, ties to even
    fn round<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T>;

    /// Lane-wise round toward zero
    fn truncate<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T>;

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Lane-wise left shift by `count % T::BITS`
    fn shift_left<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T>;

    /// Lane-wise sign-propagating right shift by `count % T::BITS`
    fn shift_right_arithmetic<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T>;

    /// Lane-wise zero-filling right shift by `count % T::BITS`
    fn shift_right_logical<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T>;

    // ========================================================================
    // Shape
    // ========================================================================

    /// Sign bit of lane `i` packed into bit `i`
    fn extract_most_significant_bits<T: Element>(self, v: Vector64<T>) -> u32;

    /// Lower and upper halves extended to the double-width type
    fn widen<T: Widen>(self, v: Vector64<T>) -> (Vector64<T::Wide>, Vector64<T::Wide>);

    /// `lower` then `upper`, each lane truncated to the half-width type
    fn narrow<T: Narrow>(self, lower: Vector64<T>, upper: Vector64<T>) -> Vector64<T::Narrow>;

    /// `lower` then `upper`, each lane clamped to the half-width type
    fn narrow_with_saturation<T: Narrow>(
        self,
        lower: Vector64<T>,
        upper: Vector64<T>,
    ) -> Vector64<T::Narrow>;

    /// Lane selection with platform-defined results for out-of-range indices
    fn shuffle_native<T: Element>(self, v: Vector64<T>, indices: Vector64<T::Index>)
        -> Vector64<T>;
}

/// Run a [`Backend`] operation on the native backend when the CPU supports it, otherwise on
/// the scalar reference.
macro_rules! dispatch {
    ($op:ident($($arg:expr),* $(,)?)) => {
        match $crate::backends::NativeBackend::detect() {
            Some(native) => $crate::backends::Backend::$op(native, $($arg),*),
            None => $crate::backends::Backend::$op($crate::backends::ScalarBackend, $($arg),*),
        }
    };
}

pub(crate) use dispatch;
