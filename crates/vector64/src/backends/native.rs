//! Native backend: per-element kernel tables with a scalar fallback per operation

use super::{Backend, ScalarBackend};
use crate::dispatch::Acceleration;
use crate::element::{Element, FloatElement, IntElement, Narrow, Widen};
use crate::Vector64;

/// Backend running the platform kernels for the current element type.
///
/// A value of this type is proof that the CPU supports the target features the kernels were
/// compiled for, so it can only be obtained through [`NativeBackend::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeBackend(());

impl NativeBackend {
    /// The native backend, if the running CPU supports it.
    ///
    /// Reads the cached acceleration level; the first call performs detection.
    #[inline(always)]
    pub fn detect() -> Option<Self> {
        if Acceleration::current().is_accelerated() {
            Some(Self(()))
        } else {
            None
        }
    }
}

// Each arm: call the kernel if the element table has one, else the scalar loop.
// SAFETY (all kernel calls below): `NativeBackend` is only constructed after detection
// confirmed the target features the kernel tables were compiled for.

macro_rules! binary {
    ($op:ident, $a:ident, $b:ident) => {
        match T::NATIVE.$op {
            Some(kernel) => Vector64::from_bits(unsafe { kernel($a.to_bits(), $b.to_bits()) }),
            None => ScalarBackend.$op($a, $b),
        }
    };
}

macro_rules! unary {
    ($op:ident, $v:ident) => {
        match T::NATIVE.$op {
            Some(kernel) => Vector64::from_bits(unsafe { kernel($v.to_bits()) }),
            None => ScalarBackend.$op($v),
        }
    };
}

macro_rules! shift {
    ($op:ident, $v:ident, $count:ident) => {
        match T::NATIVE.$op {
            Some(kernel) => {
                let count = $count & (T::BITS - 1);
                Vector64::from_bits(unsafe { kernel($v.to_bits(), count) })
            }
            None => ScalarBackend.$op($v, $count),
        }
    };
}

impl Backend for NativeBackend {
    fn name(self) -> &'static str {
        Acceleration::current().name()
    }

    #[inline(always)]
    fn add<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(add, a, b)
    }

    #[inline(always)]
    fn subtract<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(subtract, a, b)
    }

    #[inline(always)]
    fn multiply<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(multiply, a, b)
    }

    #[inline(always)]
    fn divide<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(divide, a, b)
    }

    #[inline(always)]
    fn add_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(add_saturate, a, b)
    }

    #[inline(always)]
    fn subtract_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(subtract_saturate, a, b)
    }

    #[inline(always)]
    fn min<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(min, a, b)
    }

    #[inline(always)]
    fn max<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(max, a, b)
    }

    #[inline(always)]
    fn abs<T: Element>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(abs, v)
    }

    #[inline(always)]
    fn negate<T: Element>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(negate, v)
    }

    #[inline(always)]
    fn equals<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(equals, a, b)
    }

    #[inline(always)]
    fn greater_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(greater_than, a, b)
    }

    #[inline(always)]
    fn less_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        binary!(less_than, a, b)
    }

    #[inline(always)]
    fn sqrt<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(sqrt, v)
    }

    #[inline(always)]
    fn floor<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(floor, v)
    }

    #[inline(always)]
    fn ceiling<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(ceiling, v)
    }

    #[inline(always)]
    fn round<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(round, v)
    }

    #[inline(always)]
    fn truncate<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        unary!(truncate, v)
    }

    #[inline(always)]
    fn shift_left<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        shift!(shift_left, v, count)
    }

    #[inline(always)]
    fn shift_right_arithmetic<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        shift!(shift_right_arithmetic, v, count)
    }

    #[inline(always)]
    fn shift_right_logical<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        shift!(shift_right_logical, v, count)
    }

    #[inline(always)]
    fn extract_most_significant_bits<T: Element>(self, v: Vector64<T>) -> u32 {
        match T::NATIVE.extract_msb {
            Some(kernel) => unsafe { kernel(v.to_bits()) },
            None => ScalarBackend.extract_most_significant_bits(v),
        }
    }

    #[inline(always)]
    fn widen<T: Widen>(self, v: Vector64<T>) -> (Vector64<T::Wide>, Vector64<T::Wide>) {
        match T::NATIVE.widen {
            Some(kernel) => {
                let (lower, upper) = unsafe { kernel(v.to_bits()) };
                (Vector64::from_bits(lower), Vector64::from_bits(upper))
            }
            None => ScalarBackend.widen(v),
        }
    }

    #[inline(always)]
    fn narrow<T: Narrow>(self, lower: Vector64<T>, upper: Vector64<T>) -> Vector64<T::Narrow> {
        match T::NATIVE.narrow {
            Some(kernel) => {
                Vector64::from_bits(unsafe { kernel(lower.to_bits(), upper.to_bits()) })
            }
            None => ScalarBackend.narrow(lower, upper),
        }
    }

    #[inline(always)]
    fn narrow_with_saturation<T: Narrow>(
        self,
        lower: Vector64<T>,
        upper: Vector64<T>,
    ) -> Vector64<T::Narrow> {
        match T::NATIVE.narrow_saturate {
            Some(kernel) => {
                Vector64::from_bits(unsafe { kernel(lower.to_bits(), upper.to_bits()) })
            }
            None => ScalarBackend.narrow_with_saturation(lower, upper),
        }
    }

    #[inline(always)]
    fn shuffle_native<T: Element>(
        self,
        v: Vector64<T>,
        indices: Vector64<T::Index>,
    ) -> Vector64<T> {
        match T::NATIVE.shuffle {
            Some(kernel) => Vector64::from_bits(unsafe { kernel(v.to_bits(), indices.to_bits()) }),
            None => ScalarBackend.shuffle(v, indices),
        }
    }
}
