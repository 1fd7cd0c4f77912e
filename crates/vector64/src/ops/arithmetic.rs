//! Arithmetic operations
//!
//! Lane-wise arithmetic, saturating arithmetic and the min/max family.

use crate::backends::dispatch;
use crate::element::{Element, FloatElement};
use crate::Vector64;

impl<T: Element> Vector64<T> {
    /// Add two vectors lane-wise, wrapping on integer overflow
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let a = Vector64::<u8>::from_lanes([1, 2, 3, 4, 5, 6, 7, 250]);
    /// let b = Vector64::splat(10u8);
    /// assert_eq!(a.add(b).to_lanes(), [11, 12, 13, 14, 15, 16, 17, 4]);
    /// ```
    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        dispatch!(add(self, rhs))
    }

    /// Subtract lane-wise, wrapping on integer overflow
    #[inline(always)]
    pub fn subtract(self, rhs: Self) -> Self {
        dispatch!(subtract(self, rhs))
    }

    /// Multiply lane-wise, keeping the low bits on integer overflow
    #[inline(always)]
    pub fn multiply(self, rhs: Self) -> Self {
        dispatch!(multiply(self, rhs))
    }

    /// Divide lane-wise
    ///
    /// # Panics
    ///
    /// Integer lanes panic on division by zero. `MIN / -1` wraps to `MIN`.
    #[inline(always)]
    pub fn divide(self, rhs: Self) -> Self {
        dispatch!(divide(self, rhs))
    }

    /// Multiply every lane by `scalar`
    #[inline(always)]
    pub fn multiply_scalar(self, scalar: T) -> Self {
        self.multiply(Self::splat(scalar))
    }

    /// Divide every lane by `scalar`
    ///
    /// # Panics
    ///
    /// Integer lanes panic if `scalar` is zero.
    #[inline(always)]
    pub fn divide_scalar(self, scalar: T) -> Self {
        self.divide(Self::splat(scalar))
    }

    /// Negate lane-wise (wrapping for integers)
    #[inline(always)]
    pub fn negate(self) -> Self {
        dispatch!(negate(self))
    }

    /// Absolute value lane-wise
    ///
    /// Signed integer `MIN` stays `MIN`; floats clear the sign bit (NaN included).
    #[inline(always)]
    pub fn abs(self) -> Self {
        dispatch!(abs(self))
    }

    /// Add lane-wise, clamping integer results to `[MIN, MAX]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let a = Vector64::<i16>::from_lanes([32_000, -32_000, 5, 0]);
    /// let b = Vector64::<i16>::from_lanes([1_000, -1_000, 5, 0]);
    /// assert_eq!(a.add_saturate(b).to_lanes(), [32_767, -32_768, 10, 0]);
    /// ```
    #[inline(always)]
    pub fn add_saturate(self, rhs: Self) -> Self {
        dispatch!(add_saturate(self, rhs))
    }

    /// Subtract lane-wise, clamping integer results to `[MIN, MAX]`
    #[inline(always)]
    pub fn subtract_saturate(self, rhs: Self) -> Self {
        dispatch!(subtract_saturate(self, rhs))
    }

    // ========================================================================
    // Min / max family
    // ========================================================================

    /// Lane-wise minimum; floats follow IEEE 754-2019 `minimum` (NaN wins, `-0.0 < +0.0`)
    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        dispatch!(min(self, rhs))
    }

    /// Lane-wise maximum; floats follow IEEE 754-2019 `maximum` (NaN wins, `-0.0 < +0.0`)
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        dispatch!(max(self, rhs))
    }

    /// Lane-wise minimum that ignores a NaN operand
    #[inline]
    pub fn min_number(self, rhs: Self) -> Self {
        if T::KIND.is_float() {
            self.zip_map(rhs, T::min_number)
        } else {
            self.min(rhs)
        }
    }

    /// Lane-wise maximum that ignores a NaN operand
    #[inline]
    pub fn max_number(self, rhs: Self) -> Self {
        if T::KIND.is_float() {
            self.zip_map(rhs, T::max_number)
        } else {
            self.max(rhs)
        }
    }

    /// Lane-wise operand with the smaller magnitude
    #[inline]
    pub fn min_magnitude(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::min_magnitude)
    }

    /// Lane-wise operand with the larger magnitude
    #[inline]
    pub fn max_magnitude(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::max_magnitude)
    }

    /// Lane-wise operand with the smaller magnitude, ignoring a NaN operand
    #[inline]
    pub fn min_magnitude_number(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::min_magnitude_number)
    }

    /// Lane-wise operand with the larger magnitude, ignoring a NaN operand
    #[inline]
    pub fn max_magnitude_number(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::max_magnitude_number)
    }

    /// Lane-wise `if self < rhs { self } else { rhs }`
    ///
    /// For floats a NaN in either lane, and `±0.0` ties, yield `rhs`.
    #[inline]
    pub fn min_native(self, rhs: Self) -> Self {
        if T::KIND.is_float() {
            self.zip_map(rhs, T::min_native)
        } else {
            self.min(rhs)
        }
    }

    /// Lane-wise `if self > rhs { self } else { rhs }`
    ///
    /// For floats a NaN in either lane, and `±0.0` ties, yield `rhs`.
    #[inline]
    pub fn max_native(self, rhs: Self) -> Self {
        if T::KIND.is_float() {
            self.zip_map(rhs, T::max_native)
        } else {
            self.max(rhs)
        }
    }

    /// `min(max(self, min), max)` lane-wise
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// `min_native(max_native(self, min), max)` lane-wise
    #[inline]
    pub fn clamp_native(self, min: Self, max: Self) -> Self {
        self.max_native(min).min_native(max)
    }

    /// Magnitude of each lane with the sign of the matching `sign` lane
    ///
    /// Unsigned lanes are returned unchanged.
    #[inline]
    pub fn copy_sign(self, sign: Self) -> Self {
        self.zip_map(sign, T::copy_sign)
    }
}

impl<T: FloatElement> Vector64<T> {
    /// `self * b + c` lane-wise with a single rounding
    #[inline]
    pub fn fused_multiply_add(self, b: Self, c: Self) -> Self {
        let (x, y, z) = (self.as_slice(), b.as_slice(), c.as_slice());
        Self::from_fn(|i| x[i].fused_multiply_add(y[i], z[i]))
    }

    /// `self * b + c` lane-wise; rounding may happen once or twice
    ///
    /// Computed unfused on every path so results do not depend on the CPU.
    #[inline]
    pub fn multiply_add_estimate(self, b: Self, c: Self) -> Self {
        self.multiply(b).add(c)
    }

    /// `x * (1 - amount) + y * amount` lane-wise
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let x = Vector64::<f32>::from_lanes([0.0, 10.0]);
    /// let y = Vector64::<f32>::from_lanes([4.0, 20.0]);
    /// let t = Vector64::splat(0.25f32);
    /// assert_eq!(Vector64::lerp(x, y, t).to_lanes(), [1.0, 12.5]);
    /// ```
    #[inline]
    pub fn lerp(x: Self, y: Self, amount: Self) -> Self {
        let inverse = Self::one().subtract(amount);
        x.multiply(inverse).add(y.multiply(amount))
    }

    /// Degrees to radians lane-wise
    #[inline]
    pub fn degrees_to_radians(self) -> Self {
        self.multiply_scalar(T::DEGREES_TO_RADIANS)
    }

    /// Radians to degrees lane-wise
    #[inline]
    pub fn radians_to_degrees(self) -> Self {
        self.multiply_scalar(T::RADIANS_TO_DEGREES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_wrapping() {
        let a = Vector64::<i8>::splat(i8::MAX);
        assert_eq!(a.add(Vector64::one()).to_lanes(), [i8::MIN; 8]);
        let b = Vector64::<u32>::from_lanes([0x8000_0000, 3]);
        assert_eq!(b.multiply_scalar(2).to_lanes(), [0, 6]);
        let c = Vector64::<i32>::from_lanes([i32::MIN, -7]);
        assert_eq!(c.divide_scalar(-1).to_lanes(), [i32::MIN, 7]);
    }

    #[test]
    fn test_abs_negate() {
        let v = Vector64::<i16>::from_lanes([i16::MIN, -1, 0, 5]);
        assert_eq!(v.abs().to_lanes(), [i16::MIN, 1, 0, 5]);
        assert_eq!(v.negate().to_lanes(), [i16::MIN, 1, 0, -5]);
        let f = Vector64::<f32>::from_lanes([-0.0, -2.5]);
        assert_eq!(f.abs().to_bits(), Vector64::<f32>::from_lanes([0.0, 2.5]).to_bits());
    }

    #[test]
    fn test_saturating() {
        let a = Vector64::<u8>::from_lanes([250, 5, 0, 255, 128, 1, 2, 3]);
        let b = Vector64::<u8>::splat(10);
        assert_eq!(
            a.add_saturate(b).to_lanes(),
            [255, 15, 10, 255, 138, 11, 12, 13]
        );
        assert_eq!(a.subtract_saturate(b).to_lanes(), [240, 0, 0, 245, 118, 0, 0, 0]);
    }

    #[test]
    fn test_float_min_max_signed_zero_and_nan() {
        let a = Vector64::<f32>::from_lanes([-0.0, f32::NAN]);
        let b = Vector64::<f32>::from_lanes([0.0, 1.0]);
        let min = a.min(b).to_lanes();
        assert_eq!(min[0].to_bits(), (-0.0f32).to_bits());
        assert!(min[1].is_nan());
        let max = a.max(b).to_lanes();
        assert_eq!(max[0].to_bits(), 0.0f32.to_bits());
        assert!(max[1].is_nan());
        assert_eq!(a.min_number(b).to_lanes()[1], 1.0);
        assert_eq!(a.min_native(b).to_lanes()[1], 1.0);
    }

    #[test]
    fn test_clamp() {
        let v = Vector64::<i32>::from_lanes([-10, 10]);
        let lo = Vector64::splat(-5);
        let hi = Vector64::splat(5);
        assert_eq!(v.clamp(lo, hi).to_lanes(), [-5, 5]);
        assert_eq!(v.clamp_native(lo, hi).to_lanes(), [-5, 5]);
    }

    #[test]
    fn test_magnitude_and_sign() {
        let a = Vector64::<i16>::from_lanes([-3, 4, -5, 6]);
        let b = Vector64::<i16>::from_lanes([2, -4, 5, -7]);
        assert_eq!(a.min_magnitude(b).to_lanes(), [2, -4, -5, 6]);
        assert_eq!(a.max_magnitude(b).to_lanes(), [-3, 4, 5, -7]);
        assert_eq!(a.copy_sign(b).to_lanes(), [3, -4, 5, -6]);
    }

    #[test]
    fn test_fma_and_estimate() {
        let a = Vector64::<f64>::splat(0.1);
        let b = Vector64::<f64>::splat(10.0);
        let c = Vector64::<f64>::splat(-1.0);
        let fused = a.fused_multiply_add(b, c).to_scalar();
        assert_eq!(fused, libm::fma(0.1, 10.0, -1.0));
        assert_eq!(a.multiply_add_estimate(b, c).to_scalar(), 0.1 * 10.0 - 1.0);
    }

    #[test]
    fn test_angle_conversion() {
        let v = Vector64::<f64>::splat(180.0);
        assert!(libm::fabs(v.degrees_to_radians().to_scalar() - core::f64::consts::PI) < 1e-15);
        let r = Vector64::<f32>::splat(core::f32::consts::PI);
        assert!(libm::fabsf(r.radians_to_degrees().to_lanes()[0] - 180.0) < 1e-4);
    }
}
