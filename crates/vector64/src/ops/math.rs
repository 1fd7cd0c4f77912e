//! Float math
//!
//! Square root and rounding dispatch to the backend and are bit exact on every path.
//! Transcendentals are evaluated per lane with `libm`, so accelerated and fallback builds
//! return identical results.

use crate::backends::dispatch;
use crate::element::FloatElement;
use crate::Vector64;

impl<T: FloatElement> Vector64<T> {
    /// Lane-wise square root; negative lanes become NaN
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<f32>::from_lanes([4.0, 2.25]);
    /// assert_eq!(v.sqrt().to_lanes(), [2.0, 1.5]);
    /// ```
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        dispatch!(sqrt(self))
    }

    /// Round toward negative infinity
    #[inline(always)]
    pub fn floor(self) -> Self {
        dispatch!(floor(self))
    }

    /// Round toward positive infinity
    #[inline(always)]
    pub fn ceiling(self) -> Self {
        dispatch!(ceiling(self))
    }

    /// Round to nearest, ties to even
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<f32>::from_lanes([2.5, -3.5]);
    /// assert_eq!(v.round().to_lanes(), [2.0, -4.0]);
    /// ```
    #[inline(always)]
    pub fn round(self) -> Self {
        dispatch!(round(self))
    }

    /// Round toward zero
    #[inline(always)]
    pub fn truncate(self) -> Self {
        dispatch!(truncate(self))
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    /// Lane-wise sine (radians)
    #[inline]
    pub fn sin(self) -> Self {
        self.map(T::sin)
    }

    /// Lane-wise cosine (radians)
    #[inline]
    pub fn cos(self) -> Self {
        self.map(T::cos)
    }

    /// `(sin(self), cos(self))`
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Lane-wise `e^x`
    #[inline]
    pub fn exp(self) -> Self {
        self.map(T::exp)
    }

    /// Lane-wise natural logarithm
    #[inline]
    pub fn log(self) -> Self {
        self.map(T::log)
    }

    /// Lane-wise base-2 logarithm
    #[inline]
    pub fn log2(self) -> Self {
        self.map(T::log2)
    }

    /// Lane-wise `sqrt(x² + y²)` without intermediate overflow
    #[inline]
    pub fn hypot(x: Self, y: Self) -> Self {
        x.zip_map(y, T::hypot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_modes() {
        let v = Vector64::<f32>::from_lanes([-1.5, 2.7]);
        assert_eq!(v.floor().to_lanes(), [-2.0, 2.0]);
        assert_eq!(v.ceiling().to_lanes(), [-1.0, 3.0]);
        assert_eq!(v.truncate().to_lanes(), [-1.0, 2.0]);
        assert_eq!(v.round().to_lanes(), [-2.0, 3.0]);
    }

    #[test]
    fn test_round_keeps_negative_zero() {
        let v = Vector64::<f64>::from_lanes([-0.25]);
        assert_eq!(v.round().to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        let v = Vector64::<f64>::from_lanes([-1.0]);
        assert!(v.sqrt().to_scalar().is_nan());
    }

    #[test]
    fn test_transcendentals() {
        let v = Vector64::<f64>::from_lanes([0.0]);
        let (s, c) = v.sin_cos();
        assert_eq!(s.to_scalar(), 0.0);
        assert_eq!(c.to_scalar(), 1.0);
        assert_eq!(v.exp().to_scalar(), 1.0);
        assert_eq!(Vector64::<f64>::one().log().to_scalar(), 0.0);
        assert_eq!(Vector64::<f32>::splat(8.0).log2().to_lanes(), [3.0, 3.0]);
    }

    #[test]
    fn test_hypot_avoids_overflow() {
        let x = Vector64::<f32>::from_lanes([3.0, 1e30]);
        let y = Vector64::<f32>::from_lanes([4.0, 1e30]);
        let h = Vector64::hypot(x, y).to_lanes();
        assert_eq!(h[0], 5.0);
        assert!(h[1].is_finite());
    }
}
