//! Shape transforms
//!
//! Widening, narrowing, shuffles, bit reinterpretation, numeric conversion and extension to
//! [`Vector128`].

use crate::backends::{dispatch, ScalarBackend};
use crate::element::{ConvertToFloat, ConvertToInteger, Element, Narrow, Widen};
use crate::{Vector128, Vector64};

impl<T: Widen> Vector64<T> {
    /// Lower and upper halves, each lane sign- or zero-extended to the double-width type
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<i8>::from_lanes([-1, 2, -3, 4, -5, 6, -7, 8]);
    /// let (lower, upper) = v.widen();
    /// assert_eq!(lower.to_lanes(), [-1i16, 2, -3, 4]);
    /// assert_eq!(upper.to_lanes(), [-5i16, 6, -7, 8]);
    /// ```
    #[inline(always)]
    pub fn widen(self) -> (Vector64<T::Wide>, Vector64<T::Wide>) {
        dispatch!(widen(self))
    }

    /// Lower half, widened
    #[inline]
    pub fn widen_lower(self) -> Vector64<T::Wide> {
        self.widen().0
    }

    /// Upper half, widened
    #[inline]
    pub fn widen_upper(self) -> Vector64<T::Wide> {
        self.widen().1
    }
}

impl<T: Narrow> Vector64<T> {
    /// Lanes of `lower` then `upper`, each truncated to the half-width type
    ///
    /// Integer lanes keep their low bits; float lanes round to nearest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let lower = Vector64::<u16>::from_lanes([1, 0x1FF, 3, 4]);
    /// let upper = Vector64::<u16>::from_lanes([5, 6, 7, 0x100]);
    /// assert_eq!(
    ///     Vector64::narrow(lower, upper).to_lanes(),
    ///     [1u8, 0xFF, 3, 4, 5, 6, 7, 0]
    /// );
    /// ```
    #[inline(always)]
    pub fn narrow(lower: Self, upper: Self) -> Vector64<T::Narrow> {
        dispatch!(narrow(lower, upper))
    }

    /// Lanes of `lower` then `upper`, each clamped to the half-width type's range
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let lower = Vector64::<i32>::from_lanes([40_000, -40_000]);
    /// let upper = Vector64::<i32>::from_lanes([7, -7]);
    /// assert_eq!(
    ///     Vector64::narrow_with_saturation(lower, upper).to_lanes(),
    ///     [i16::MAX, i16::MIN, 7, -7]
    /// );
    /// ```
    #[inline(always)]
    pub fn narrow_with_saturation(lower: Self, upper: Self) -> Vector64<T::Narrow> {
        dispatch!(narrow_with_saturation(lower, upper))
    }
}

impl<T: Element> Vector64<T> {
    // ========================================================================
    // Shuffles
    // ========================================================================

    /// Lane `i` of the result is `self[indices[i]]`, or zero if that index is out of range
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<i16>::from_lanes([10, 20, 30, 40]);
    /// let indices = Vector64::<u16>::from_lanes([3, 3, 0, 9]);
    /// assert_eq!(v.shuffle(indices).to_lanes(), [40, 40, 10, 0]);
    /// ```
    #[inline]
    pub fn shuffle(self, indices: Vector64<T::Index>) -> Self {
        ScalarBackend.shuffle(self, indices)
    }

    /// Shuffle with the platform's out-of-range behaviour
    ///
    /// In-range indices select exactly as [`shuffle`](Self::shuffle) does. For byte lanes on
    /// x86_64 an index with bit 7 set yields zero and any other index selects byte
    /// `index % 16` of the zero-extended register; on aarch64 every index `>= 8` yields zero.
    /// All other lane types, and unaccelerated targets, behave exactly like `shuffle`.
    #[inline(always)]
    pub fn shuffle_native(self, indices: Vector64<T::Index>) -> Self {
        dispatch!(shuffle_native(self, indices))
    }

    // ========================================================================
    // Reinterpretation
    // ========================================================================

    /// The same 64 bits viewed as lanes of `U`
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<f32>::splat(-0.0);
    /// assert_eq!(v.reinterpret::<u32>().to_lanes(), [0x8000_0000; 2]);
    /// ```
    #[inline(always)]
    pub fn reinterpret<U: Element>(self) -> Vector64<U> {
        bytemuck::cast(self)
    }

    /// `self` in the lower half of a [`Vector128`], zero in the upper half
    #[inline(always)]
    pub fn to_vector128(self) -> Vector128<T> {
        Vector128::new(self, Self::zero())
    }

    /// `self` in the lower half of a [`Vector128`]; the upper half is unspecified and must
    /// not be relied on
    #[inline(always)]
    pub fn to_vector128_unsafe(self) -> Vector128<T> {
        self.to_vector128()
    }
}

macro_rules! reinterpret_aliases {
    ($($name:ident => $u:ty),* $(,)?) => {
        impl<T: Element> Vector64<T> {$(
            #[doc = concat!("Reinterpret as `Vector64<", stringify!($u), ">`")]
            #[inline(always)]
            pub fn $name(self) -> Vector64<$u> {
                self.reinterpret()
            }
        )*}
    };
}

reinterpret_aliases! {
    as_i8 => i8,
    as_u8 => u8,
    as_i16 => i16,
    as_u16 => u16,
    as_i32 => i32,
    as_u32 => u32,
    as_i64 => i64,
    as_u64 => u64,
    as_isize => isize,
    as_usize => usize,
    as_f32 => f32,
    as_f64 => f64,
}

// ============================================================================
// Numeric conversion
// ============================================================================

impl<T: ConvertToInteger> Vector64<T> {
    /// Lane-wise conversion to the same-width signed integer; truncates toward zero,
    /// saturates out-of-range lanes and maps NaN to zero
    #[inline]
    pub fn convert_to_signed(self) -> Vector64<T::Signed> {
        let lanes = self.as_slice();
        Vector64::from_fn(|i| lanes[i].to_signed_saturating())
    }

    /// Lane-wise conversion to the same-width unsigned integer; truncates toward zero,
    /// saturates out-of-range lanes and maps NaN to zero
    #[inline]
    pub fn convert_to_unsigned(self) -> Vector64<T::Unsigned> {
        let lanes = self.as_slice();
        Vector64::from_fn(|i| lanes[i].to_unsigned_saturating())
    }

    /// Like [`convert_to_signed`](Self::convert_to_signed), with the platform's result for
    /// out-of-range and NaN lanes
    #[inline]
    pub fn convert_to_signed_native(self) -> Vector64<T::Signed> {
        let lanes = self.as_slice();
        Vector64::from_fn(|i| lanes[i].to_signed_native())
    }

    /// Like [`convert_to_unsigned`](Self::convert_to_unsigned), with the platform's result
    /// for out-of-range and NaN lanes
    #[inline]
    pub fn convert_to_unsigned_native(self) -> Vector64<T::Unsigned> {
        let lanes = self.as_slice();
        Vector64::from_fn(|i| lanes[i].to_unsigned_native())
    }
}

impl<T: ConvertToFloat> Vector64<T> {
    /// Lane-wise conversion to the same-width float, rounding to nearest
    #[inline]
    pub fn convert_to_float(self) -> Vector64<T::Float> {
        let lanes = self.as_slice();
        Vector64::from_fn(|i| lanes[i].to_float())
    }
}

macro_rules! float_to_int {
    ($f:ty => $s:ty, $u:ty: $signed:ident, $signed_native:ident, $unsigned:ident, $unsigned_native:ident) => {
        impl Vector64<$f> {
            #[doc = concat!("Saturating conversion to `", stringify!($s), "` lanes (NaN → 0)")]
            #[inline]
            pub fn $signed(self) -> Vector64<$s> {
                self.convert_to_signed()
            }

            #[doc = concat!("Conversion to `", stringify!($s), "` lanes with the platform's overflow result")]
            #[inline]
            pub fn $signed_native(self) -> Vector64<$s> {
                self.convert_to_signed_native()
            }

            #[doc = concat!("Saturating conversion to `", stringify!($u), "` lanes (NaN → 0)")]
            #[inline]
            pub fn $unsigned(self) -> Vector64<$u> {
                self.convert_to_unsigned()
            }

            #[doc = concat!("Conversion to `", stringify!($u), "` lanes with the platform's overflow result")]
            #[inline]
            pub fn $unsigned_native(self) -> Vector64<$u> {
                self.convert_to_unsigned_native()
            }
        }
    };
}

float_to_int!(f32 => i32, u32: convert_to_i32, convert_to_i32_native, convert_to_u32, convert_to_u32_native);
float_to_int!(f64 => i64, u64: convert_to_i64, convert_to_i64_native, convert_to_u64, convert_to_u64_native);

macro_rules! int_to_float {
    ($name:ident => $f:ty: $($i:ty),*) => {$(
        impl Vector64<$i> {
            #[doc = concat!("Conversion to `", stringify!($f), "` lanes, rounding to nearest")]
            #[inline]
            pub fn $name(self) -> Vector64<$f> {
                self.convert_to_float()
            }
        }
    )*};
}

int_to_float!(convert_to_f32 => f32: i32, u32);
int_to_float!(convert_to_f64 => f64: i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_halves() {
        let v = Vector64::<u8>::from_lanes([1, 2, 3, 4, 255, 254, 253, 252]);
        assert_eq!(v.widen_lower().to_lanes(), [1u16, 2, 3, 4]);
        assert_eq!(v.widen_upper().to_lanes(), [255u16, 254, 253, 252]);
        let f = Vector64::<f32>::from_lanes([1.5, -2.0]);
        assert_eq!(f.widen_lower().to_scalar(), 1.5f64);
        assert_eq!(f.widen_upper().to_scalar(), -2.0f64);
    }

    #[test]
    fn test_widen_then_narrow_is_identity() {
        let v = Vector64::<i16>::from_lanes([i16::MIN, -1, 0, i16::MAX]);
        let (lower, upper) = v.widen();
        assert_eq!(Vector64::narrow(lower, upper), v);
        assert_eq!(Vector64::narrow_with_saturation(lower, upper), v);
    }

    #[test]
    fn test_float_narrow_saturation_overflows_to_infinity() {
        let lower = Vector64::<f64>::from_lanes([1e300]);
        let upper = Vector64::<f64>::from_lanes([-0.5]);
        let n = Vector64::narrow_with_saturation(lower, upper).to_lanes();
        assert_eq!(n, [f32::INFINITY, -0.5]);
    }

    #[test]
    fn test_shuffle_zeroes_out_of_range() {
        let v = Vector64::<u8>::from_lanes([10, 11, 12, 13, 14, 15, 16, 17]);
        let idx = Vector64::<u8>::from_lanes([7, 0, 8, 255, 1, 1, 6, 128]);
        assert_eq!(v.shuffle(idx).to_lanes(), [17, 10, 0, 0, 11, 11, 16, 0]);
    }

    #[test]
    fn test_shuffle_native_in_range_matches_shuffle() {
        let v = Vector64::<i8>::from_lanes([-1, -2, -3, -4, -5, -6, -7, -8]);
        let idx = Vector64::<u8>::from_lanes([7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(v.shuffle_native(idx), v.shuffle(idx));
        let f = Vector64::<f32>::from_lanes([1.0, 2.0]);
        let swap = Vector64::<u32>::from_lanes([1, 0]);
        assert_eq!(f.shuffle_native(swap).to_lanes(), [2.0, 1.0]);
    }

    #[test]
    fn test_reinterpret_aliases() {
        let v = Vector64::<u64>::splat(0x3FF0_0000_0000_0000);
        assert_eq!(v.as_f64().to_scalar(), 1.0);
        assert_eq!(v.as_u32().to_lanes(), [0, 0x3FF0_0000]);
        assert_eq!(v.as_i8().as_u64(), v);
    }

    #[test]
    fn test_float_to_int_conversions() {
        let v = Vector64::<f32>::from_lanes([f32::NAN, -3.7]);
        assert_eq!(v.convert_to_i32().to_lanes(), [0, -3]);
        assert_eq!(v.convert_to_u32().to_lanes(), [0, 0]);
        let big = Vector64::<f64>::from_lanes([1e300]);
        assert_eq!(big.convert_to_i64().to_scalar(), i64::MAX);
        assert_eq!(big.convert_to_u64().to_scalar(), u64::MAX);
        let ok = Vector64::<f32>::from_lanes([7.9, 0.0]);
        assert_eq!(ok.convert_to_i32_native().to_lanes(), [7, 0]);
    }

    #[test]
    fn test_int_to_float_conversions() {
        let v = Vector64::<i32>::from_lanes([-2, 16_777_217]);
        assert_eq!(v.convert_to_f32().to_lanes(), [-2.0, 16_777_216.0]);
        let u = Vector64::<u64>::from_lanes([u64::MAX]);
        assert_eq!(u.convert_to_f64().to_scalar(), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_to_vector128_zero_extends() {
        let v = Vector64::<u16>::from_lanes([1, 2, 3, 4]);
        let wide = v.to_vector128();
        assert_eq!(wide.get_lower(), v);
        assert_eq!(wide.get_upper(), Vector64::zero());
        assert_eq!(v.to_vector128_unsafe().get_lower(), v);
    }
}
