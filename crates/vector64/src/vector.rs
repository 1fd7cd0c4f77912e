//! The 64-bit vector value type
//!
//! `Vector64<T>` is eight bytes of lanes in native byte order, lane 0 at the lowest address.
//! Operation families live in [`crate::ops`]; this module holds the type itself, construction,
//! lane access and the lane-loop helpers the scalar backend is built from.

use core::fmt;
use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::element::{Element, VECTOR_BYTES};
use crate::error::{Result, VectorError};

/// A 64-bit SIMD vector of `8 / size_of::<T>()` lanes.
///
/// Every operation is a pure function of its inputs. Mask results (comparisons and
/// classification) hold all-bits-set in true lanes and zero in false lanes.
///
/// # Example
///
/// ```
/// use vector64::Vector64;
///
/// let a = Vector64::<u8>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
/// let b = Vector64::splat(10u8);
/// assert_eq!((a + b).to_lanes(), [11, 12, 13, 14, 15, 16, 17, 18]);
/// ```
#[repr(C, align(8))]
#[derive(Clone, Copy)]
pub struct Vector64<T: Element> {
    lanes: T::Lanes,
}

// SAFETY: `T::Lanes` is a `Pod` array of exactly 8 bytes, so with `align(8)` the struct has
// no padding and every bit pattern is valid.
unsafe impl<T: Element> Zeroable for Vector64<T> {}
// SAFETY: see above.
unsafe impl<T: Element> Pod for Vector64<T> {}

impl<T: Element> Vector64<T> {
    /// Number of lanes
    pub const COUNT: usize = VECTOR_BYTES / size_of::<T>();

    /// Number of lanes
    #[inline(always)]
    pub fn lane_count(self) -> usize {
        Self::COUNT
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Vector with the given lanes, lane 0 first
    #[inline(always)]
    pub const fn from_lanes(lanes: T::Lanes) -> Self {
        Self { lanes }
    }

    /// Every lane set to `value`
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    /// All lanes zero
    #[inline(always)]
    pub fn zero() -> Self {
        Self::zeroed()
    }

    /// All lanes one
    #[inline(always)]
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// Every bit set
    #[inline(always)]
    pub fn all_bits_set() -> Self {
        Self::from_bits(u64::MAX)
    }

    /// `value` in lane 0, zero elsewhere
    #[inline(always)]
    pub fn create_scalar(value: T) -> Self {
        let mut v = Self::zero();
        v.as_mut_slice()[0] = value;
        v
    }

    /// `value` in lane 0; the other lanes are unspecified and must not be relied on
    #[inline(always)]
    pub fn create_scalar_unsafe(value: T) -> Self {
        Self::create_scalar(value)
    }

    /// Lane `i` holds `start + step * i`
    #[inline]
    pub fn create_sequence(start: T, step: T) -> Self {
        Self::from_fn(|i| start.add(step.multiply(T::from_lane_index(i))))
    }

    /// Lane `i` holds `i`
    #[inline]
    pub fn indices() -> Self {
        Self::from_fn(T::from_lane_index)
    }

    /// Reinterpret a raw register value (native lane order)
    #[inline(always)]
    pub fn from_bits(bits: u64) -> Self {
        bytemuck::cast(bits)
    }

    /// The raw register value (native lane order)
    #[inline(always)]
    pub fn to_bits(self) -> u64 {
        bytemuck::cast(self)
    }

    // ========================================================================
    // Lane access
    // ========================================================================

    /// Copy of the lanes
    #[inline(always)]
    pub fn to_lanes(self) -> T::Lanes {
        self.lanes
    }

    /// Lanes as a slice of length [`COUNT`](Self::COUNT)
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.lanes.as_ref()
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.lanes.as_mut()
    }

    /// Lane `index`
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] if `index >= COUNT`.
    #[inline]
    pub fn get_element(self, index: usize) -> Result<T> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                count: Self::COUNT,
            })
    }

    /// Copy of `self` with lane `index` replaced by `value`
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] if `index >= COUNT`.
    #[inline]
    pub fn with_element(mut self, index: usize, value: T) -> Result<Self> {
        match self.as_mut_slice().get_mut(index) {
            Some(lane) => {
                *lane = value;
                Ok(self)
            }
            None => Err(VectorError::IndexOutOfRange {
                index,
                count: Self::COUNT,
            }),
        }
    }

    /// Lane `index` without a bounds check
    ///
    /// # Safety
    ///
    /// `index` must be less than [`COUNT`](Self::COUNT).
    #[inline(always)]
    pub unsafe fn get_element_unchecked(self, index: usize) -> T {
        debug_assert!(index < Self::COUNT);
        // SAFETY: caller guarantees `index < COUNT`.
        unsafe { *self.as_slice().get_unchecked(index) }
    }

    /// Copy of `self` with lane `index` replaced, without a bounds check
    ///
    /// # Safety
    ///
    /// `index` must be less than [`COUNT`](Self::COUNT).
    #[inline(always)]
    pub unsafe fn with_element_unchecked(mut self, index: usize, value: T) -> Self {
        debug_assert!(index < Self::COUNT);
        // SAFETY: caller guarantees `index < COUNT`.
        unsafe { *self.as_mut_slice().get_unchecked_mut(index) = value };
        self
    }

    /// Lane 0
    #[inline(always)]
    pub fn to_scalar(self) -> T {
        self.as_slice()[0]
    }

    // ========================================================================
    // Lane loops
    // ========================================================================

    /// Build a vector lane by lane; every lane is written before the value escapes.
    #[inline(always)]
    pub(crate) fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut v = Self::zero();
        for (i, lane) in v.as_mut_slice().iter_mut().enumerate() {
            *lane = f(i);
        }
        v
    }

    #[inline(always)]
    pub(crate) fn map(self, f: impl Fn(T) -> T) -> Self {
        let lanes = self.as_slice();
        Self::from_fn(|i| f(lanes[i]))
    }

    #[inline(always)]
    pub(crate) fn zip_map(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let (a, b) = (self.as_slice(), rhs.as_slice());
        Self::from_fn(|i| f(a[i], b[i]))
    }

    /// Mask vector from a per-lane predicate.
    #[inline(always)]
    pub(crate) fn mask_by(self, f: impl Fn(T) -> bool) -> Self {
        let lanes = self.as_slice();
        Self::from_fn(|i| Self::mask_lane(f(lanes[i])))
    }

    /// Mask vector from a per-lane binary predicate.
    #[inline(always)]
    pub(crate) fn mask_zip(self, rhs: Self, f: impl Fn(T, T) -> bool) -> Self {
        let (a, b) = (self.as_slice(), rhs.as_slice());
        Self::from_fn(|i| Self::mask_lane(f(a[i], b[i])))
    }

    #[inline(always)]
    pub(crate) fn mask_lane(set: bool) -> T {
        if set {
            T::ALL_BITS_SET
        } else {
            T::ZERO
        }
    }

    /// Bit mask with one bit per lane, all lanes set.
    #[inline(always)]
    pub(crate) const fn lane_bits() -> u32 {
        (1u32 << Self::COUNT) - 1
    }
}

impl<T: Element> Default for Vector64<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element> PartialEq for Vector64<T> {
    /// Lane-wise `==` on every lane; a NaN lane makes vectors unequal.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals_all(*other)
    }
}

impl<T: Element> fmt::Debug for Vector64<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector64<{}>", T::KIND.name())?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Element> fmt::Display for Vector64<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, lane) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(lane, f)?;
        }
        f.write_str(">")
    }
}

macro_rules! lane_array_conversions {
    ($($t:ty),* $(,)?) => {$(
        impl From<[$t; VECTOR_BYTES / size_of::<$t>()]> for Vector64<$t> {
            #[inline(always)]
            fn from(lanes: [$t; VECTOR_BYTES / size_of::<$t>()]) -> Self {
                Self::from_lanes(lanes)
            }
        }

        impl From<Vector64<$t>> for [$t; VECTOR_BYTES / size_of::<$t>()] {
            #[inline(always)]
            fn from(v: Vector64<$t>) -> Self {
                v.to_lanes()
            }
        }
    )*};
}

lane_array_conversions!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(size_of::<Vector64<u8>>(), 8);
        assert_eq!(size_of::<Vector64<f64>>(), 8);
        assert_eq!(core::mem::align_of::<Vector64<u16>>(), 8);
        assert_eq!(Vector64::<u8>::COUNT, 8);
        assert_eq!(Vector64::<i16>::COUNT, 4);
        assert_eq!(Vector64::<f32>::COUNT, 2);
        assert_eq!(Vector64::<u64>::COUNT, 1);
    }

    #[test]
    fn test_lane_zero_is_lowest_address() {
        let v = Vector64::<u16>::from_lanes([0x0102, 0x0304, 0x0506, 0x0708]);
        let bytes: [u8; 8] = bytemuck::cast(v);
        assert_eq!(&bytes[..2], &0x0102u16.to_ne_bytes());
        assert_eq!(&bytes[6..], &0x0708u16.to_ne_bytes());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Vector64::<i32>::zero().to_lanes(), [0, 0]);
        assert_eq!(Vector64::<i32>::one().to_lanes(), [1, 1]);
        assert_eq!(Vector64::<i8>::all_bits_set().to_lanes(), [-1; 8]);
        assert_eq!(Vector64::<u16>::create_scalar(7).to_lanes(), [7, 0, 0, 0]);
        assert_eq!(Vector64::<f64>::create_scalar_unsafe(-2.0).to_scalar(), -2.0);
        assert_eq!(
            Vector64::<i16>::create_sequence(10, -3).to_lanes(),
            [10, 7, 4, 1]
        );
        assert_eq!(Vector64::<f32>::indices().to_lanes(), [0.0, 1.0]);
        assert_eq!(Vector64::<f32>::all_bits_set().to_bits(), u64::MAX);
    }

    #[test]
    fn test_checked_lane_access() {
        let v = Vector64::<u16>::from_lanes([1, 2, 3, 4]);
        assert_eq!(v.get_element(3), Ok(4));
        assert_eq!(
            v.get_element(4),
            Err(VectorError::IndexOutOfRange { index: 4, count: 4 })
        );
        assert_eq!(v.with_element(1, 9).map(|v| v.to_lanes()), Ok([1, 9, 3, 4]));
        assert!(v.with_element(usize::MAX, 9).is_err());
        assert_eq!(v.to_scalar(), 1);
    }

    #[test]
    fn test_unchecked_lane_access() {
        let v = Vector64::<i32>::from_lanes([5, 6]);
        // SAFETY: 1 < COUNT
        let lane = unsafe { v.get_element_unchecked(1) };
        assert_eq!(lane, 6);
        // SAFETY: 0 < COUNT
        let w = unsafe { v.with_element_unchecked(0, -1) };
        assert_eq!(w.to_lanes(), [-1, 6]);
    }

    #[test]
    fn test_array_conversions() {
        let v: Vector64<u32> = [1u32, 2].into();
        let lanes: [u32; 2] = v.into();
        assert_eq!(lanes, [1, 2]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_formatting() {
        extern crate std;
        use std::format;

        let v = Vector64::<i16>::from_lanes([1, -2, 3, -4]);
        assert_eq!(format!("{v}"), "<1, -2, 3, -4>");
        assert_eq!(format!("{v:?}"), "Vector64<i16>[1, -2, 3, -4]");
    }
}
