//! Scalar backend implementation
//!
//! Lane loops over the element table. This backend always works on any platform and is the
//! reference the native kernels are tested against.

use super::Backend;
use crate::element::{Element, FloatElement, IntElement, Narrow, Widen};
use crate::Vector64;

/// Portable lane-loop backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarBackend;

impl ScalarBackend {
    /// Bounds-checked shuffle: lanes whose index is out of range become zero.
    #[inline]
    pub fn shuffle<T: Element>(self, v: Vector64<T>, indices: Vector64<T::Index>) -> Vector64<T> {
        let (lanes, selectors) = (v.as_slice(), indices.as_slice());
        Vector64::from_fn(|i| {
            let index = selectors[i].to_lane_index();
            lanes.get(index).copied().unwrap_or(T::ZERO)
        })
    }
}

impl Backend for ScalarBackend {
    fn name(self) -> &'static str {
        "scalar"
    }

    #[inline(always)]
    fn add<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::add)
    }

    #[inline(always)]
    fn subtract<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::subtract)
    }

    #[inline(always)]
    fn multiply<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::multiply)
    }

    #[inline(always)]
    fn divide<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::divide)
    }

    #[inline(always)]
    fn add_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::add_saturate)
    }

    #[inline(always)]
    fn subtract_saturate<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::subtract_saturate)
    }

    #[inline(always)]
    fn min<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::min)
    }

    #[inline(always)]
    fn max<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.zip_map(b, T::max)
    }

    #[inline(always)]
    fn abs<T: Element>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::abs)
    }

    #[inline(always)]
    fn negate<T: Element>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::negate)
    }

    #[inline(always)]
    fn equals<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.mask_zip(b, T::equals)
    }

    #[inline(always)]
    fn greater_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.mask_zip(b, T::greater_than)
    }

    #[inline(always)]
    fn less_than<T: Element>(self, a: Vector64<T>, b: Vector64<T>) -> Vector64<T> {
        a.mask_zip(b, T::less_than)
    }

    #[inline(always)]
    fn sqrt<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::sqrt)
    }

    #[inline(always)]
    fn floor<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::floor)
    }

    #[inline(always)]
    fn ceiling<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::ceiling)
    }

    #[inline(always)]
    fn round<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::round)
    }

    #[inline(always)]
    fn truncate<T: FloatElement>(self, v: Vector64<T>) -> Vector64<T> {
        v.map(T::truncate)
    }

    #[inline(always)]
    fn shift_left<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        v.map(|x| x.shift_left(count))
    }

    #[inline(always)]
    fn shift_right_arithmetic<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        v.map(|x| x.shift_right_arithmetic(count))
    }

    #[inline(always)]
    fn shift_right_logical<T: IntElement>(self, v: Vector64<T>, count: u32) -> Vector64<T> {
        v.map(|x| x.shift_right_logical(count))
    }

    #[inline(always)]
    fn extract_most_significant_bits<T: Element>(self, v: Vector64<T>) -> u32 {
        v.as_slice()
            .iter()
            .enumerate()
            .fold(0, |bits, (i, lane)| {
                bits | (u32::from(lane.most_significant_bit()) << i)
            })
    }

    #[inline]
    fn widen<T: Widen>(self, v: Vector64<T>) -> (Vector64<T::Wide>, Vector64<T::Wide>) {
        let lanes = v.as_slice();
        let half = Vector64::<T::Wide>::COUNT;
        let lower = Vector64::from_fn(|i| lanes[i].widen());
        let upper = Vector64::from_fn(|i| lanes[half + i].widen());
        (lower, upper)
    }

    #[inline]
    fn narrow<T: Narrow>(self, lower: Vector64<T>, upper: Vector64<T>) -> Vector64<T::Narrow> {
        let (lo, hi) = (lower.as_slice(), upper.as_slice());
        let half = Vector64::<T>::COUNT;
        Vector64::from_fn(|i| {
            if i < half {
                lo[i].narrow_truncate()
            } else {
                hi[i - half].narrow_truncate()
            }
        })
    }

    #[inline]
    fn narrow_with_saturation<T: Narrow>(
        self,
        lower: Vector64<T>,
        upper: Vector64<T>,
    ) -> Vector64<T::Narrow> {
        let (lo, hi) = (lower.as_slice(), upper.as_slice());
        let half = Vector64::<T>::COUNT;
        Vector64::from_fn(|i| {
            if i < half {
                lo[i].narrow_saturate()
            } else {
                hi[i - half].narrow_saturate()
            }
        })
    }

    #[inline]
    fn shuffle_native<T: Element>(
        self,
        v: Vector64<T>,
        indices: Vector64<T::Index>,
    ) -> Vector64<T> {
        self.shuffle(v, indices)
    }
}
