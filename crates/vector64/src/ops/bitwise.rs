//! Bitwise operations and shifts
//!
//! Bitwise operations act on the whole 64-bit register regardless of lane type.

use crate::backends::dispatch;
use crate::element::{Element, IntElement};
use crate::Vector64;

impl<T: Element> Vector64<T> {
    /// `self & rhs`
    #[inline(always)]
    pub fn bitwise_and(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & rhs.to_bits())
    }

    /// `self | rhs`
    #[inline(always)]
    pub fn bitwise_or(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() | rhs.to_bits())
    }

    /// `self ^ rhs`
    #[inline(always)]
    pub fn xor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() ^ rhs.to_bits())
    }

    /// `!self`
    #[inline(always)]
    pub fn ones_complement(self) -> Self {
        Self::from_bits(!self.to_bits())
    }

    /// `self & !rhs`
    #[inline(always)]
    pub fn and_not(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & !rhs.to_bits())
    }

    /// Bitwise select: bits of `left` where `condition` is set, bits of `right` elsewhere
    ///
    /// With a mask vector as `condition` this picks whole lanes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let a = Vector64::<i32>::from_lanes([1, 2]);
    /// let b = Vector64::<i32>::from_lanes([10, 20]);
    /// let mask = a.greater_than(Vector64::splat(1));
    /// assert_eq!(Vector64::conditional_select(mask, a, b).to_lanes(), [10, 2]);
    /// ```
    #[inline(always)]
    pub fn conditional_select(condition: Self, left: Self, right: Self) -> Self {
        let mask = condition.to_bits();
        Self::from_bits((left.to_bits() & mask) | (right.to_bits() & !mask))
    }
}

impl<T: IntElement> Vector64<T> {
    /// Shift every lane left by `count % T::BITS`
    #[inline(always)]
    pub fn shift_left(self, count: u32) -> Self {
        dispatch!(shift_left(self, count))
    }

    /// Shift every lane right by `count % T::BITS`, copying the sign bit in
    #[inline(always)]
    pub fn shift_right_arithmetic(self, count: u32) -> Self {
        dispatch!(shift_right_arithmetic(self, count))
    }

    /// Shift every lane right by `count % T::BITS`, shifting zeros in
    #[inline(always)]
    pub fn shift_right_logical(self, count: u32) -> Self {
        dispatch!(shift_right_logical(self, count))
    }
}
