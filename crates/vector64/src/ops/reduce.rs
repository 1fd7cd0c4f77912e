//! Reductions and queries
//!
//! Everything except `sum` and `dot` is built on
//! [`extract_most_significant_bits`](Vector64::extract_most_significant_bits): lane `i` of a
//! mask contributes bit `i`.
//!
//! The `_where_all_bits_set` queries compare raw lane bits, so they see float lanes whose bit
//! pattern is all ones (a NaN) as set.

use crate::backends::dispatch;
use crate::element::Element;
use crate::Vector64;

impl<T: Element> Vector64<T> {
    /// Sign bit of lane `i` packed into bit `i`; bits `COUNT..` are zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<i16>::from_lanes([-1, 2, -3, 4]);
    /// assert_eq!(v.extract_most_significant_bits(), 0b0101);
    /// ```
    #[inline(always)]
    pub fn extract_most_significant_bits(self) -> u32 {
        dispatch!(extract_most_significant_bits(self))
    }

    /// Sum of all lanes, accumulated from lane 0 upwards
    ///
    /// Integer sums wrap. The fixed order makes float sums reproducible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<u8>::from_lanes([200, 50, 10, 0, 0, 0, 0, 1]);
    /// assert_eq!(v.sum(), 5);
    /// ```
    #[inline]
    pub fn sum(self) -> T {
        self.as_slice().iter().fold(T::ZERO, |acc, &lane| acc.add(lane))
    }

    /// Sum of the lane-wise products
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.multiply(rhs).sum()
    }

    /// Mask of lanes whose bits are all set
    #[inline]
    fn all_bits_set_mask(self) -> u32 {
        self.reinterpret::<T::Index>()
            .equals(Vector64::all_bits_set())
            .extract_most_significant_bits()
    }

    #[inline]
    fn value_mask(self, value: T) -> u32 {
        self.equals(Self::splat(value))
            .extract_most_significant_bits()
    }

    // ========================================================================
    // Counting and search
    // ========================================================================

    /// Number of lanes equal to `value`
    #[inline]
    pub fn count(self, value: T) -> usize {
        self.value_mask(value).count_ones() as usize
    }

    /// Number of lanes with every bit set
    #[inline]
    pub fn count_where_all_bits_set(self) -> usize {
        self.all_bits_set_mask().count_ones() as usize
    }

    /// First lane equal to `value`
    ///
    /// `None` takes the place of the `-1` "not found" index returned by index-based vector APIs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::Vector64;
    ///
    /// let v = Vector64::<u16>::from_lanes([4, 7, 4, 7]);
    /// assert_eq!(v.index_of(7), Some(1));
    /// assert_eq!(v.last_index_of(4), Some(2));
    /// assert_eq!(v.index_of(5), None);
    /// ```
    #[inline]
    pub fn index_of(self, value: T) -> Option<usize> {
        first_set(self.value_mask(value))
    }

    /// Last lane equal to `value`
    #[inline]
    pub fn last_index_of(self, value: T) -> Option<usize> {
        last_set(self.value_mask(value))
    }

    /// First lane with every bit set
    #[inline]
    pub fn index_of_where_all_bits_set(self) -> Option<usize> {
        first_set(self.all_bits_set_mask())
    }

    /// Last lane with every bit set
    #[inline]
    pub fn last_index_of_where_all_bits_set(self) -> Option<usize> {
        last_set(self.all_bits_set_mask())
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True if some lane equals `value`
    #[inline]
    pub fn any(self, value: T) -> bool {
        self.value_mask(value) != 0
    }

    /// True if every lane equals `value`
    #[inline]
    pub fn all(self, value: T) -> bool {
        self.value_mask(value) == Self::lane_bits()
    }

    /// True if no lane equals `value`
    #[inline]
    pub fn none(self, value: T) -> bool {
        self.value_mask(value) == 0
    }

    /// True if some lane has every bit set
    #[inline]
    pub fn any_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() != 0
    }

    /// True if every lane has every bit set
    #[inline]
    pub fn all_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() == Self::lane_bits()
    }

    /// True if no lane has every bit set
    #[inline]
    pub fn none_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() == 0
    }
}

#[inline(always)]
fn first_set(mask: u32) -> Option<usize> {
    (mask != 0).then_some(mask.trailing_zeros() as usize)
}

#[inline(always)]
fn last_set(mask: u32) -> Option<usize> {
    mask.checked_ilog2().map(|bit| bit as usize)
}
