//! Double-width companion type
//!
//! Only what extension from [`Vector64`] needs: two halves and lane access.

use core::fmt;
use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::element::Element;
use crate::error::{Result, VectorError};
use crate::Vector64;

/// A 128-bit vector stored as two [`Vector64`] halves, lower half first.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector128<T: Element> {
    lower: Vector64<T>,
    upper: Vector64<T>,
}

// SAFETY: two `Pod` halves of 8 bytes each, 16-byte aligned: no padding.
unsafe impl<T: Element> Zeroable for Vector128<T> {}
// SAFETY: see above.
unsafe impl<T: Element> Pod for Vector128<T> {}

impl<T: Element> Vector128<T> {
    /// Number of lanes
    pub const COUNT: usize = 2 * Vector64::<T>::COUNT;

    /// Vector from its two halves
    #[inline(always)]
    pub const fn new(lower: Vector64<T>, upper: Vector64<T>) -> Self {
        Self { lower, upper }
    }

    /// Lanes `0..COUNT / 2`
    #[inline(always)]
    pub fn get_lower(self) -> Vector64<T> {
        self.lower
    }

    /// Lanes `COUNT / 2..COUNT`
    #[inline(always)]
    pub fn get_upper(self) -> Vector64<T> {
        self.upper
    }

    /// Copy with the lower half replaced
    #[inline(always)]
    pub fn with_lower(self, lower: Vector64<T>) -> Self {
        Self { lower, ..self }
    }

    /// Copy with the upper half replaced
    #[inline(always)]
    pub fn with_upper(self, upper: Vector64<T>) -> Self {
        Self { upper, ..self }
    }

    /// Lane `index`
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] if `index >= COUNT`.
    #[inline]
    pub fn get_element(self, index: usize) -> Result<T> {
        let half = Vector64::<T>::COUNT;
        let lane = if index < half {
            self.lower.get_element(index)
        } else {
            self.upper.get_element(index - half)
        };
        lane.map_err(|_| VectorError::IndexOutOfRange {
            index,
            count: Self::COUNT,
        })
    }

    /// The register as bytes in native order
    #[inline(always)]
    pub fn to_ne_bytes(self) -> [u8; 2 * size_of::<u64>()] {
        bytemuck::cast(self)
    }
}

impl<T: Element> fmt::Debug for Vector128<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector128<{}>", T::KIND.name())?;
        f.debug_list()
            .entries(self.lower.as_slice().iter().chain(self.upper.as_slice()))
            .finish()
    }
}
