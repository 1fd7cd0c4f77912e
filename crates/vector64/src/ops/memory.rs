//! Memory transfer
//!
//! Raw pointer loads and stores are `unsafe` and unchecked. The slice API checks length,
//! start offset and (for the aligned forms) alignment. [`copy_to`](Vector64::copy_to) panics
//! on a short destination where [`try_copy_to`](Vector64::try_copy_to) returns `false`.

use core::ops::Range;
use core::ptr;

use crate::element::{Element, VECTOR_BYTES};
use crate::error::{Result, VectorError};
use crate::Vector64;

/// Alignment required by the aligned transfers, in bytes.
pub const ALIGNMENT: usize = VECTOR_BYTES;

#[inline(always)]
fn is_aligned<T>(address: *const T) -> bool {
    (address as usize) & (ALIGNMENT - 1) == 0
}

impl<T: Element> Vector64<T> {
    /// Elements `start..start + COUNT` of a buffer of `len` elements.
    #[inline]
    fn lane_range(len: usize, start: usize) -> Result<Range<usize>> {
        if start > len {
            return Err(VectorError::StartIndexOutOfRange { start, len });
        }
        let actual = len - start;
        if actual < Self::COUNT {
            return Err(VectorError::BufferTooShort {
                required: Self::COUNT,
                actual,
            });
        }
        Ok(start..start + Self::COUNT)
    }

    #[inline]
    fn check_aligned(address: *const T) -> Result<()> {
        if is_aligned(address) {
            Ok(())
        } else {
            Err(VectorError::Misaligned {
                address: address as usize,
                alignment: ALIGNMENT,
            })
        }
    }

    // ========================================================================
    // Raw pointer transfers
    // ========================================================================

    /// Read `COUNT` elements starting at `source`
    ///
    /// # Safety
    ///
    /// `source` must be valid for reads of 8 bytes. No alignment is required.
    #[inline(always)]
    pub unsafe fn load(source: *const T) -> Self {
        // SAFETY: caller guarantees 8 readable bytes; every bit pattern is a valid vector.
        unsafe { ptr::read_unaligned(source.cast::<Self>()) }
    }

    /// Read `COUNT` elements starting at `source + offset` elements
    ///
    /// # Safety
    ///
    /// `source.add(offset)` must be in bounds and valid for reads of 8 bytes.
    #[inline(always)]
    pub unsafe fn load_at(source: *const T, offset: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::load(source.add(offset)) }
    }

    /// Read `COUNT` elements from an 8-byte aligned address
    ///
    /// # Safety
    ///
    /// `source` must be valid for reads of 8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not 8-byte aligned.
    #[inline(always)]
    pub unsafe fn load_aligned(source: *const T) -> Self {
        assert!(
            is_aligned(source),
            "aligned load from misaligned address {source:p}"
        );
        // SAFETY: aligned and readable per the assertion and the caller.
        unsafe { ptr::read(source.cast::<Self>()) }
    }

    /// [`load_aligned`](Self::load_aligned) with a non-temporal hint; the result is identical
    ///
    /// # Safety
    ///
    /// Same contract as [`load_aligned`](Self::load_aligned).
    #[inline(always)]
    pub unsafe fn load_aligned_non_temporal(source: *const T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::load_aligned(source) }
    }

    /// Write the lanes starting at `destination`
    ///
    /// # Safety
    ///
    /// `destination` must be valid for writes of 8 bytes. No alignment is required.
    #[inline(always)]
    pub unsafe fn store(self, destination: *mut T) {
        // SAFETY: caller guarantees 8 writable bytes.
        unsafe { ptr::write_unaligned(destination.cast::<Self>(), self) }
    }

    /// Write the lanes starting at `destination + offset` elements
    ///
    /// # Safety
    ///
    /// `destination.add(offset)` must be in bounds and valid for writes of 8 bytes.
    #[inline(always)]
    pub unsafe fn store_at(self, destination: *mut T, offset: usize) {
        // SAFETY: forwarded to the caller.
        unsafe { self.store(destination.add(offset)) }
    }

    /// Write the lanes to an 8-byte aligned address
    ///
    /// # Safety
    ///
    /// `destination` must be valid for writes of 8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if `destination` is not 8-byte aligned.
    #[inline(always)]
    pub unsafe fn store_aligned(self, destination: *mut T) {
        assert!(
            is_aligned(destination),
            "aligned store to misaligned address {destination:p}"
        );
        // SAFETY: aligned and writable per the assertion and the caller.
        unsafe { ptr::write(destination.cast::<Self>(), self) }
    }

    /// [`store_aligned`](Self::store_aligned) with a non-temporal hint; the result is identical
    ///
    /// # Safety
    ///
    /// Same contract as [`store_aligned`](Self::store_aligned).
    #[inline(always)]
    pub unsafe fn store_aligned_non_temporal(self, destination: *mut T) {
        // SAFETY: forwarded to the caller.
        unsafe { self.store_aligned(destination) }
    }

    // ========================================================================
    // Slice transfers
    // ========================================================================

    /// The first `COUNT` elements of `source`
    ///
    /// # Errors
    ///
    /// [`VectorError::BufferTooShort`] if `source` has fewer than `COUNT` elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vector64::{Vector64, VectorError};
    ///
    /// let v = Vector64::<u16>::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(v.to_lanes(), [1, 2, 3, 4]);
    /// assert_eq!(
    ///     Vector64::<u16>::from_slice(&[1, 2]),
    ///     Err(VectorError::BufferTooShort { required: 4, actual: 2 })
    /// );
    /// ```
    #[inline]
    pub fn from_slice(source: &[T]) -> Result<Self> {
        Self::from_slice_at(source, 0)
    }

    /// Elements `start..start + COUNT` of `source`
    ///
    /// # Errors
    ///
    /// [`VectorError::StartIndexOutOfRange`] if `start > source.len()`,
    /// [`VectorError::BufferTooShort`] if fewer than `COUNT` elements follow `start`.
    #[inline]
    pub fn from_slice_at(source: &[T], start: usize) -> Result<Self> {
        let range = Self::lane_range(source.len(), start)?;
        Ok(bytemuck::pod_read_unaligned(bytemuck::cast_slice(
            &source[range],
        )))
    }

    /// The first `COUNT` elements of an 8-byte aligned `source`
    ///
    /// # Errors
    ///
    /// [`VectorError::Misaligned`] if `source` does not start on an 8-byte boundary,
    /// [`VectorError::BufferTooShort`] if it has fewer than `COUNT` elements.
    #[inline]
    pub fn load_aligned_from(source: &[T]) -> Result<Self> {
        Self::check_aligned(source.as_ptr())?;
        Self::from_slice(source)
    }

    /// Write the lanes to the start of an 8-byte aligned `destination`
    ///
    /// # Errors
    ///
    /// [`VectorError::Misaligned`] if `destination` does not start on an 8-byte boundary,
    /// [`VectorError::BufferTooShort`] if it has fewer than `COUNT` elements. Nothing is
    /// written on error.
    #[inline]
    pub fn store_aligned_to(self, destination: &mut [T]) -> Result<()> {
        Self::check_aligned(destination.as_ptr())?;
        let range = Self::lane_range(destination.len(), 0)?;
        destination[range].copy_from_slice(self.as_slice());
        Ok(())
    }

    /// Write the lanes to the start of `destination`
    ///
    /// # Panics
    ///
    /// Panics if `destination` has fewer than `COUNT` elements.
    #[inline]
    pub fn copy_to(self, destination: &mut [T]) {
        self.copy_to_at(destination, 0);
    }

    /// Write the lanes to `destination[start..start + COUNT]`
    ///
    /// # Panics
    ///
    /// Panics if `start > destination.len()` or fewer than `COUNT` elements follow `start`.
    #[inline]
    pub fn copy_to_at(self, destination: &mut [T], start: usize) {
        match Self::lane_range(destination.len(), start) {
            Ok(range) => destination[range].copy_from_slice(self.as_slice()),
            Err(err) => panic!("copy_to: {err}"),
        }
    }

    /// Write the lanes to the start of `destination`; `false` (and nothing written) if it is
    /// shorter than `COUNT`
    #[inline]
    pub fn try_copy_to(self, destination: &mut [T]) -> bool {
        match destination.get_mut(..Self::COUNT) {
            Some(prefix) => {
                prefix.copy_from_slice(self.as_slice());
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Bytes
    // ========================================================================

    /// The register as bytes in native order
    #[inline(always)]
    pub fn to_ne_bytes(self) -> [u8; VECTOR_BYTES] {
        bytemuck::cast(self)
    }

    /// Vector from bytes in native order
    #[inline(always)]
    pub fn from_ne_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        bytemuck::cast(bytes)
    }
}
