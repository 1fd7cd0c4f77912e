//! SSE4.1 kernels (x86_64)
//!
//! Every kernel moves the 64-bit value into the low half of an XMM register with the upper
//! half zeroed, runs one short instruction sequence and returns the low 64 bits. Lanes in the
//! upper half are never observed, so whatever the instructions compute there is irrelevant.
//!
//! Requires SSE2, SSSE3 and SSE4.1; [`NativeBackend`](super::NativeBackend) only runs these
//! after detection confirmed all three.

use core::arch::x86_64::*;

use super::NativeKernels;

// ============================================================================
// Register transfer
// ============================================================================

#[inline(always)]
unsafe fn load(bits: u64) -> __m128i {
    _mm_cvtsi64_si128(bits as i64)
}

#[inline(always)]
unsafe fn store(v: __m128i) -> u64 {
    _mm_cvtsi128_si64(v) as u64
}

#[inline(always)]
unsafe fn load_ps(bits: u64) -> __m128 {
    _mm_castsi128_ps(load(bits))
}

#[inline(always)]
unsafe fn store_ps(v: __m128) -> u64 {
    store(_mm_castps_si128(v))
}

#[inline(always)]
unsafe fn load_pd(bits: u64) -> __m128d {
    _mm_castsi128_pd(load(bits))
}

#[inline(always)]
unsafe fn store_pd(v: __m128d) -> u64 {
    store(_mm_castpd_si128(v))
}

#[inline(always)]
unsafe fn combine(lower: u64, upper: u64) -> __m128i {
    _mm_set_epi64x(upper as i64, lower as i64)
}

// ============================================================================
// Kernel generators
// ============================================================================

macro_rules! binary_int {
    ($($name:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(a: u64, b: u64) -> u64 {
            store($intrinsic(load(a), load(b)))
        }
    )*};
}

macro_rules! binary_ps {
    ($($name:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(a: u64, b: u64) -> u64 {
            store_ps($intrinsic(load_ps(a), load_ps(b)))
        }
    )*};
}

macro_rules! binary_pd {
    ($($name:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(a: u64, b: u64) -> u64 {
            store_pd($intrinsic(load_pd(a), load_pd(b)))
        }
    )*};
}

macro_rules! unary_int {
    ($($name:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64) -> u64 {
            store($intrinsic(load(v)))
        }
    )*};
}

macro_rules! negate_int {
    ($($name:ident => $sub:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64) -> u64 {
            store($sub(_mm_setzero_si128(), load(v)))
        }
    )*};
}

/// Unsigned `a > b` as signed compare after flipping the sign bits.
macro_rules! unsigned_compare {
    ($($gt:ident, $lt:ident => $cmpgt:ident, $set1:ident($bias:expr)),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $gt(a: u64, b: u64) -> u64 {
            let bias = $set1($bias);
            store($cmpgt(_mm_xor_si128(load(a), bias), _mm_xor_si128(load(b), bias)))
        }

        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $lt(a: u64, b: u64) -> u64 {
            $gt(b, a)
        }
    )*};
}

macro_rules! signed_less_than {
    ($($lt:ident => $gt:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $lt(a: u64, b: u64) -> u64 {
            $gt(b, a)
        }
    )*};
}

macro_rules! shift_int {
    ($($name:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64, count: u32) -> u64 {
            store($intrinsic(load(v), _mm_cvtsi32_si128(count as i32)))
        }
    )*};
}

macro_rules! round_ps {
    ($($name:ident => $mode:expr),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64) -> u64 {
            store_ps(_mm_round_ps::<{ $mode | _MM_FROUND_NO_EXC }>(load_ps(v)))
        }
    )*};
}

macro_rules! round_pd {
    ($($name:ident => $mode:expr),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64) -> u64 {
            store_pd(_mm_round_pd::<{ $mode | _MM_FROUND_NO_EXC }>(load_pd(v)))
        }
    )*};
}

macro_rules! widen_int {
    ($($name:ident => $convert:ident),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(v: u64) -> (u64, u64) {
            let wide = $convert(load(v));
            (store(wide), store(_mm_unpackhi_epi64(wide, wide)))
        }
    )*};
}

/// Truncating narrow: gather the low bytes of each wide lane into the low 64 bits.
macro_rules! narrow_shuffle {
    ($($name:ident => [$($byte:expr),*]),* $(,)?) => {$(
        #[target_feature(enable = "sse2,ssse3,sse4.1")]
        unsafe fn $name(lower: u64, upper: u64) -> u64 {
            let control = _mm_setr_epi8($($byte),*, -1, -1, -1, -1, -1, -1, -1, -1);
            store(_mm_shuffle_epi8(combine(lower, upper), control))
        }
    )*};
}

// ============================================================================
// Arithmetic
// ============================================================================

binary_int!(
    add_8 => _mm_add_epi8,
    add_16 => _mm_add_epi16,
    add_32 => _mm_add_epi32,
    add_64 => _mm_add_epi64,
    sub_8 => _mm_sub_epi8,
    sub_16 => _mm_sub_epi16,
    sub_32 => _mm_sub_epi32,
    sub_64 => _mm_sub_epi64,
    mul_16 => _mm_mullo_epi16,
    mul_32 => _mm_mullo_epi32,
    adds_i8 => _mm_adds_epi8,
    adds_u8 => _mm_adds_epu8,
    adds_i16 => _mm_adds_epi16,
    adds_u16 => _mm_adds_epu16,
    subs_i8 => _mm_subs_epi8,
    subs_u8 => _mm_subs_epu8,
    subs_i16 => _mm_subs_epi16,
    subs_u16 => _mm_subs_epu16,
    min_i8 => _mm_min_epi8,
    min_u8 => _mm_min_epu8,
    min_i16 => _mm_min_epi16,
    min_u16 => _mm_min_epu16,
    min_i32 => _mm_min_epi32,
    min_u32 => _mm_min_epu32,
    max_i8 => _mm_max_epi8,
    max_u8 => _mm_max_epu8,
    max_i16 => _mm_max_epi16,
    max_u16 => _mm_max_epu16,
    max_i32 => _mm_max_epi32,
    max_u32 => _mm_max_epu32,
);

binary_ps!(
    add_f32 => _mm_add_ps,
    sub_f32 => _mm_sub_ps,
    mul_f32 => _mm_mul_ps,
    div_f32 => _mm_div_ps,
);

binary_pd!(
    add_f64 => _mm_add_pd,
    sub_f64 => _mm_sub_pd,
    mul_f64 => _mm_mul_pd,
    div_f64 => _mm_div_pd,
);

unary_int!(
    abs_i8 => _mm_abs_epi8,
    abs_i16 => _mm_abs_epi16,
    abs_i32 => _mm_abs_epi32,
);

negate_int!(
    neg_8 => _mm_sub_epi8,
    neg_16 => _mm_sub_epi16,
    neg_32 => _mm_sub_epi32,
    neg_64 => _mm_sub_epi64,
);

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn abs_f32(v: u64) -> u64 {
    store_ps(_mm_andnot_ps(_mm_set1_ps(-0.0), load_ps(v)))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn abs_f64(v: u64) -> u64 {
    store_pd(_mm_andnot_pd(_mm_set1_pd(-0.0), load_pd(v)))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn neg_f32(v: u64) -> u64 {
    store_ps(_mm_xor_ps(_mm_set1_ps(-0.0), load_ps(v)))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn neg_f64(v: u64) -> u64 {
    store_pd(_mm_xor_pd(_mm_set1_pd(-0.0), load_pd(v)))
}

// ============================================================================
// Comparison
// ============================================================================

binary_int!(
    eq_8 => _mm_cmpeq_epi8,
    eq_16 => _mm_cmpeq_epi16,
    eq_32 => _mm_cmpeq_epi32,
    eq_64 => _mm_cmpeq_epi64,
    gt_i8 => _mm_cmpgt_epi8,
    gt_i16 => _mm_cmpgt_epi16,
    gt_i32 => _mm_cmpgt_epi32,
);

signed_less_than!(
    lt_i8 => gt_i8,
    lt_i16 => gt_i16,
    lt_i32 => gt_i32,
);

unsigned_compare!(
    gt_u8, lt_u8 => _mm_cmpgt_epi8, _mm_set1_epi8(i8::MIN),
    gt_u16, lt_u16 => _mm_cmpgt_epi16, _mm_set1_epi16(i16::MIN),
    gt_u32, lt_u32 => _mm_cmpgt_epi32, _mm_set1_epi32(i32::MIN),
);

binary_ps!(
    eq_f32 => _mm_cmpeq_ps,
    gt_f32 => _mm_cmpgt_ps,
    lt_f32 => _mm_cmplt_ps,
);

binary_pd!(
    eq_f64 => _mm_cmpeq_pd,
    gt_f64 => _mm_cmpgt_pd,
    lt_f64 => _mm_cmplt_pd,
);

// ============================================================================
// Float rounding
// ============================================================================

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn sqrt_f32(v: u64) -> u64 {
    store_ps(_mm_sqrt_ps(load_ps(v)))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn sqrt_f64(v: u64) -> u64 {
    store_pd(_mm_sqrt_pd(load_pd(v)))
}

round_ps!(
    floor_f32 => _MM_FROUND_TO_NEG_INF,
    ceil_f32 => _MM_FROUND_TO_POS_INF,
    round_f32 => _MM_FROUND_TO_NEAREST_INT,
    trunc_f32 => _MM_FROUND_TO_ZERO,
);

round_pd!(
    floor_f64 => _MM_FROUND_TO_NEG_INF,
    ceil_f64 => _MM_FROUND_TO_POS_INF,
    round_f64 => _MM_FROUND_TO_NEAREST_INT,
    trunc_f64 => _MM_FROUND_TO_ZERO,
);

// ============================================================================
// Shifts
// ============================================================================

shift_int!(
    shl_16 => _mm_sll_epi16,
    shl_32 => _mm_sll_epi32,
    shl_64 => _mm_sll_epi64,
    shr_16 => _mm_srl_epi16,
    shr_32 => _mm_srl_epi32,
    shr_64 => _mm_srl_epi64,
    sar_16 => _mm_sra_epi16,
    sar_32 => _mm_sra_epi32,
);

// ============================================================================
// Most significant bits
// ============================================================================

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn msb_8(v: u64) -> u32 {
    (_mm_movemask_epi8(load(v)) as u32) & 0xFF
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn msb_16(v: u64) -> u32 {
    // Signed saturation keeps each lane's sign in the packed byte.
    let packed = _mm_packs_epi16(load(v), _mm_setzero_si128());
    (_mm_movemask_epi8(packed) as u32) & 0xF
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn msb_32(v: u64) -> u32 {
    (_mm_movemask_ps(load_ps(v)) as u32) & 0x3
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn msb_64(v: u64) -> u32 {
    (_mm_movemask_pd(load_pd(v)) as u32) & 0x1
}

// ============================================================================
// Widen / narrow
// ============================================================================

widen_int!(
    widen_i8 => _mm_cvtepi8_epi16,
    widen_u8 => _mm_cvtepu8_epi16,
    widen_i16 => _mm_cvtepi16_epi32,
    widen_u16 => _mm_cvtepu16_epi32,
    widen_i32 => _mm_cvtepi32_epi64,
    widen_u32 => _mm_cvtepu32_epi64,
);

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn widen_f32(v: u64) -> (u64, u64) {
    let wide = _mm_castpd_si128(_mm_cvtps_pd(load_ps(v)));
    (store(wide), store(_mm_unpackhi_epi64(wide, wide)))
}

narrow_shuffle!(
    narrow_16 => [0, 2, 4, 6, 8, 10, 12, 14],
    narrow_32 => [0, 1, 4, 5, 8, 9, 12, 13],
    narrow_64 => [0, 1, 2, 3, 8, 9, 10, 11],
);

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn narrow_sat_i16(lower: u64, upper: u64) -> u64 {
    let wide = combine(lower, upper);
    store(_mm_packs_epi16(wide, wide))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn narrow_sat_u16(lower: u64, upper: u64) -> u64 {
    // packus reads its input as signed, so clamp to the u8 range first.
    let wide = _mm_min_epu16(combine(lower, upper), _mm_set1_epi16(0xFF));
    store(_mm_packus_epi16(wide, wide))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn narrow_sat_i32(lower: u64, upper: u64) -> u64 {
    let wide = combine(lower, upper);
    store(_mm_packs_epi32(wide, wide))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn narrow_sat_u32(lower: u64, upper: u64) -> u64 {
    let wide = _mm_min_epu32(combine(lower, upper), _mm_set1_epi32(0xFFFF));
    store(_mm_packus_epi32(wide, wide))
}

#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn narrow_f64(lower: u64, upper: u64) -> u64 {
    store_ps(_mm_cvtpd_ps(_mm_castsi128_pd(combine(lower, upper))))
}

// ============================================================================
// Shuffle
// ============================================================================

/// `pshufb`: a selector with bit 7 set yields zero, otherwise byte `selector & 15` of the
/// zero-extended register.
#[target_feature(enable = "sse2,ssse3,sse4.1")]
unsafe fn shuffle_8(v: u64, indices: u64) -> u64 {
    store(_mm_shuffle_epi8(load(v), load(indices)))
}

// ============================================================================
// Tables
// ============================================================================

pub(crate) const I8: NativeKernels = NativeKernels {
    add: Some(add_8),
    subtract: Some(sub_8),
    add_saturate: Some(adds_i8),
    subtract_saturate: Some(subs_i8),
    min: Some(min_i8),
    max: Some(max_i8),
    abs: Some(abs_i8),
    negate: Some(neg_8),
    equals: Some(eq_8),
    greater_than: Some(gt_i8),
    less_than: Some(lt_i8),
    extract_msb: Some(msb_8),
    widen: Some(widen_i8),
    shuffle: Some(shuffle_8),
    ..NativeKernels::NONE
};

pub(crate) const U8: NativeKernels = NativeKernels {
    add: Some(add_8),
    subtract: Some(sub_8),
    add_saturate: Some(adds_u8),
    subtract_saturate: Some(subs_u8),
    min: Some(min_u8),
    max: Some(max_u8),
    negate: Some(neg_8),
    equals: Some(eq_8),
    greater_than: Some(gt_u8),
    less_than: Some(lt_u8),
    extract_msb: Some(msb_8),
    widen: Some(widen_u8),
    shuffle: Some(shuffle_8),
    ..NativeKernels::NONE
};

pub(crate) const I16: NativeKernels = NativeKernels {
    add: Some(add_16),
    subtract: Some(sub_16),
    multiply: Some(mul_16),
    add_saturate: Some(adds_i16),
    subtract_saturate: Some(subs_i16),
    min: Some(min_i16),
    max: Some(max_i16),
    abs: Some(abs_i16),
    negate: Some(neg_16),
    equals: Some(eq_16),
    greater_than: Some(gt_i16),
    less_than: Some(lt_i16),
    shift_left: Some(shl_16),
    shift_right_arithmetic: Some(sar_16),
    shift_right_logical: Some(shr_16),
    extract_msb: Some(msb_16),
    widen: Some(widen_i16),
    narrow: Some(narrow_16),
    narrow_saturate: Some(narrow_sat_i16),
    ..NativeKernels::NONE
};

pub(crate) const U16: NativeKernels = NativeKernels {
    add: Some(add_16),
    subtract: Some(sub_16),
    multiply: Some(mul_16),
    add_saturate: Some(adds_u16),
    subtract_saturate: Some(subs_u16),
    min: Some(min_u16),
    max: Some(max_u16),
    negate: Some(neg_16),
    equals: Some(eq_16),
    greater_than: Some(gt_u16),
    less_than: Some(lt_u16),
    shift_left: Some(shl_16),
    shift_right_arithmetic: Some(sar_16),
    shift_right_logical: Some(shr_16),
    extract_msb: Some(msb_16),
    widen: Some(widen_u16),
    narrow: Some(narrow_16),
    narrow_saturate: Some(narrow_sat_u16),
    ..NativeKernels::NONE
};

pub(crate) const I32: NativeKernels = NativeKernels {
    add: Some(add_32),
    subtract: Some(sub_32),
    multiply: Some(mul_32),
    min: Some(min_i32),
    max: Some(max_i32),
    abs: Some(abs_i32),
    negate: Some(neg_32),
    equals: Some(eq_32),
    greater_than: Some(gt_i32),
    less_than: Some(lt_i32),
    shift_left: Some(shl_32),
    shift_right_arithmetic: Some(sar_32),
    shift_right_logical: Some(shr_32),
    extract_msb: Some(msb_32),
    widen: Some(widen_i32),
    narrow: Some(narrow_32),
    narrow_saturate: Some(narrow_sat_i32),
    ..NativeKernels::NONE
};

pub(crate) const U32: NativeKernels = NativeKernels {
    add: Some(add_32),
    subtract: Some(sub_32),
    multiply: Some(mul_32),
    min: Some(min_u32),
    max: Some(max_u32),
    negate: Some(neg_32),
    equals: Some(eq_32),
    greater_than: Some(gt_u32),
    less_than: Some(lt_u32),
    shift_left: Some(shl_32),
    shift_right_arithmetic: Some(sar_32),
    shift_right_logical: Some(shr_32),
    extract_msb: Some(msb_32),
    widen: Some(widen_u32),
    narrow: Some(narrow_32),
    narrow_saturate: Some(narrow_sat_u32),
    ..NativeKernels::NONE
};

pub(crate) const I64: NativeKernels = NativeKernels {
    add: Some(add_64),
    subtract: Some(sub_64),
    negate: Some(neg_64),
    equals: Some(eq_64),
    shift_left: Some(shl_64),
    shift_right_logical: Some(shr_64),
    extract_msb: Some(msb_64),
    narrow: Some(narrow_64),
    ..NativeKernels::NONE
};

pub(crate) const U64: NativeKernels = NativeKernels {
    add: Some(add_64),
    subtract: Some(sub_64),
    negate: Some(neg_64),
    equals: Some(eq_64),
    shift_left: Some(shl_64),
    shift_right_logical: Some(shr_64),
    extract_msb: Some(msb_64),
    narrow: Some(narrow_64),
    ..NativeKernels::NONE
};

pub(crate) const F32: NativeKernels = NativeKernels {
    add: Some(add_f32),
    subtract: Some(sub_f32),
    multiply: Some(mul_f32),
    divide: Some(div_f32),
    add_saturate: Some(add_f32),
    subtract_saturate: Some(sub_f32),
    abs: Some(abs_f32),
    negate: Some(neg_f32),
    equals: Some(eq_f32),
    greater_than: Some(gt_f32),
    less_than: Some(lt_f32),
    sqrt: Some(sqrt_f32),
    floor: Some(floor_f32),
    ceiling: Some(ceil_f32),
    round: Some(round_f32),
    truncate: Some(trunc_f32),
    extract_msb: Some(msb_32),
    widen: Some(widen_f32),
    ..NativeKernels::NONE
};

pub(crate) const F64: NativeKernels = NativeKernels {
    add: Some(add_f64),
    subtract: Some(sub_f64),
    multiply: Some(mul_f64),
    divide: Some(div_f64),
    add_saturate: Some(add_f64),
    subtract_saturate: Some(sub_f64),
    abs: Some(abs_f64),
    negate: Some(neg_f64),
    equals: Some(eq_f64),
    greater_than: Some(gt_f64),
    less_than: Some(lt_f64),
    sqrt: Some(sqrt_f64),
    floor: Some(floor_f64),
    ceiling: Some(ceil_f64),
    round: Some(round_f64),
    truncate: Some(trunc_f64),
    extract_msb: Some(msb_64),
    narrow: Some(narrow_f64),
    narrow_saturate: Some(narrow_f64),
    ..NativeKernels::NONE
};

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn supported() -> bool {
        std::is_x86_feature_detected!("sse4.1") && std::is_x86_feature_detected!("ssse3")
    }

    #[test]
    fn test_unsigned_compare_bias() {
        if !supported() {
            return;
        }
        let a = u64::from_ne_bytes([200, 1, 0, 255, 128, 127, 5, 5]);
        let b = u64::from_ne_bytes([100, 2, 0, 0, 127, 128, 5, 6]);
        // SAFETY: features checked above
        let gt = unsafe { gt_u8(a, b) }.to_ne_bytes();
        assert_eq!(gt, [0xFF, 0, 0, 0xFF, 0xFF, 0, 0, 0]);
    }

    #[test]
    fn test_saturating_unsigned_narrow_clamps_high_values() {
        if !supported() {
            return;
        }
        let lower = u64::from_ne_bytes([0x00, 0x80, 0xFF, 0x00, 0x00, 0x01, 0x10, 0x00]);
        let upper = 0;
        // SAFETY: features checked above
        let narrowed = unsafe { narrow_sat_u16(lower, upper) }.to_ne_bytes();
        assert_eq!(&narrowed[..4], &[0xFF, 0xFF, 0xFF, 0x10]);
    }

    #[test]
    fn test_shuffle_selector_semantics() {
        if !supported() {
            return;
        }
        let v = u64::from_ne_bytes([10, 11, 12, 13, 14, 15, 16, 17]);
        let idx = u64::from_ne_bytes([7, 0, 8, 0x80, 16, 23, 3, 255]);
        // SAFETY: features checked above
        let out = unsafe { shuffle_8(v, idx) }.to_ne_bytes();
        assert_eq!(out, [17, 10, 0, 0, 10, 17, 13, 0]);
    }
}
