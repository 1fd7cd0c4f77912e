//! NEON kernels (aarch64)
//!
//! 64-bit D-register forms of the NEON instructions, one register per vector. NEON is
//! mandatory on aarch64, so the only runtime condition is the compile-time `neon` target
//! feature checked by detection.
//!
//! Signed and unsigned lanes of the same width share a kernel wherever the instruction does
//! not depend on signedness.

use core::arch::aarch64::*;

use super::NativeKernels;

// ============================================================================
// Register transfer
// ============================================================================

macro_rules! transfer {
    ($($load:ident, $store:ident: $ty:ty => $create:ident, $to_u64:ident);* $(;)?) => {$(
        #[inline(always)]
        unsafe fn $load(bits: u64) -> $ty {
            $create(bits)
        }

        #[inline(always)]
        unsafe fn $store(v: $ty) -> u64 {
            vget_lane_u64::<0>($to_u64(v))
        }
    )*};
}

transfer!(
    load_s8, store_s8: int8x8_t => vcreate_s8, vreinterpret_u64_s8;
    load_u8, store_u8: uint8x8_t => vcreate_u8, vreinterpret_u64_u8;
    load_s16, store_s16: int16x4_t => vcreate_s16, vreinterpret_u64_s16;
    load_u16, store_u16: uint16x4_t => vcreate_u16, vreinterpret_u64_u16;
    load_s32, store_s32: int32x2_t => vcreate_s32, vreinterpret_u64_s32;
    load_u32, store_u32: uint32x2_t => vcreate_u32, vreinterpret_u64_u32;
    load_s64, store_s64: int64x1_t => vcreate_s64, vreinterpret_u64_s64;
    load_f32, store_f32: float32x2_t => vcreate_f32, vreinterpret_u64_f32;
    load_f64, store_f64: float64x1_t => vcreate_f64, vreinterpret_u64_f64;
);

#[inline(always)]
unsafe fn load_u64(bits: u64) -> uint64x1_t {
    vcreate_u64(bits)
}

#[inline(always)]
unsafe fn store_u64(v: uint64x1_t) -> u64 {
    vget_lane_u64::<0>(v)
}

// ============================================================================
// Kernel generators
// ============================================================================

macro_rules! binary {
    ($($name:ident: $load:ident, $store:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "neon")]
        unsafe fn $name(a: u64, b: u64) -> u64 {
            $store($intrinsic($load(a), $load(b)))
        }
    )*};
}

macro_rules! unary {
    ($($name:ident: $load:ident, $store:ident => $intrinsic:ident),* $(,)?) => {$(
        #[target_feature(enable = "neon")]
        unsafe fn $name(v: u64) -> u64 {
            $store($intrinsic($load(v)))
        }
    )*};
}

/// `vshl` with a broadcast count; negative counts shift right.
macro_rules! shift {
    ($($name:ident: $load:ident, $store:ident => $shl:ident, $dup:ident, $direction:ident),* $(,)?) => {$(
        #[target_feature(enable = "neon")]
        unsafe fn $name(v: u64, count: u32) -> u64 {
            $store($shl($load(v), $dup($direction(count) as _)))
        }
    )*};
}

#[inline(always)]
fn left(count: u32) -> i64 {
    i64::from(count)
}

#[inline(always)]
fn right(count: u32) -> i64 {
    -i64::from(count)
}

macro_rules! widen {
    ($($name:ident: $load:ident, $store:ident => $movl:ident, $low:ident, $high:ident),* $(,)?) => {$(
        #[target_feature(enable = "neon")]
        unsafe fn $name(v: u64) -> (u64, u64) {
            let wide = $movl($load(v));
            ($store($low(wide)), $store($high(wide)))
        }
    )*};
}

macro_rules! narrow {
    ($($name:ident: $load:ident, $store:ident => $combine:ident, $movn:ident),* $(,)?) => {$(
        #[target_feature(enable = "neon")]
        unsafe fn $name(lower: u64, upper: u64) -> u64 {
            $store($movn($combine($load(lower), $load(upper))))
        }
    )*};
}

// ============================================================================
// Arithmetic
// ============================================================================

binary!(
    add_8: load_u8, store_u8 => vadd_u8,
    add_16: load_u16, store_u16 => vadd_u16,
    add_32: load_u32, store_u32 => vadd_u32,
    add_64: load_u64, store_u64 => vadd_u64,
    add_f32: load_f32, store_f32 => vadd_f32,
    add_f64: load_f64, store_f64 => vadd_f64,
    sub_8: load_u8, store_u8 => vsub_u8,
    sub_16: load_u16, store_u16 => vsub_u16,
    sub_32: load_u32, store_u32 => vsub_u32,
    sub_64: load_u64, store_u64 => vsub_u64,
    sub_f32: load_f32, store_f32 => vsub_f32,
    sub_f64: load_f64, store_f64 => vsub_f64,
    mul_8: load_u8, store_u8 => vmul_u8,
    mul_16: load_u16, store_u16 => vmul_u16,
    mul_32: load_u32, store_u32 => vmul_u32,
    mul_f32: load_f32, store_f32 => vmul_f32,
    mul_f64: load_f64, store_f64 => vmul_f64,
    div_f32: load_f32, store_f32 => vdiv_f32,
    div_f64: load_f64, store_f64 => vdiv_f64,
    qadd_i8: load_s8, store_s8 => vqadd_s8,
    qadd_u8: load_u8, store_u8 => vqadd_u8,
    qadd_i16: load_s16, store_s16 => vqadd_s16,
    qadd_u16: load_u16, store_u16 => vqadd_u16,
    qadd_i32: load_s32, store_s32 => vqadd_s32,
    qadd_u32: load_u32, store_u32 => vqadd_u32,
    qadd_i64: load_s64, store_s64 => vqadd_s64,
    qadd_u64: load_u64, store_u64 => vqadd_u64,
    qsub_i8: load_s8, store_s8 => vqsub_s8,
    qsub_u8: load_u8, store_u8 => vqsub_u8,
    qsub_i16: load_s16, store_s16 => vqsub_s16,
    qsub_u16: load_u16, store_u16 => vqsub_u16,
    qsub_i32: load_s32, store_s32 => vqsub_s32,
    qsub_u32: load_u32, store_u32 => vqsub_u32,
    qsub_i64: load_s64, store_s64 => vqsub_s64,
    qsub_u64: load_u64, store_u64 => vqsub_u64,
    min_i8: load_s8, store_s8 => vmin_s8,
    min_u8: load_u8, store_u8 => vmin_u8,
    min_i16: load_s16, store_s16 => vmin_s16,
    min_u16: load_u16, store_u16 => vmin_u16,
    min_i32: load_s32, store_s32 => vmin_s32,
    min_u32: load_u32, store_u32 => vmin_u32,
    min_f32: load_f32, store_f32 => vmin_f32,
    min_f64: load_f64, store_f64 => vmin_f64,
    max_i8: load_s8, store_s8 => vmax_s8,
    max_u8: load_u8, store_u8 => vmax_u8,
    max_i16: load_s16, store_s16 => vmax_s16,
    max_u16: load_u16, store_u16 => vmax_u16,
    max_i32: load_s32, store_s32 => vmax_s32,
    max_u32: load_u32, store_u32 => vmax_u32,
    max_f32: load_f32, store_f32 => vmax_f32,
    max_f64: load_f64, store_f64 => vmax_f64,
);

unary!(
    abs_i8: load_s8, store_s8 => vabs_s8,
    abs_i16: load_s16, store_s16 => vabs_s16,
    abs_i32: load_s32, store_s32 => vabs_s32,
    abs_i64: load_s64, store_s64 => vabs_s64,
    abs_f32: load_f32, store_f32 => vabs_f32,
    abs_f64: load_f64, store_f64 => vabs_f64,
    neg_8: load_s8, store_s8 => vneg_s8,
    neg_16: load_s16, store_s16 => vneg_s16,
    neg_32: load_s32, store_s32 => vneg_s32,
    neg_64: load_s64, store_s64 => vneg_s64,
    neg_f32: load_f32, store_f32 => vneg_f32,
    neg_f64: load_f64, store_f64 => vneg_f64,
);

// ============================================================================
// Comparison
// ============================================================================

binary!(
    eq_8: load_u8, store_u8 => vceq_u8,
    eq_16: load_u16, store_u16 => vceq_u16,
    eq_32: load_u32, store_u32 => vceq_u32,
    eq_64: load_u64, store_u64 => vceq_u64,
    gt_i8: load_s8, store_u8 => vcgt_s8,
    gt_u8: load_u8, store_u8 => vcgt_u8,
    gt_i16: load_s16, store_u16 => vcgt_s16,
    gt_u16: load_u16, store_u16 => vcgt_u16,
    gt_i32: load_s32, store_u32 => vcgt_s32,
    gt_u32: load_u32, store_u32 => vcgt_u32,
    gt_i64: load_s64, store_u64 => vcgt_s64,
    gt_u64: load_u64, store_u64 => vcgt_u64,
    lt_i8: load_s8, store_u8 => vclt_s8,
    lt_u8: load_u8, store_u8 => vclt_u8,
    lt_i16: load_s16, store_u16 => vclt_s16,
    lt_u16: load_u16, store_u16 => vclt_u16,
    lt_i32: load_s32, store_u32 => vclt_s32,
    lt_u32: load_u32, store_u32 => vclt_u32,
    lt_i64: load_s64, store_u64 => vclt_s64,
    lt_u64: load_u64, store_u64 => vclt_u64,
);

// Float compares take float operands and produce unsigned masks, so the load and store
// types differ.
#[target_feature(enable = "neon")]
unsafe fn eq_f32(a: u64, b: u64) -> u64 {
    store_u32(vceq_f32(load_f32(a), load_f32(b)))
}

#[target_feature(enable = "neon")]
unsafe fn gt_f32(a: u64, b: u64) -> u64 {
    store_u32(vcgt_f32(load_f32(a), load_f32(b)))
}

#[target_feature(enable = "neon")]
unsafe fn lt_f32(a: u64, b: u64) -> u64 {
    store_u32(vclt_f32(load_f32(a), load_f32(b)))
}

#[target_feature(enable = "neon")]
unsafe fn eq_f64(a: u64, b: u64) -> u64 {
    store_u64(vceq_f64(load_f64(a), load_f64(b)))
}

#[target_feature(enable = "neon")]
unsafe fn gt_f64(a: u64, b: u64) -> u64 {
    store_u64(vcgt_f64(load_f64(a), load_f64(b)))
}

#[target_feature(enable = "neon")]
unsafe fn lt_f64(a: u64, b: u64) -> u64 {
    store_u64(vclt_f64(load_f64(a), load_f64(b)))
}

// ============================================================================
// Float rounding
// ============================================================================

unary!(
    sqrt_f32: load_f32, store_f32 => vsqrt_f32,
    sqrt_f64: load_f64, store_f64 => vsqrt_f64,
    floor_f32: load_f32, store_f32 => vrndm_f32,
    floor_f64: load_f64, store_f64 => vrndm_f64,
    ceil_f32: load_f32, store_f32 => vrndp_f32,
    ceil_f64: load_f64, store_f64 => vrndp_f64,
    round_f32: load_f32, store_f32 => vrndn_f32,
    round_f64: load_f64, store_f64 => vrndn_f64,
    trunc_f32: load_f32, store_f32 => vrnd_f32,
    trunc_f64: load_f64, store_f64 => vrnd_f64,
);

// ============================================================================
// Shifts
// ============================================================================

shift!(
    shl_8: load_u8, store_u8 => vshl_u8, vdup_n_s8, left,
    shl_16: load_u16, store_u16 => vshl_u16, vdup_n_s16, left,
    shl_32: load_u32, store_u32 => vshl_u32, vdup_n_s32, left,
    shl_64: load_u64, store_u64 => vshl_u64, vdup_n_s64, left,
    shr_8: load_u8, store_u8 => vshl_u8, vdup_n_s8, right,
    shr_16: load_u16, store_u16 => vshl_u16, vdup_n_s16, right,
    shr_32: load_u32, store_u32 => vshl_u32, vdup_n_s32, right,
    shr_64: load_u64, store_u64 => vshl_u64, vdup_n_s64, right,
    sar_8: load_s8, store_s8 => vshl_s8, vdup_n_s8, right,
    sar_16: load_s16, store_s16 => vshl_s16, vdup_n_s16, right,
    sar_32: load_s32, store_s32 => vshl_s32, vdup_n_s32, right,
    sar_64: load_s64, store_s64 => vshl_s64, vdup_n_s64, right,
);

// ============================================================================
// Most significant bits
// ============================================================================

// Isolate each sign bit, move it to bit position `lane`, then add across the register.

#[target_feature(enable = "neon")]
unsafe fn msb_8(v: u64) -> u32 {
    let signs = vshr_n_u8::<7>(load_u8(v));
    let weighted = vshl_u8(signs, vcreate_s8(0x0706_0504_0302_0100));
    u32::from(vaddv_u8(weighted))
}

#[target_feature(enable = "neon")]
unsafe fn msb_16(v: u64) -> u32 {
    let signs = vshr_n_u16::<15>(load_u16(v));
    let weighted = vshl_u16(signs, vcreate_s16(0x0003_0002_0001_0000));
    u32::from(vaddv_u16(weighted))
}

#[target_feature(enable = "neon")]
unsafe fn msb_32(v: u64) -> u32 {
    let signs = vshr_n_u32::<31>(load_u32(v));
    let weighted = vshl_u32(signs, vcreate_s32(0x0000_0001_0000_0000));
    vaddv_u32(weighted)
}

#[target_feature(enable = "neon")]
unsafe fn msb_64(v: u64) -> u32 {
    store_u64(vshr_n_u64::<63>(load_u64(v))) as u32
}

// ============================================================================
// Widen / narrow
// ============================================================================

widen!(
    widen_i8: load_s8, store_s16 => vmovl_s8, vget_low_s16, vget_high_s16,
    widen_u8: load_u8, store_u16 => vmovl_u8, vget_low_u16, vget_high_u16,
    widen_i16: load_s16, store_s32 => vmovl_s16, vget_low_s32, vget_high_s32,
    widen_u16: load_u16, store_u32 => vmovl_u16, vget_low_u32, vget_high_u32,
    widen_i32: load_s32, store_s64 => vmovl_s32, vget_low_s64, vget_high_s64,
    widen_u32: load_u32, store_u64 => vmovl_u32, vget_low_u64, vget_high_u64,
    widen_f32: load_f32, store_f64 => vcvt_f64_f32, vget_low_f64, vget_high_f64,
);

narrow!(
    narrow_i16: load_s16, store_s8 => vcombine_s16, vmovn_s16,
    narrow_u16: load_u16, store_u8 => vcombine_u16, vmovn_u16,
    narrow_i32: load_s32, store_s16 => vcombine_s32, vmovn_s32,
    narrow_u32: load_u32, store_u16 => vcombine_u32, vmovn_u32,
    narrow_i64: load_s64, store_s32 => vcombine_s64, vmovn_s64,
    narrow_u64: load_u64, store_u32 => vcombine_u64, vmovn_u64,
    narrow_sat_i16: load_s16, store_s8 => vcombine_s16, vqmovn_s16,
    narrow_sat_u16: load_u16, store_u8 => vcombine_u16, vqmovn_u16,
    narrow_sat_i32: load_s32, store_s16 => vcombine_s32, vqmovn_s32,
    narrow_sat_u32: load_u32, store_u16 => vcombine_u32, vqmovn_u32,
    narrow_sat_i64: load_s64, store_s32 => vcombine_s64, vqmovn_s64,
    narrow_sat_u64: load_u64, store_u32 => vcombine_u64, vqmovn_u64,
    narrow_f64: load_f64, store_f32 => vcombine_f64, vcvt_f32_f64,
);

// ============================================================================
// Shuffle
// ============================================================================

/// `tbl`: any selector of 8 or more yields zero.
#[target_feature(enable = "neon")]
unsafe fn shuffle_8(v: u64, indices: u64) -> u64 {
    store_u8(vtbl1_u8(load_u8(v), load_u8(indices)))
}

// ============================================================================
// Tables
// ============================================================================

pub(crate) const I8: NativeKernels = NativeKernels {
    add: Some(add_8),
    subtract: Some(sub_8),
    multiply: Some(mul_8),
    add_saturate: Some(qadd_i8),
    subtract_saturate: Some(qsub_i8),
    min: Some(min_i8),
    max: Some(max_i8),
    abs: Some(abs_i8),
    negate: Some(neg_8),
    equals: Some(eq_8),
    greater_than: Some(gt_i8),
    less_than: Some(lt_i8),
    shift_left: Some(shl_8),
    shift_right_arithmetic: Some(sar_8),
    shift_right_logical: Some(shr_8),
    extract_msb: Some(msb_8),
    widen: Some(widen_i8),
    shuffle: Some(shuffle_8),
    ..NativeKernels::NONE
};

pub(crate) const U8: NativeKernels = NativeKernels {
    add: Some(add_8),
    subtract: Some(sub_8),
    multiply: Some(mul_8),
    add_saturate: Some(qadd_u8),
    subtract_saturate: Some(qsub_u8),
    min: Some(min_u8),
    max: Some(max_u8),
    negate: Some(neg_8),
    equals: Some(eq_8),
    greater_than: Some(gt_u8),
    less_than: Some(lt_u8),
    shift_left: Some(shl_8),
    shift_right_arithmetic: Some(sar_8),
    shift_right_logical: Some(shr_8),
    extract_msb: Some(msb_8),
    widen: Some(widen_u8),
    shuffle: Some(shuffle_8),
    ..NativeKernels::NONE
};

pub(crate) const I16: NativeKernels = NativeKernels {
    add: Some(add_16),
    subtract: Some(sub_16),
    multiply: Some(mul_16),
    add_saturate: Some(qadd_i16),
    subtract_saturate: Some(qsub_i16),
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
    narrow: Some(narrow_i16),
    narrow_saturate: Some(narrow_sat_i16),
    ..NativeKernels::NONE
};

pub(crate) const U16: NativeKernels = NativeKernels {
    add: Some(add_16),
    subtract: Some(sub_16),
    multiply: Some(mul_16),
    add_saturate: Some(qadd_u16),
    subtract_saturate: Some(qsub_u16),
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
    narrow: Some(narrow_u16),
    narrow_saturate: Some(narrow_sat_u16),
    ..NativeKernels::NONE
};

pub(crate) const I32: NativeKernels = NativeKernels {
    add: Some(add_32),
    subtract: Some(sub_32),
    multiply: Some(mul_32),
    add_saturate: Some(qadd_i32),
    subtract_saturate: Some(qsub_i32),
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
    narrow: Some(narrow_i32),
    narrow_saturate: Some(narrow_sat_i32),
    ..NativeKernels::NONE
};

pub(crate) const U32: NativeKernels = NativeKernels {
    add: Some(add_32),
    subtract: Some(sub_32),
    multiply: Some(mul_32),
    add_saturate: Some(qadd_u32),
    subtract_saturate: Some(qsub_u32),
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
    narrow: Some(narrow_u32),
    narrow_saturate: Some(narrow_sat_u32),
    ..NativeKernels::NONE
};

pub(crate) const I64: NativeKernels = NativeKernels {
    add: Some(add_64),
    subtract: Some(sub_64),
    add_saturate: Some(qadd_i64),
    subtract_saturate: Some(qsub_i64),
    abs: Some(abs_i64),
    negate: Some(neg_64),
    equals: Some(eq_64),
    greater_than: Some(gt_i64),
    less_than: Some(lt_i64),
    shift_left: Some(shl_64),
    shift_right_arithmetic: Some(sar_64),
    shift_right_logical: Some(shr_64),
    extract_msb: Some(msb_64),
    narrow: Some(narrow_i64),
    narrow_saturate: Some(narrow_sat_i64),
    ..NativeKernels::NONE
};

pub(crate) const U64: NativeKernels = NativeKernels {
    add: Some(add_64),
    subtract: Some(sub_64),
    add_saturate: Some(qadd_u64),
    subtract_saturate: Some(qsub_u64),
    negate: Some(neg_64),
    equals: Some(eq_64),
    greater_than: Some(gt_u64),
    less_than: Some(lt_u64),
    shift_left: Some(shl_64),
    shift_right_arithmetic: Some(sar_64),
    shift_right_logical: Some(shr_64),
    extract_msb: Some(msb_64),
    narrow: Some(narrow_u64),
    narrow_saturate: Some(narrow_sat_u64),
    ..NativeKernels::NONE
};

pub(crate) const F32: NativeKernels = NativeKernels {
    add: Some(add_f32),
    subtract: Some(sub_f32),
    multiply: Some(mul_f32),
    divide: Some(div_f32),
    add_saturate: Some(add_f32),
    subtract_saturate: Some(sub_f32),
    min: Some(min_f32),
    max: Some(max_f32),
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
    min: Some(min_f64),
    max: Some(max_f64),
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
