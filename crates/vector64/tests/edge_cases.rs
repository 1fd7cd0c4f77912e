//! Edge case tests for vector64
//!
//! Concrete scenarios plus the IEEE special values (NaN, ±0, ±∞, subnormals), integer
//! overflow boundaries and rounding ties.

use vector64::Vector64;

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_byte_addition_wraps() {
    let a = Vector64::<u8>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
    let b = Vector64::<u8>::splat(10);
    assert_eq!((a + b).to_lanes(), [11, 12, 13, 14, 15, 16, 17, 18]);

    let c = Vector64::<u8>::from_lanes([250, 251, 252, 253, 254, 255, 0, 1]);
    assert_eq!((c + b).to_lanes(), [4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn test_is_nan_mask() {
    let v = Vector64::<f32>::from_lanes([f32::NAN, 1.0]);
    let mask = v.is_nan().reinterpret::<u32>();
    assert_eq!(mask.to_lanes(), [u32::MAX, 0]);

    let single = Vector64::<f64>::from_lanes([f64::NAN]);
    assert_eq!(single.is_nan().to_bits(), u64::MAX);
}

#[test]
fn test_narrow_with_saturation_clamps_i32_to_i16() {
    let lower = Vector64::<i32>::from_lanes([2_000_000_000, -2_000_000_000]);
    let upper = Vector64::<i32>::from_lanes([1, -1]);
    assert_eq!(
        Vector64::narrow_with_saturation(lower, upper).to_lanes(),
        [32767, -32768, 1, -1]
    );
}

#[test]
fn test_extract_most_significant_bits_of_negative_lanes() {
    let v = Vector64::<i16>::from_lanes([-1, 0, -5, 3]);
    assert_eq!(v.extract_most_significant_bits(), 0b0101);

    let pair = Vector64::<i32>::from_lanes([-1, 0]);
    assert_eq!(pair.extract_most_significant_bits(), 0b01);
}

#[test]
fn test_unaligned_load_store_reproduces_bytes() {
    let source: [u8; 9] = [0xEE, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    // SAFETY: 1 + 8 <= 9
    let v = unsafe { Vector64::<u16>::load(source.as_ptr().add(1).cast::<u16>()) };
    let mut destination = [0u16; 4];
    // SAFETY: destination holds exactly 8 bytes
    unsafe { v.store(destination.as_mut_ptr()) };
    let bytes: Vec<u8> = destination.iter().flat_map(|lane| lane.to_ne_bytes()).collect();
    assert_eq!(bytes, &source[1..]);
}

// ============================================================================
// Integer boundaries
// ============================================================================

#[test]
fn test_integer_overflow_boundaries() {
    let min = Vector64::<i8>::splat(i8::MIN);
    assert_eq!(min.abs().to_scalar(), i8::MIN);
    assert_eq!((-min).to_scalar(), i8::MIN);
    assert_eq!(min.subtract_saturate(Vector64::one()).to_scalar(), i8::MIN);
    assert_eq!(
        Vector64::<i8>::splat(i8::MAX)
            .add_saturate(Vector64::one())
            .to_scalar(),
        i8::MAX
    );
    assert_eq!(
        (Vector64::<i32>::splat(i32::MIN) / Vector64::splat(-1)).to_lanes(),
        [i32::MIN, i32::MIN]
    );
    assert_eq!(
        Vector64::<u16>::zero()
            .subtract_saturate(Vector64::one())
            .to_scalar(),
        0
    );
}

#[test]
#[should_panic]
fn test_integer_division_by_zero_panics() {
    let _ = Vector64::<u32>::splat(1) / Vector64::zero();
}

#[test]
fn test_integer_min_max_magnitude() {
    let a = Vector64::<i16>::from_lanes([-3, 3, i16::MIN, 5]);
    let b = Vector64::<i16>::from_lanes([2, -3, i16::MAX, -5]);
    assert_eq!(a.max_magnitude(b).to_lanes(), [-3, 3, i16::MIN, 5]);
    assert_eq!(a.min_magnitude(b).to_lanes(), [2, -3, i16::MAX, -5]);
}

// ============================================================================
// IEEE special values
// ============================================================================

#[test]
fn test_signed_zero_ordering() {
    let neg = Vector64::<f32>::splat(-0.0);
    let pos = Vector64::<f32>::splat(0.0);
    assert!(neg.equals_all(pos));
    assert_eq!(neg.min(pos).to_bits(), neg.to_bits());
    assert_eq!(pos.min(neg).to_bits(), neg.to_bits());
    assert_eq!(neg.max(pos).to_bits(), pos.to_bits());
    assert_eq!(pos.max(neg).to_bits(), pos.to_bits());
    assert_eq!(neg.is_negative().to_bits(), u64::MAX);
    assert_eq!(neg.is_zero().to_bits(), u64::MAX);
}

#[test]
fn test_nan_propagation_in_min_max_family() {
    let nan = Vector64::<f64>::splat(f64::NAN);
    let one = Vector64::<f64>::one();
    assert!(nan.min(one).to_scalar().is_nan());
    assert!(one.max(nan).to_scalar().is_nan());
    assert_eq!(nan.min_number(one).to_scalar(), 1.0);
    assert_eq!(one.max_number(nan).to_scalar(), 1.0);
    assert!(nan.min_magnitude(one).to_scalar().is_nan());
    assert_eq!(nan.max_magnitude_number(one).to_scalar(), 1.0);
    // Native forms return the second operand when the comparison is false.
    assert_eq!(nan.min_native(one).to_scalar(), 1.0);
    assert!(one.min_native(nan).to_scalar().is_nan());
}

#[test]
fn test_infinity_classification() {
    let v = Vector64::<f32>::from_lanes([f32::INFINITY, f32::NEG_INFINITY]);
    assert_eq!(v.is_infinity().to_bits(), u64::MAX);
    assert_eq!(v.is_positive_infinity().as_u32().to_lanes(), [u32::MAX, 0]);
    assert_eq!(v.is_negative_infinity().as_u32().to_lanes(), [0, u32::MAX]);
    assert_eq!(v.is_finite().to_bits(), 0);
    assert_eq!(v.is_integer().to_bits(), 0);
}

#[test]
fn test_subnormal_and_normal_classification() {
    let tiny = f64::from_bits(1);
    let v = Vector64::<f64>::from_lanes([tiny]);
    assert_eq!(v.is_subnormal().to_bits(), u64::MAX);
    assert_eq!(v.is_normal().to_bits(), 0);
    assert_eq!(v.is_zero().to_bits(), 0);
    let w = Vector64::<f64>::from_lanes([f64::MIN_POSITIVE]);
    assert_eq!(w.is_normal().to_bits(), u64::MAX);
}

#[test]
fn test_even_odd_integer_classification() {
    let v = Vector64::<f32>::from_lanes([4.0, 16_777_216.0]);
    assert_eq!(v.is_even_integer().as_u32().to_lanes(), [u32::MAX; 2]);
    let w = Vector64::<f32>::from_lanes([3.0, 2.5]);
    assert_eq!(w.is_odd_integer().as_u32().to_lanes(), [u32::MAX, 0]);
    assert_eq!(w.is_even_integer().to_bits(), 0);
}

#[test]
fn test_rounding_ties_to_even() {
    let v = Vector64::<f32>::from_lanes([0.5, 1.5]);
    assert_eq!(v.round().to_lanes(), [0.0, 2.0]);
    let w = Vector64::<f64>::from_lanes([-2.5]);
    assert_eq!(w.round().to_scalar(), -2.0);
    let large = Vector64::<f32>::splat(8_388_609.0);
    assert_eq!(large.round(), large);
}

#[test]
fn test_rounding_special_values() {
    let v = Vector64::<f32>::from_lanes([f32::NEG_INFINITY, -0.0]);
    assert_eq!(v.floor().to_bits(), v.to_bits());
    assert_eq!(v.ceiling().to_bits(), v.to_bits());
    assert_eq!(v.truncate().to_bits(), v.to_bits());
    let nan = Vector64::<f64>::splat(f64::NAN);
    assert!(nan.floor().to_scalar().is_nan());
    let small = Vector64::<f32>::from_lanes([-0.3, 0.3]);
    assert_eq!(small.ceiling().to_lanes()[0].to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_float_to_int_conversion_specials() {
    let v = Vector64::<f32>::from_lanes([f32::INFINITY, f32::NEG_INFINITY]);
    assert_eq!(v.convert_to_i32().to_lanes(), [i32::MAX, i32::MIN]);
    assert_eq!(v.convert_to_u32().to_lanes(), [u32::MAX, 0]);
    let nan = Vector64::<f64>::splat(f64::NAN);
    assert_eq!(nan.convert_to_i64().to_scalar(), 0);
    assert_eq!(nan.convert_to_u64().to_scalar(), 0);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[test]
fn test_native_conversion_sentinels() {
    let v = Vector64::<f32>::from_lanes([f32::NAN, 3e9]);
    assert_eq!(v.convert_to_i32_native().to_lanes(), [i32::MIN, i32::MIN]);
    let neg = Vector64::<f64>::splat(-1.0);
    assert_eq!(neg.convert_to_u64_native().to_scalar(), u64::MAX);
}

#[test]
fn test_copy_sign_and_lerp() {
    let v = Vector64::<f32>::from_lanes([3.0, -4.0]);
    let sign = Vector64::<f32>::from_lanes([-0.0, 1.0]);
    assert_eq!(v.copy_sign(sign).to_lanes(), [-3.0, 4.0]);
    let i = Vector64::<i32>::from_lanes([i32::MIN, 7]);
    let s = Vector64::<i32>::from_lanes([1, -1]);
    assert_eq!(i.copy_sign(s).to_lanes(), [i32::MIN, -7]);

    let x = Vector64::<f64>::splat(2.0);
    let y = Vector64::<f64>::splat(6.0);
    assert_eq!(Vector64::lerp(x, y, Vector64::splat(0.25)).to_scalar(), 3.0);
}

#[test]
fn test_clamp_variants() {
    let v = Vector64::<f32>::from_lanes([-5.0, f32::NAN]);
    let lo = Vector64::splat(-1.0);
    let hi = Vector64::splat(1.0);
    let clamped = v.clamp(lo, hi).to_lanes();
    assert_eq!(clamped[0], -1.0);
    assert!(clamped[1].is_nan());
    assert_eq!(v.clamp_native(lo, hi).to_lanes()[0], -1.0);
}

#[test]
fn test_sum_overflow_wraps_and_float_sum_is_ordered() {
    let v = Vector64::<i8>::splat(100);
    assert_eq!(v.sum(), 32);
    let f = Vector64::<f32>::from_lanes([f32::MAX, f32::MAX]);
    assert_eq!(f.sum(), f32::INFINITY);
}
