//! Property-Based Backend Equivalence Tests
//!
//! Every operation with a native kernel must produce the same bits as the scalar reference
//! backend. Random bit patterns, boundary lanes and IEEE special values are fed to both
//! backends for every element type. Float lanes may differ only in NaN payload.
//!
//! On a CPU without native support `NativeBackend::detect()` is `None` and these tests pass
//! trivially; the scalar path is covered by the unit tests and `properties.rs`.

use proptest::prelude::*;
use vector64::{
    Backend, Element, FloatElement, IntElement, Narrow, NativeBackend, ScalarBackend, Vector64,
    Widen,
};


#[cfg(test)]
use test_utils::*;

// ============================================================================
// Checks shared by every element type
// ============================================================================

fn check<T: Element>(
    actual: Vector64<T>,
    expected: Vector64<T>,
    op: &str,
) -> Result<(), TestCaseError> {
    prop_assert!(
        lanes_match(actual, expected),
        "{} on {}: native {:?}, scalar {:?}",
        op,
        T::KIND.name(),
        actual,
        expected
    );
    Ok(())
}

fn check_common<T: Element>(
    native: NativeBackend,
    a: Vector64<T>,
    b: Vector64<T>,
) -> Result<(), TestCaseError> {
    check(native.add(a, b), ScalarBackend.add(a, b), "add")?;
    check(native.subtract(a, b), ScalarBackend.subtract(a, b), "subtract")?;
    check(native.multiply(a, b), ScalarBackend.multiply(a, b), "multiply")?;
    check(
        native.add_saturate(a, b),
        ScalarBackend.add_saturate(a, b),
        "add_saturate",
    )?;
    check(
        native.subtract_saturate(a, b),
        ScalarBackend.subtract_saturate(a, b),
        "subtract_saturate",
    )?;
    check(native.min(a, b), ScalarBackend.min(a, b), "min")?;
    check(native.max(a, b), ScalarBackend.max(a, b), "max")?;
    check(native.abs(a), ScalarBackend.abs(a), "abs")?;
    check(native.negate(a), ScalarBackend.negate(a), "negate")?;
    check(native.equals(a, b), ScalarBackend.equals(a, b), "equals")?;
    check(
        native.greater_than(a, b),
        ScalarBackend.greater_than(a, b),
        "greater_than",
    )?;
    check(
        native.less_than(a, b),
        ScalarBackend.less_than(a, b),
        "less_than",
    )?;
    check(native.equals(a, a), ScalarBackend.equals(a, a), "equals self")?;
    prop_assert_eq!(
        native.extract_most_significant_bits(a),
        ScalarBackend.extract_most_significant_bits(a),
        "extract_most_significant_bits on {}",
        T::KIND.name()
    );
    Ok(())
}

fn check_integer<T: IntElement>(
    native: NativeBackend,
    a: Vector64<T>,
    b: Vector64<T>,
    count: u32,
) -> Result<(), TestCaseError> {
    // Odd divisors are never zero.
    let divisor = b.bitwise_or(Vector64::one());
    check(
        native.divide(a, divisor),
        ScalarBackend.divide(a, divisor),
        "divide",
    )?;
    check(
        native.shift_left(a, count),
        ScalarBackend.shift_left(a, count),
        "shift_left",
    )?;
    check(
        native.shift_right_arithmetic(a, count),
        ScalarBackend.shift_right_arithmetic(a, count),
        "shift_right_arithmetic",
    )?;
    check(
        native.shift_right_logical(a, count),
        ScalarBackend.shift_right_logical(a, count),
        "shift_right_logical",
    )
}

fn check_float<T: FloatElement>(
    native: NativeBackend,
    a: Vector64<T>,
    b: Vector64<T>,
) -> Result<(), TestCaseError> {
    check(native.divide(a, b), ScalarBackend.divide(a, b), "divide")?;
    check(native.sqrt(a), ScalarBackend.sqrt(a), "sqrt")?;
    check(native.floor(a), ScalarBackend.floor(a), "floor")?;
    check(native.ceiling(a), ScalarBackend.ceiling(a), "ceiling")?;
    check(native.round(a), ScalarBackend.round(a), "round")?;
    check(native.truncate(a), ScalarBackend.truncate(a), "truncate")
}

fn check_widen<T: Widen>(native: NativeBackend, v: Vector64<T>) -> Result<(), TestCaseError> {
    let (native_lower, native_upper) = native.widen(v);
    let (scalar_lower, scalar_upper) = ScalarBackend.widen(v);
    check(native_lower, scalar_lower, "widen lower")?;
    check(native_upper, scalar_upper, "widen upper")
}

fn check_narrow<T: Narrow>(
    native: NativeBackend,
    lower: Vector64<T>,
    upper: Vector64<T>,
) -> Result<(), TestCaseError> {
    check(
        native.narrow(lower, upper),
        ScalarBackend.narrow(lower, upper),
        "narrow",
    )?;
    check(
        native.narrow_with_saturation(lower, upper),
        ScalarBackend.narrow_with_saturation(lower, upper),
        "narrow_with_saturation",
    )
}

fn check_shuffle<T: Element>(
    native: NativeBackend,
    v: Vector64<T>,
    indices: Vector64<T::Index>,
) -> Result<(), TestCaseError> {
    check(
        native.shuffle_native(v, indices),
        ScalarBackend.shuffle(v, indices),
        "shuffle_native (in range)",
    )
}

// ============================================================================
// Per-type suites
// ============================================================================

macro_rules! integer_suite {
    ($($name:ident: $t:ty),* $(,)?) => {$(
        proptest! {
            #![proptest_config(proptest_config())]

            #[test]
            fn $name(
                a in int_vector::<$t>(),
                b in int_vector::<$t>(),
                count in 0u32..80,
                indices in in_range_indices::<$t>(),
            ) {
                let Some(native) = NativeBackend::detect() else {
                    return Ok(());
                };
                check_common(native, a, b)?;
                check_integer(native, a, b, count)?;
                check_shuffle(native, a, indices)?;
            }
        }
    )*};
}

integer_suite! {
    test_i8_equivalence: i8,
    test_u8_equivalence: u8,
    test_i16_equivalence: i16,
    test_u16_equivalence: u16,
    test_i32_equivalence: i32,
    test_u32_equivalence: u32,
    test_i64_equivalence: i64,
    test_u64_equivalence: u64,
    test_isize_equivalence: isize,
    test_usize_equivalence: usize,
}

macro_rules! widen_suite {
    ($($name:ident: $t:ty),* $(,)?) => {$(
        proptest! {
            #![proptest_config(proptest_config())]

            #[test]
            fn $name(v in int_vector::<$t>(), lower in any_vector::<<$t as Widen>::Wide>(), upper in any_vector::<<$t as Widen>::Wide>()) {
                let Some(native) = NativeBackend::detect() else {
                    return Ok(());
                };
                check_widen(native, v)?;
                check_narrow(native, lower, upper)?;
            }
        }
    )*};
}

widen_suite! {
    test_i8_widen_narrow_equivalence: i8,
    test_u8_widen_narrow_equivalence: u8,
    test_i16_widen_narrow_equivalence: i16,
    test_u16_widen_narrow_equivalence: u16,
    test_i32_widen_narrow_equivalence: i32,
    test_u32_widen_narrow_equivalence: u32,
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn test_f32_equivalence(
        a in f32_vector(),
        b in f32_vector(),
        indices in in_range_indices::<f32>(),
    ) {
        let Some(native) = NativeBackend::detect() else {
            return Ok(());
        };
        check_common(native, a, b)?;
        check_float(native, a, b)?;
        check_shuffle(native, a, indices)?;
        check_widen(native, a)?;
    }

    #[test]
    fn test_f64_equivalence(
        a in f64_vector(),
        b in f64_vector(),
        indices in in_range_indices::<f64>(),
    ) {
        let Some(native) = NativeBackend::detect() else {
            return Ok(());
        };
        check_common(native, a, b)?;
        check_float(native, a, b)?;
        check_shuffle(native, a, indices)?;
        check_narrow(native, a, b)?;
    }
}

#[test]
fn test_shuffle_native_byte_lanes_out_of_range_index() {
    // Indices with bit 7 set select zero on every platform.
    let Some(native) = NativeBackend::detect() else {
        return;
    };
    let v = Vector64::<u8>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
    let indices = Vector64::<u8>::from_lanes([0x80, 0xFF, 0, 1, 2, 3, 4, 5]);
    assert_eq!(
        native.shuffle_native(v, indices).to_lanes(),
        [0, 0, 1, 2, 3, 4, 5, 6]
    );
}
