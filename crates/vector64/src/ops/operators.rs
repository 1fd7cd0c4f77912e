//! Operator overloads
//!
//! Thin forwards to the named operations. `>>` is arithmetic for signed lanes and logical for
//! unsigned lanes, matching the primitive types.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::element::{Element, IntElement};
use crate::Vector64;

macro_rules! binary_operator {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:ident;)*) => {$(
        impl<T: Element> $trait for Vector64<T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Vector64::$op(self, rhs)
            }
        }

        impl<T: Element> $assign for Vector64<T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = Vector64::$op(*self, rhs);
            }
        }
    )*};
}

binary_operator! {
    Add::add, AddAssign::add_assign => add;
    Sub::sub, SubAssign::sub_assign => subtract;
    Mul::mul, MulAssign::mul_assign => multiply;
    Div::div, DivAssign::div_assign => divide;
    BitAnd::bitand, BitAndAssign::bitand_assign => bitwise_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bitwise_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => xor;
}

impl<T: Element> Mul<T> for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl<T: Element> MulAssign<T> for Vector64<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.multiply_scalar(rhs);
    }
}

impl<T: Element> Div<T> for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        self.divide_scalar(rhs)
    }
}

impl<T: Element> DivAssign<T> for Vector64<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        *self = self.divide_scalar(rhs);
    }
}

impl<T: Element> Neg for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Element> Not for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.ones_complement()
    }
}

impl<T: IntElement> Shl<u32> for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        self.shift_left(count)
    }
}

impl<T: IntElement> ShlAssign<u32> for Vector64<T> {
    #[inline(always)]
    fn shl_assign(&mut self, count: u32) {
        *self = self.shift_left(count);
    }
}

impl<T: IntElement> Shr<u32> for Vector64<T> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        if T::SIGNED {
            self.shift_right_arithmetic(count)
        } else {
            self.shift_right_logical(count)
        }
    }
}

impl<T: IntElement> ShrAssign<u32> for Vector64<T> {
    #[inline(always)]
    fn shr_assign(&mut self, count: u32) {
        *self = *self >> count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_operators() {
        let a = Vector64::<i32>::from_lanes([6, -8]);
        let b = Vector64::<i32>::from_lanes([2, 4]);
        assert_eq!((a + b).to_lanes(), [8, -4]);
        assert_eq!((a - b).to_lanes(), [4, -12]);
        assert_eq!((a * b).to_lanes(), [12, -32]);
        assert_eq!((a / b).to_lanes(), [3, -2]);
        assert_eq!((-a).to_lanes(), [-6, 8]);
        assert_eq!((a * 3).to_lanes(), [18, -24]);
        assert_eq!((a / 2).to_lanes(), [3, -4]);
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vector64::<f32>::splat(1.0);
        v += Vector64::splat(2.0);
        v *= 4.0;
        v -= Vector64::splat(2.0);
        v /= Vector64::splat(5.0);
        assert_eq!(v.to_lanes(), [2.0, 2.0]);
    }

    #[test]
    fn test_bitwise_operators() {
        let a = Vector64::<u8>::splat(0b1100);
        let b = Vector64::<u8>::splat(0b0110);
        assert_eq!((a & b).to_scalar(), 0b0100);
        assert_eq!((a | b).to_scalar(), 0b1110);
        assert_eq!((a ^ b).to_scalar(), 0b1010);
        assert_eq!((!a).to_scalar(), 0b1111_0011);
    }

    #[test]
    fn test_shift_operators_follow_signedness() {
        let s = Vector64::<i8>::splat(-128);
        let u = Vector64::<u8>::splat(0x80);
        assert_eq!((s >> 7).to_scalar(), -1);
        assert_eq!((u >> 7).to_scalar(), 1);
        let mut w = Vector64::<u16>::splat(1);
        w <<= 15;
        assert_eq!(w.to_scalar(), 0x8000);
        w >>= 3;
        assert_eq!(w.to_scalar(), 0x1000);
    }
}
