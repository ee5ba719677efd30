//! Exact integers for resultants and Bezout cofactors.
//!
//! Resultants of ring elements of degree several hundred run to
//! thousands of bits. [`Integer`] is a thin newtype over `dashu::IBig`
//! exposing the few operations the subresultant recurrence and the
//! CRT combination need.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use dashu::base::{Abs, BitTest, DivRem, ExtendedGcd, Signed};
use dashu::integer::IBig;
use num_traits::{One, Zero};

/// Signed integer of unbounded width.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Wraps a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Whether `self < 0`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        Signed::is_negative(&self.0)
    }

    /// Bit length of the magnitude; zero has length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Residue of `self` modulo `m`, in `[0, |m|)`.
    ///
    /// # Panics
    ///
    /// If `m` is zero.
    #[must_use]
    pub fn rem_euclid(&self, m: &Self) -> Self {
        assert!(!m.is_zero(), "rem_euclid by zero");
        let m = m.abs();
        let r = Self(&self.0 % &m.0);
        if r.is_negative() {
            r + m
        } else {
            r
        }
    }

    /// Residue of `self` modulo `m`, in `(-|m|/2, |m|/2]`.
    #[must_use]
    pub fn center(&self, m: &Self) -> Self {
        let m = m.abs();
        let r = self.rem_euclid(&m);
        if &r + &r > m {
            r - m
        } else {
            r
        }
    }

    /// Quotient by a divisor known to divide `self`.
    ///
    /// # Panics
    ///
    /// If `divisor` is zero or leaves a remainder. The subresultant
    /// recurrences only divide exactly, so a remainder is a broken
    /// invariant rather than a rounding choice.
    #[must_use]
    pub fn exact_div(&self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "exact_div by zero");
        if divisor.is_one() {
            return self.clone();
        }
        let (q, r) = (&self.0).div_rem(&divisor.0);
        assert!(r.is_zero(), "inexact division: {self} by {divisor}");
        Self(q)
    }

    /// Bezout triple `(g, x, y)` with `g = x*self + y*other` and `g >= 0`.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let sign = |v: &Self| Self::new(if v.is_negative() { -1 } else { 1 });
        if other.is_zero() {
            return (self.abs(), sign(self), Self::zero());
        }
        if self.is_zero() {
            return (other.abs(), Self::zero(), sign(other));
        }
        let (g, x, y) = self.0.clone().gcd_ext(other.0.clone());
        (Self(IBig::from(g)), Self(x), Self(y))
    }

    /// `self` raised to `exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Narrows to `i64`, or `None` when out of range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Narrows to `i32`, or `None` when out of range.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IBig::from_str(s).map(Self)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Integer").field(&format_args!("{}", self.0)).finish()
    }
}

/// Forwards a binary operator to `IBig` for owned and borrowed operands.
macro_rules! forward_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait for Integer {
            type Output = Integer;
            fn $method(self, rhs: Integer) -> Integer {
                Integer($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;
            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait<&Integer> for &Integer {
            type Output = Integer;
            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    )*};
}

forward_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

macro_rules! forward_assign {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait<&Integer> for Integer {
            fn $method(&mut self, rhs: &Integer) {
                $trait::$method(&mut self.0, &rhs.0);
            }
        }
    )*};
}

forward_assign!(AddAssign::add_assign, SubAssign::sub_assign, MulAssign::mul_assign);

impl Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(IBig::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_operators() {
        let (a, b) = (int(10), int(3));
        assert_eq!(&a + &b, int(13));
        assert_eq!(&a - &b, int(7));
        assert_eq!(&a * &b, int(30));
        assert_eq!(&a / &b, int(3));
        assert_eq!(&a % &b, int(1));
        assert_eq!(-&a, int(-10));

        let mut c = a.clone();
        c += &b;
        c *= &b;
        c -= &a;
        assert_eq!(c, int(29));
    }

    #[test]
    fn test_rem_euclid_negative() {
        let m = int(7);
        assert_eq!(int(-3).rem_euclid(&m), int(4));
        assert_eq!(int(-14).rem_euclid(&m), int(0));
        assert_eq!(int(15).rem_euclid(&int(-7)), int(1));
    }

    #[test]
    fn test_center() {
        let m = int(32);
        assert_eq!(int(17).center(&m), int(-15));
        assert_eq!(int(16).center(&m), int(16));
        assert_eq!(int(-1).center(&m), int(-1));
        assert_eq!(int(2).center(&int(5)), int(2));
        assert_eq!(int(3).center(&int(5)), int(-2));
    }

    #[test]
    fn test_extended_gcd() {
        let (a, b) = (int(240), int(46));
        let (g, x, y) = a.extended_gcd(&b);
        assert_eq!(g, int(2));
        assert_eq!(x * &a + y * &b, int(2));

        let (g, x, y) = int(-12).extended_gcd(&int(0));
        assert_eq!((g, x, y), (int(12), int(-1), int(0)));

        let (a, b) = (int(-35), int(21));
        let (g, x, y) = a.extended_gcd(&b);
        assert_eq!(g, int(7));
        assert_eq!(x * &a + y * &b, int(7));
    }

    #[test]
    fn test_exact_div() {
        assert_eq!(int(-91).exact_div(&int(7)), int(-13));
        assert_eq!(int(-91).exact_div(&int(1)), int(-91));
    }

    #[test]
    #[should_panic(expected = "inexact division")]
    fn test_exact_div_rejects_remainder() {
        let _ = int(92).exact_div(&int(7));
    }

    #[test]
    fn test_wide_values() {
        let a: Integer = "123456789012345678901234567890".parse().unwrap();
        let b: Integer = "987654321098765432109876543210".parse().unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
        assert_eq!(sum.to_i64(), None);
        assert_eq!(sum.to_i32(), None);
        assert_eq!(int(1 << 40).to_i32(), None);
        assert_eq!(int(-5).to_i32(), Some(-5));
        assert_eq!(int(2).pow(100).bit_len(), 101);
    }
}
