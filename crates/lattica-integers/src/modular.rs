//! Modular arithmetic over machine-width moduli.
//!
//! Used by the modular resultant and the small-field inversions, where
//! every operand is already reduced and products must fit an `i64`.

use std::fmt;

/// A modulus `m` with `2 <= m < 2^31`.
///
/// The bound keeps `(m - 1)^2` below `i64::MAX`, so a product of two
/// reduced residues never overflows before it is reduced again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallModulus(i64);

impl SmallModulus {
    /// Largest supported modulus.
    pub const MAX: i64 = i32::MAX as i64;

    /// Creates a modulus, or `None` if `m` is outside `[2, 2^31)`.
    #[must_use]
    pub fn new(m: i64) -> Option<Self> {
        if (2..=Self::MAX).contains(&m) {
            Some(Self(m))
        } else {
            None
        }
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Reduces any `i64` into `[0, m)`.
    #[must_use]
    pub fn reduce(self, value: i64) -> i64 {
        value.rem_euclid(self.0)
    }

    /// Adds two reduced residues.
    #[must_use]
    pub fn add(self, a: i64, b: i64) -> i64 {
        let s = a + b;
        if s >= self.0 {
            s - self.0
        } else {
            s
        }
    }

    /// Subtracts two reduced residues.
    #[must_use]
    pub fn sub(self, a: i64, b: i64) -> i64 {
        let d = a - b;
        if d < 0 {
            d + self.0
        } else {
            d
        }
    }

    /// Multiplies two reduced residues.
    #[must_use]
    pub fn mul(self, a: i64, b: i64) -> i64 {
        (a * b) % self.0
    }

    /// Negates a reduced residue.
    #[must_use]
    pub fn neg(self, a: i64) -> i64 {
        if a == 0 {
            0
        } else {
            self.0 - a
        }
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(a, m) != 1).
    #[must_use]
    pub fn inv(self, a: i64) -> Option<i64> {
        let a = self.reduce(a);
        if a == 0 {
            return None;
        }

        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = self.0;
        let mut new_r = a;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None; // Not coprime
        }

        Some(self.reduce(t))
    }

    /// Computes base^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, base: i64, mut exp: u64) -> i64 {
        let mut base = self.reduce(base);
        let mut result = 1 % self.0;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        result
    }
}

impl fmt::Debug for SmallModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mod {}", self.0)
    }
}

impl fmt::Display for SmallModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common moduli.
pub mod primes {
    /// Largest prime below sqrt(2^31), the default resultant pre-check prime.
    pub const P46337: i64 = 46_337;

    /// 2^15 - 19, a prime in the range the modular resultant pre-check favours.
    pub const P32749: i64 = 32_749;

    /// 2^16 + 1 (Fermat prime).
    pub const P65537: i64 = 65_537;
}
