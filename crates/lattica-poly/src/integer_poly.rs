//! Dense ring elements over machine-width coefficients.
//!
//! An [`IntegerPolynomial`] holds N `i32` coefficients of an element of
//! Z[x]/(x^N - 1), lowest degree first. Products and sums are accumulated
//! in `i128`, which cannot overflow for any ring degree that fits in
//! memory, and are narrowed back explicitly: either reduced by a modulus
//! or checked against the `i32` range.

use crate::error::{check_dimension, PolyError, PolyResult};
use crate::ring::{add_rotated, RingElement};

/// A dense element of Z[x]/(x^N - 1).
///
/// Whether the coefficients are centered or canonical depends on the last
/// reduction the caller applied; the type does not track it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct IntegerPolynomial {
    coeffs: Vec<i32>,
}

impl IntegerPolynomial {
    /// Creates a ring element of degree `coeffs.len()`.
    #[must_use]
    pub fn new(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero element of dimension `n`.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self { coeffs: vec![0; n] }
    }

    /// Creates the multiplicative identity of dimension `n`.
    #[must_use]
    pub fn one(n: usize) -> Self {
        let mut p = Self::zeros(n);
        if let Some(c) = p.coeffs.first_mut() {
            *c = 1;
        }
        p
    }

    /// Returns the ring degree N.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[i32] {
        &self.coeffs
    }

    /// Returns mutable access to the coefficients.
    pub fn coeffs_mut(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> i32 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Cyclic convolution with no modulus applied.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ, and
    /// [`PolyError::CoefficientOverflow`] if a product coefficient leaves
    /// the `i32` range (use [`BigIntPolynomial`](crate::BigIntPolynomial)
    /// for unbounded products).
    pub fn multiply<R: RingElement + ?Sized>(&self, other: &R) -> PolyResult<Self> {
        let acc = self.convolve(other)?;
        narrow(acc, None).map(Self::new)
    }

    /// Cyclic convolution with every coefficient reduced into `[0, modulus)`.
    ///
    /// Agrees with [`multiply`](Self::multiply) followed by
    /// [`mod_positive`](Self::mod_positive) whenever the latter succeeds.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`.
    pub fn multiply_mod<R: RingElement + ?Sized>(
        &self,
        other: &R,
        modulus: i32,
    ) -> PolyResult<Self> {
        assert!(modulus > 0, "modulus must be positive");
        let acc = self.convolve(other)?;
        narrow(acc, Some(modulus)).map(Self::new)
    }

    fn convolve<R: RingElement + ?Sized>(&self, other: &R) -> PolyResult<Vec<i128>> {
        check_dimension(self.dimension(), other.dimension())?;
        let mut acc = vec![0i128; self.dimension()];
        other.convolve_into(&self.coeffs, &mut acc);
        Ok(acc)
    }

    /// Adds `other` in place. Accepts dense and sparse operands alike.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ, and
    /// [`PolyError::CoefficientOverflow`] if a sum leaves the `i32` range.
    /// The receiver is untouched on error.
    pub fn add<R: RingElement + ?Sized>(&mut self, other: &R) -> PolyResult<()> {
        let acc = self.combine(other, 1)?;
        self.coeffs = narrow(acc, None)?;
        Ok(())
    }

    /// Adds `other` in place and reduces the result into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`.
    pub fn add_mod<R: RingElement + ?Sized>(&mut self, other: &R, modulus: i32) -> PolyResult<()> {
        assert!(modulus > 0, "modulus must be positive");
        let acc = self.combine(other, 1)?;
        self.coeffs = narrow(acc, Some(modulus))?;
        Ok(())
    }

    /// Subtracts `other` in place.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn sub<R: RingElement + ?Sized>(&mut self, other: &R) -> PolyResult<()> {
        let acc = self.combine(other, -1)?;
        self.coeffs = narrow(acc, None)?;
        Ok(())
    }

    /// Subtracts `other` in place and reduces the result into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    ///
    /// # Panics
    ///
    /// Panics if `modulus <= 0`.
    pub fn sub_mod<R: RingElement + ?Sized>(&mut self, other: &R, modulus: i32) -> PolyResult<()> {
        assert!(modulus > 0, "modulus must be positive");
        let acc = self.combine(other, -1)?;
        self.coeffs = narrow(acc, Some(modulus))?;
        Ok(())
    }

    // self + sign * other, widened
    fn combine<R: RingElement + ?Sized>(&self, other: &R, sign: i128) -> PolyResult<Vec<i128>> {
        check_dimension(self.dimension(), other.dimension())?;
        let mut other_acc = vec![0i128; self.dimension()];
        other.add_into(&mut other_acc);
        Ok(self
            .coeffs
            .iter()
            .zip(other_acc)
            .map(|(&a, b)| i128::from(a) + sign * b)
            .collect())
    }

    /// Multiplies every coefficient by `factor` in place.
    ///
    /// # Errors
    ///
    /// [`PolyError::CoefficientOverflow`] if a product leaves the `i32` range.
    pub fn mult_scalar(&mut self, factor: i32) -> PolyResult<()> {
        let acc = self
            .coeffs
            .iter()
            .map(|&c| i128::from(c) * i128::from(factor))
            .collect();
        self.coeffs = narrow(acc, None)?;
        Ok(())
    }

    /// Divides every coefficient by `k`, rounding to nearest with ties
    /// toward positive infinity: `floor(c / k + 1/2)`.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`.
    pub fn divide(&mut self, k: i32) {
        assert!(k != 0, "division by zero");
        let k = i64::from(k);
        for c in &mut self.coeffs {
            // floor((2c + k) / 2k) == floor(c/k + 1/2); only i32::MIN / -1 saturates
            let q = floor_div(2 * i64::from(*c) + k, 2 * k);
            *c = i32::try_from(q).unwrap_or(if q < 0 { i32::MIN } else { i32::MAX });
        }
    }

    /// Reduces every coefficient into `[0, m)`. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `m <= 0`.
    pub fn mod_positive(&mut self, m: i32) {
        assert!(m > 0, "modulus must be positive");
        for c in &mut self.coeffs {
            *c = c.rem_euclid(m);
        }
    }

    /// Ensures every coefficient lies in `[0, m)`, touching only those
    /// that do not. Same result as [`mod_positive`](Self::mod_positive).
    ///
    /// # Panics
    ///
    /// Panics if `m <= 0`.
    pub fn ensure_positive(&mut self, m: i32) {
        assert!(m > 0, "modulus must be positive");
        for c in self.coeffs.iter_mut().filter(|c| !(0..m).contains(*c)) {
            *c = c.rem_euclid(m);
        }
    }

    /// Maps every coefficient to its representative in `(-m/2, m/2]`.
    ///
    /// # Panics
    ///
    /// Panics if `m <= 0`.
    pub fn center(&mut self, m: i32) {
        assert!(m > 0, "modulus must be positive");
        let half = m / 2;
        for c in &mut self.coeffs {
            let r = c.rem_euclid(m);
            *c = if r > half { r - m } else { r };
        }
    }

    /// Multiplies by x^k in place, i.e. rotates coefficients up by `k`.
    pub fn rotate(&mut self, k: usize) {
        let n = self.dimension();
        if n > 0 {
            self.coeffs.rotate_right(k % n);
        }
    }

    /// Returns true if this is the identity `(1, 0, ..., 0)`.
    ///
    /// Reduce first; the check is on the coefficients as stored.
    #[must_use]
    pub fn equals_one(&self) -> bool {
        match self.coeffs.split_first() {
            Some((&c0, rest)) => c0 == 1 && rest.iter().all(|&c| c == 0),
            None => false,
        }
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn equals_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Returns the index of the highest non-zero coefficient, or `None`
    /// for the zero element.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Counts the coefficients equal to `value`.
    #[must_use]
    pub fn count(&self, value: i32) -> usize {
        self.coeffs.iter().filter(|&&c| c == value).count()
    }

    /// Returns true if every coefficient is in {-1, 0, 1}.
    #[must_use]
    pub fn is_ternary(&self) -> bool {
        self.coeffs.iter().all(|c| (-1..=1).contains(c))
    }

    /// Fails with [`PolyError::NotTernary`] at the first non-ternary coefficient.
    pub(crate) fn check_ternary(&self) -> PolyResult<()> {
        match self.coeffs.iter().position(|c| !(-1..=1).contains(c)) {
            Some(index) => Err(PolyError::NotTernary {
                index,
                value: self.coeffs[index],
            }),
            None => Ok(()),
        }
    }
}

impl RingElement for IntegerPolynomial {
    fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    fn add_into(&self, acc: &mut [i128]) {
        for (slot, &c) in acc.iter_mut().zip(&self.coeffs) {
            *slot += i128::from(c);
        }
    }

    fn convolve_into(&self, dense: &[i32], acc: &mut [i128]) {
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a != 0 {
                add_rotated(acc, dense, i, i128::from(a));
            }
        }
    }

    fn to_integer_polynomial(&self) -> IntegerPolynomial {
        self.clone()
    }
}

impl From<Vec<i32>> for IntegerPolynomial {
    fn from(coeffs: Vec<i32>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[i32]> for IntegerPolynomial {
    fn from(coeffs: &[i32]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

/// Narrows a wide accumulator, reducing into `[0, m)` when a modulus is given.
fn narrow(acc: Vec<i128>, modulus: Option<i32>) -> PolyResult<Vec<i32>> {
    acc.into_iter()
        .enumerate()
        .map(|(index, v)| {
            let v = match modulus {
                Some(m) => v.rem_euclid(i128::from(m)),
                None => v,
            };
            i32::try_from(v).map_err(|_| PolyError::CoefficientOverflow { index })
        })
        .collect()
}

fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}
