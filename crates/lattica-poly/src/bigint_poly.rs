//! Ring elements with arbitrary precision coefficients.

use lattica_integers::Integer;
use num_traits::Zero;

use crate::error::{check_dimension, PolyError, PolyResult};
use crate::integer_poly::IntegerPolynomial;

/// An element of Z[x]/(x^N - 1) with unbounded coefficients.
///
/// Used where products would overflow machine width: applying or
/// verifying a Bezout relation, and tracking cofactors in the exact
/// resultant.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BigIntPolynomial {
    coeffs: Vec<Integer>,
}

impl BigIntPolynomial {
    /// Creates a polynomial from coefficients, lowest degree first.
    #[must_use]
    pub fn new(coeffs: Vec<Integer>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero element of dimension `n`.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            coeffs: vec![Integer::zero(); n],
        }
    }

    /// Creates the identity of dimension `n`.
    #[must_use]
    pub fn one(n: usize) -> Self {
        let mut p = Self::zeros(n);
        if let Some(c) = p.coeffs.first_mut() {
            *c = Integer::new(1);
        }
        p
    }

    /// Returns the ring degree N.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Returns mutable access to the coefficients.
    pub fn coeffs_mut(&mut self) -> &mut [Integer] {
        &mut self.coeffs
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Cyclic convolution with exact accumulation.
    ///
    /// Intended for a small-coefficient `other` such as a Bezout cofactor,
    /// but correct for any magnitudes.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    pub fn mult_small(&self, other: &Self) -> PolyResult<Self> {
        check_dimension(self.dimension(), other.dimension())?;
        let n = self.dimension();
        let mut out = vec![Integer::zero(); n];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if !b.is_zero() {
                    out[(i + j) % n] += &(a * b);
                }
            }
        }
        Ok(Self::new(out))
    }

    /// Reduces every coefficient to its representative in `[0, |m|)`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn modulo(&mut self, m: &Integer) {
        for c in &mut self.coeffs {
            *c = c.rem_euclid(m);
        }
    }

    /// Maps every coefficient into `(-m/2, m/2]`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn center(&mut self, m: &Integer) {
        for c in &mut self.coeffs {
            *c = c.center(m);
        }
    }

    /// Adds `other` in place.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    pub fn add(&mut self, other: &Self) -> PolyResult<()> {
        check_dimension(self.dimension(), other.dimension())?;
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts `other` in place.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if the degrees differ.
    pub fn sub(&mut self, other: &Self) -> PolyResult<()> {
        check_dimension(self.dimension(), other.dimension())?;
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies every coefficient by `k`.
    pub fn scale(&mut self, k: &Integer) {
        for c in &mut self.coeffs {
            *c *= k;
        }
    }

    /// Divides every coefficient by `d`, which must divide each exactly.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn exact_div_scalar(&mut self, d: &Integer) {
        for c in &mut self.coeffs {
            *c = c.exact_div(d);
        }
    }

    /// Multiplies by x^k in place.
    pub fn rotate(&mut self, k: usize) {
        let n = self.dimension();
        if n > 0 {
            self.coeffs.rotate_right(k % n);
        }
    }

    /// Narrows back to machine-width coefficients.
    ///
    /// # Errors
    ///
    /// [`PolyError::CoefficientOverflow`] at the first coefficient outside
    /// the `i32` range.
    pub fn try_to_integer_polynomial(&self) -> PolyResult<IntegerPolynomial> {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(index, c)| c.to_i32().ok_or(PolyError::CoefficientOverflow { index }))
            .collect::<PolyResult<Vec<_>>>()
            .map(IntegerPolynomial::new)
    }
}

impl From<&IntegerPolynomial> for BigIntPolynomial {
    fn from(p: &IntegerPolynomial) -> Self {
        Self::new(p.coeffs().iter().map(|&c| Integer::from(c)).collect())
    }
}

impl From<IntegerPolynomial> for BigIntPolynomial {
    fn from(p: IntegerPolynomial) -> Self {
        Self::from(&p)
    }
}
