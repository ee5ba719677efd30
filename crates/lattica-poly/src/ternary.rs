//! Ternary ring elements in dense and sparse form.
//!
//! A ternary element has every coefficient in {-1, 0, 1}. The sparse form
//! keeps only the indices of the +1 and -1 coefficients, which makes
//! convolution a sum of rotated copies of the other operand. Both forms
//! implement [`RingElement`] and produce identical results.

use rand::seq::index;
use rand::Rng;

use crate::error::{PolyError, PolyResult};
use crate::integer_poly::IntegerPolynomial;
use crate::ring::{add_rotated, RingElement};

/// Common interface of the two ternary representations.
pub trait TernaryPolynomial: RingElement {
    /// Indices holding +1, ascending.
    fn ones(&self) -> Vec<usize>;

    /// Indices holding -1, ascending.
    fn neg_ones(&self) -> Vec<usize>;

    /// Converts to the sparse form.
    fn to_sparse(&self) -> SparseTernaryPolynomial {
        SparseTernaryPolynomial {
            n: self.dimension(),
            ones: self.ones(),
            neg_ones: self.neg_ones(),
        }
    }

    /// Converts to the dense form.
    fn to_dense(&self) -> DenseTernaryPolynomial {
        DenseTernaryPolynomial(self.to_integer_polynomial())
    }
}

/// A ternary element stored as a full coefficient vector.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DenseTernaryPolynomial(IntegerPolynomial);

impl DenseTernaryPolynomial {
    /// Wraps `coeffs`, checking that every entry is in {-1, 0, 1}.
    ///
    /// # Errors
    ///
    /// [`PolyError::NotTernary`] at the first offending coefficient.
    pub fn new(coeffs: Vec<i32>) -> PolyResult<Self> {
        Self::try_from(IntegerPolynomial::new(coeffs))
    }

    /// Draws a uniformly random element with exactly `num_ones` +1 and
    /// `num_neg_ones` -1 coefficients.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidWeight`] if the non-zero count exceeds `n`.
    pub fn random<G: Rng + ?Sized>(
        n: usize,
        num_ones: usize,
        num_neg_ones: usize,
        rng: &mut G,
    ) -> PolyResult<Self> {
        SparseTernaryPolynomial::random(n, num_ones, num_neg_ones, rng).map(|s| s.to_dense())
    }

    /// Returns the underlying dense polynomial.
    #[must_use]
    pub fn as_integer_polynomial(&self) -> &IntegerPolynomial {
        &self.0
    }

    /// Unwraps into the underlying dense polynomial.
    #[must_use]
    pub fn into_integer_polynomial(self) -> IntegerPolynomial {
        self.0
    }
}

impl TryFrom<IntegerPolynomial> for DenseTernaryPolynomial {
    type Error = PolyError;

    fn try_from(p: IntegerPolynomial) -> PolyResult<Self> {
        p.check_ternary()?;
        Ok(Self(p))
    }
}

impl RingElement for DenseTernaryPolynomial {
    fn dimension(&self) -> usize {
        self.0.dimension()
    }

    fn add_into(&self, acc: &mut [i128]) {
        self.0.add_into(acc);
    }

    fn convolve_into(&self, dense: &[i32], acc: &mut [i128]) {
        self.0.convolve_into(dense, acc);
    }

    fn to_integer_polynomial(&self) -> IntegerPolynomial {
        self.0.clone()
    }
}

impl TernaryPolynomial for DenseTernaryPolynomial {
    fn ones(&self) -> Vec<usize> {
        indices_of(self.0.coeffs(), 1)
    }

    fn neg_ones(&self) -> Vec<usize> {
        indices_of(self.0.coeffs(), -1)
    }

    fn to_dense(&self) -> DenseTernaryPolynomial {
        self.clone()
    }
}

fn indices_of(coeffs: &[i32], value: i32) -> Vec<usize> {
    coeffs
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| (c == value).then_some(i))
        .collect()
}

/// A ternary element stored as its +1 and -1 index sets.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SparseTernaryPolynomial {
    n: usize,
    ones: Vec<usize>,
    neg_ones: Vec<usize>,
}

impl SparseTernaryPolynomial {
    /// Creates a sparse element of dimension `n`.
    ///
    /// Index lists are sorted; they must be in range and disjoint.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if an index is `>= n`, and
    /// [`PolyError::NotTernary`] if an index appears more than once
    /// (the coefficient there would not be ternary).
    pub fn new(n: usize, mut ones: Vec<usize>, mut neg_ones: Vec<usize>) -> PolyResult<Self> {
        if let Some(&bad) = ones.iter().chain(&neg_ones).find(|&&i| i >= n) {
            return Err(PolyError::DimensionMismatch {
                expected: n,
                found: bad + 1,
            });
        }

        ones.sort_unstable();
        neg_ones.sort_unstable();

        let mut seen = vec![0i32; n];
        for &i in &ones {
            seen[i] += 1;
        }
        for &i in &neg_ones {
            seen[i] -= 1;
        }
        let repeated = |list: &[usize]| list.windows(2).find(|w| w[0] == w[1]).map(|w| w[0]);
        if let Some(index) = repeated(&ones).or_else(|| repeated(&neg_ones)) {
            return Err(PolyError::NotTernary {
                index,
                value: seen[index],
            });
        }
        if let Some(&index) = ones.iter().find(|&&i| neg_ones.binary_search(&i).is_ok()) {
            return Err(PolyError::NotTernary { index, value: 0 });
        }

        Ok(Self { n, ones, neg_ones })
    }

    /// Draws a uniformly random element with exactly `num_ones` +1 and
    /// `num_neg_ones` -1 coefficients.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidWeight`] if the non-zero count exceeds `n`.
    pub fn random<G: Rng + ?Sized>(
        n: usize,
        num_ones: usize,
        num_neg_ones: usize,
        rng: &mut G,
    ) -> PolyResult<Self> {
        let requested = num_ones + num_neg_ones;
        if requested > n {
            return Err(PolyError::InvalidWeight { n, requested });
        }

        let mut picked = index::sample(rng, n, requested).into_vec();
        let mut neg_ones = picked.split_off(num_ones);
        picked.sort_unstable();
        neg_ones.sort_unstable();

        Ok(Self {
            n,
            ones: picked,
            neg_ones,
        })
    }

    /// Indices holding +1.
    #[must_use]
    pub fn one_indices(&self) -> &[usize] {
        &self.ones
    }

    /// Indices holding -1.
    #[must_use]
    pub fn neg_one_indices(&self) -> &[usize] {
        &self.neg_ones
    }
}

impl RingElement for SparseTernaryPolynomial {
    fn dimension(&self) -> usize {
        self.n
    }

    fn add_into(&self, acc: &mut [i128]) {
        for &i in &self.ones {
            acc[i] += 1;
        }
        for &i in &self.neg_ones {
            acc[i] -= 1;
        }
    }

    fn convolve_into(&self, dense: &[i32], acc: &mut [i128]) {
        for &i in &self.ones {
            add_rotated(acc, dense, i, 1);
        }
        for &i in &self.neg_ones {
            add_rotated(acc, dense, i, -1);
        }
    }

    fn to_integer_polynomial(&self) -> IntegerPolynomial {
        let mut coeffs = vec![0; self.n];
        for &i in &self.ones {
            coeffs[i] = 1;
        }
        for &i in &self.neg_ones {
            coeffs[i] = -1;
        }
        IntegerPolynomial::new(coeffs)
    }
}

impl TernaryPolynomial for SparseTernaryPolynomial {
    fn ones(&self) -> Vec<usize> {
        self.ones.clone()
    }

    fn neg_ones(&self) -> Vec<usize> {
        self.neg_ones.clone()
    }

    fn to_sparse(&self) -> SparseTernaryPolynomial {
        self.clone()
    }
}
