//! The operand abstraction shared by dense and sparse ring elements.

use crate::integer_poly::IntegerPolynomial;

/// An element of Z[x]/(x^N - 1) that can take part in dense arithmetic.
///
/// Implementors only need to know how to add themselves into, and
/// convolve themselves with, a wide accumulator. Both representations
/// must produce identical accumulators for the same logical element.
pub trait RingElement {
    /// Returns the ring degree N.
    fn dimension(&self) -> usize;

    /// Adds this element's coefficients into `acc`.
    ///
    /// `acc` has length [`dimension`](Self::dimension).
    fn add_into(&self, acc: &mut [i128]);

    /// Adds the cyclic convolution of this element with `dense` into `acc`.
    ///
    /// `dense` and `acc` both have length [`dimension`](Self::dimension).
    fn convolve_into(&self, dense: &[i32], acc: &mut [i128]);

    /// Returns the dense form of this element.
    fn to_integer_polynomial(&self) -> IntegerPolynomial;
}

/// Adds `scale * x^shift * src` into `acc`, cyclically.
pub(crate) fn add_rotated(acc: &mut [i128], src: &[i32], shift: usize, scale: i128) {
    let n = acc.len();
    if n == 0 {
        return;
    }
    let shift = shift % n;
    let (head, tail) = src.split_at(n - shift);
    for (slot, &b) in acc[shift..].iter_mut().zip(head) {
        *slot += scale * i128::from(b);
    }
    for (slot, &b) in acc[..shift].iter_mut().zip(tail) {
        *slot += scale * i128::from(b);
    }
}
