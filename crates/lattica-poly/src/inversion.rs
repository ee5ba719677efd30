//! Inverses in Z_q[x]/(x^N - 1) for q = 3 and q a power of two.
//!
//! Both start from the "almost inverse" elimination over a prime field:
//! cancel the constant term, divide by x, swap when the degree drops
//! below the partner's, and undo the accumulated powers of x at the end.
//! The mod-2 inverse is then lifted to mod q by Newton iteration.
//!
//! A missing inverse is the common case while searching for key
//! candidates, so it is reported as `None`, never as an error.

use lattica_integers::SmallModulus;
use tracing::trace;

use crate::integer_poly::IntegerPolynomial;

impl IntegerPolynomial {
    /// Computes the inverse modulo 3, with coefficients in {0, 1, 2}.
    ///
    /// Returns `None` when the polynomial shares a factor with x^N - 1
    /// over GF(3).
    #[must_use]
    pub fn invert_f3(&self) -> Option<Self> {
        let p = SmallModulus::new(3)?;
        almost_inverse(self.coeffs(), p).map(Self::new)
    }

    /// Computes the inverse modulo `q`, a power of two, with coefficients
    /// in `[0, q)`.
    ///
    /// Returns `None` when no inverse exists modulo 2, in which case none
    /// exists modulo `q` either. The result is only meaningful when `q`
    /// is a power of two.
    ///
    /// # Panics
    ///
    /// Panics if `q < 2`.
    #[must_use]
    pub fn invert_fq(&self, q: i32) -> Option<Self> {
        assert!(q >= 2, "modulus must be at least 2");
        let two = SmallModulus::new(2)?;
        let mut fq = Self::new(almost_inverse(self.coeffs(), two)?);

        let mut v: i32 = 2;
        while v < q {
            v = v.saturating_mul(v).min(q);
            // fq <- fq * (2 - a * fq) mod v
            let mut t = self.multiply_mod(&fq, v).ok()?;
            for c in t.coeffs_mut() {
                *c = (v - *c) % v;
            }
            if let Some(c0) = t.coeffs_mut().first_mut() {
                *c0 = if *c0 >= v - 2 { *c0 - (v - 2) } else { *c0 + 2 };
            }
            fq = fq.multiply_mod(&t, v).ok()?;
            trace!(modulus = v, "lifted inverse");
        }
        Some(fq)
    }
}

/// Inverse of `a` in GF(p)[x]/(x^N - 1), canonical in `[0, p)`.
///
/// Keeps `b * a = x^k * f` and `c * a = x^k * g` modulo x^N - 1 while
/// `f` and `g` shrink; once `f` is a non-zero constant, `b / f0 * x^-k`
/// is the inverse.
fn almost_inverse(a: &[i32], p: SmallModulus) -> Option<Vec<i32>> {
    let n = a.len();
    if n == 0 {
        return None;
    }

    let mut f: Vec<i64> = a.iter().map(|&c| p.reduce(i64::from(c))).collect();
    f.push(0);
    let mut g = vec![0i64; n + 1];
    g[0] = p.neg(1);
    g[n] = 1;

    let mut b = vec![0i64; n];
    b[0] = 1;
    let mut c = vec![0i64; n];
    let mut k = 0usize;

    loop {
        if f.iter().all(|&x| x == 0) {
            return None;
        }
        while f[0] == 0 {
            // f <- f / x, c <- c * x
            f.rotate_left(1);
            c.rotate_right(1);
            k += 1;
        }

        let deg_f = degree(&f);
        if deg_f == 0 {
            break;
        }
        if deg_f < degree(&g) {
            std::mem::swap(&mut f, &mut g);
            std::mem::swap(&mut b, &mut c);
        }

        let u = p.mul(f[0], p.inv(g[0])?);
        for (x, &y) in f.iter_mut().zip(&g) {
            *x = p.sub(*x, p.mul(u, y));
        }
        for (x, &y) in b.iter_mut().zip(&c) {
            *x = p.sub(*x, p.mul(u, y));
        }
    }

    let f0_inv = p.inv(f[0])?;
    let shift = (n - k % n) % n;
    let mut out = vec![0i32; n];
    for (i, &x) in b.iter().enumerate() {
        // reduced, below p
        out[(i + shift) % n] = p.mul(x, f0_inv) as i32;
    }
    Some(out)
}

fn degree(v: &[i64]) -> usize {
    v.iter().rposition(|&x| x != 0).unwrap_or(0)
}
