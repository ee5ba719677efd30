//! Resultants against x^N - 1 with a Bezout cofactor.
//!
//! For a ring element `a` these compute `res = Res(x^N - 1, a)` together
//! with `rho` such that `rho * a = res (mod x^N - 1)`. A non-zero
//! resultant certifies that `a` is invertible over Q, and modulo any
//! prime not dividing it.
//!
//! - [`IntegerPolynomial::resultant`]: exact, using the subresultant
//!   pseudo-remainder sequence so every intermediate stays integral.
//! - [`IntegerPolynomial::resultant_mod`]: the same quantity modulo a
//!   small prime, via the Euclidean remainder sequence over Z_p. Cheap
//!   enough to filter key candidates before attempting inversion.
//!
//! Both track the cofactor of `a` through the sequence, reduced modulo
//! x^N - 1, and run as explicit loops.

use lattica_integers::{Integer, SmallModulus};
use num_traits::{One, Zero};
use tracing::trace;

use crate::bigint_poly::BigIntPolynomial;
use crate::error::{check_dimension, PolyError, PolyResult};
use crate::integer_poly::IntegerPolynomial;

/// A resultant and its Bezout cofactor, exact or modulo `modulus`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Resultant {
    res: Integer,
    rho: BigIntPolynomial,
    modulus: Option<Integer>,
}

impl Resultant {
    /// Bundles a resultant with its cofactor.
    #[must_use]
    pub fn new(res: Integer, rho: BigIntPolynomial, modulus: Option<Integer>) -> Self {
        Self { res, rho, modulus }
    }

    /// The resultant.
    #[must_use]
    pub fn res(&self) -> &Integer {
        &self.res
    }

    /// The Bezout cofactor.
    #[must_use]
    pub fn rho(&self) -> &BigIntPolynomial {
        &self.rho
    }

    /// The modulus both parts are reduced by, or `None` if exact.
    #[must_use]
    pub fn modulus(&self) -> Option<&Integer> {
        self.modulus.as_ref()
    }

    /// Consumes the resultant, returning `(res, rho)`.
    #[must_use]
    pub fn into_parts(self) -> (Integer, BigIntPolynomial) {
        (self.res, self.rho)
    }

    /// Checks `rho * a = res (mod x^N - 1)`, modulo the resultant's
    /// modulus if it has one.
    ///
    /// # Errors
    ///
    /// [`PolyError::DimensionMismatch`] if `a` and `rho` differ in degree.
    pub fn verify(&self, a: &IntegerPolynomial) -> PolyResult<bool> {
        check_dimension(self.rho.dimension(), a.dimension())?;
        let mut product = BigIntPolynomial::from(a).mult_small(&self.rho)?;
        let mut res = self.res.clone();
        if let Some(m) = &self.modulus {
            product.modulo(m);
            res = res.rem_euclid(m);
        }

        let Some((constant, rest)) = product.coeffs().split_first() else {
            return Ok(res.is_zero());
        };
        Ok(*constant == res && rest.iter().all(Zero::is_zero))
    }

    /// Merges two modular resultants of the same element into one modulo
    /// the product of their moduli, by Chinese remaindering. Values are
    /// centered, so enough primes recover the exact resultant.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidModulus`] if either side is exact or the
    /// moduli are not coprime, and [`PolyError::DimensionMismatch`] if
    /// the cofactors differ in degree.
    pub fn combine(&self, other: &Self) -> PolyResult<Self> {
        let (Some(m1), Some(m2)) = (&self.modulus, &other.modulus) else {
            return Err(PolyError::invalid_modulus(
                Integer::zero(),
                "exact resultants cannot be combined",
            ));
        };
        check_dimension(self.rho.dimension(), other.rho.dimension())?;

        // s * m1 = 1 (mod m2)
        let (g, s, _) = m1.extended_gcd(m2);
        if !g.is_one() {
            return Err(PolyError::invalid_modulus(m2.clone(), "moduli are not coprime"));
        }
        let m = m1 * m2;
        let crt = |x1: &Integer, x2: &Integer| {
            let k = ((x2 - x1) * &s).rem_euclid(m2);
            (x1 + &(m1 * &k)).center(&m)
        };

        let res = crt(&self.res, &other.res);
        let rho = self
            .rho
            .coeffs()
            .iter()
            .zip(other.rho.coeffs())
            .map(|(x1, x2)| crt(x1, x2))
            .collect();
        Ok(Self::new(res, BigIntPolynomial::new(rho), Some(m)))
    }
}

impl IntegerPolynomial {
    /// Computes the exact resultant of this element with x^N - 1.
    ///
    /// The zero element yields a zero resultant and cofactor.
    #[must_use]
    pub fn resultant(&self) -> Resultant {
        let n = self.dimension();
        let zero = || Resultant::new(Integer::zero(), BigIntPolynomial::zeros(n), None);

        let mut b: Vec<Integer> = self.coeffs().iter().map(|&c| Integer::from(c)).collect();
        trim(&mut b);
        if b.is_empty() {
            return zero();
        }

        let mut a = vec![Integer::zero(); n + 1];
        a[0] = Integer::new(-1);
        a[n] = Integer::one();

        // va * self = a, vb * self = b (mod x^N - 1)
        let mut va = BigIntPolynomial::zeros(n);
        let mut vb = BigIntPolynomial::one(n);
        let mut g = Integer::one();
        let mut h = Integer::one();
        let mut negate = false;

        while b.len() > 1 {
            let (da, db) = (a.len() - 1, b.len() - 1);
            if da % 2 == 1 && db % 2 == 1 {
                negate = !negate;
            }
            let delta = da - db;
            let lc = b[db].clone();

            // pseudo-remainder: lc^(delta + 1) * a - q * b
            let mut r = std::mem::take(&mut a);
            let mut vr = std::mem::replace(&mut va, BigIntPolynomial::zeros(0));
            for k in (0..=delta).rev() {
                let coef = r[db + k].clone();
                for x in &mut r {
                    *x *= &lc;
                }
                vr.scale(&lc);
                if coef.is_zero() {
                    continue;
                }
                for (i, bi) in b.iter().enumerate() {
                    r[i + k] -= &(&coef * bi);
                }
                let vr_coeffs = vr.coeffs_mut();
                for (i, vi) in vb.coeffs().iter().enumerate() {
                    vr_coeffs[(i + k) % n] -= &(&coef * vi);
                }
            }
            r.truncate(db);
            trim(&mut r);
            if r.is_empty() {
                trace!(n, degree = db, "resultant vanished");
                return zero();
            }

            let divisor = &g * &h.pow(delta as u32);
            for x in &mut r {
                *x = x.exact_div(&divisor);
            }
            vr.exact_div_scalar(&divisor);

            a = std::mem::replace(&mut b, r);
            va = std::mem::replace(&mut vb, vr);

            g = a[a.len() - 1].clone();
            if delta > 0 {
                h = g.pow(delta as u32).exact_div(&h.pow(delta as u32 - 1));
            }
        }

        // b is a non-zero constant
        let da = a.len() - 1;
        let b0 = &b[0];
        let hp = h.pow(da as u32 - 1);
        let mut res = b0.pow(da as u32).exact_div(&hp);
        let mut rho = vb;
        rho.scale(&b0.pow(da as u32 - 1));
        rho.exact_div_scalar(&hp);
        if negate {
            res = -res;
            rho.scale(&Integer::new(-1));
        }

        trace!(n, bits = res.bit_len(), "exact resultant");
        Resultant::new(res, rho, None)
    }

    /// Computes the resultant with x^N - 1 modulo the prime `p`.
    ///
    /// `res` and the coefficients of `rho` lie in `[0, p)`, and `res`
    /// equals the exact resultant reduced mod `p`.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidModulus`] if `p` is outside `[2, 2^31)`, or
    /// a leading coefficient is not invertible (so `p` is not prime).
    pub fn resultant_mod(&self, p: i64) -> PolyResult<Resultant> {
        let modulus = SmallModulus::new(p)
            .ok_or_else(|| PolyError::invalid_modulus(p, "must lie in [2, 2^31)"))?;
        let not_invertible = || PolyError::invalid_modulus(p, "leading coefficient not invertible");

        let n = self.dimension();
        let zero = || {
            Resultant::new(
                Integer::zero(),
                BigIntPolynomial::zeros(n),
                Some(Integer::new(p)),
            )
        };

        let mut b: Vec<i64> = self
            .coeffs()
            .iter()
            .map(|&c| modulus.reduce(i64::from(c)))
            .collect();
        trim_mod(&mut b);
        if b.is_empty() {
            return Ok(zero());
        }

        let mut a = vec![0i64; n + 1];
        a[0] = modulus.neg(1);
        a[n] = 1;
        let mut va = vec![0i64; n];
        let mut vb = vec![0i64; n];
        vb[0] = 1;
        let mut acc = 1i64;

        while b.len() > 1 {
            let (da, db) = (a.len() - 1, b.len() - 1);
            let lc_inv = modulus.inv(b[db]).ok_or_else(not_invertible)?;

            let mut r = std::mem::take(&mut a);
            let mut vr = std::mem::take(&mut va);
            while r.len() > db {
                let shift = r.len() - 1 - db;
                let c = modulus.mul(r[r.len() - 1], lc_inv);
                for (i, &bi) in b.iter().enumerate() {
                    r[i + shift] = modulus.sub(r[i + shift], modulus.mul(c, bi));
                }
                for (i, &vi) in vb.iter().enumerate() {
                    let j = (i + shift) % n;
                    vr[j] = modulus.sub(vr[j], modulus.mul(c, vi));
                }
                trim_mod(&mut r);
            }
            if r.is_empty() {
                trace!(n, p, degree = db, "modular resultant vanished");
                return Ok(zero());
            }

            // Res(a, b) = (-1)^(da db) lc(b)^(da - dr) Res(b, r)
            let dr = r.len() - 1;
            acc = modulus.mul(acc, modulus.pow(b[db], (da - dr) as u64));
            if da % 2 == 1 && db % 2 == 1 {
                acc = modulus.neg(acc);
            }

            a = std::mem::replace(&mut b, r);
            va = std::mem::replace(&mut vb, vr);
        }

        let da = a.len() - 1;
        let b0 = b[0];
        let res = modulus.mul(acc, modulus.pow(b0, da as u64));
        let scale = modulus.mul(res, modulus.inv(b0).ok_or_else(not_invertible)?);
        let rho = vb
            .iter()
            .map(|&x| Integer::new(modulus.mul(x, scale)))
            .collect();

        trace!(n, p, res, "modular resultant");
        Ok(Resultant::new(
            Integer::new(res),
            BigIntPolynomial::new(rho),
            Some(Integer::new(p)),
        ))
    }
}

fn trim(v: &mut Vec<Integer>) {
    while v.last().is_some_and(Zero::is_zero) {
        v.pop();
    }
}

fn trim_mod(v: &mut Vec<i64>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}
