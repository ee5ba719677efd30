//! Compact byte encodings of ring elements.
//!
//! Three formats, each decoded with the coefficient count (and modulus or
//! flag) that was used to encode:
//!
//! - **binary**: one `ceil(log2 q)`-bit field per coefficient, MSB first,
//!   no alignment between fields.
//! - **sves**: five ternary coefficients per byte, base 3.
//! - **tight**: three ternary coefficients per 5-bit field.
//!
//! Decoders validate the buffer length up front: too short is
//! [`PolyError::MalformedEncoding`], too long is
//! [`PolyError::DimensionMismatch`].

use crate::bits::{BitReader, BitWriter};
use crate::error::{check_dimension, Encoding, PolyError, PolyResult};
use crate::integer_poly::IntegerPolynomial;

const SVES_GROUP: usize = 5;
const TIGHT_GROUP: usize = 3;
const TIGHT_BITS: u32 = 5;

// 3^0 ..= 3^5
const POW3: [u32; 6] = [1, 3, 9, 27, 81, 243];

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

/// Bits per coefficient for modulus `q`: `ceil(log2 q)`.
///
/// # Panics
///
/// Panics if `q < 2`.
#[must_use]
pub fn bit_width(q: i32) -> u32 {
    assert!(q >= 2, "modulus must be at least 2");
    // q - 1 > 0 here
    32 - (q - 1).leading_zeros()
}

/// Encoded size of the binary format.
///
/// # Panics
///
/// Panics if `q < 2`.
#[must_use]
pub fn binary_len(n: usize, q: i32) -> usize {
    (n * bit_width(q) as usize).div_ceil(8)
}

/// Encoded size of the sves format.
#[must_use]
pub fn sves_len(n: usize) -> usize {
    n.div_ceil(SVES_GROUP)
}

/// Encoded size of the tight format.
#[must_use]
pub fn tight_len(n: usize) -> usize {
    tight_bits(n).div_ceil(8)
}

fn tight_bits(n: usize) -> usize {
    (n / TIGHT_GROUP) * TIGHT_BITS as usize + tail_bits(n % TIGHT_GROUP) as usize
}

// bits for a final group of r < 3 trits
fn tail_bits(r: usize) -> u32 {
    match r {
        0 => 0,
        1 => 2,
        _ => 4,
    }
}

fn check_len(format: Encoding, data: &[u8], expected: usize) -> PolyResult<()> {
    if data.len() < expected {
        return Err(PolyError::malformed(
            format,
            format!("need {expected} bytes, got {}", data.len()),
        ));
    }
    check_dimension(expected, data.len())
}

// ---------------------------------------------------------------------------
// Fixed-width binary
// ---------------------------------------------------------------------------

impl IntegerPolynomial {
    /// Packs each coefficient into `ceil(log2 q)` bits.
    ///
    /// Coefficients are expected in `[0, q)`; only their low bits are
    /// written, so a centered polynomial with `q` a power of two encodes
    /// the same as its canonical form.
    ///
    /// # Panics
    ///
    /// Panics if `q < 2`.
    #[must_use]
    pub fn to_binary(&self, q: i32) -> Vec<u8> {
        let width = bit_width(q);
        let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
        let mut w = BitWriter::with_capacity(self.dimension() * width as usize);
        for &c in self.coeffs() {
            // two's complement low bits
            w.write(c as u32 & mask, width);
        }
        w.finish()
    }

    /// Packs a polynomial with coefficients in `[0, 4)`, four per byte.
    ///
    /// Byte-for-byte identical to `to_binary(4)`.
    #[must_use]
    pub fn to_binary4(&self) -> Vec<u8> {
        self.coeffs()
            .chunks(4)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &c)| byte | (((c & 3) as u8) << (6 - 2 * i)))
            })
            .collect()
    }

    /// Inverse of [`to_binary`](Self::to_binary).
    ///
    /// # Errors
    ///
    /// [`PolyError::MalformedEncoding`] if `data` is too short and
    /// [`PolyError::DimensionMismatch`] if it is too long for `n`
    /// coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `q < 2`.
    pub fn from_binary(data: &[u8], n: usize, q: i32) -> PolyResult<Self> {
        let width = bit_width(q);
        check_len(Encoding::Binary, data, binary_len(n, q))?;

        let mut r = BitReader::new(data);
        let coeffs = (0..n)
            .map(|_| {
                r.read(width)
                    // the field is below q <= i32::MAX
                    .map(|v| v as i32)
                    .ok_or_else(|| PolyError::malformed(Encoding::Binary, "truncated field"))
            })
            .collect::<PolyResult<Vec<_>>>()?;
        Ok(Self::new(coeffs))
    }

    // -----------------------------------------------------------------------
    // Sves: 5 trits per byte
    // -----------------------------------------------------------------------

    /// Packs a ternary polynomial five coefficients per byte.
    ///
    /// Each byte is `sum(d_j * 3^j)` with `d_j = c_j + 1`, first coefficient
    /// least significant. A short final group is stored as-is when
    /// `pad_final_group` is false, or padded to five trits with zero
    /// coefficients when true.
    ///
    /// # Errors
    ///
    /// [`PolyError::NotTernary`] if a coefficient is outside {-1, 0, 1}.
    pub fn to_binary3_sves(&self, pad_final_group: bool) -> PolyResult<Vec<u8>> {
        self.check_ternary()?;
        Ok(self
            .coeffs()
            .chunks(SVES_GROUP)
            .map(|chunk| {
                let mut value = trits_to_value(chunk);
                if pad_final_group {
                    value += neutral_padding(chunk.len(), SVES_GROUP);
                }
                // value < 243
                value as u8
            })
            .collect())
    }

    /// Inverse of [`to_binary3_sves`](Self::to_binary3_sves).
    ///
    /// # Errors
    ///
    /// [`PolyError::MalformedEncoding`] for a short buffer, a byte of 243
    /// or more, a short final group out of range, or non-zero padding;
    /// [`PolyError::DimensionMismatch`] for a long buffer.
    pub fn from_binary3_sves(data: &[u8], n: usize, pad_final_group: bool) -> PolyResult<Self> {
        check_len(Encoding::Sves, data, sves_len(n))?;

        let mut coeffs = Vec::with_capacity(n);
        for (i, &byte) in data.iter().enumerate() {
            let trits = (n - i * SVES_GROUP).min(SVES_GROUP);
            let mut value = u32::from(byte);
            if value >= POW3[SVES_GROUP] {
                return Err(PolyError::malformed(
                    Encoding::Sves,
                    format!("byte {i} holds {value}, above 242"),
                ));
            }
            if trits < SVES_GROUP {
                let padding = value / POW3[trits];
                let expected = if pad_final_group {
                    neutral_padding(trits, SVES_GROUP) / POW3[trits]
                } else {
                    0
                };
                if padding != expected {
                    return Err(PolyError::malformed(
                        Encoding::Sves,
                        format!("final byte {i} has unexpected padding"),
                    ));
                }
                value %= POW3[trits];
            }
            push_trits(&mut coeffs, value, trits);
        }
        Ok(Self::new(coeffs))
    }

    // -----------------------------------------------------------------------
    // Tight: 3 trits per 5 bits
    // -----------------------------------------------------------------------

    /// Packs a ternary polynomial three coefficients per five bits.
    ///
    /// A group is `d_0 + 3 d_1 + 9 d_2` with `d_j = c_j + 1`. A final group
    /// of one trit takes two bits, of two trits four bits.
    ///
    /// # Errors
    ///
    /// [`PolyError::NotTernary`] if a coefficient is outside {-1, 0, 1}.
    pub fn to_binary3_tight(&self) -> PolyResult<Vec<u8>> {
        self.check_ternary()?;
        let mut w = BitWriter::with_capacity(tight_bits(self.dimension()));
        for chunk in self.coeffs().chunks(TIGHT_GROUP) {
            let width = if chunk.len() == TIGHT_GROUP {
                TIGHT_BITS
            } else {
                tail_bits(chunk.len())
            };
            w.write(trits_to_value(chunk), width);
        }
        Ok(w.finish())
    }

    /// Inverse of [`to_binary3_tight`](Self::to_binary3_tight).
    ///
    /// # Errors
    ///
    /// [`PolyError::MalformedEncoding`] for a short buffer or a group
    /// out of range; [`PolyError::DimensionMismatch`] for a long buffer.
    pub fn from_binary3_tight(data: &[u8], n: usize) -> PolyResult<Self> {
        check_len(Encoding::Tight, data, tight_len(n))?;

        let mut r = BitReader::new(data);
        let mut coeffs = Vec::with_capacity(n);
        while coeffs.len() < n {
            let trits = (n - coeffs.len()).min(TIGHT_GROUP);
            let width = if trits == TIGHT_GROUP {
                TIGHT_BITS
            } else {
                tail_bits(trits)
            };
            let value = r
                .read(width)
                .ok_or_else(|| PolyError::malformed(Encoding::Tight, "truncated group"))?;
            if value >= POW3[trits] {
                return Err(PolyError::malformed(
                    Encoding::Tight,
                    format!("group at coefficient {} holds {value}", coeffs.len()),
                ));
            }
            push_trits(&mut coeffs, value, trits);
        }
        Ok(Self::new(coeffs))
    }
}

fn trits_to_value(chunk: &[i32]) -> u32 {
    chunk
        .iter()
        .zip(POW3)
        // ternary was checked, so c + 1 is in 0..3
        .map(|(&c, p)| (c + 1) as u32 * p)
        .sum()
}

fn push_trits(coeffs: &mut Vec<i32>, mut value: u32, trits: usize) {
    for _ in 0..trits {
        // digit < 3
        coeffs.push((value % 3) as i32 - 1);
        value /= 3;
    }
}

// digit 1 (coefficient 0) in positions len..group
fn neutral_padding(len: usize, group: usize) -> u32 {
    POW3[len..group].iter().sum()
}
