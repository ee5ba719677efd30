//! MSB-first bit streams for the packed codecs.

/// Appends bitfields to a byte buffer, most significant bit first.
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Writes the low `width` bits of `value`.
    pub(crate) fn write(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        for bit in (0..width).rev() {
            let offset = self.bit_len % 8;
            if offset == 0 {
                self.bytes.push(0);
            }
            if (value >> bit) & 1 == 1 {
                if let Some(last) = self.bytes.last_mut() {
                    *last |= 0x80 >> offset;
                }
            }
            self.bit_len += 1;
        }
    }

    /// Returns the buffer; unused trailing bits are zero.
    pub(crate) fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads bitfields from a byte slice, most significant bit first.
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Reads `width` bits, or `None` if the buffer is exhausted.
    pub(crate) fn read(&mut self, width: u32) -> Option<u32> {
        debug_assert!(width <= 32);
        if self.pos + width as usize > self.bytes.len() * 8 {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..width {
            let byte = self.bytes[self.pos / 8];
            let bit = (byte >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            self.pos += 1;
        }
        Some(value)
    }
}
