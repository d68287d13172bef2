//! Splits text into 6-bit groups.

use std::str::Chars;

use crate::bits::BitBuffer;

/// Iterator over the sextets of a text.
///
/// Every character contributes its code point as 8 bits, most-significant
/// first. The last group is zero-padded on the right to 6 bits.
///
/// Code points above U+00FF keep only their low 8 bits.
///
/// # Example
///
/// ```
/// use basen_base64::Sextets;
///
/// let sextets: Vec<u8> = Sextets::new("Man").collect();
/// assert_eq!(sextets, [19, 22, 5, 46]);
/// ```
#[derive(Debug, Clone)]
pub struct Sextets<'a> {
    chars: Chars<'a>,
    bits: BitBuffer,
}

impl<'a> Sextets<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            bits: BitBuffer::new(),
        }
    }

    /// Number of sextets produced for `chars` input characters.
    pub const fn count_for(chars: usize) -> usize {
        (chars * 8).div_ceil(6)
    }
}

impl Iterator for Sextets<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if let Some(sextet) = self.bits.take(6) {
                return Some(sextet as u8);
            }
            match self.chars.next() {
                Some(c) => self.bits.push(c as u32, 8),
                None => return self.bits.flush(6).map(|sextet| sextet as u8),
            }
        }
    }
}
