//! Reassembles bytes from base64 characters.

use std::str::Chars;

use crate::alphabet::{decode_sextet, Symbol};
use crate::bits::BitBuffer;
use crate::Base64Error;

/// Iterator over the bytes encoded by a base64 text.
///
/// Decoding stops at the first padding character; whatever follows it is
/// never inspected. Trailing bits that do not fill a whole byte are dropped.
/// An invalid character yields a single error and ends the iteration.
///
/// # Example
///
/// ```
/// use basen_base64::Octets;
///
/// let bytes: Result<Vec<u8>, _> = Octets::new("TWFu", false).collect();
/// assert_eq!(bytes.unwrap(), b"Man");
/// ```
#[derive(Debug, Clone)]
pub struct Octets<'a> {
    chars: Chars<'a>,
    url_safe: bool,
    bits: BitBuffer,
    done: bool,
}

impl<'a> Octets<'a> {
    pub fn new(text: &'a str, url_safe: bool) -> Self {
        Self {
            chars: text.chars(),
            url_safe,
            bits: BitBuffer::new(),
            done: false,
        }
    }
}

impl Iterator for Octets<'_> {
    type Item = Result<u8, Base64Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(octet) = self.bits.take(8) {
                return Some(Ok(octet as u8));
            }
            if self.done {
                return None;
            }
            let Some(c) = self.chars.next() else {
                self.done = true;
                continue;
            };
            match decode_sextet(c, self.url_safe) {
                Ok(Symbol::Value(sextet)) => self.bits.push(sextet as u32, 6),
                Ok(Symbol::Pad) => {
                    tracing::trace!(
                        remaining = self.chars.as_str().len(),
                        "padding reached, ignoring the remaining input"
                    );
                    self.done = true;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
