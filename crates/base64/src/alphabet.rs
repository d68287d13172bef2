//! Mapping between sextets and the characters of the two built-in alphabets.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD, PAD_URL};
use crate::Base64Error;

/// A decoded input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A 6-bit value in `0..=63`.
    Value(u8),
    /// The padding character of the active alphabet.
    Pad,
}

/// Maps a sextet to its character.
///
/// Only the low 6 bits of `value` are used.
///
/// # Example
///
/// ```
/// use basen_base64::encode_sextet;
///
/// assert_eq!(encode_sextet(0, false), 'A');
/// assert_eq!(encode_sextet(62, false), '+');
/// assert_eq!(encode_sextet(62, true), '-');
/// ```
#[inline]
pub fn encode_sextet(value: u8, url_safe: bool) -> char {
    let table = if url_safe {
        ALPHABET_URL_BYTES
    } else {
        ALPHABET_BYTES
    };
    table[(value & 0b11_1111) as usize] as char
}

/// Maps a character back to its sextet.
///
/// `-` is read as 62 in both modes. `+`, `/` and `=` belong to the standard
/// alphabet only, `_` and `*` to the URL-safe one.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidCharacter`] for characters outside the
/// active alphabet that are not its padding character.
///
/// # Example
///
/// ```
/// use basen_base64::{decode_sextet, Base64Error, Symbol};
///
/// assert_eq!(decode_sextet('/', false), Ok(Symbol::Value(63)));
/// assert_eq!(decode_sextet('*', true), Ok(Symbol::Pad));
/// assert_eq!(decode_sextet('/', true), Err(Base64Error::InvalidCharacter('/')));
/// ```
pub fn decode_sextet(c: char, url_safe: bool) -> Result<Symbol, Base64Error> {
    let symbol = match c {
        'A'..='Z' => Symbol::Value(c as u8 - b'A'),
        'a'..='z' => Symbol::Value(c as u8 - b'a' + 26),
        '0'..='9' => Symbol::Value(c as u8 - b'0' + 52),
        '-' => Symbol::Value(62),
        '+' if !url_safe => Symbol::Value(62),
        '/' if !url_safe => Symbol::Value(63),
        '_' if url_safe => Symbol::Value(63),
        PAD if !url_safe => Symbol::Pad,
        PAD_URL if url_safe => Symbol::Pad,
        _ => {
            tracing::debug!(character = %c, url_safe, "rejected base64 character");
            return Err(Base64Error::InvalidCharacter(c));
        }
    };
    Ok(symbol)
}
