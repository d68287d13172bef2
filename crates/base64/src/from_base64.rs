//! Base64 decoding to text.

use crate::octets::Octets;
use crate::Base64Error;

/// Decodes a base64 text.
///
/// Each decoded byte becomes the character with that code point. Decoding
/// stops at the first padding character (`=` standard, `*` URL-safe) and
/// anything after it is ignored.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidCharacter`] on the first character that is
/// neither in the active alphabet nor its padding character.
///
/// # Example
///
/// ```
/// use basen_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=", false).unwrap(), "hello world");
/// assert!(from_base64("aGVsbG8=", true).is_err());
/// ```
pub fn from_base64(encoded: &str, url_safe: bool) -> Result<String, Base64Error> {
    Octets::new(encoded, url_safe)
        .map(|octet| octet.map(char::from))
        .collect()
}
