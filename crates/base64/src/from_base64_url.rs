//! URL-safe base64 decoding function.

use crate::{from_base64, Base64Error};

/// Decodes a URL-safe base64 text. See [`from_base64`].
///
/// # Example
///
/// ```
/// use basen_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ*").unwrap(), "hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<String, Base64Error> {
    from_base64(encoded, true)
}
