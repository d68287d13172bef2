//! URL-safe base64 encoding function.

use crate::to_base64;

/// Encodes a text to URL-safe base64.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and pads with `*`.
///
/// # Example
///
/// ```
/// use basen_base64::to_base64_url;
///
/// assert_eq!(to_base64_url("hello world"), "aGVsbG8gd29ybGQ*");
/// ```
pub fn to_base64_url(text: &str) -> String {
    to_base64(text, true)
}
