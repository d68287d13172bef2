//! Base64 encoding of text.

use crate::alphabet::encode_sextet;
use crate::constants::pad_char;
use crate::sextets::Sextets;

/// Encodes a text to base64.
///
/// Every character is taken as one byte (its code point), so only
/// U+0000..=U+00FF round-trip. The output is padded with `=` (standard) or
/// `*` (URL-safe) to a multiple of 4 characters.
///
/// # Example
///
/// ```
/// use basen_base64::to_base64;
///
/// assert_eq!(to_base64("hello world", false), "aGVsbG8gd29ybGQ=");
/// assert_eq!(to_base64("f", true), "Zg**");
/// ```
pub fn to_base64(text: &str, url_safe: bool) -> String {
    let length = Sextets::count_for(text.chars().count());
    let padding = (4 - length % 4) % 4;
    let mut out = String::with_capacity(length + padding);

    out.extend(Sextets::new(text).map(|sextet| encode_sextet(sextet, url_safe)));
    out.extend(std::iter::repeat_n(pad_char(url_safe), padding));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64("", false), "");
        assert_eq!(to_base64("", true), "");
    }

    #[test]
    fn test_man() {
        assert_eq!(to_base64("Man", false), "TWFu");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(to_base64("f", false), "Zg==");
        assert_eq!(to_base64("fo", false), "Zm8=");
        assert_eq!(to_base64("foo", false), "Zm9v");
        assert_eq!(to_base64("foob", false), "Zm9vYg==");
        assert_eq!(to_base64("fooba", false), "Zm9vYmE=");
        assert_eq!(to_base64("foobar", false), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_padding() {
        assert_eq!(to_base64("f", true), "Zg**");
        assert_eq!(to_base64("fo", true), "Zm8*");
    }

    #[test]
    fn test_alphabet_tail() {
        assert_eq!(to_base64("\u{fb}\u{ff}", false), "+/8=");
        assert_eq!(to_base64("\u{fb}\u{ff}", true), "-_8*");
    }
}
