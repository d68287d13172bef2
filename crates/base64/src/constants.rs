/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for lookups and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array.
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character of the standard alphabet.
pub const PAD: char = '=';

/// Padding character of the URL-safe alphabet.
pub const PAD_URL: char = '*';

/// Returns the padding character for the selected alphabet.
#[inline]
pub const fn pad_char(url_safe: bool) -> char {
    if url_safe {
        PAD_URL
    } else {
        PAD
    }
}
