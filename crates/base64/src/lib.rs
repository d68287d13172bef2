//! Base64 encoding and decoding of text.
//!
//! This crate provides a base64 codec over `&str` with support for:
//! - Standard base64, padded with `=`
//! - URL-safe base64 (`-` and `_`), padded with `*`
//!
//! Each character is treated as a single byte, so only code points
//! U+0000..=U+00FF survive a round trip.
//!
//! # Example
//!
//! ```
//! use basen_base64::{from_base64, to_base64};
//!
//! let encoded = to_base64("hello world", false);
//! let decoded = from_base64(&encoded, false).unwrap();
//! assert_eq!(decoded, "hello world");
//! ```

mod alphabet;
mod bits;
mod constants;
mod from_base64;
mod from_base64_url;
mod octets;
mod sextets;
mod to_base64;
mod to_base64_url;

pub use alphabet::{decode_sextet, encode_sextet, Symbol};
pub use constants::{
    pad_char, ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD, PAD_URL,
};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use octets::Octets;
pub use sextets::Sextets;
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains a character outside the active alphabet.
    #[error("Invalid Character \"{0}\"")]
    InvalidCharacter(char),
}
