//! basen — text base64 encoding and positional base-N numerals.
//!
//! Re-exports the codec from `basen-base64` and the numeric converters from
//! `basen-radix`, and hosts the logic behind the `basen` command-line tool.

pub mod cli;
pub mod logging;

use std::fmt::Display;

pub use basen_base64::{
    decode_sextet, encode_sextet, from_base64, from_base64_url, to_base64, to_base64_url,
    Base64Error, Octets, Sextets, Symbol,
};
pub use basen_radix::{to_radix, to_radix64, to_radix94, Radix, Radix64, Radix94};

/// Encodes the textual representation of any displayable value.
///
/// # Example
///
/// ```
/// assert_eq!(basen::encode_display(&1234, false), "MTIzNA==");
/// ```
pub fn encode_display(value: &impl Display, url_safe: bool) -> String {
    to_base64(&value.to_string(), url_safe)
}
