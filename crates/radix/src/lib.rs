//! One-way positional numeral conversions for unsigned integers.
//!
//! - [`to_radix64`] — URL-safe digits `0-9a-zA-Z-_`
//! - [`to_radix94`] — printable ASCII `!` through `~`
//!
//! These are plain positional numerals and are unrelated to base64 *encoding*
//! of text: the digit order differs and there is no padding.
//!
//! # Example
//!
//! ```
//! use basen_radix::{to_radix64, to_radix94};
//!
//! assert_eq!(to_radix64(64), "10");
//! assert_eq!(to_radix94(93), "~");
//! ```

mod radix64;
mod radix94;

pub use radix64::{to_radix64, Radix64};
pub use radix94::{to_radix94, Radix94};

/// A positional numeral system.
pub trait Radix {
    /// Number of distinct digits.
    const RADIX: u64;

    /// Character for a digit in `0..RADIX`.
    fn digit(value: u8) -> char;
}

/// Writes `n` in the numeral system `R`, most-significant digit first.
///
/// Zero is always written as `"0"`.
pub fn to_radix<R: Radix>(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(R::digit((n % R::RADIX) as u8));
        n /= R::RADIX;
    }
    digits.iter().rev().collect()
}
