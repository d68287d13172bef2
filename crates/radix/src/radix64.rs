use crate::{to_radix, Radix};

/// Base 64 with digits `0-9`, `a-z`, `A-Z`, `-`, `_`.
#[derive(Debug, Clone, Copy)]
pub struct Radix64;

impl Radix for Radix64 {
    const RADIX: u64 = 64;

    #[inline]
    fn digit(value: u8) -> char {
        match value {
            0..=9 => char::from(b'0' + value),
            10..=35 => char::from(b'a' + value - 10),
            36..=61 => char::from(b'A' + value - 36),
            62 => '-',
            _ => '_',
        }
    }
}

/// Converts an integer to its URL-safe base-64 positional representation.
///
/// # Example
///
/// ```
/// use basen_radix::to_radix64;
///
/// assert_eq!(to_radix64(0), "0");
/// assert_eq!(to_radix64(63), "_");
/// assert_eq!(to_radix64(4096), "100");
/// ```
pub fn to_radix64(n: u64) -> String {
    to_radix::<Radix64>(n)
}
