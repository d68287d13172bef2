use crate::{to_radix, Radix};

/// Base 94 over printable ASCII: digit `d` is the character `d + 33`.
#[derive(Debug, Clone, Copy)]
pub struct Radix94;

impl Radix for Radix94 {
    const RADIX: u64 = 94;

    #[inline]
    fn digit(value: u8) -> char {
        char::from(value + 33)
    }
}

/// Converts an integer to its base-94 positional representation.
///
/// The digit zero is `!`, except that zero itself is written `"0"`.
///
/// # Example
///
/// ```
/// use basen_radix::to_radix94;
///
/// assert_eq!(to_radix94(0), "0");
/// assert_eq!(to_radix94(1), "\"");
/// assert_eq!(to_radix94(94), "\"!");
/// ```
pub fn to_radix94(n: u64) -> String {
    to_radix::<Radix94>(n)
}
