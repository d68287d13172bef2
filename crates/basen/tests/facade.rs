//! Tests for the public surface re-exported by `basen`.

use basen::{from_base64, to_base64, to_radix64, to_radix94, Base64Error};
use proptest::prelude::*;

#[test]
fn concrete_vectors() {
    assert_eq!(to_base64("Man", false), "TWFu");
    assert_eq!(to_base64("", false), "");
    assert_eq!(from_base64("QQ==", false).unwrap(), "A");
    assert_eq!(from_base64("QQ==XYZ", false).unwrap(), "A");
    assert_eq!(to_radix64(0), "0");
    assert_eq!(to_radix64(64), "10");
    assert_eq!(to_radix94(0), "0");
}

#[test]
fn mode_sensitivity() {
    // '+' is standard only
    assert!(from_base64("+AAA", false).is_ok());
    assert_eq!(
        from_base64("+AAA", true),
        Err(Base64Error::InvalidCharacter('+'))
    );
    // '_' is URL-safe only
    assert!(from_base64("_AAA", true).is_ok());
    assert_eq!(
        from_base64("_AAA", false),
        Err(Base64Error::InvalidCharacter('_'))
    );
    // '-' is accepted either way
    assert_eq!(from_base64("-AAA", false), from_base64("-AAA", true));
}

#[test]
fn error_carries_the_character() {
    match from_base64("TW!u", false) {
        Err(Base64Error::InvalidCharacter(c)) => assert_eq!(c, '!'),
        other => panic!("expected an error, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn round_trip(text in "[\\x00-\\x7f]{0,48}", url_safe in any::<bool>()) {
        let encoded = to_base64(&text, url_safe);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(from_base64(&encoded, url_safe).unwrap(), text);
    }
}
