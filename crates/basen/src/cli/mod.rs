//! Logic behind the `basen` command-line tool.
//!
//! ```text
//! basen [--url-safe] encode <payload>
//! basen [--url-safe] decode <payload>
//! ```
//!
//! An unrecognized mode or a missing payload produces no output.

use basen_base64::{from_base64, to_base64, Base64Error};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error(transparent)]
    Base64(#[from] Base64Error),
}

// ── Modes ─────────────────────────────────────────────────────────────────

/// What to do with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Parses a mode token. Matching is exact: `Encode` is not a mode.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "encode" => Some(Mode::Encode),
            "decode" => Some(Mode::Decode),
            _ => None,
        }
    }

    /// Applies the mode to `payload`.
    pub fn apply(self, payload: &str, url_safe: bool) -> Result<String, CliError> {
        match self {
            Mode::Encode => Ok(to_base64(payload, url_safe)),
            Mode::Decode => Ok(from_base64(payload, url_safe)?),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────

/// Runs one invocation.
///
/// Returns `Ok(None)` when there is nothing to print: the mode is missing or
/// unknown, or the payload is missing.
pub fn run(
    mode: Option<&str>,
    payload: Option<&str>,
    url_safe: bool,
) -> Result<Option<String>, CliError> {
    let Some(mode) = mode.and_then(Mode::from_token) else {
        tracing::debug!(?mode, "no recognized mode, nothing to do");
        return Ok(None);
    };
    let Some(payload) = payload else {
        tracing::debug!(?mode, "missing payload, nothing to do");
        return Ok(None);
    };

    tracing::debug!(?mode, url_safe, length = payload.len(), "converting payload");
    mode.apply(payload, url_safe).map(Some)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        let out = run(Some("encode"), Some("Man"), false).unwrap();
        assert_eq!(out.as_deref(), Some("TWFu"));
    }

    #[test]
    fn decode() {
        let out = run(Some("decode"), Some("TWFu"), false).unwrap();
        assert_eq!(out.as_deref(), Some("Man"));
    }

    #[test]
    fn url_safe_round_trip() {
        let encoded = run(Some("encode"), Some("\u{fb}\u{ff}"), true).unwrap().unwrap();
        assert_eq!(encoded, "-_8*");
        let decoded = run(Some("decode"), Some(&encoded), true).unwrap();
        assert_eq!(decoded.as_deref(), Some("\u{fb}\u{ff}"));
    }

    #[test]
    fn unknown_mode_prints_nothing() {
        assert_eq!(run(Some("frobnicate"), Some("Man"), false), Ok(None));
        assert_eq!(run(Some("ENCODE"), Some("Man"), false), Ok(None));
        assert_eq!(run(None, None, false), Ok(None));
    }

    #[test]
    fn missing_payload_prints_nothing() {
        assert_eq!(run(Some("encode"), None, false), Ok(None));
        assert_eq!(run(Some("decode"), None, false), Ok(None));
    }

    #[test]
    fn empty_payload_is_still_a_payload() {
        assert_eq!(run(Some("encode"), Some(""), false), Ok(Some(String::new())));
    }

    #[test]
    fn decode_error() {
        let err = run(Some("decode"), Some("!"), false).unwrap_err();
        assert_eq!(err, CliError::Base64(Base64Error::InvalidCharacter('!')));
        assert_eq!(err.to_string(), "Invalid Character \"!\"");
    }
}
