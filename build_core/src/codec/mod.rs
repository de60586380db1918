//! Build template chat-code codec
//!
//! A chat code is `[&<base64>]` wrapping a binary payload:
//! - byte 0: link type marker (`0x0D` for build templates)
//! - byte 1: profession code
//! - 3 x (specialization id, packed trait byte)
//! - up to 10 little-endian u16 skill palette ids
//! - profession-specific trailing bytes

mod decode;
mod encode;
mod template;

pub use decode::{decode, decode_bytes};
pub use encode::encode;
pub use template::{DecodedBuildTemplate, TraitChoices};

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;

/// Link type marker for build templates
pub const BUILD_TEMPLATE_MARKER: u8 = 0x0D;

/// Number of specialization slots in a template
pub const SPECIALIZATION_SLOTS: usize = 3;

/// Maximum number of skill palette ids in a template
pub const MAX_SKILL_IDS: usize = 10;

/// Marker plus profession byte
pub const MIN_PAYLOAD_LEN: usize = 2;

/// Standard alphabet, padding accepted but not required
pub(crate) const CHAT_CODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Chat-code decoding error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Chat code is empty")]
    Empty,
    #[error("Chat code is not valid base64: {0}")]
    InvalidBase64(String),
    #[error("Chat code payload too short: {len} bytes (need at least 2)")]
    TooShort { len: usize },
    #[error("Unsupported chat code type 0x{marker:02X} (expected build template 0x0D)")]
    UnsupportedType { marker: u8 },
}

/// Strip an optional `[&...]` wrapper and surrounding whitespace
pub(crate) fn strip_wrapper(code: &str) -> &str {
    let trimmed = code.trim();
    let inner = trimmed.strip_prefix("[&").unwrap_or(trimmed);
    inner.strip_suffix(']').unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_wrapper() {
        assert_eq!(strip_wrapper("[&DQQ=]"), "DQQ=");
        assert_eq!(strip_wrapper("  [&DQQ=]\n"), "DQQ=");
        assert_eq!(strip_wrapper("DQQ="), "DQQ=");
        assert_eq!(strip_wrapper("[&]"), "");
    }

    #[test]
    fn test_error_messages() {
        let err = DecodeError::UnsupportedType { marker: 0x02 };
        assert!(err.to_string().contains("0x02"));

        let err = DecodeError::TooShort { len: 1 };
        assert!(err.to_string().contains("1 bytes"));
    }
}
