//! Chat code -> DecodedBuildTemplate

use super::{
    strip_wrapper, DecodeError, DecodedBuildTemplate, TraitChoices, BUILD_TEMPLATE_MARKER,
    CHAT_CODE_ENGINE, MAX_SKILL_IDS, MIN_PAYLOAD_LEN, SPECIALIZATION_SLOTS,
};
use base64::Engine;

/// Decode a build template chat code.
///
/// Accepts the code with or without its `[&...]` wrapper. Short payloads are
/// tolerated past the profession byte: missing specialization slots are
/// zero-filled and the skill palette is simply shorter.
pub fn decode(code: &str) -> Result<DecodedBuildTemplate, DecodeError> {
    let body = strip_wrapper(code);
    if body.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = CHAT_CODE_ENGINE
        .decode(body)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;

    let template = decode_bytes(&bytes)?;

    log::debug!(
        "Decoded build template: profession={} specs={:?} traits={:?} skills={:?} payload={}B",
        template.profession_code,
        template.specialization_ids,
        template.trait_choices,
        template.skill_palette_ids,
        template.profession_payload.len()
    );

    Ok(template)
}

/// Decode an already base64-decoded payload
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedBuildTemplate, DecodeError> {
    if bytes.len() < MIN_PAYLOAD_LEN {
        return Err(DecodeError::TooShort { len: bytes.len() });
    }
    if bytes[0] != BUILD_TEMPLATE_MARKER {
        return Err(DecodeError::UnsupportedType { marker: bytes[0] });
    }

    let mut template = DecodedBuildTemplate::new(bytes[1]);
    let mut rest = &bytes[MIN_PAYLOAD_LEN..];

    // Specialization records; a truncated record ends the payload
    for slot in 0..SPECIALIZATION_SLOTS {
        match rest {
            [spec_id, trait_byte, tail @ ..] => {
                template.specialization_ids[slot] = *spec_id;
                template.trait_choices[slot] = TraitChoices::from_byte(*trait_byte);
                rest = tail;
            }
            _ => {
                rest = &[];
                break;
            }
        }
    }

    while template.skill_palette_ids.len() < MAX_SKILL_IDS {
        match rest {
            [low, high, tail @ ..] => {
                template
                    .skill_palette_ids
                    .push(u16::from(*low) | (u16::from(*high) << 8));
                rest = tail;
            }
            _ => {
                rest = &[];
                break;
            }
        }
    }

    template.profession_payload = rest.to_vec();

    Ok(template)
}
