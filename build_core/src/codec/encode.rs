//! DecodedBuildTemplate -> chat code

use super::{DecodedBuildTemplate, BUILD_TEMPLATE_MARKER, CHAT_CODE_ENGINE, MAX_SKILL_IDS};
use base64::Engine;

/// Encode a template as a wrapped `[&...]` chat code.
///
/// Trait choices are masked to two bits. The profession payload is only
/// written when the skill palette is complete, otherwise its bytes would be
/// read back as skill ids.
pub fn encode(template: &DecodedBuildTemplate) -> String {
    let mut bytes = Vec::with_capacity(8 + MAX_SKILL_IDS * 2 + template.profession_payload.len());
    bytes.push(BUILD_TEMPLATE_MARKER);
    bytes.push(template.profession_code);

    for (spec_id, traits) in template
        .specialization_ids
        .iter()
        .zip(template.trait_choices.iter())
    {
        bytes.push(*spec_id);
        bytes.push(traits.to_byte());
    }

    for id in template.skill_palette_ids.iter().take(MAX_SKILL_IDS) {
        bytes.extend_from_slice(&id.to_le_bytes());
    }

    if template.skill_palette_ids.len() >= MAX_SKILL_IDS {
        bytes.extend_from_slice(&template.profession_payload);
    }

    format!("[&{}]", CHAT_CODE_ENGINE.encode(bytes))
}
