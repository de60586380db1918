//! Structural properties of the chat-code decoder

use base64::{engine::general_purpose::STANDARD, Engine};
use build_core::codec::{decode, encode, DecodeError, DecodedBuildTemplate, TraitChoices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_build_template_payload_decodes(tail in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut bytes = vec![0x0D];
        bytes.extend_from_slice(&tail);
        let code = format!("[&{}]", STANDARD.encode(&bytes));

        let template = decode(&code).unwrap();
        prop_assert_eq!(template.profession_code, tail[0]);
        prop_assert_eq!(template.specialization_ids.len(), 3);
        prop_assert_eq!(template.trait_choices.len(), 3);
        prop_assert!(template.skill_palette_ids.len() <= 10);
        for traits in template.trait_choices {
            prop_assert!(traits.0.iter().all(|c| *c <= 3));
        }
    }

    #[test]
    fn other_markers_rejected(marker in any::<u8>(), tail in prop::collection::vec(any::<u8>(), 1..32)) {
        prop_assume!(marker != 0x0D);
        let mut bytes = vec![marker];
        bytes.extend_from_slice(&tail);

        let result = decode(&STANDARD.encode(&bytes));
        prop_assert_eq!(result, Err(DecodeError::UnsupportedType { marker }));
    }

    #[test]
    fn encoded_templates_decode_to_themselves(
        profession in 1u8..=9,
        specs in prop::array::uniform3(any::<u8>()),
        traits in prop::array::uniform3(prop::array::uniform3(0u8..=3)),
        skills in prop::collection::vec(any::<u16>(), 0..=10),
    ) {
        let template = DecodedBuildTemplate {
            profession_code: profession,
            specialization_ids: specs,
            trait_choices: traits.map(TraitChoices),
            skill_palette_ids: skills,
            profession_payload: Vec::new(),
        };

        prop_assert_eq!(decode(&encode(&template)).unwrap(), template);
    }
}
