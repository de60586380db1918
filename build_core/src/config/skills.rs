//! Rotation skill list loading

use super::ConfigError;
use crate::rotation::RotationSkill;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for a rotation's skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(rename = "skills")]
    pub skills: Vec<RotationSkill>,
}

impl RotationConfig {
    fn validate(self) -> Result<Vec<RotationSkill>, ConfigError> {
        for skill in &self.skills {
            skill
                .validate()
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        Ok(self.skills)
    }
}

/// Load rotation skills from a TOML file, keeping file order
pub fn load_rotation_skills(path: &Path) -> Result<Vec<RotationSkill>, ConfigError> {
    let config: RotationConfig = super::load_toml(path)?;
    config.validate()
}

/// Load rotation skills from a TOML string, keeping file order
pub fn parse_rotation_skills(content: &str) -> Result<Vec<RotationSkill>, ConfigError> {
    let config: RotationConfig = super::parse_toml(content)?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_load_skills_from_file() {
        let skills = load_rotation_skills(&fixture("guardian_rotation.toml")).unwrap();
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Spear of Justice", "Symbol of Blades", "Litany of Wrath", "Bow of Truth"]
        );
        assert!((skills[2].base_heal - 1000.0).abs() < f64::EPSILON);
        assert_eq!(skills[3].priority, 9);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_rotation_skills(&fixture("does_not_exist.toml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_parse_skills() {
        let toml = r#"
[[skills]]
name = "Symbol of Wrath"
damage_coefficient = 1.5
cast_time = 0.75
cooldown = 6.0
priority = 0

[[skills]]
name = "Empower"
heal_coefficient = 0.2
base_heal = 720
cast_time = 2.5
cooldown = 12.0
priority = 1

[[skills]]
name = "Auto Attack"
damage_coefficient = 0.8
cast_time = 1.0
priority = 9
"#;

        let skills = parse_rotation_skills(toml).unwrap();
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].name, "Symbol of Wrath");
        assert!((skills[1].base_heal - 720.0).abs() < f64::EPSILON);
        assert!((skills[1].damage_coefficient - 0.0).abs() < f64::EPSILON);
        assert!((skills[2].cooldown - 0.0).abs() < f64::EPSILON);
        assert_eq!(skills[2].priority, 9);
    }

    #[test]
    fn test_missing_cast_time() {
        let toml = r#"
[[skills]]
name = "Broken"
damage_coefficient = 1.0
"#;
        assert!(matches!(
            parse_rotation_skills(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_skill_values() {
        let toml = r#"
[[skills]]
name = "Broken"
cast_time = -1.0
"#;
        assert!(matches!(
            parse_rotation_skills(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
