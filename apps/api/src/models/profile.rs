use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One declared skill from the profile service. Only the name participates
/// in matching; level and any extra fields are preserved but never read by
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(alias = "skill")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            extra: Map::new(),
        }
    }
}

/// A user's declared skills, split by source the way the profile service
/// stores them. The engine merges both lists into one flat token set; the
/// hard/soft distinction does not survive into the similarity computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSkillProfile {
    #[serde(default, alias = "hardSkills")]
    pub hard_skills: Vec<SkillEntry>,
    #[serde(default, alias = "softSkills")]
    pub soft_skills: Vec<SkillEntry>,
}

impl UserSkillProfile {
    /// All declared skill names, hard and soft merged, raw (pre-normalization).
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.hard_skills
            .iter()
            .chain(self.soft_skills.iter())
            .map(|entry| entry.name.as_str())
    }
}
