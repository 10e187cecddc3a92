use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One active job posting as served by the jobs service.
///
/// Only `id` and `required_skills` participate in matching; the display
/// fields and any extra upstream fields pass through to the response
/// unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Raw skill strings as declared upstream; duplicates, mixed case, and
    /// empty entries are all possible here. Normalization happens in the
    /// recommendation engine.
    #[serde(default, alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    /// Unrecognized upstream fields (salary range, posted-at timestamp, …)
    /// carried through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A job posting annotated with its similarity score, in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
}
