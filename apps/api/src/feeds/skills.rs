//! Skills feed — fetches a user's declared hard/soft skills from the
//! profile service and normalizes its historically duck-typed payloads
//! into a single `UserSkillProfile` shape before the engine sees them.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feeds::{coerce_string, AccessToken};
use crate::models::profile::{SkillEntry, UserSkillProfile};

#[async_trait]
pub trait SkillsFeed: Send + Sync {
    async fn fetch_profile(
        &self,
        token: &AccessToken,
        user_id: Uuid,
    ) -> Result<UserSkillProfile, AppError>;
}

/// HTTP-backed skills feed. One GET per skill category.
pub struct HttpSkillsFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSkillsFeed {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_skill_list(
        &self,
        token: &AccessToken,
        user_id: Uuid,
        category: &str,
    ) -> Result<Vec<SkillEntry>, AppError> {
        let url = format!(
            "{}/api/v1/users/{}/skills/{}",
            self.base_url, user_id, category
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("profile service unreachable: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("User {user_id} not found")));
        }
        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "profile service returned {} for {category} skills",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("profile service sent invalid JSON: {e}")))?;

        Ok(parse_skill_payload(&body))
    }
}

#[async_trait]
impl SkillsFeed for HttpSkillsFeed {
    async fn fetch_profile(
        &self,
        token: &AccessToken,
        user_id: Uuid,
    ) -> Result<UserSkillProfile, AppError> {
        let (hard_skills, soft_skills) = tokio::try_join!(
            self.fetch_skill_list(token, user_id, "hard"),
            self.fetch_skill_list(token, user_id, "soft"),
        )?;

        tracing::debug!(
            %user_id,
            hard = hard_skills.len(),
            soft = soft_skills.len(),
            "Fetched skill profile"
        );

        Ok(UserSkillProfile {
            hard_skills,
            soft_skills,
        })
    }
}

/// Normalizes the two payload shapes the profile service has shipped over
/// time: a bare array, or an object wrapping the array under `"skills"`.
/// Items may be plain strings or objects carrying a name field.
pub fn parse_skill_payload(payload: &Value) -> Vec<SkillEntry> {
    let items = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("skills") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items.iter().filter_map(skill_entry_from_value).collect()
}

fn skill_entry_from_value(value: &Value) -> Option<SkillEntry> {
    match value {
        Value::Object(map) => {
            let name = map
                .get("name")
                .or_else(|| map.get("skill"))
                .and_then(coerce_string)?;
            let level = map.get("level").and_then(coerce_string);
            let extra: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "name" | "skill" | "level"))
                .map(|(key, val)| (key.clone(), val.clone()))
                .collect();
            Some(SkillEntry { name, level, extra })
        }
        other => coerce_string(other).map(SkillEntry::named),
    }
}
