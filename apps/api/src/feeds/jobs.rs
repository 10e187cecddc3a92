//! Jobs feed — fetches the active-job corpus from the jobs service.
//! Parsing is permissive: a posting missing its required-skills list gets an
//! empty one, scalar non-string skill entries are coerced to strings, and
//! unrecognized display fields are carried through for the response.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::feeds::{coerce_string, AccessToken};
use crate::models::job::JobPosting;

#[async_trait]
pub trait JobsFeed: Send + Sync {
    async fn fetch_active_jobs(&self, token: &AccessToken) -> Result<Vec<JobPosting>, AppError>;
}

/// HTTP-backed jobs feed.
pub struct HttpJobsFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobsFeed {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl JobsFeed for HttpJobsFeed {
    async fn fetch_active_jobs(&self, token: &AccessToken) -> Result<Vec<JobPosting>, AppError> {
        let url = format!("{}/api/v1/jobs?status=active", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("jobs service unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "jobs service returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("jobs service sent invalid JSON: {e}")))?;

        let jobs = parse_jobs_payload(body);
        tracing::debug!(count = jobs.len(), "Fetched active job corpus");
        Ok(jobs)
    }
}

/// Accepts a bare array or an object wrapping it under `"jobs"`. Records
/// without a usable id are dropped; everything else is kept permissively.
pub fn parse_jobs_payload(payload: Value) -> Vec<JobPosting> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items.into_iter().filter_map(job_from_value).collect()
}

fn job_from_value(value: Value) -> Option<JobPosting> {
    let mut map = match value {
        Value::Object(map) => map,
        _ => return None,
    };

    let id = map.remove("id").as_ref().and_then(coerce_string)?;
    let title = take_string(&mut map, "title");
    let company = take_string(&mut map, "company");
    let location = take_string(&mut map, "location");
    let description = take_string(&mut map, "description");

    let required_skills = map
        .remove("required_skills")
        .or_else(|| map.remove("requiredSkills"))
        .map(skill_strings)
        .unwrap_or_default();

    Some(JobPosting {
        id,
        title,
        company,
        location,
        description,
        required_skills,
        extra: map,
    })
}

fn take_string(map: &mut serde_json::Map<String, Value>, key: &str) -> String {
    map.remove(key)
        .as_ref()
        .and_then(coerce_string)
        .unwrap_or_default()
}

fn skill_strings(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(coerce_string)
            .collect(),
        // A lone scalar where a list was expected still counts as one skill.
        other => coerce_string(&other).into_iter().collect(),
    }
}
