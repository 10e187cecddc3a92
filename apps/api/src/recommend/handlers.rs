//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feeds::bearer_token;
use crate::models::job::{JobPosting, RecommendedJob};
use crate::models::profile::UserSkillProfile;
use crate::recommend::engine::recommend;
use crate::recommend::vocabulary::profile_tokens;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub user_id: Uuid,
}

/// Distinguishes "ranked matches" from "nothing to match against" so the UI
/// can prompt for skills instead of showing an empty no-matches state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Ok,
    NoSkills,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub status: RecommendationStatus,
    pub recommendations: Vec<RecommendedJob>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub profile: UserSkillProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/recommendations?user_id=…
///
/// Fetches the user's skill profile and the active-job corpus, then ranks
/// the corpus by skill-overlap similarity. The bearer token is forwarded to
/// both upstream services and never validated here.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let token = bearer_token(&headers)?;

    let (profile, jobs) = tokio::try_join!(
        state.skills_feed.fetch_profile(&token, query.user_id),
        state.jobs_feed.fetch_active_jobs(&token),
    )?;

    // A skill-less profile can only produce zero-scores; tell the UI to
    // prompt for skills rather than ranking anything.
    if profile_tokens(&profile).is_empty() {
        return Ok(Json(RecommendationsResponse {
            status: RecommendationStatus::NoSkills,
            recommendations: Vec::new(),
            generated_at: Utc::now(),
        }));
    }

    let recommendations = recommend(&profile, jobs, &state.policy);

    tracing::info!(
        user_id = %query.user_id,
        matches = recommendations.len(),
        "Ranked recommendations"
    );

    Ok(Json(RecommendationsResponse {
        status: RecommendationStatus::Ok,
        recommendations,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/recommendations/preview
///
/// Runs the ranking pipeline on an inline profile and job list, with no
/// upstream calls. Lets clients (and tests) exercise scoring end-to-end.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let status = if profile_tokens(&request.profile).is_empty() {
        RecommendationStatus::NoSkills
    } else {
        RecommendationStatus::Ok
    };

    let recommendations = match status {
        RecommendationStatus::Ok => recommend(&request.profile, request.jobs, &state.policy),
        RecommendationStatus::NoSkills => Vec::new(),
    };

    Ok(Json(RecommendationsResponse {
        status,
        recommendations,
        generated_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feeds::jobs::JobsFeed;
    use crate::feeds::skills::SkillsFeed;
    use crate::feeds::AccessToken;
    use crate::models::profile::SkillEntry;
    use crate::recommend::engine::RecommendPolicy;
    use async_trait::async_trait;
    use axum::http::header;
    use serde_json::json;
    use std::sync::Arc;

    struct StaticSkills(UserSkillProfile);

    #[async_trait]
    impl SkillsFeed for StaticSkills {
        async fn fetch_profile(
            &self,
            _token: &AccessToken,
            _user_id: Uuid,
        ) -> Result<UserSkillProfile, AppError> {
            Ok(self.0.clone())
        }
    }

    struct StaticJobs(Vec<JobPosting>);

    #[async_trait]
    impl JobsFeed for StaticJobs {
        async fn fetch_active_jobs(
            &self,
            _token: &AccessToken,
        ) -> Result<Vec<JobPosting>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingJobs;

    #[async_trait]
    impl JobsFeed for FailingJobs {
        async fn fetch_active_jobs(
            &self,
            _token: &AccessToken,
        ) -> Result<Vec<JobPosting>, AppError> {
            Err(AppError::Upstream("jobs service returned 503".to_string()))
        }
    }

    fn test_config() -> Config {
        Config {
            profile_service_url: "http://profile.test".to_string(),
            jobs_service_url: "http://jobs.test".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            score_floor: 0.01,
            result_cap: 10,
        }
    }

    fn state_with(profile: UserSkillProfile, jobs: Vec<JobPosting>) -> AppState {
        AppState {
            config: test_config(),
            skills_feed: Arc::new(StaticSkills(profile)),
            jobs_feed: Arc::new(StaticJobs(jobs)),
            policy: RecommendPolicy::default(),
        }
    }

    fn bearer_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer test-token".parse().unwrap());
        headers
    }

    fn profile(names: &[&str]) -> UserSkillProfile {
        UserSkillProfile {
            hard_skills: names.iter().map(|s| SkillEntry::named(*s)).collect(),
            soft_skills: Vec::new(),
        }
    }

    fn job(id: &str, skills: &[&str]) -> JobPosting {
        serde_json::from_value(json!({"id": id, "required_skills": skills})).unwrap()
    }

    #[tokio::test]
    async fn test_ranked_response_with_ok_status() {
        let state = state_with(
            profile(&["rust", "sql"]),
            vec![job("a", &["rust", "sql"]), job("b", &["cobol"])],
        );

        let Json(response) = handle_get_recommendations(
            State(state),
            bearer_headers(),
            Query(RecommendationsQuery {
                user_id: Uuid::new_v4(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, RecommendationStatus::Ok);
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].job.id, "a");
    }

    #[tokio::test]
    async fn test_skill_less_user_gets_no_skills_status() {
        let state = state_with(profile(&[]), vec![job("a", &["rust"])]);

        let Json(response) = handle_get_recommendations(
            State(state),
            bearer_headers(),
            Query(RecommendationsQuery {
                user_id: Uuid::new_v4(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, RecommendationStatus::NoSkills);
        assert!(response.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_blank_skills_also_count_as_no_skills() {
        // Entries that normalize to empty are unusable for matching.
        let state = state_with(profile(&["   ", ""]), vec![job("a", &["rust"])]);

        let Json(response) = handle_get_recommendations(
            State(state),
            bearer_headers(),
            Query(RecommendationsQuery {
                user_id: Uuid::new_v4(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, RecommendationStatus::NoSkills);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let state = state_with(profile(&["rust"]), vec![]);

        let result = handle_get_recommendations(
            State(state),
            HeaderMap::new(),
            Query(RecommendationsQuery {
                user_id: Uuid::new_v4(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let state = AppState {
            config: test_config(),
            skills_feed: Arc::new(StaticSkills(profile(&["rust"]))),
            jobs_feed: Arc::new(FailingJobs),
            policy: RecommendPolicy::default(),
        };

        let result = handle_get_recommendations(
            State(state),
            bearer_headers(),
            Query(RecommendationsQuery {
                user_id: Uuid::new_v4(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_preview_runs_without_feeds() {
        let state = state_with(profile(&[]), vec![]);

        let Json(response) = handle_preview(
            State(state),
            Json(PreviewRequest {
                profile: profile(&["ReactJS", "Communication"]),
                jobs: vec![
                    job("a", &["reactjs", "communication"]),
                    job("b", &["Node.js"]),
                ],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, RecommendationStatus::Ok);
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].job.id, "a");
        assert!((response.recommendations[0].similarity_score - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_preview_empty_profile_reports_no_skills() {
        let state = state_with(profile(&[]), vec![]);

        let Json(response) = handle_preview(
            State(state),
            Json(PreviewRequest {
                profile: UserSkillProfile::default(),
                jobs: vec![job("a", &["rust"])],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status, RecommendationStatus::NoSkills);
        assert!(response.recommendations.is_empty());
    }
}
