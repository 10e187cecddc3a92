pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/recommendations/preview",
            post(handlers::handle_preview),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::feeds::jobs::JobsFeed;
    use crate::feeds::skills::SkillsFeed;
    use crate::feeds::AccessToken;
    use crate::models::job::JobPosting;
    use crate::models::profile::UserSkillProfile;
    use crate::recommend::engine::RecommendPolicy;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    struct EmptyFeeds;

    #[async_trait]
    impl SkillsFeed for EmptyFeeds {
        async fn fetch_profile(
            &self,
            _token: &AccessToken,
            _user_id: Uuid,
        ) -> Result<UserSkillProfile, AppError> {
            Ok(UserSkillProfile::default())
        }
    }

    #[async_trait]
    impl JobsFeed for EmptyFeeds {
        async fn fetch_active_jobs(
            &self,
            _token: &AccessToken,
        ) -> Result<Vec<JobPosting>, AppError> {
            Ok(Vec::new())
        }
    }

    fn test_state() -> AppState {
        AppState {
            config: Config {
                profile_service_url: "http://profile.test".to_string(),
                jobs_service_url: "http://jobs.test".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                score_floor: 0.01,
                result_cap: 10,
            },
            skills_feed: Arc::new(EmptyFeeds),
            jobs_feed: Arc::new(EmptyFeeds),
            policy: RecommendPolicy::default(),
        }
    }

    #[tokio::test]
    async fn test_health_route_responds_ok() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_recommendations_without_token_is_401() {
        let response = build_router(test_state())
            .oneshot(
                Request::get(format!(
                    "/api/v1/recommendations?user_id={}",
                    Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_preview_route_accepts_inline_payload() {
        let body = serde_json::json!({
            "profile": {"hard_skills": [{"name": "rust"}]},
            "jobs": [{"id": "j1", "required_skills": ["rust"]}]
        });

        let response = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/recommendations/preview")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
