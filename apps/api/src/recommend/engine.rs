//! The recommendation pipeline: vocabulary → encode → score → rank.
//!
//! Pure, synchronous, CPU-only. Every invocation builds its own vocabulary
//! and vectors from its inputs, so concurrent requests never share state.

use crate::models::job::{JobPosting, RecommendedJob};
use crate::models::profile::UserSkillProfile;
use crate::recommend::ranking::rank;
use crate::recommend::similarity::cosine_similarity;
use crate::recommend::vector::encode;
use crate::recommend::vocabulary::{build_vocabulary, job_tokens, profile_tokens};

/// Minimum similarity a posting must exceed to count as a recommendation.
pub const DEFAULT_SCORE_FLOOR: f64 = 0.01;

/// Maximum number of recommendations returned.
pub const DEFAULT_RESULT_CAP: usize = 10;

/// Ranking policy. The defaults mirror long-observed product behavior;
/// both knobs are env-overridable via `Config`.
#[derive(Debug, Clone, Copy)]
pub struct RecommendPolicy {
    pub score_floor: f64,
    pub result_cap: usize,
}

impl Default for RecommendPolicy {
    fn default() -> Self {
        Self {
            score_floor: DEFAULT_SCORE_FLOOR,
            result_cap: DEFAULT_RESULT_CAP,
        }
    }
}

/// Ranks the job corpus against the user's skill profile.
///
/// A user with no usable skills yields an all-zero vector and therefore an
/// empty result; callers that want a dedicated "add skills first" message
/// should check for that condition before invoking (the HTTP layer does).
pub fn recommend(
    profile: &UserSkillProfile,
    jobs: Vec<JobPosting>,
    policy: &RecommendPolicy,
) -> Vec<RecommendedJob> {
    let vocabulary = build_vocabulary(profile, &jobs);
    let user_vector = encode(&vocabulary, &profile_tokens(profile));

    let scored: Vec<(JobPosting, f64)> = jobs
        .into_iter()
        .map(|job| {
            let job_vector = encode(&vocabulary, &job_tokens(&job));
            let score = cosine_similarity(&user_vector, &job_vector);
            (job, score)
        })
        .collect();

    rank(scored, policy)
}
