//! Ranking and filtering of scored postings: drop near-zero matches, sort
//! descending, cap the result size.

use crate::models::job::{JobPosting, RecommendedJob};
use crate::recommend::engine::RecommendPolicy;

/// Produces the final recommendation list from `(posting, score)` pairs:
/// entries scoring at or below the floor are discarded, the rest are sorted
/// by score descending and truncated to the cap. The sort is stable, so
/// equal scores keep their corpus order across runs.
pub fn rank(scored: Vec<(JobPosting, f64)>, policy: &RecommendPolicy) -> Vec<RecommendedJob> {
    let mut kept: Vec<(JobPosting, f64)> = scored
        .into_iter()
        .filter(|(_, score)| *score > policy.score_floor)
        .collect();

    kept.sort_by(|a, b| b.1.total_cmp(&a.1));
    kept.truncate(policy.result_cap);

    kept.into_iter()
        .map(|(job, score)| RecommendedJob {
            job,
            similarity_score: score,
        })
        .collect()
}
