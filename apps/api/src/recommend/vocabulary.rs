//! Skill vocabulary — the sorted, deduplicated union of every skill token
//! mentioned by the user or required by any posting. Rebuilt from scratch
//! for each recommendation request so nothing leaks across requests.

use std::collections::{BTreeSet, HashSet};

use crate::models::job::JobPosting;
use crate::models::profile::UserSkillProfile;

/// Normalizes one raw skill string: trim, lowercase. Tokens that normalize
/// to the empty string are unusable and yield `None`.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// The user's normalized token set, hard and soft skills merged.
pub fn profile_tokens(profile: &UserSkillProfile) -> HashSet<String> {
    profile
        .skill_names()
        .filter_map(normalize_token)
        .collect()
}

/// One posting's normalized required-skill token set.
pub fn job_tokens(job: &JobPosting) -> HashSet<String> {
    job.required_skills
        .iter()
        .filter_map(|skill| normalize_token(skill))
        .collect()
}

/// Builds the shared vocabulary: lexicographically sorted union of all
/// normalized tokens from the profile and every posting. Output is
/// identical in content and order for the same multiset of inputs,
/// regardless of job or skill ordering.
pub fn build_vocabulary(profile: &UserSkillProfile, jobs: &[JobPosting]) -> Vec<String> {
    let mut vocabulary: BTreeSet<String> =
        profile.skill_names().filter_map(normalize_token).collect();

    for job in jobs {
        for skill in &job.required_skills {
            if let Some(token) = normalize_token(skill) {
                vocabulary.insert(token);
            }
        }
    }

    vocabulary.into_iter().collect()
}
