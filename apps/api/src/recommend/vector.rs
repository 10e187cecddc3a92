//! Binary skill vectors over a shared vocabulary — membership indicators,
//! not frequencies.

use std::collections::HashSet;

/// Encodes one entity's token set against the vocabulary: position i is 1.0
/// iff `vocabulary[i]` is in the set. An empty token set encodes to an
/// all-zero vector of the full vocabulary length; an empty vocabulary
/// encodes everything to a zero-length vector.
pub fn encode(vocabulary: &[String], tokens: &HashSet<String>) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|entry| if tokens.contains(entry) { 1.0 } else { 0.0 })
        .collect()
}
