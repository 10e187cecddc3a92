//! Cosine similarity between two skill vectors.

/// Computes `dot(a, b) / (‖a‖·‖b‖)`.
///
/// If either vector has zero magnitude (no skills, or an empty vocabulary)
/// the similarity is defined as exactly 0.0 rather than NaN or an error.
/// Vectors built from the same vocabulary always share a length; should the
/// lengths ever differ anyway, the missing components count as zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
