// Cosine similarity over sparse term-frequency vectors.
//
// Each frequency map is a vector over the union of both vocabularies, with a
// missing token counting as 0:
//
//   sim(A, B) = Σ a_i·b_i / sqrt(Σ a_i² · Σ b_i²)
//
// Counts are integers, so every sum is exact in f64 and the result is
// symmetric. A zero vector on either side gives 0.0.

use std::collections::HashSet;

use super::frequency::FrequencyMap;

/// Cosine similarity of two frequency maps, in [0, 1].
pub fn cosine_similarity(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let vocabulary: HashSet<&str> = a.tokens().chain(b.tokens()).collect();

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for token in vocabulary {
        let x = f64::from(a.get(token));
        let y = f64::from(b.get(token));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)
}
