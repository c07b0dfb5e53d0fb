//! Keyword overlap between the JD keyword list and the resume keyword list.

use std::collections::HashSet;

/// Outcome of matching JD keywords against resume keywords.
///
/// `matched` and `missing` partition the distinct JD keywords and both follow
/// the JD keyword order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub jd_count: usize,
    pub resume_count: usize,
    /// 0 – 100
    pub overlap_pct: f64,
}

fn dedup_preserving_order(keywords: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(String::as_str)
        .filter(|kw| seen.insert(*kw))
        .collect()
}

/// Classifies each distinct JD keyword as matched (present among resume
/// keywords) or missing.
pub fn match_keywords(jd_keywords: &[String], resume_keywords: &[String]) -> MatchResult {
    let jd_set = dedup_preserving_order(jd_keywords);
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) =
        jd_set.iter().partition(|kw| resume_set.contains(*kw));

    let overlap_pct = if jd_set.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f64 / jd_set.len() as f64
    };

    MatchResult {
        matched: matched.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
        jd_count: jd_set.len(),
        resume_count: resume_set.len(),
        overlap_pct,
    }
}
