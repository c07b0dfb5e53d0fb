//! Match Scoring: blends cosine similarity and keyword overlap into one report.
//!
//! Default (and only) backend: `LexicalMatchScorer`, a pure function of the two
//! input texts and the fixed weights below.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so handlers never name the backend.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::feedback::build_feedback;
use crate::matching::frequency::{
    top_keywords, FrequencyMap, DEFAULT_JD_TOP_K, DEFAULT_RESUME_TOP_K,
};
use crate::matching::keywords::match_keywords;
use crate::matching::similarity::cosine_similarity;
use crate::matching::text::{Document, TokenizerOptions};

/// Weight of the cosine similarity term. Fixed, not configurable.
pub const SEMANTIC_WEIGHT: f64 = 0.6;
/// Weight of the keyword overlap term. Fixed, not configurable.
pub const KEYWORD_WEIGHT: f64 = 0.4;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full match report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: f64,         // 0 – 100, two decimals
    pub semantic_similarity: f64, // 0 – 1
    pub overlap_pct: f64,         // 0 – 100
    pub skills_matched: Vec<String>,
    pub missing_skills: Vec<String>,
    pub jd_skill_count: usize,
    pub resume_skill_count: usize,
    pub feedback: Vec<String>,
}

/// Tunables for tokenization and keyword budgets. Weights are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    pub min_token_len: usize,
    pub jd_top_k: usize,
    pub resume_top_k: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            min_token_len: TokenizerOptions::default().min_len,
            jd_top_k: DEFAULT_JD_TOP_K,
            resume_top_k: DEFAULT_RESUME_TOP_K,
        }
    }
}

impl ScoringOptions {
    pub fn tokenizer(&self) -> TokenizerOptions {
        TokenizerOptions {
            min_len: self.min_token_len,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
pub trait MatchScorer: Send + Sync {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchReport;
}

/// Bag-of-words scorer: cosine similarity of term frequencies plus top-K keyword overlap.
#[derive(Debug, Clone, Default)]
pub struct LexicalMatchScorer {
    pub options: ScoringOptions,
}

impl LexicalMatchScorer {
    pub fn new(options: ScoringOptions) -> Self {
        Self { options }
    }
}

impl MatchScorer for LexicalMatchScorer {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchReport {
        compute_match(jd_text, resume_text, &self.options)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score composition
// ────────────────────────────────────────────────────────────────────────────

/// Rounds to two decimals, halves away from zero.
///
/// Operates on the scaled binary value: 0.125 → 0.13 and 64.995 → 65.0, but
/// 1.005 (stored as 1.00499…) → 1.0.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `similarity·100·0.6 + overlap_pct·0.4`, rounded to two decimals and kept in [0, 100].
pub fn compose_score(semantic_similarity: f64, overlap_pct: f64) -> f64 {
    let raw = semantic_similarity * 100.0 * SEMANTIC_WEIGHT + overlap_pct * KEYWORD_WEIGHT;
    round_two_decimals(raw).clamp(0.0, 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the whole pipeline for one JD / resume pair.
pub fn compute_match(jd_text: &str, resume_text: &str, options: &ScoringOptions) -> MatchReport {
    let tokenizer = options.tokenizer();
    let jd = Document::new(jd_text, tokenizer);
    let resume = Document::new(resume_text, tokenizer);

    let jd_freq = FrequencyMap::from_tokens(&jd.tokens);
    let resume_freq = FrequencyMap::from_tokens(&resume.tokens);

    let semantic_similarity = cosine_similarity(&jd_freq, &resume_freq);

    let jd_keywords = top_keywords(&jd_freq, options.jd_top_k);
    let resume_keywords = top_keywords(&resume_freq, options.resume_top_k);
    let matched = match_keywords(&jd_keywords, &resume_keywords);

    let match_score = compose_score(semantic_similarity, matched.overlap_pct);
    let feedback = build_feedback(match_score, &matched.missing);

    debug!(
        jd_bytes = jd.raw_text.len(),
        resume_bytes = resume.raw_text.len(),
        jd_tokens = jd.tokens.len(),
        resume_tokens = resume.tokens.len(),
        jd_vocabulary = jd_freq.len(),
        resume_vocabulary = resume_freq.len(),
        jd_keywords = matched.jd_count,
        resume_keywords = matched.resume_count,
        semantic_similarity,
        overlap_pct = matched.overlap_pct,
        match_score,
        "computed match"
    );

    MatchReport {
        match_score,
        semantic_similarity,
        overlap_pct: matched.overlap_pct,
        skills_matched: matched.matched,
        missing_skills: matched.missing,
        jd_skill_count: matched.jd_count,
        resume_skill_count: matched.resume_count,
        feedback,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
