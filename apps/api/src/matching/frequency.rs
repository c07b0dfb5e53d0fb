//! Token frequency model and top-K keyword extraction.

use std::collections::HashMap;

/// Token → occurrence count, remembering the order in which tokens first appeared.
///
/// Iteration yields entries in first-occurrence order, which is what top-K
/// extraction uses to break frequency ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut map = Self::default();
        for token in tokens {
            map.record(token.as_ref());
        }
        map
    }

    fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Count for `token`, 0 if absent.
    pub fn get(&self, token: &str) -> u32 {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(token, _)| token.as_str())
    }
}

/// Default keyword budget for the job description side.
pub const DEFAULT_JD_TOP_K: usize = 200;
/// Default keyword budget for the resume side. Resumes tend to be lexically wider.
pub const DEFAULT_RESUME_TOP_K: usize = 400;

/// The `top_k` most frequent tokens, by descending count.
///
/// Equal counts keep first-occurrence order (the sort is stable over the
/// map's insertion-ordered entries).
pub fn top_keywords(frequencies: &FrequencyMap, top_k: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, u32)> = frequencies.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(top_k)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Builds the frequency map for `tokens` and returns its top-K keyword list.
pub fn extract_keywords<S: AsRef<str>>(tokens: &[S], top_k: usize) -> Vec<String> {
    top_keywords(&FrequencyMap::from_tokens(tokens), top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_occurrences() {
        let map = FrequencyMap::from_tokens(&["rust", "go", "rust", "kafka", "rust"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("rust"), 3);
        assert_eq!(map.get("go"), 1);
        assert_eq!(map.get("java"), 0);
        assert_eq!(map.get("kafka"), 1);
    }

    #[test]
    fn test_iteration_is_first_occurrence_order() {
        let map = FrequencyMap::from_tokens(&["b", "a", "c", "a", "b"]);
        let order: Vec<&str> = map.tokens().collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_tokens_give_empty_map() {
        let map = FrequencyMap::from_tokens::<&str>(&[]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_extract_sorts_by_descending_frequency() {
        let keywords = extract_keywords(&["go", "rust", "rust", "kafka", "rust", "kafka"], 10);
        assert_eq!(keywords, vec!["rust", "kafka", "go"]);
    }

    #[test]
    fn test_extract_ties_keep_first_occurrence() {
        let keywords = extract_keywords(&["docker", "aws", "python", "aws", "python", "docker"], 10);
        assert_eq!(keywords, vec!["docker", "aws", "python"]);
    }

    #[test]
    fn test_extract_truncates_to_top_k() {
        let keywords = extract_keywords(&["a1", "b1", "b1", "c1", "c1", "c1"], 2);
        assert_eq!(keywords, vec!["c1", "b1"]);
    }

    #[test]
    fn test_extract_top_k_zero_is_empty() {
        assert!(extract_keywords(&["rust"], 0).is_empty());
    }

    #[test]
    fn test_extract_emits_distinct_tokens() {
        let keywords = extract_keywords(&["x1", "x1", "x1"], 5);
        assert_eq!(keywords, vec!["x1"]);
    }
}
