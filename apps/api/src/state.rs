use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::{LexicalMatchScorer, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: LexicalMatchScorer built from `config.scoring`.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(LexicalMatchScorer::new(config.scoring));
        Self { config, scorer }
    }
}
