//! Shared application state.

use std::sync::Arc;

use lexsum_analyze::{Analyzer, ArticleCatalog};
use lexsum_core::LexSumConfig;
use lexsum_infer::{Summarizer, SummarizerConfig};

/// Shared application state accessible from all route handlers.
///
/// Fixed at startup; summarizer settings change only through
/// summarizer-config.json or the environment and a restart.
pub struct AppState {
    pub config: LexSumConfig,
    pub catalog: Arc<ArticleCatalog>,
    pub summarizer_config: SummarizerConfig,
    analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(
        config: LexSumConfig,
        catalog: ArticleCatalog,
        summarizer_config: SummarizerConfig,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let analyzer = Analyzer::new(summarizer, catalog.clone(), config.analysis.clone());

        Self {
            config,
            catalog,
            summarizer_config,
            analyzer: Arc::new(analyzer),
        }
    }

    /// The shared analyzer.
    pub fn analyzer(&self) -> Arc<Analyzer> {
        self.analyzer.clone()
    }
}
