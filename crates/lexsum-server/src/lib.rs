//! LexSum Server: HTTP surface and report rendering for document analysis.

pub mod report;
pub mod routes;
pub mod state;

use std::path::Path;

use lexsum_analyze::ArticleCatalog;
use lexsum_core::LexSumConfig;
use lexsum_infer::{create_summarizer, SummarizerConfig};
use tracing::info;

pub use routes::build_router;
pub use state::AppState;

/// Load configuration, the article catalog and the summarizer for `data_dir`.
pub fn bootstrap(data_dir: &Path) -> anyhow::Result<AppState> {
    let config = LexSumConfig::from_env(data_dir)?;

    let catalog = ArticleCatalog::load_or_builtin(&config.data_paths.articles_file)
        .map_err(|e| anyhow::anyhow!("Failed to load article catalog: {}", e))?;
    info!("Article catalog: {} entries", catalog.len());

    let summarizer_config = SummarizerConfig::load(&config.data_paths.summarizer_config_file);
    let summarizer = create_summarizer(&summarizer_config);

    Ok(AppState::new(config, catalog, summarizer_config, summarizer))
}
