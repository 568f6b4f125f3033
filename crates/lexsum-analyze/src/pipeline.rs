//! The document analysis pipeline.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use lexsum_core::AnalysisSettings;
use lexsum_infer::Summarizer;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::articles::{ArticleCatalog, MAX_SUGGESTED_ARTICLES};
use crate::chunking::{Chunker, TextChunk};
use crate::dates::extract_dates;
use crate::importance::ImportanceRules;
use crate::result::AnalysisResult;
use crate::text::{leading_sentences, normalize_whitespace};

/// Sentences kept per chunk when its summarization fails.
pub const CHUNK_FALLBACK_SENTENCES: usize = 3;
/// Sentences kept for the whole document when no summarizer is available.
pub const DOCUMENT_FALLBACK_SENTENCES: usize = 5;

/// Analyzes documents with an injected summarizer and read-only rules.
///
/// Holds no per-document state; one instance serves concurrent requests.
pub struct Analyzer {
    summarizer: Arc<dyn Summarizer>,
    catalog: Arc<ArticleCatalog>,
    rules: Arc<ImportanceRules>,
    settings: AnalysisSettings,
}

impl Analyzer {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        catalog: Arc<ArticleCatalog>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            summarizer,
            catalog,
            rules: Arc::new(ImportanceRules::default()),
            settings,
        }
    }

    /// Replace the importance keyword rules.
    pub fn with_rules(mut self, rules: ImportanceRules) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn summarizer(&self) -> &Arc<dyn Summarizer> {
        &self.summarizer
    }

    pub fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Analyze raw document text. Never fails.
    ///
    /// The heuristics run on the blocking pool while chunks are summarized;
    /// a heuristic task that dies contributes an empty value.
    pub async fn analyze(&self, raw_text: &str) -> AnalysisResult {
        let text: Arc<str> = Arc::from(normalize_whitespace(raw_text));
        debug!("Analyzing {} chars", text.len());

        let dates = tokio::task::spawn_blocking({
            let text = text.clone();
            move || extract_dates(&text)
        });
        let importance = tokio::task::spawn_blocking({
            let text = text.clone();
            let rules = self.rules.clone();
            move || rules.classify(&text)
        });
        let articles = tokio::task::spawn_blocking({
            let text = text.clone();
            let catalog = self.catalog.clone();
            move || catalog.match_text(&text, MAX_SUGGESTED_ARTICLES)
        });

        let (summary, dates, importance, articles) =
            tokio::join!(self.summarize(&text), dates, importance, articles);

        AnalysisResult::assemble(
            Some(summary),
            joined(dates, "date extraction"),
            joined(importance, "importance classification"),
            joined(articles, "article matching"),
        )
    }

    /// Summary of already-normalized text.
    ///
    /// Without a summarizer this is the document's leading sentences.
    /// Otherwise every substantive chunk is summarized (a bounded number at a
    /// time) and the results are joined in chunk order.
    pub async fn summarize(&self, text: &str) -> String {
        if !self.summarizer.is_available() {
            return leading_sentences(text, DOCUMENT_FALLBACK_SENTENCES);
        }

        let chunker = Chunker::new(self.settings.chunk_chars);
        let chunks: Vec<TextChunk<'_>> = chunker
            .chunks(text)
            .filter(|c| c.is_substantive(self.settings.min_chunk_chars))
            .collect();

        let calls: Vec<_> = chunks
            .into_iter()
            .map(|chunk| self.summarize_chunk(chunk))
            .collect();
        let summaries: Vec<String> = stream::iter(calls)
            .buffered(self.settings.summary_concurrency.max(1))
            .collect()
            .await;

        summaries.join(" ")
    }

    async fn summarize_chunk(&self, chunk: TextChunk<'_>) -> String {
        let call = self.summarizer.summarize(chunk.text);
        match tokio::time::timeout(self.settings.summary_timeout(), call).await {
            Ok(Ok(summary)) => summary,
            Ok(Err(e)) => {
                warn!("Summarization failed for chunk {}: {}", chunk.chunk_index, e);
                leading_sentences(chunk.text, CHUNK_FALLBACK_SENTENCES)
            }
            Err(_) => {
                warn!(
                    "Summarization timed out for chunk {} after {}s",
                    chunk.chunk_index, self.settings.summary_timeout_secs
                );
                leading_sentences(chunk.text, CHUNK_FALLBACK_SENTENCES)
            }
        }
    }
}

fn joined<T>(result: Result<T, JoinError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} did not complete: {}", what, e);
            None
        }
    }
}
