//! LexSum Infer: summarization adapters.
//!
//! Provides the `Summarizer` trait consumed by the analysis pipeline.
//! Remote backends (Hugging Face Inference API, OpenAI/Groq/Anthropic chat)
//! are selected from `SummarizerConfig`. Without a usable backend,
//! `NoopSummarizer` is used and summaries fall back to leading sentences.

pub mod config;
pub mod providers;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use providers::{ChatSummarizer, HuggingFaceSummarizer};
pub use summarizer::{MockSummarizer, NoopSummarizer, SummarizeError, Summarizer};
pub use types::*;

use std::sync::Arc;

/// Create the best available summarizer for the given configuration.
///
/// Resolves the configured provider, falls back to `NoopSummarizer`.
pub fn create_summarizer(config: &SummarizerConfig) -> Arc<dyn Summarizer> {
    match config.resolve_provider() {
        Some(resolved) => {
            let summarizer: Arc<dyn Summarizer> = match resolved.provider {
                SummarizerProvider::HuggingFace => Arc::new(HuggingFaceSummarizer::new(
                    config.huggingface_base_url.clone(),
                    resolved.models,
                    resolved.api_key,
                )),
                provider => Arc::new(ChatSummarizer::new(
                    provider,
                    resolved.models.into_iter().next().unwrap_or_default(),
                    resolved.api_key,
                )),
            };
            tracing::info!("Using summarizer {}", summarizer.name());
            summarizer
        }
        None => {
            tracing::warn!("No summarization provider configured. Using extractive fallback only.");
            Arc::new(NoopSummarizer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_summarizer_without_keys_is_noop() {
        let config = SummarizerConfig::default();
        let summarizer = create_summarizer(&config);
        assert!(!summarizer.is_available());
    }

    #[test]
    fn test_create_summarizer_prefers_huggingface() {
        let config = SummarizerConfig {
            huggingface_api_key: Some("hf_test".into()),
            groq_api_key: Some("gsk_test".into()),
            ..Default::default()
        };
        let summarizer = create_summarizer(&config);
        assert!(summarizer.is_available());
        assert!(summarizer.name().starts_with("huggingface:"));
    }
}
