//! Summarizer configuration persistence and provider selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{ResolvedProvider, SummarizerConfigResponse, SummarizerProvider};

/// Seq2seq models tried in order on the Hugging Face Inference API.
pub const DEFAULT_HUGGINGFACE_MODELS: &[&str] =
    &["sshleifer/distilbart-cnn-12-6", "facebook/bart-large-cnn"];
pub const DEFAULT_HUGGINGFACE_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Summarizer configuration, read from summarizer-config.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub huggingface_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_huggingface_models")]
    pub huggingface_models: Vec<String>,
    #[serde(default = "default_huggingface_base_url")]
    pub huggingface_base_url: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_huggingface_models() -> Vec<String> {
    DEFAULT_HUGGINGFACE_MODELS.iter().map(|s| s.to_string()).collect()
}
fn default_huggingface_base_url() -> String {
    DEFAULT_HUGGINGFACE_BASE_URL.into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred(),
            huggingface_api_key: None,
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            huggingface_models: default_huggingface_models(),
            huggingface_base_url: default_huggingface_base_url(),
            openai_model: default_openai_model(),
            anthropic_model: default_anthropic_model(),
            groq_model: default_groq_model(),
        }
    }
}

impl SummarizerConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: SummarizerConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        if config.huggingface_api_key.is_none() {
            config.huggingface_api_key = std::env::var("HF_API_TOKEN").ok();
        }
        if config.openai_api_key.is_none() {
            config.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if config.anthropic_api_key.is_none() {
            config.anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }
        if config.groq_api_key.is_none() {
            config.groq_api_key = std::env::var("GROQ_API_KEY").ok();
        }
        if config.preferred_provider == "auto" {
            if let Ok(p) = std::env::var("LEXSUM_SUMMARIZER") {
                config.preferred_provider = p;
            }
        }

        config
    }

    /// Resolve which provider and model(s) to use.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        if self.preferred_provider != "auto" {
            return SummarizerProvider::parse(&self.preferred_provider)
                .and_then(|p| self.resolve(p));
        }

        // Auto mode: Hugging Face > Anthropic > Groq > OpenAI
        [
            SummarizerProvider::HuggingFace,
            SummarizerProvider::Anthropic,
            SummarizerProvider::Groq,
            SummarizerProvider::OpenAI,
        ]
        .into_iter()
        .find_map(|p| self.resolve(p))
    }

    fn resolve(&self, provider: SummarizerProvider) -> Option<ResolvedProvider> {
        let key = match provider {
            SummarizerProvider::HuggingFace => &self.huggingface_api_key,
            SummarizerProvider::OpenAI => &self.openai_api_key,
            SummarizerProvider::Anthropic => &self.anthropic_api_key,
            SummarizerProvider::Groq => &self.groq_api_key,
        };
        let api_key = key.as_ref().filter(|k| !k.trim().is_empty())?.clone();

        let models = match provider {
            SummarizerProvider::HuggingFace => self.huggingface_models.clone(),
            SummarizerProvider::OpenAI => vec![self.openai_model.clone()],
            SummarizerProvider::Anthropic => vec![self.anthropic_model.clone()],
            SummarizerProvider::Groq => vec![self.groq_model.clone()],
        };
        if models.is_empty() {
            return None;
        }

        Some(ResolvedProvider {
            provider,
            models,
            api_key,
        })
    }

    /// Build the public config response (no API keys exposed).
    pub fn to_response(&self) -> SummarizerConfigResponse {
        SummarizerConfigResponse {
            preferred_provider: self.preferred_provider.clone(),
            huggingface_configured: self.huggingface_api_key.is_some(),
            openai_configured: self.openai_api_key.is_some(),
            anthropic_configured: self.anthropic_api_key.is_some(),
            groq_configured: self.groq_api_key.is_some(),
            huggingface_models: self.huggingface_models.clone(),
            openai_model: self.openai_model.clone(),
            anthropic_model: self.anthropic_model.clone(),
            groq_model: self.groq_model.clone(),
            active_provider: self.resolve_provider().map(|r| r.provider.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolution_order() {
        let mut config = SummarizerConfig {
            openai_api_key: Some("sk".into()),
            groq_api_key: Some("gsk".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_provider().unwrap().provider, SummarizerProvider::Groq);

        config.anthropic_api_key = Some("ant".into());
        assert_eq!(
            config.resolve_provider().unwrap().provider,
            SummarizerProvider::Anthropic
        );

        config.huggingface_api_key = Some("hf".into());
        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, SummarizerProvider::HuggingFace);
        assert_eq!(resolved.models[0], "sshleifer/distilbart-cnn-12-6");
        assert_eq!(resolved.models[1], "facebook/bart-large-cnn");
    }

    #[test]
    fn test_explicit_preference_requires_key() {
        let config = SummarizerConfig {
            preferred_provider: "openai".into(),
            groq_api_key: Some("gsk".into()),
            ..Default::default()
        };
        assert!(config.resolve_provider().is_none());
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let config = SummarizerConfig {
            openai_api_key: Some("  ".into()),
            ..Default::default()
        };
        assert!(config.resolve_provider().is_none());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summarizer-config.json");
        std::fs::write(
            &path,
            r#"{"preferred_provider": "groq", "groq_api_key": "gsk_live", "groq_model": "llama-3.3-70b-versatile"}"#,
        )
        .unwrap();

        let loaded = SummarizerConfig::load(&path);
        assert_eq!(loaded.preferred_provider, "groq");
        assert_eq!(loaded.groq_api_key.as_deref(), Some("gsk_live"));
        assert_eq!(loaded.groq_model, "llama-3.3-70b-versatile");

        let response = loaded.to_response();
        assert!(response.groq_configured);
        assert_eq!(response.active_provider.as_deref(), Some("groq"));
    }
}
