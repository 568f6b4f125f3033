//! Summarizer provider types and config API shapes.

use serde::{Deserialize, Serialize};

/// Summarization provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    HuggingFace,
    OpenAI,
    Anthropic,
    Groq,
}

impl SummarizerProvider {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Some(Self::HuggingFace),
            "openai" => Some(Self::OpenAI),
            "anthropic" => Some(Self::Anthropic),
            "groq" => Some(Self::Groq),
            _ => None,
        }
    }
}

impl std::fmt::Display for SummarizerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarizerProvider::HuggingFace => write!(f, "huggingface"),
            SummarizerProvider::OpenAI => write!(f, "openai"),
            SummarizerProvider::Anthropic => write!(f, "anthropic"),
            SummarizerProvider::Groq => write!(f, "groq"),
        }
    }
}

/// Provider chosen by `SummarizerConfig::resolve_provider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: SummarizerProvider,
    /// Models to try in order. Chat providers use only the first.
    pub models: Vec<String>,
    pub api_key: String,
}

/// Summarizer config response (keys masked).
#[derive(Debug, Clone, Serialize)]
pub struct SummarizerConfigResponse {
    #[serde(rename = "preferredProvider")]
    pub preferred_provider: String,
    #[serde(rename = "huggingfaceConfigured")]
    pub huggingface_configured: bool,
    #[serde(rename = "openaiConfigured")]
    pub openai_configured: bool,
    #[serde(rename = "anthropicConfigured")]
    pub anthropic_configured: bool,
    #[serde(rename = "groqConfigured")]
    pub groq_configured: bool,
    #[serde(rename = "huggingfaceModels")]
    pub huggingface_models: Vec<String>,
    #[serde(rename = "openaiModel")]
    pub openai_model: String,
    #[serde(rename = "anthropicModel")]
    pub anthropic_model: String,
    #[serde(rename = "groqModel")]
    pub groq_model: String,
    #[serde(rename = "activeProvider")]
    pub active_provider: Option<String>,
}
