//! Remote summarization backends.
//!
//! `HuggingFaceSummarizer` calls the Inference API summarization pipeline
//! for BART-style seq2seq models. `ChatSummarizer` prompts a chat model:
//! OpenAI and Groq share a request format, Anthropic uses its own.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::summarizer::{SummarizeError, Summarizer};
use crate::types::SummarizerProvider;

/// Generation bounds passed to seq2seq summarization models.
pub const SUMMARY_MAX_LENGTH: usize = 130;
pub const SUMMARY_MIN_LENGTH: usize = 30;
/// Token budget for chat-model summaries.
pub const CHAT_MAX_TOKENS: usize = 300;

const SYSTEM_PROMPT: &str = "You summarize excerpts of legal documents. \
Reply with a concise plain-prose summary of the excerpt, at most three sentences, \
keeping parties, obligations, amounts and dates. Do not add commentary.";

/// Hugging Face Inference API summarizer with an ordered model fallback chain.
pub struct HuggingFaceSummarizer {
    client: Client,
    base_url: String,
    models: Vec<String>,
    api_key: String,
}

impl HuggingFaceSummarizer {
    pub fn new(base_url: String, models: Vec<String>, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            models,
            api_key,
        }
    }

    async fn summarize_with(&self, model: &str, chunk: &str) -> Result<String, SummarizeError> {
        let url = format!("{}/models/{}", self.base_url, model);
        let body = json!({
            "inputs": chunk,
            "parameters": {
                "max_length": SUMMARY_MAX_LENGTH,
                "min_length": SUMMARY_MIN_LENGTH,
                "do_sample": false,
            },
        });

        debug!("Summarizing {} chars with {}", chunk.len(), model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let parsed = read_json(response).await?;
        parse_huggingface_response(&parsed)
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, chunk: &str) -> Result<String, SummarizeError> {
        let mut last_error = SummarizeError::Unavailable;
        for model in &self.models {
            match self.summarize_with(model, chunk).await {
                Ok(summary) => return Ok(summary),
                Err(e) => {
                    warn!("Summarization with {} failed: {}", model, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    fn is_available(&self) -> bool {
        !self.models.is_empty()
    }

    fn name(&self) -> String {
        format!("huggingface:{}", self.models.join(","))
    }
}

/// Chat-completion summarizer (OpenAI, Groq, Anthropic).
pub struct ChatSummarizer {
    client: Client,
    provider: SummarizerProvider,
    model: String,
    api_key: String,
}

impl ChatSummarizer {
    pub fn new(provider: SummarizerProvider, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            provider,
            model,
            api_key,
        }
    }

    async fn summarize_openai_compat(&self, url: &str, chunk: &str) -> Result<String, SummarizeError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": chunk},
            ],
            "temperature": 0.0,
            "max_tokens": CHAT_MAX_TOKENS,
        });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let parsed = read_json(response).await?;
        parse_openai_response(&parsed)
    }

    async fn summarize_anthropic(&self, chunk: &str) -> Result<String, SummarizeError> {
        let body = json!({
            "model": self.model,
            "system": SYSTEM_PROMPT,
            "messages": [{"role": "user", "content": chunk}],
            "temperature": 0.0,
            "max_tokens": CHAT_MAX_TOKENS,
        });

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let parsed = read_json(response).await?;
        parse_anthropic_response(&parsed)
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, chunk: &str) -> Result<String, SummarizeError> {
        debug!("Summarizing {} chars with {} {}", chunk.len(), self.provider, self.model);
        match self.provider {
            SummarizerProvider::OpenAI => {
                self.summarize_openai_compat("https://api.openai.com/v1/chat/completions", chunk)
                    .await
            }
            SummarizerProvider::Groq => {
                self.summarize_openai_compat(
                    "https://api.groq.com/openai/v1/chat/completions",
                    chunk,
                )
                .await
            }
            SummarizerProvider::Anthropic => self.summarize_anthropic(chunk).await,
            SummarizerProvider::HuggingFace => Err(SummarizeError::Unavailable),
        }
    }

    fn is_available(&self) -> bool {
        self.provider != SummarizerProvider::HuggingFace
    }

    fn name(&self) -> String {
        format!("{}:{}", self.provider, self.model)
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, SummarizeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SummarizeError::Api {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| SummarizeError::InvalidResponse(e.to_string()))
}

fn non_empty(text: Option<&str>) -> Result<String, SummarizeError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        Some(_) => Err(SummarizeError::Empty),
        None => Err(SummarizeError::InvalidResponse("missing summary text".into())),
    }
}

/// Parse `[{"summary_text": "..."}]` (or an `{"error": ...}` object).
pub fn parse_huggingface_response(value: &Value) -> Result<String, SummarizeError> {
    if let Some(err) = value.get("error").and_then(|e| e.as_str()) {
        return Err(SummarizeError::InvalidResponse(err.to_string()));
    }
    non_empty(value[0]["summary_text"].as_str())
}

/// Parse an OpenAI-compatible chat completion.
pub fn parse_openai_response(value: &Value) -> Result<String, SummarizeError> {
    non_empty(value["choices"][0]["message"]["content"].as_str())
}

/// Parse an Anthropic Messages API response.
pub fn parse_anthropic_response(value: &Value) -> Result<String, SummarizeError> {
    if value["type"].as_str() == Some("error") {
        let msg = value["error"]["message"].as_str().unwrap_or("Unknown error");
        return Err(SummarizeError::InvalidResponse(msg.to_string()));
    }
    let text = value["content"]
        .as_array()
        .and_then(|blocks| blocks.iter().find(|b| b["type"].as_str() == Some("text")))
        .and_then(|b| b["text"].as_str());
    non_empty(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_huggingface() {
        let ok = json!([{"summary_text": " The lessee must pay rent monthly. "}]);
        assert_eq!(
            parse_huggingface_response(&ok).unwrap(),
            "The lessee must pay rent monthly."
        );

        let loading = json!({"error": "Model facebook/bart-large-cnn is currently loading"});
        assert!(matches!(
            parse_huggingface_response(&loading),
            Err(SummarizeError::InvalidResponse(_))
        ));

        let empty = json!([{"summary_text": "   "}]);
        assert!(matches!(parse_huggingface_response(&empty), Err(SummarizeError::Empty)));
    }

    #[test]
    fn test_parse_openai() {
        let ok = json!({"choices": [{"message": {"role": "assistant", "content": "Summary."}}]});
        assert_eq!(parse_openai_response(&ok).unwrap(), "Summary.");
        assert!(parse_openai_response(&json!({"choices": []})).is_err());
    }

    #[test]
    fn test_parse_anthropic() {
        let ok = json!({"type": "message", "content": [{"type": "text", "text": "Summary."}]});
        assert_eq!(parse_anthropic_response(&ok).unwrap(), "Summary.");

        let err = json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}});
        match parse_anthropic_response(&err) {
            Err(SummarizeError::InvalidResponse(msg)) => assert_eq!(msg, "Overloaded"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_names() {
        let hf = HuggingFaceSummarizer::new(
            "https://example.test/".into(),
            vec!["a/one".into(), "b/two".into()],
            "key".into(),
        );
        assert_eq!(hf.name(), "huggingface:a/one,b/two");
        assert!(hf.is_available());

        let chat = ChatSummarizer::new(SummarizerProvider::Groq, "llama".into(), "key".into());
        assert_eq!(chat.name(), "groq:llama");
    }

    #[tokio::test]
    async fn test_huggingface_unreachable_host_fails() {
        let hf = HuggingFaceSummarizer::new(
            "http://127.0.0.1:9".into(),
            vec!["m".into()],
            "key".into(),
        );
        assert!(hf.summarize("some text").await.is_err());
    }
}
