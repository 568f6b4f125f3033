//! Summarization trait and the in-process implementations.
//!
//! The analysis pipeline only sees `Summarizer`. Remote backends live in
//! `providers`; `NoopSummarizer` marks "no model available" and
//! `MockSummarizer` returns canned output for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors a summarizer backend can report for a single chunk.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Summarizer unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Summarizer returned an empty summary")]
    Empty,
}

impl From<SummarizeError> for lexsum_core::Error {
    fn from(e: SummarizeError) -> Self {
        lexsum_core::Error::Summarization(e.to_string())
    }
}

/// Trait for abstractive summarization backends.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize one chunk of text.
    async fn summarize(&self, chunk: &str) -> Result<String, SummarizeError>;

    /// Check if the backend is usable at all.
    fn is_available(&self) -> bool;

    /// Human-readable backend description, e.g. `huggingface:facebook/bart-large-cnn`.
    fn name(&self) -> String;
}

/// Placeholder summarizer used when no backend is configured.
pub struct NoopSummarizer;

#[async_trait]
impl Summarizer for NoopSummarizer {
    async fn summarize(&self, _chunk: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "extractive".into()
    }
}

/// Deterministic summarizer for tests.
///
/// Returns a fixed response, or a per-chunk response when a registered
/// marker appears in the chunk. Chunks containing a failure marker return
/// an error.
pub struct MockSummarizer {
    default_response: String,
    responses: Vec<(String, String)>,
    fail_markers: Vec<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockSummarizer {
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            responses: Vec::new(),
            fail_markers: Vec::new(),
            delay: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Return `response` for any chunk containing `marker`.
    pub fn with_response(mut self, marker: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses.push((marker.into(), response.into()));
        self
    }

    /// Fail any chunk containing `marker`.
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_markers.push(marker.into());
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Chunks received so far, in call order.
    pub fn seen_chunks(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, chunk: &str) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(chunk.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_markers.iter().any(|m| chunk.contains(m.as_str())) {
            return Err(SummarizeError::Request("mock failure".into()));
        }

        let response = self
            .responses
            .iter()
            .find(|(marker, _)| chunk.contains(marker.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| self.default_response.clone());
        Ok(response)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        "mock".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_is_unavailable() {
        let s = NoopSummarizer;
        assert!(!s.is_available());
        assert!(matches!(s.summarize("text").await, Err(SummarizeError::Unavailable)));
    }

    #[tokio::test]
    async fn test_mock_responses_and_failures() {
        let mock = MockSummarizer::new("default")
            .with_response("lease", "A lease summary.")
            .failing_on("BROKEN");

        assert_eq!(mock.summarize("the lease term").await.unwrap(), "A lease summary.");
        assert_eq!(mock.summarize("anything else").await.unwrap(), "default");
        assert!(mock.summarize("a BROKEN chunk").await.is_err());
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.seen_chunks()[0], "the lease term");
    }

    #[test]
    fn test_error_converts_to_core_error() {
        let err: lexsum_core::Error = SummarizeError::Empty.into();
        assert!(matches!(err, lexsum_core::Error::Summarization(_)));
    }
}
