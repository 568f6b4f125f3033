//! LexSum Analyze: turns extracted document text into structured findings.
//!
//! Pipeline: whitespace normalization, then chunked summarization through a
//! `Summarizer` alongside three independent heuristics (dates, importance
//! tiers, article matching). `Analyzer::analyze` never fails; every
//! collaborator failure degrades to a fallback value.

pub mod articles;
pub mod chunking;
pub mod dates;
pub mod importance;
pub mod pipeline;
pub mod result;
pub mod text;

pub use articles::{Article, ArticleCatalog, ArticleMatch, MAX_SUGGESTED_ARTICLES};
pub use chunking::{Chunker, Chunks, TextChunk};
pub use dates::{extract_dates, DateFinding};
pub use importance::{Importance, ImportanceLevel, ImportanceRules};
pub use pipeline::Analyzer;
pub use result::AnalysisResult;
pub use text::{leading_sentences, normalize_whitespace, split_sentences};
