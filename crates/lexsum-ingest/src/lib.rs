//! LexSum Ingest: text extraction from uploaded legal documents.

pub mod docx;
pub mod file;

pub use file::{extract_text, extract_text_from_bytes, is_allowed_filename, FileType, ALLOWED_EXTENSIONS};
