//! File text extraction for the accepted upload formats.

use std::panic::AssertUnwindSafe;
use std::path::Path;

use lexsum_core::{Error, Result};
use tracing::debug;

use crate::docx;

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => Self::PlainText,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a filename such as `contract.PDF`.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::Unknown,
        }
    }
}

/// Whether a filename carries one of [`ALLOWED_EXTENSIONS`].
pub fn is_allowed_filename(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extract text content from a file on disk.
pub fn extract_text(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file_type = FileType::from_extension(ext);
    if file_type == FileType::Unknown {
        return Err(Error::UnsupportedFormat(format!(".{}", ext)));
    }

    let bytes = std::fs::read(path)?;
    extract_text_from_bytes(&bytes, file_type)
}

/// Extract text content from an in-memory upload.
pub fn extract_text_from_bytes(bytes: &[u8], file_type: FileType) -> Result<String> {
    debug!("Extracting {:?} ({} bytes)", file_type, bytes.len());

    match file_type {
        FileType::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        FileType::Pdf => extract_pdf(bytes),
        FileType::Docx => docx::extract_docx(bytes),
        FileType::Unknown => Err(Error::UnsupportedFormat("unknown".into())),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    if !bytes.starts_with(b"%PDF") {
        return Err(Error::Extraction("Not a PDF file".into()));
    }

    // pdf-extract panics on some malformed inputs.
    match std::panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(Error::Extraction(format!("PDF extraction failed: {:?}", e))),
        Err(_) => Err(Error::Extraction("PDF extraction failed: malformed document".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("lease.docx"), FileType::Docx);
        assert_eq!(FileType::from_filename("notes.txt"), FileType::PlainText);
        assert_eq!(FileType::from_filename("archive.tar.gz"), FileType::Unknown);
        assert_eq!(FileType::from_filename("README"), FileType::Unknown);
    }

    #[test]
    fn test_allowed_filenames() {
        assert!(is_allowed_filename("contract.pdf"));
        assert!(is_allowed_filename("Contract.TXT"));
        assert!(!is_allowed_filename("contract.doc"));
        assert!(!is_allowed_filename("contract"));
    }

    #[test]
    fn test_extract_plain_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notice.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"Payment is due by 01/02/2024.").unwrap();

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "Payment is due by 01/02/2024.");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_pdf_without_magic_bytes_is_rejected() {
        let err = extract_text_from_bytes(b"plain text pretending", FileType::Pdf).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
