//! DOCX text extraction: walks the parsed document tree and keeps the text
//! runs, one line per paragraph.

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use lexsum_core::{Error, Result};

/// Extract paragraph text from DOCX bytes.
///
/// Paragraphs are joined with `\n`. Inside a run, a tab becomes `\t` and a
/// break of any kind (line, page, column) becomes `\n`.
pub fn extract_docx(bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| Error::Extraction(format!("DOCX could not be parsed: {:?}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        let ParagraphChild::Run(run) = child else {
            continue;
        };
        for rc in &run.children {
            match rc {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

    text
}
