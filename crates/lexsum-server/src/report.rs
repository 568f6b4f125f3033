//! Report rendering for analysis results.
//!
//! The layout is built once as a flat list of [`ReportLine`]s and then
//! rendered either to PDF (served to clients) or to Markdown (CLI output).

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDateTime;
use lexsum_analyze::AnalysisResult;
use lexsum_core::{Error, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use tracing::info;

/// One logical line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Title(String),
    Meta(String),
    Heading(String),
    Subheading(String),
    Body(String),
    Bullet(String),
}

/// Report content in reading order.
pub fn report_lines(
    result: &AnalysisResult,
    original_filename: &str,
    generated_at: NaiveDateTime,
) -> Vec<ReportLine> {
    use ReportLine::*;

    let mut lines = vec![
        Title("Legal Document Summary Report".into()),
        Meta(format!("Original Document: {}", original_filename)),
        Meta(format!(
            "Generated on: {}",
            generated_at.format("%B %d, %Y %H:%M:%S")
        )),
        Heading("Document Summary".into()),
        Body(result.summary.clone()),
        Heading("Important Dates".into()),
    ];

    if result.dates.is_empty() {
        lines.push(Body("No important dates found.".into()));
    } else {
        lines.extend(
            result
                .dates
                .iter()
                .map(|d| Bullet(format!("{}: {}", d.date, d.context))),
        );
    }

    lines.push(Heading("Key Information".into()));
    for (heading, items) in [
        ("Very Important", &result.importance.high),
        ("Important", &result.importance.medium),
        ("Additional Information", &result.importance.low),
    ] {
        lines.push(Subheading(heading.into()));
        lines.extend(items.iter().map(|s| Bullet(s.clone())));
    }

    lines.push(Heading("Suggested Articles".into()));
    if result.suggested_articles.is_empty() {
        lines.push(Body("No matching articles found.".into()));
    } else {
        for article in &result.suggested_articles {
            lines.push(Bullet(format!(
                "{}: {} (matched keywords: {})",
                article.id, article.title, article.score
            )));
            lines.push(Body(article.description.clone()));
        }
    }

    lines
}

/// Markdown rendering of [`report_lines`].
pub fn render_markdown(
    result: &AnalysisResult,
    original_filename: &str,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    for line in report_lines(result, original_filename, generated_at) {
        let _ = match line {
            ReportLine::Title(t) => writeln!(out, "# {}\n", t),
            ReportLine::Meta(t) => writeln!(out, "*{}*  ", t),
            ReportLine::Heading(t) => writeln!(out, "\n## {}\n", t),
            ReportLine::Subheading(t) => writeln!(out, "\n### {}\n", t),
            ReportLine::Body(t) => writeln!(out, "{}", t),
            ReportLine::Bullet(t) => writeln!(out, "- {}", t),
        };
    }
    out
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 25.0;
const BULLET_INDENT: f32 = 6.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Italic,
}

struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| Error::Report(format!("font: {:?}", e)))
        };
        let regular = font(BuiltinFont::Helvetica)?;
        let bold = font(BuiltinFont::HelveticaBold)?;
        let italic = font(BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Write wrapped text; continuation lines keep the indent.
    fn text(&mut self, text: &str, size: f32, face: Face, color: (f32, f32, f32), indent: f32) {
        let usable_pt = (PAGE_WIDTH - 2.0 * MARGIN - indent) / PT_TO_MM;
        let max_chars = (usable_pt / (size * AVG_GLYPH_WIDTH)) as usize;
        let line_height = size * PT_TO_MM * 1.4;

        for line in wrap(text, max_chars) {
            self.ensure_space(line_height);
            self.y -= line_height;
            let font = match face {
                Face::Regular => &self.regular,
                Face::Bold => &self.bold,
                Face::Italic => &self.italic,
            };
            self.layer
                .set_fill_color(Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));
            self.layer
                .use_text(line, size, Mm(MARGIN + indent), Mm(self.y), font);
        }
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| Error::Report(format!("save: {:?}", e)))
    }
}

const INK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const TITLE: (f32, f32, f32) = (0.17, 0.24, 0.31);
const HEADING: (f32, f32, f32) = (0.20, 0.29, 0.37);
const MUTED: (f32, f32, f32) = (0.50, 0.55, 0.55);

/// PDF rendering of [`report_lines`].
pub fn render_pdf(
    result: &AnalysisResult,
    original_filename: &str,
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>> {
    let mut pdf = PdfWriter::new("Legal Document Summary Report")?;

    for line in report_lines(result, original_filename, generated_at) {
        match line {
            ReportLine::Title(t) => {
                pdf.text(&t, 22.0, Face::Bold, TITLE, 0.0);
                pdf.gap(6.0);
            }
            ReportLine::Meta(t) => pdf.text(&t, 10.0, Face::Italic, MUTED, 0.0),
            ReportLine::Heading(t) => {
                pdf.gap(6.0);
                pdf.text(&t, 15.0, Face::Bold, HEADING, 0.0);
                pdf.gap(2.0);
            }
            ReportLine::Subheading(t) => {
                pdf.gap(2.0);
                pdf.text(&t, 12.0, Face::Bold, HEADING, 0.0);
            }
            ReportLine::Body(t) => pdf.text(&t, 11.0, Face::Regular, INK, 0.0),
            ReportLine::Bullet(t) => {
                pdf.text(&format!("- {}", t), 11.0, Face::Regular, INK, BULLET_INDENT)
            }
        }
    }

    pdf.finish()
}

/// Greedy word wrap to at most `width` chars per line (longer words are split).
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// File name for a report generated at `generated_at`.
pub fn report_filename(generated_at: NaiveDateTime) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "legal_summary_report_{}_{}.pdf",
        generated_at.format("%Y%m%d_%H%M%S"),
        &id[..8]
    )
}

/// Render a PDF report into `reports_dir`, returning its file name.
pub fn write_report(
    reports_dir: &Path,
    result: &AnalysisResult,
    original_filename: &str,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let filename = report_filename(generated_at);
    let bytes = render_pdf(result, original_filename, generated_at)?;
    std::fs::write(reports_dir.join(&filename), bytes)?;
    info!("Wrote report {}", filename);
    Ok(filename)
}
