//! The aggregate analysis result.

use serde::{Deserialize, Serialize};

use crate::articles::ArticleMatch;
use crate::dates::DateFinding;
use crate::importance::Importance;

/// Findings for one document. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub dates: Vec<DateFinding>,
    pub importance: Importance,
    pub suggested_articles: Vec<ArticleMatch>,
}

impl AnalysisResult {
    /// Combine sub-results, substituting empty values for any that are missing.
    pub fn assemble(
        summary: Option<String>,
        dates: Option<Vec<DateFinding>>,
        importance: Option<Importance>,
        suggested_articles: Option<Vec<ArticleMatch>>,
    ) -> Self {
        Self {
            summary: summary.unwrap_or_default(),
            dates: dates.unwrap_or_default(),
            importance: importance.unwrap_or_default(),
            suggested_articles: suggested_articles.unwrap_or_default(),
        }
    }
}
