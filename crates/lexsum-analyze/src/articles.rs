//! Article catalog and keyword-overlap matching.
//!
//! Each article scores one point per distinct keyword occurring anywhere in
//! the lowercased text (substring match, repeats ignored). Zero scores are
//! dropped; the rest are ranked by score with ties in catalog order.

use std::collections::HashSet;
use std::path::Path;

use lexsum_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of suggestions returned by [`ArticleCatalog::match_text`] callers.
pub const MAX_SUGGESTED_ARTICLES: usize = 3;

const BUILTIN_CATALOG: &str = include_str!("../data/articles.json");

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// A catalog entry with its keyword score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMatch {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: usize,
}

#[derive(Deserialize)]
struct CatalogFile {
    articles: Vec<Article>,
}

/// Read-only article catalog. Keywords are stored lowercased and deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Build a catalog from entries, normalizing keywords.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut normalized = Vec::with_capacity(articles.len());

        for mut article in articles {
            if article.id.trim().is_empty() {
                return Err(Error::Config("article catalog entry with empty id".into()));
            }
            if !ids.insert(article.id.clone()) {
                return Err(Error::Config(format!(
                    "duplicate article id in catalog: {}",
                    article.id
                )));
            }

            let mut seen = HashSet::new();
            article.keywords = article
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty() && seen.insert(k.clone()))
                .collect();
            normalized.push(article);
        }

        Ok(Self {
            articles: normalized,
        })
    }

    /// Parse `{"articles": [{id, title, description, keywords}]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid article catalog: {}", e)))?;
        Self::new(file.articles)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!("Loaded {} articles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load `path` when it exists, otherwise the built-in catalog.
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::builtin()
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Distinct keywords of `article` found in already-lowercased text.
    fn score(article: &Article, text_lower: &str) -> usize {
        article
            .keywords
            .iter()
            .filter(|k| text_lower.contains(k.as_str()))
            .count()
    }

    /// Top `limit` articles by score; score-0 articles are never returned.
    pub fn match_text(&self, text: &str, limit: usize) -> Vec<ArticleMatch> {
        let text_lower = text.to_lowercase();

        let mut matches: Vec<ArticleMatch> = self
            .articles
            .iter()
            .filter_map(|article| {
                let score = Self::score(article, &text_lower);
                (score > 0).then(|| ArticleMatch {
                    id: article.id.clone(),
                    title: article.title.clone(),
                    description: article.description.clone(),
                    score,
                })
            })
            .collect();

        // Stable: equal scores keep catalog order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);
        matches
    }
}
