//! Keyword-based sentence importance tiers.

use serde::{Deserialize, Serialize};

use crate::text::split_sentences;

pub const DEFAULT_HIGH_KEYWORDS: &[&str] = &[
    "urgent",
    "critical",
    "immediate",
    "deadline",
    "must",
    "required",
    "mandatory",
];

pub const DEFAULT_MEDIUM_KEYWORDS: &[&str] = &[
    "important",
    "significant",
    "consider",
    "should",
    "recommended",
];

/// Maximum sentences kept per tier.
pub const DEFAULT_MAX_PER_TIER: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceLevel {
    High,
    Medium,
    Low,
}

/// Sentences grouped by tier, each in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Importance {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Importance {
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty() && self.low.is_empty()
    }
}

/// Keyword sets and the per-tier cap.
///
/// Keywords are stored lowercased and trimmed, with empties removed.
#[derive(Debug, Clone)]
pub struct ImportanceRules {
    high_keywords: Vec<String>,
    medium_keywords: Vec<String>,
    max_per_tier: usize,
}

impl Default for ImportanceRules {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_KEYWORDS, DEFAULT_MEDIUM_KEYWORDS, DEFAULT_MAX_PER_TIER)
    }
}

fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

impl ImportanceRules {
    pub fn new<S: AsRef<str>>(high: &[S], medium: &[S], max_per_tier: usize) -> Self {
        Self {
            high_keywords: normalize_keywords(high),
            medium_keywords: normalize_keywords(medium),
            max_per_tier,
        }
    }

    pub fn high_keywords(&self) -> &[String] {
        &self.high_keywords
    }

    pub fn medium_keywords(&self) -> &[String] {
        &self.medium_keywords
    }

    /// Tier of one sentence. Keywords match as case-insensitive substrings;
    /// the high set is checked first.
    pub fn classify_sentence(&self, sentence: &str) -> ImportanceLevel {
        let lower = sentence.to_lowercase();
        let hit = |keywords: &[String]| keywords.iter().any(|k| lower.contains(k.as_str()));

        if hit(self.high_keywords.as_slice()) {
            ImportanceLevel::High
        } else if hit(self.medium_keywords.as_slice()) {
            ImportanceLevel::Medium
        } else {
            ImportanceLevel::Low
        }
    }

    /// Split `text` on periods and bucket every sentence.
    ///
    /// A full tier drops later sentences of that tier; they are never moved
    /// to another tier.
    pub fn classify(&self, text: &str) -> Importance {
        let mut importance = Importance::default();

        for sentence in split_sentences(text) {
            let bucket = match self.classify_sentence(sentence) {
                ImportanceLevel::High => &mut importance.high,
                ImportanceLevel::Medium => &mut importance.medium,
                ImportanceLevel::Low => &mut importance.low,
            };
            if bucket.len() < self.max_per_tier {
                bucket.push(sentence.to_string());
            }
        }

        importance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers() {
        let rules = ImportanceRules::default();
        let importance =
            rules.classify("This is urgent. The meeting is important. Nothing special here.");
        assert_eq!(importance.high, vec!["This is urgent"]);
        assert_eq!(importance.medium, vec!["The meeting is important"]);
        assert_eq!(importance.low, vec!["Nothing special here"]);
    }

    #[test]
    fn test_high_wins_over_medium() {
        let rules = ImportanceRules::default();
        assert_eq!(
            rules.classify_sentence("You should file before the DEADLINE"),
            ImportanceLevel::High
        );
    }

    #[test]
    fn test_tier_cap_does_not_spill() {
        let text: String = (1..=10)
            .map(|i| format!("Clause {} is mandatory. ", i))
            .collect();
        let importance = ImportanceRules::default().classify(&text);

        assert_eq!(importance.high.len(), 5);
        assert_eq!(importance.high[0], "Clause 1 is mandatory");
        assert_eq!(importance.high[4], "Clause 5 is mandatory");
        assert!(importance.medium.is_empty());
        assert!(importance.low.is_empty());
    }

    #[test]
    fn test_substring_matching() {
        // "must" inside "mustard" still counts.
        let rules = ImportanceRules::default();
        assert_eq!(rules.classify_sentence("Mustard seeds"), ImportanceLevel::High);
    }

    #[test]
    fn test_custom_rules() {
        let rules = ImportanceRules::new(&["Forthwith"], &[], 1);
        let importance = rules.classify("Vacate forthwith. Pay forthwith. Urgent.");
        assert_eq!(importance.high, vec!["Vacate forthwith"]);
        assert_eq!(importance.low, vec!["Urgent"]);
    }

    #[test]
    fn test_keywords_normalized_once() {
        let rules = ImportanceRules::new(&["  Breach ", "", "   "], &["NOTICE"], 5);
        assert_eq!(rules.high_keywords(), ["breach"]);
        assert_eq!(rules.medium_keywords(), ["notice"]);

        assert_eq!(rules.classify_sentence("Material BREACH alleged"), ImportanceLevel::High);
        assert_eq!(rules.classify_sentence("Notice was served"), ImportanceLevel::Medium);
        // Blank keywords would otherwise match every sentence.
        assert_eq!(rules.classify_sentence("Nothing here"), ImportanceLevel::Low);
    }

    #[test]
    fn test_empty_input() {
        let importance = ImportanceRules::default().classify("  . .  ");
        assert!(importance.is_empty());
    }
}
