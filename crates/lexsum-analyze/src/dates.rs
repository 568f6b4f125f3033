//! Date extraction with sentence context.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A literal date string and the sentence it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFinding {
    pub date: String,
    pub context: String,
}

/// Pattern families, scanned in this order. They are unanchored and may
/// overlap: `2024-03-15` also yields `24-03-15` from the first family.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // DD/MM/YYYY, MM-DD-YY, ...
        r"\d{1,2}[-/]\d{1,2}[-/]\d{2,4}",
        // YYYY-MM-DD, YYYY/MM/DD
        r"\d{4}[-/]\d{1,2}[-/]\d{1,2}",
        // March 15, 2024
        r"(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Find dates in `text`, one finding per distinct literal date string.
///
/// Findings come out in scan order: every match of the first family left to
/// right, then the second, then the third. A date seen again keeps the
/// context of its first occurrence.
pub fn extract_dates(text: &str) -> Vec<DateFinding> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut findings = Vec::new();

    for re in DATE_PATTERNS.iter() {
        for m in re.find_iter(text) {
            if seen.insert(m.as_str()) {
                findings.push(DateFinding {
                    date: m.as_str().to_string(),
                    context: sentence_around(text, m.start(), m.end()).to_string(),
                });
            }
        }
    }

    findings
}

/// Text between the nearest `.` before `start` and the nearest `.` at or
/// after `end` (or the text boundaries), trimmed.
fn sentence_around(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start].rfind('.').map(|i| i + 1).unwrap_or(0);
    let to = text[end..].find('.').map(|i| end + i).unwrap_or(text.len());
    text[from..to].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(findings: &[DateFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.date.as_str()).collect()
    }

    #[test]
    fn test_all_three_families() {
        let text = "The lease began on 01/04/2023. Rent review is due 2024-04-01. \
                    The tenant vacated on March 15, 2025 after notice.";
        let findings = extract_dates(text);
        assert_eq!(
            dates(&findings),
            vec!["01/04/2023", "24-04-01", "2024-04-01", "March 15, 2025"]
        );
        assert_eq!(findings[0].context, "The lease began on 01/04/2023");
        assert_eq!(findings[2].context, "Rent review is due 2024-04-01");
        assert_eq!(findings[3].context, "The tenant vacated on March 15, 2025 after notice");
    }

    #[test]
    fn test_duplicate_keeps_first_context() {
        let text = "Filed on 12/01/2022. Hearing adjourned. Judgment reserved on 12/01/2022 as well.";
        let findings = extract_dates(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].date, "12/01/2022");
        assert_eq!(findings[0].context, "Filed on 12/01/2022");
    }

    #[test]
    fn test_distinct_literals_are_not_merged() {
        let text = "Signed 15/03/2024. Registered 15-03-2024.";
        let findings = extract_dates(text);
        assert_eq!(dates(&findings), vec!["15/03/2024", "15-03-2024"]);
    }

    #[test]
    fn test_scan_order_is_family_then_position() {
        let text = "On June 1, 2020 and later 2021/07/09 and finally 3/4/22";
        let findings = extract_dates(text);
        assert_eq!(
            dates(&findings),
            vec!["21/07/09", "3/4/22", "2021/07/09", "June 1, 2020"]
        );
    }

    #[test]
    fn test_overlapping_families_are_all_reported() {
        let findings = extract_dates("Effective 2024-03-15.");
        assert_eq!(dates(&findings), vec!["24-03-15", "2024-03-15"]);
        assert!(findings.iter().all(|f| f.context == "Effective 2024-03-15"));
    }

    #[test]
    fn test_dates_embedded_in_other_tokens() {
        assert_eq!(dates(&extract_dates("Ref A12/05/2023 filed.")), vec!["12/05/2023"]);
        assert_eq!(
            dates(&extract_dates("Stamped 15/03/20245 copy.")),
            vec!["15/03/2024"]
        );
    }

    #[test]
    fn test_month_without_comma_and_context_at_boundaries() {
        let findings = extract_dates("Executed January 5 2021");
        assert_eq!(findings[0].date, "January 5 2021");
        assert_eq!(findings[0].context, "Executed January 5 2021");
    }

    #[test]
    fn test_no_dates() {
        assert!(extract_dates("").is_empty());
        assert!(extract_dates("Section 12 of the Act applies.").is_empty());
    }
}
