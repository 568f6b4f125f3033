//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default maximum chunk length, in characters, fed to the summarizer.
pub const DEFAULT_CHUNK_CHARS: usize = 1024;
/// Chunks with fewer trimmed characters than this are not summarized.
pub const MIN_SUBSTANTIVE_CHARS: usize = 100;
/// Default number of chunks summarized concurrently.
pub const DEFAULT_SUMMARY_CONCURRENCY: usize = 2;
/// Default per-chunk summarizer timeout.
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 60;
/// Default upload limit (10 MB).
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;

/// Paths to all LexSum data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Rendered reports (`data/reports/`).
    pub reports: PathBuf,
    /// Optional article catalog override (`data/articles.json`).
    pub articles_file: PathBuf,
    /// Summarizer configuration (`data/summarizer-config.json`).
    pub summarizer_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            reports: root.join("reports"),
            articles_file: root.join("articles.json"),
            summarizer_config_file: root.join("summarizer-config.json"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(&self.reports)?;
        Ok(())
    }
}

/// Tuning knobs for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Maximum chunk length in characters.
    pub chunk_chars: usize,
    /// Minimum trimmed length for a chunk to be summarized.
    pub min_chunk_chars: usize,
    /// Chunks summarized in parallel (results are still joined in order).
    pub summary_concurrency: usize,
    /// Per-chunk summarizer timeout in seconds.
    pub summary_timeout_secs: u64,
}

impl AnalysisSettings {
    pub fn summary_timeout(&self) -> Duration {
        Duration::from_secs(self.summary_timeout_secs)
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            chunk_chars: DEFAULT_CHUNK_CHARS,
            min_chunk_chars: MIN_SUBSTANTIVE_CHARS,
            summary_concurrency: DEFAULT_SUMMARY_CONCURRENCY,
            summary_timeout_secs: DEFAULT_SUMMARY_TIMEOUT_SECS,
        }
    }
}

/// Top-level LexSum configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexSumConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// Analysis pipeline settings.
    pub analysis: AnalysisSettings,
}

impl LexSumConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration from `lookup` (variable name to value) and defaults.
    ///
    /// Zero or unparsable values fall back to the default.
    pub fn from_lookup(
        data_dir: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::io::Result<Self> {
        let parse = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let positive = |key: &str| parse(key).filter(|n| *n > 0);
        let positive_usize =
            |key: &str| positive(key).and_then(|n| usize::try_from(n).ok());

        let port = parse("PORT")
            .and_then(|n| u16::try_from(n).ok())
            .unwrap_or(5001);
        let max_upload_mb = positive_usize("MAX_UPLOAD_MB").unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        let analysis = AnalysisSettings {
            chunk_chars: positive_usize("LEXSUM_CHUNK_CHARS").unwrap_or(DEFAULT_CHUNK_CHARS),
            min_chunk_chars: MIN_SUBSTANTIVE_CHARS,
            summary_concurrency: positive_usize("LEXSUM_SUMMARY_CONCURRENCY")
                .unwrap_or(DEFAULT_SUMMARY_CONCURRENCY),
            summary_timeout_secs: positive("LEXSUM_SUMMARY_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_SUMMARY_TIMEOUT_SECS),
        };

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_creates_reports_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("data")).unwrap();
        assert!(paths.reports.is_dir());
        assert_eq!(paths.articles_file, dir.path().join("data/articles.json"));
    }

    #[test]
    fn test_default_analysis_settings() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.chunk_chars, 1024);
        assert_eq!(settings.min_chunk_chars, 100);
        assert_eq!(settings.summary_timeout(), Duration::from_secs(60));
    }

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_values_from_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexSumConfig::from_lookup(
            dir.path(),
            lookup(&[
                ("PORT", "8080"),
                ("MAX_UPLOAD_MB", "2"),
                ("LEXSUM_CHUNK_CHARS", " 512 "),
                ("LEXSUM_SUMMARY_CONCURRENCY", "4"),
                ("LEXSUM_SUMMARY_TIMEOUT_SECS", "15"),
            ]),
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
        assert_eq!(config.analysis.chunk_chars, 512);
        assert_eq!(config.analysis.summary_concurrency, 4);
        assert_eq!(config.analysis.summary_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexSumConfig::from_lookup(
            dir.path(),
            lookup(&[("LEXSUM_SUMMARY_TIMEOUT_SECS", "0"), ("LEXSUM_CHUNK_CHARS", "0")]),
        )
        .unwrap();

        assert_eq!(config.analysis.summary_timeout_secs, DEFAULT_SUMMARY_TIMEOUT_SECS);
        assert_eq!(config.analysis.chunk_chars, DEFAULT_CHUNK_CHARS);
    }

    #[test]
    fn test_huge_upload_limit_saturates() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexSumConfig::from_lookup(
            dir.path(),
            lookup(&[("MAX_UPLOAD_MB", "18446744073709551615")]),
        )
        .unwrap();
        assert_eq!(config.max_upload_bytes, usize::MAX);
    }

    #[test]
    fn test_invalid_values_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexSumConfig::from_lookup(
            dir.path(),
            lookup(&[("PORT", "99999"), ("MAX_UPLOAD_MB", "lots")]),
        )
        .unwrap();
        assert_eq!(config.port, 5001);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_MB * 1024 * 1024);
    }
}
