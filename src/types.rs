//! Copyscan - Type Definitions
//!
//! Shared types for the copyright-scanning agent.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Matches ─────────────────────────────────────────────────────

/// The category of text a matcher looks for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Statement,
    Email,
    Url,
    Author,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Statement => "statement",
            MatchType::Email => "email",
            MatchType::Url => "url",
            MatchType::Author => "author",
        }
    }

    /// Parse a type name as it appears on the CLI or in the database.
    pub fn parse(s: &str) -> Option<MatchType> {
        match s.trim().to_ascii_lowercase().as_str() {
            "statement" => Some(MatchType::Statement),
            "email" => Some(MatchType::Email),
            "url" => Some(MatchType::Url),
            "author" => Some(MatchType::Author),
            _ => None,
        }
    }

    pub fn all() -> [MatchType; 4] {
        [
            MatchType::Statement,
            MatchType::Email,
            MatchType::Url,
            MatchType::Author,
        ]
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding produced by applying a matcher to file content.
///
/// `start`/`end` are byte offsets into the scanned text; `content` is the
/// cleaned-up match text, which may be shorter than the raw span.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CopyrightMatch {
    pub matcher_id: String,
    pub match_type: MatchType,
    pub start: usize,
    pub end: usize,
    pub content: String,
}

/// The outcome of scanning a single file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileScanResult {
    pub path: String,
    pub matches: Vec<CopyrightMatch>,
    /// Reason the file was skipped (binary, too large, unreadable), if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

/// A finding as stored in (and read back from) the findings database.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFinding {
    pub id: i64,
    pub run_id: i64,
    pub file_path: String,
    pub matcher_id: String,
    pub match_type: MatchType,
    pub start_byte: i64,
    pub end_byte: i64,
    pub content: String,
}

// ─── Configuration ───────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    /// Match types enabled when the CLI does not name any.
    pub default_types: Vec<MatchType>,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
    pub db_path: String,
    pub log_level: LogLevel,
    pub version: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Returns the default `ScanConfig`. Callers merge this into a partially
/// populated config loaded from disk.
pub fn default_config() -> ScanConfig {
    ScanConfig {
        default_types: MatchType::all().to_vec(),
        max_file_size: 10 * 1024 * 1024,
        db_path: "~/.copyscan/findings.db".to_string(),
        log_level: LogLevel::Warn,
        version: "0.1.0".to_string(),
    }
}
