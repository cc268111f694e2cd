//! Scan Reports
//!
//! Aggregates per-file results into a report and renders it as JSON or as
//! colored human-readable output.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{FileScanResult, MatchType};

/// The full result of one agent run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub agent_id: i32,
    pub started_at: String,
    pub files: Vec<FileScanResult>,
}

impl ScanReport {
    pub fn new(agent_id: i32) -> Self {
        Self {
            agent_id,
            started_at: chrono::Utc::now().to_rfc3339(),
            files: Vec::new(),
        }
    }

    pub fn add_files(&mut self, mut results: Vec<FileScanResult>) {
        self.files.append(&mut results);
    }

    pub fn total_matches(&self) -> usize {
        self.files.iter().map(|f| f.matches.len()).sum()
    }

    pub fn files_scanned(&self) -> usize {
        self.files.iter().filter(|f| f.skipped.is_none()).count()
    }

    pub fn count_by_type(&self, match_type: MatchType) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.matches)
            .filter(|m| m.match_type == match_type)
            .count()
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the report for a terminal: one block per file, one line per
    /// finding, and a summary footer.
    pub fn print_human(&self) {
        for file in &self.files {
            if let Some(reason) = &file.skipped {
                println!("{} {}", file.path.bold(), format!("[skipped: {reason}]").yellow());
                continue;
            }
            if file.matches.is_empty() {
                continue;
            }

            println!("{}", file.path.bold());
            for m in &file.matches {
                println!(
                    "  {} {} {}",
                    format!("[{}]", m.match_type).cyan(),
                    format!("@{}..{}", m.start, m.end).dimmed(),
                    m.content
                );
            }
        }

        println!();
        println!(
            "{} {} files scanned, {} findings ({} statement, {} email, {} url, {} author)",
            "Summary:".green().bold(),
            self.files_scanned(),
            self.total_matches(),
            self.count_by_type(MatchType::Statement),
            self.count_by_type(MatchType::Email),
            self.count_by_type(MatchType::Url),
            self.count_by_type(MatchType::Author),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CopyrightMatch;

    fn result_with(path: &str, types: &[MatchType]) -> FileScanResult {
        FileScanResult {
            path: path.to_string(),
            matches: types
                .iter()
                .map(|&mt| CopyrightMatch {
                    matcher_id: mt.as_str().to_string(),
                    match_type: mt,
                    start: 0,
                    end: 1,
                    content: "x".to_string(),
                })
                .collect(),
            skipped: None,
        }
    }

    #[test]
    fn test_totals_and_type_counts() {
        let mut report = ScanReport::new(7);
        report.add_files(vec![
            result_with("a.c", &[MatchType::Statement, MatchType::Email]),
            result_with("b.c", &[MatchType::Statement]),
        ]);

        assert_eq!(report.agent_id, 7);
        assert_eq!(report.files_scanned(), 2);
        assert_eq!(report.total_matches(), 3);
        assert_eq!(report.count_by_type(MatchType::Statement), 2);
        assert_eq!(report.count_by_type(MatchType::Email), 1);
        assert_eq!(report.count_by_type(MatchType::Url), 0);
    }

    #[test]
    fn test_skipped_files_not_counted_as_scanned() {
        let mut report = ScanReport::new(1);
        report.add_files(vec![FileScanResult {
            path: "blob.bin".to_string(),
            matches: Vec::new(),
            skipped: Some("binary".to_string()),
        }]);

        assert_eq!(report.files_scanned(), 0);
        assert_eq!(report.total_matches(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut report = ScanReport::new(2);
        report.add_files(vec![result_with("a.c", &[MatchType::Url])]);

        let json = report.to_json().unwrap();
        let parsed: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.agent_id, 2);
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].matches[0].match_type, MatchType::Url);
    }
}
