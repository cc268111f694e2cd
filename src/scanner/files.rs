//! File Scanning
//!
//! Walks files and directories, reads text content, and runs the matchers
//! over each file. Binary files, oversized files, and unreadable entries are
//! skipped with a recorded reason rather than failing the whole scan.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use crate::state::AgentState;
use crate::types::{FileScanResult, ScanConfig};

use super::scan_text;

/// How many leading bytes are checked for the binary (NUL byte) heuristic.
const BINARY_SNIFF_LEN: usize = 8192;

/// Scan a file or directory tree with the matchers in `state`.
///
/// Directories are walked recursively; entries are visited in name order so
/// output is stable across platforms. Returns one `FileScanResult` per
/// regular file encountered. Fails only when `path` itself does not exist.
pub fn scan_path(state: &AgentState, path: &str, config: &ScanConfig) -> Result<Vec<FileScanResult>> {
    let root = Path::new(path);
    if !root.exists() {
        bail!("no such file or directory: {path}");
    }

    let mut results = Vec::new();
    walk(state, root, config, &mut results);
    info!(path, files = results.len(), "scan complete");
    Ok(results)
}

fn walk(state: &AgentState, path: &Path, config: &ScanConfig, results: &mut Vec<FileScanResult>) {
    if path.is_dir() {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read directory, skipping");
                return;
            }
        };

        let mut paths: Vec<_> = entries.flatten().map(|e| e.path()).collect();
        paths.sort();

        for child in paths {
            walk(state, &child, config, results);
        }
        return;
    }

    if path.is_file() {
        results.push(scan_file(state, path, config));
    }
}

/// Scan one regular file. Never fails: problems become a `skipped` reason.
fn scan_file(state: &AgentState, path: &Path, config: &ScanConfig) -> FileScanResult {
    let display_path = path.to_string_lossy().to_string();

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return skipped(display_path, format!("unreadable: {e}")),
    };

    if metadata.len() > config.max_file_size {
        debug!(path = %display_path, size = metadata.len(), "file over size cap, skipping");
        return skipped(display_path, format!("too large ({} bytes)", metadata.len()));
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => return skipped(display_path, format!("unreadable: {e}")),
    };

    if looks_binary(&bytes) {
        debug!(path = %display_path, "binary file, skipping");
        return skipped(display_path, "binary".to_string());
    }

    let text = String::from_utf8_lossy(&bytes);
    let matches = scan_text(state, &text);
    debug!(path = %display_path, matches = matches.len(), "file scanned");

    FileScanResult {
        path: display_path,
        matches,
        skipped: None,
    }
}

fn skipped(path: String, reason: String) -> FileScanResult {
    FileScanResult {
        path,
        matches: Vec::new(),
        skipped: Some(reason),
    }
}

/// NUL byte in the leading chunk means we treat the file as binary.
fn looks_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}
