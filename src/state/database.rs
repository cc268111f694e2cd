//! Findings Database
//!
//! SQLite-backed store for scan runs and their findings.
//! Uses rusqlite for synchronous, single-process access.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::Path;

use crate::types::{CopyrightMatch, MatchType, StoredFinding};

use super::schema::{CREATE_TABLES, SCHEMA_VERSION};

/// Handle to the findings database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `db_path` and initialize the schema.
    pub fn open(db_path: &str) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create db directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("failed to open database: {db_path}"))?;

        // WAL for better concurrent read performance
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Self::init_schema(conn)
    }

    /// Open an in-memory database (useful for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Self::init_schema(conn)
    }

    fn init_schema(conn: Connection) -> Result<Self> {
        conn.execute_batch(CREATE_TABLES)
            .context("failed to create tables")?;
        conn.execute(
            "INSERT OR REPLACE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
            params![SCHEMA_VERSION],
        )
        .context("failed to update schema version")?;
        Ok(Self { conn })
    }

    // ─── Scan Runs ───────────────────────────────────────────────

    /// Record the start of a scan run and return its id.
    pub fn insert_run(&self, agent_id: i32) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO scan_runs (agent_id, started_at) VALUES (?1, ?2)",
            params![agent_id, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Mark a run finished and record its totals.
    pub fn finish_run(&self, run_id: i64, files_scanned: u64, findings: u64) -> Result<()> {
        self.conn.execute(
            "UPDATE scan_runs SET finished_at = ?1, files_scanned = ?2, findings = ?3 WHERE id = ?4",
            params![
                chrono::Utc::now().to_rfc3339(),
                files_scanned as i64,
                findings as i64,
                run_id
            ],
        )?;
        Ok(())
    }

    pub fn run_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM scan_runs", [], |row| row.get(0))?;
        Ok(count)
    }

    // ─── Findings ────────────────────────────────────────────────

    pub fn insert_finding(
        &self,
        run_id: i64,
        file_path: &str,
        m: &CopyrightMatch,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO findings (run_id, file_path, matcher_id, match_type, start_byte, end_byte, content)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                run_id,
                file_path,
                m.matcher_id,
                m.match_type.as_str(),
                m.start as i64,
                m.end as i64,
                m.content
            ],
        )?;
        Ok(())
    }

    pub fn findings_for_run(&self, run_id: i64) -> Result<Vec<StoredFinding>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, run_id, file_path, matcher_id, match_type, start_byte, end_byte, content
             FROM findings WHERE run_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![run_id], row_to_finding)?;
        collect_findings(rows)
    }

    pub fn findings_for_file(&self, file_path: &str) -> Result<Vec<StoredFinding>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, run_id, file_path, matcher_id, match_type, start_byte, end_byte, content
             FROM findings WHERE file_path = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![file_path], row_to_finding)?;
        collect_findings(rows)
    }
}

fn row_to_finding(row: &Row<'_>) -> rusqlite::Result<StoredFinding> {
    let type_str: String = row.get(4)?;
    let match_type = MatchType::parse(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown match type: {type_str}").into(),
        )
    })?;

    Ok(StoredFinding {
        id: row.get(0)?,
        run_id: row.get(1)?,
        file_path: row.get(2)?,
        matcher_id: row.get(3)?,
        match_type,
        start_byte: row.get(5)?,
        end_byte: row.get(6)?,
        content: row.get(7)?,
    })
}

fn collect_findings(
    rows: impl Iterator<Item = rusqlite::Result<StoredFinding>>,
) -> Result<Vec<StoredFinding>> {
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("failed to read finding row")?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(matcher_id: &str, match_type: MatchType) -> CopyrightMatch {
        CopyrightMatch {
            matcher_id: matcher_id.to_string(),
            match_type,
            start: 10,
            end: 42,
            content: "Copyright 2014 Siemens AG".to_string(),
        }
    }

    #[test]
    fn test_insert_and_read_back_findings() {
        let db = Database::open_in_memory().unwrap();
        let run_id = db.insert_run(7).unwrap();

        db.insert_finding(run_id, "/src/a.c", &sample_match("copyright", MatchType::Statement))
            .unwrap();
        db.insert_finding(run_id, "/src/a.c", &sample_match("email", MatchType::Email))
            .unwrap();

        let findings = db.findings_for_run(run_id).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].matcher_id, "copyright");
        assert_eq!(findings[0].match_type, MatchType::Statement);
        assert_eq!(findings[1].match_type, MatchType::Email);
        assert_eq!(findings[0].start_byte, 10);
        assert_eq!(findings[0].end_byte, 42);
    }

    #[test]
    fn test_findings_for_file_filters_by_path() {
        let db = Database::open_in_memory().unwrap();
        let run_id = db.insert_run(1).unwrap();

        db.insert_finding(run_id, "/src/a.c", &sample_match("copyright", MatchType::Statement))
            .unwrap();
        db.insert_finding(run_id, "/src/b.c", &sample_match("copyright", MatchType::Statement))
            .unwrap();

        let a = db.findings_for_file("/src/a.c").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].file_path, "/src/a.c");
    }

    #[test]
    fn test_finish_run_records_totals() {
        let db = Database::open_in_memory().unwrap();
        let run_id = db.insert_run(3).unwrap();
        db.finish_run(run_id, 12, 34).unwrap();

        let (files, findings): (i64, i64) = db
            .conn
            .query_row(
                "SELECT files_scanned, findings FROM scan_runs WHERE id = ?1",
                params![run_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(files, 12);
        assert_eq!(findings, 34);
        assert_eq!(db.run_count().unwrap(), 1);
    }
}
