//! Append-only recovery log.
//!
//! Data the app could not save normally (failed persistence payloads,
//! corrupt blobs discarded at load time) lands here instead of vanishing.
//! The log is plain markdown so it can be read and pruned by hand.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- tick recovery log — append-only error recovery data
     This file captures list data that tick couldn't save or read normally.
     If items went missing, check here. Safe to delete if stale. -->

---
";

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    /// A store write failed after retries; body holds the serialized list.
    Write,
    /// The store payload didn't parse at load; body holds the raw payload.
    Parse,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Write => write!(f, "write"),
            RecoveryCategory::Parse => write!(f, "parse"),
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub body: String,
}

impl RecoveryEntry {
    pub fn now(category: RecoveryCategory, description: impl Into<String>, body: String) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            body,
        }
    }

    fn to_markdown(&self) -> String {
        let mut out = format!(
            "## {} — {}: {}\n\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        );
        out.push_str("```\n");
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```\n\n---\n");
        out
    }
}

/// Path of the recovery log inside the store directory.
pub fn recovery_log_path(store_dir: &Path) -> PathBuf {
    store_dir.join(".recovery.log")
}

/// Append an entry to the recovery log, creating it (with header) on first
/// use. Best-effort: logging failures are swallowed.
pub fn log_recovery(store_dir: &Path, entry: RecoveryEntry) {
    let _ = try_log(store_dir, &entry);
}

fn try_log(store_dir: &Path, entry: &RecoveryEntry) -> io::Result<()> {
    let path = recovery_log_path(store_dir);
    let fresh = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if fresh {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically via a temp file in the same
/// directory plus rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
