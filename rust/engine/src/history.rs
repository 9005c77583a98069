//! Storage for completed hands.
//!
//! [`HandStore`] is the seam the host persists through; [`MemoryStore`]
//! keeps records in process and [`JsonlStore`] appends one JSON record per
//! line to a file.

use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::logger::HandRecord;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Hand {0} is already stored")]
    DuplicateId(String),
}

pub trait HandStore {
    /// Stores a completed hand and returns it as stored.
    fn create(&mut self, record: HandRecord) -> Result<HandRecord, HistoryError>;

    /// All stored hands, newest first.
    fn list(&self) -> Result<Vec<HandRecord>, HistoryError>;
}

/// Orders records newest first. `created_at` is RFC3339 UTC, so the
/// string order is the time order; equal stamps keep the latest insert
/// first.
fn newest_first(mut records: Vec<HandRecord>) -> Vec<HandRecord> {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    hands: Vec<HandRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl HandStore for MemoryStore {
    fn create(&mut self, record: HandRecord) -> Result<HandRecord, HistoryError> {
        if self.hands.iter().any(|h| h.id == record.id) {
            return Err(HistoryError::DuplicateId(record.id));
        }
        self.hands.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<HandRecord>, HistoryError> {
        Ok(newest_first(self.hands.clone()))
    }
}

/// Append-only JSONL file of [`HandRecord`]s, LF line endings.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Opens (or creates) the file, creating missing parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<HandRecord>, HistoryError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let rec = serde_json::from_str(&line)
                .map_err(|source| HistoryError::Malformed { line: i + 1, source })?;
            records.push(rec);
        }
        Ok(records)
    }
}

impl HandStore for JsonlStore {
    fn create(&mut self, record: HandRecord) -> Result<HandRecord, HistoryError> {
        if self.read_all()?.iter().any(|h| h.id == record.id) {
            return Err(HistoryError::DuplicateId(record.id));
        }
        let line = serde_json::to_string(&record)?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut w = BufWriter::new(file);
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        tracing::debug!(hand_id = %record.id, path = %self.path.display(), "hand stored");
        Ok(record)
    }

    fn list(&self) -> Result<Vec<HandRecord>, HistoryError> {
        self.read_all().map(newest_first)
    }
}
