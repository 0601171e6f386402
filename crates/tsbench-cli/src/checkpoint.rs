//! Append-only per-step checkpoints.
//!
//! One JSON record per line: `{"table":"d3","last_ts":1500000000120}`.
//! On restart the latest record per table wins; recovery inhibits
//! downstream DROP statements and makes generators skip rows at or
//! before the committed timestamp.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// One committed watermark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    /// Table name.
    pub table: String,
    /// Largest timestamp confirmed written.
    pub last_ts: i64,
}

struct StoreState {
    file: File,
    pending: HashMap<String, i64>,
    last_flush: Instant,
}

/// Writer-side checkpoint store with interval-batched commits.
pub struct CheckpointStore {
    path: PathBuf,
    interval: Duration,
    state: Mutex<StoreState>,
}

impl CheckpointStore {
    /// Open (append) the checkpoint file.
    pub fn open(path: impl Into<PathBuf>, interval_sec: u64) -> Result<Self, CliError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| CliError::Checkpoint {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self {
            path,
            interval: Duration::from_secs(interval_sec.max(1)),
            state: Mutex::new(StoreState {
                file,
                pending: HashMap::new(),
                last_flush: Instant::now(),
            }),
        })
    }

    /// Record watermarks; persisted once the commit interval elapsed.
    pub fn commit(&self, watermarks: &[(String, i64)]) {
        let mut state = self.state.lock();
        for (table, last_ts) in watermarks {
            let entry = state.pending.entry(table.clone()).or_insert(*last_ts);
            *entry = (*entry).max(*last_ts);
        }
        if state.last_flush.elapsed() >= self.interval {
            self.flush_locked(&mut state);
        }
    }

    /// Persist everything pending now.
    pub fn flush(&self) {
        let mut state = self.state.lock();
        self.flush_locked(&mut state);
    }

    fn flush_locked(&self, state: &mut StoreState) {
        if state.pending.is_empty() {
            state.last_flush = Instant::now();
            return;
        }
        let mut buffer = String::new();
        for (table, last_ts) in state.pending.drain() {
            let record = CheckpointRecord { table, last_ts };
            match serde_json::to_string(&record) {
                Ok(line) => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                }
                Err(e) => tracing::warn!(error = %e, "checkpoint record serialization failed"),
            }
        }
        if let Err(e) = state.file.write_all(buffer.as_bytes()).and_then(|()| state.file.sync_data())
        {
            tracing::warn!(path = %self.path.display(), error = %e, "checkpoint write failed");
        }
        state.last_flush = Instant::now();
    }
}

impl Drop for CheckpointStore {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Load the latest watermark per table from a checkpoint file.
///
/// A missing file yields an empty map (fresh run).
pub fn load(path: &Path) -> Result<HashMap<String, i64>, CliError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(source) => {
            return Err(CliError::Checkpoint { path: path.display().to_string(), source });
        }
    };
    let mut out = HashMap::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.map_err(|source| CliError::Checkpoint { path: path.display().to_string(), source })?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<CheckpointRecord>(&line) {
            Ok(record) => {
                let entry = out.entry(record.table).or_insert(record.last_ts);
                *entry = (*entry).max(record.last_ts);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping bad checkpoint line");
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_latest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.ckpt");

        {
            let store = CheckpointStore::open(&path, 1).unwrap();
            store.commit(&[("d1".to_owned(), 100), ("d2".to_owned(), 50)]);
            store.flush();
            store.commit(&[("d1".to_owned(), 200)]);
            // Dropping flushes the rest.
        }

        let map = load(&path).unwrap();
        assert_eq!(map.get("d1"), Some(&200));
        assert_eq!(map.get("d2"), Some(&50));
    }

    #[test]
    fn test_missing_file_is_fresh_run() {
        let dir = tempfile::tempdir().unwrap();
        let map = load(&dir.path().join("absent.ckpt")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_interval_batches_commits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.ckpt");
        let store = CheckpointStore::open(&path, 3600).unwrap();
        store.commit(&[("d1".to_owned(), 10)]);
        // Interval has not elapsed; nothing on disk yet.
        assert!(load(&path).unwrap().is_empty());
        store.flush();
        assert_eq!(load(&path).unwrap().get("d1"), Some(&10));
    }

    #[test]
    fn test_watermarks_never_regress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.ckpt");
        let store = CheckpointStore::open(&path, 1).unwrap();
        store.commit(&[("d1".to_owned(), 100)]);
        store.commit(&[("d1".to_owned(), 40)]);
        store.flush();
        assert_eq!(load(&path).unwrap().get("d1"), Some(&100));
    }

    #[test]
    fn test_bad_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.ckpt");
        std::fs::write(&path, "{\"table\":\"d1\",\"last_ts\":7}\nnot-json\n").unwrap();
        let map = load(&path).unwrap();
        assert_eq!(map.get("d1"), Some(&7));
    }
}
