//! Single-writer persistence queue.
//!
//! The UI hands full-sequence snapshots to a dedicated writer thread and
//! never waits on the disk. Writes are strictly ordered; queued snapshots
//! are coalesced to the newest before each write, since every write
//! serializes the entire sequence and a later one fully supersedes an
//! earlier one. A write that keeps failing after retries lands in the
//! recovery log instead of crashing or blocking anything.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::io::lock::StoreLock;
use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::io::store::{FileStore, save_items};
use crate::model::item::Item;

/// Backoff schedule between write attempts.
const RETRY_DELAYS: [Duration; 2] = [Duration::from_millis(50), Duration::from_millis(250)];

pub struct Persister {
    tx: Option<Sender<Vec<Item>>>,
    handle: Option<JoinHandle<()>>,
}

impl Persister {
    /// Start the writer thread for the given store directory.
    pub fn spawn(store_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::spawn(move || writer_loop(rx, store_dir));
        Persister {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Queue a snapshot for writing. Fire-and-forget: returns immediately,
    /// failures surface in the recovery log, not here.
    pub fn queue(&self, items: &[Item]) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(items.to_vec());
        }
    }

    /// Drain pending snapshots and stop the writer. Called on quit so the
    /// last mutation reaches disk before the process exits.
    pub fn shutdown(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Persister {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn writer_loop(rx: Receiver<Vec<Item>>, store_dir: PathBuf) {
    let store = FileStore::new(&store_dir);
    while let Ok(mut snapshot) = rx.recv() {
        // Coalesce: only the newest queued snapshot matters
        while let Ok(newer) = rx.try_recv() {
            snapshot = newer;
        }
        write_with_retry(&store, &snapshot);
    }
}

fn write_with_retry(store: &FileStore, items: &[Item]) {
    let mut last_err = None;

    for (attempt, delay) in std::iter::once(None)
        .chain(RETRY_DELAYS.iter().map(Some))
        .enumerate()
    {
        if let Some(delay) = delay {
            std::thread::sleep(*delay);
        }
        let result = StoreLock::acquire(store.dir())
            .map_err(|e| e.to_string())
            .and_then(|_lock| save_items(store, items).map_err(|e| e.to_string()));
        match result {
            Ok(()) => return,
            Err(e) => {
                last_err = Some(format!("attempt {}: {}", attempt + 1, e));
            }
        }
    }

    let payload = serde_json::to_string_pretty(items).unwrap_or_else(|_| String::from("[]"));
    recovery::log_recovery(
        store.dir(),
        RecoveryEntry::now(
            RecoveryCategory::Write,
            format!(
                "items write failed ({})",
                last_err.unwrap_or_else(|| "unknown".into())
            ),
            payload,
        ),
    );
}
