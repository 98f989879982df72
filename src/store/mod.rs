//! Saved-score store - a single-writer task owning the JSON file
//!
//! Handlers hold a cloneable `ScoreStore` and send commands over a
//! channel; the writer task serializes every mutation, so the file never
//! sees concurrent read-modify-write. A failed file write degrades to
//! memory-only: the task warns, counts the failure, and keeps serving
//! from the in-memory list, so the caller's save/delete still succeeds.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::SavedScore;
use crate::observability::{metrics, MetricsCollector};

/// Most recent entries kept on save
pub const MAX_SAVED_SCORES: usize = 50;

const COMMAND_BUFFER: usize = 64;

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store task is not running")]
    TaskGone,

    #[error("store file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

enum Command {
    Append(SavedScore, oneshot::Sender<()>),
    List(oneshot::Sender<Vec<SavedScore>>),
    Delete(Uuid, oneshot::Sender<bool>),
    Ping(oneshot::Sender<()>),
}

/// Handle to the writer task. Cheap to clone; all clones share the task.
#[derive(Clone)]
pub struct ScoreStore {
    tx: mpsc::Sender<Command>,
}

impl ScoreStore {
    /// Load the backing file and spawn the writer task. A missing file
    /// starts empty; an unreadable one warns and starts empty rather
    /// than failing startup.
    pub async fn open(path: impl Into<PathBuf>, collector: MetricsCollector) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let scores = load_scores(&path).await;
        info!("✓ Score store loaded ({} saved)", scores.len());
        collector
            .gauge(metrics::SAVED_SCORES_GAUGE, scores.len() as f64)
            .await;

        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(writer_task(path, scores, rx, collector));
        Ok(Self { tx })
    }

    /// Push a record to the front of the list, dropping the oldest
    /// entries past the cap, and persist.
    pub async fn append(&self, score: SavedScore) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Append(score, reply_tx)).await?;
        reply_rx.await.map_err(|_| StoreError::TaskGone)
    }

    /// Snapshot of the saved list, most recent first
    pub async fn list(&self) -> Result<Vec<SavedScore>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::List(reply_tx)).await?;
        reply_rx.await.map_err(|_| StoreError::TaskGone)
    }

    /// Remove the matching entry if present. Returns whether anything
    /// was removed; an absent id is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Delete(id, reply_tx)).await?;
        reply_rx.await.map_err(|_| StoreError::TaskGone)
    }

    /// Round-trip through the command channel; proves the writer task
    /// is alive. Used by the readiness probe.
    pub async fn ping(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Ping(reply_tx)).await?;
        reply_rx.await.map_err(|_| StoreError::TaskGone)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.tx.send(command).await.map_err(|_| StoreError::TaskGone)
    }
}

async fn writer_task(
    path: PathBuf,
    mut scores: Vec<SavedScore>,
    mut rx: mpsc::Receiver<Command>,
    collector: MetricsCollector,
) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Append(score, reply) => {
                scores.insert(0, score);
                scores.truncate(MAX_SAVED_SCORES);
                persist(&path, &scores, &collector).await;
                collector
                    .gauge(metrics::SAVED_SCORES_GAUGE, scores.len() as f64)
                    .await;
                let _ = reply.send(());
            }
            Command::List(reply) => {
                let _ = reply.send(scores.clone());
            }
            Command::Delete(id, reply) => {
                let before = scores.len();
                scores.retain(|s| s.id != id);
                let removed = scores.len() != before;
                if removed {
                    persist(&path, &scores, &collector).await;
                    collector
                        .gauge(metrics::SAVED_SCORES_GAUGE, scores.len() as f64)
                        .await;
                }
                let _ = reply.send(removed);
            }
            Command::Ping(reply) => {
                let _ = reply.send(());
            }
        }
    }
}

/// Write the whole list as a pretty-printed JSON array. Failures warn
/// and count; the in-memory list stays authoritative.
async fn persist(path: &Path, scores: &[SavedScore], collector: &MetricsCollector) {
    let json = match serde_json::to_string_pretty(scores) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize score store: {}", e);
            collector.increment(metrics::STORE_WRITE_FAILURES, 1).await;
            return;
        }
    };
    if let Err(e) = fs::write(path, json).await {
        warn!("Failed to write {}: {} (serving from memory)", path.display(), e);
        collector.increment(metrics::STORE_WRITE_FAILURES, 1).await;
    }
}

async fn load_scores(path: &Path) -> Vec<SavedScore> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to read {}: {} (starting empty)", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(scores) => scores,
        Err(e) => {
            warn!("Score store at {} is unreadable: {} (starting empty)", path.display(), e);
            Vec::new()
        }
    }
}
