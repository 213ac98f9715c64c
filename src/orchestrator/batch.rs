//! Handle over a running batch

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::reasoner::execution_error_from_join;
use super::result::ReasoningResult;
use super::stats::{lock_stats, ReasoningStats};

struct BatchEntry {
    task_id: String,
    handle: JoinHandle<ReasoningResult>,
}

/// Tasks of one batch, in submission order
///
/// Dropping a `BatchRun` without joining leaves its tasks running detached.
pub struct BatchRun {
    entries: Vec<BatchEntry>,
    stats: Arc<Mutex<ReasoningStats>>,
}

impl BatchRun {
    pub(crate) fn new(stats: Arc<Mutex<ReasoningStats>>) -> Self {
        Self {
            entries: Vec::new(),
            stats,
        }
    }

    pub(crate) fn push(&mut self, task_id: String, handle: JoinHandle<ReasoningResult>) {
        self.entries.push(BatchEntry { task_id, handle });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn task_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.task_id.as_str()).collect()
    }

    /// Whether the task at `index` has stopped running; `false` when out of range
    pub fn is_finished(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| entry.handle.is_finished())
    }

    /// Request cancellation of the task at `index`
    ///
    /// Returns `false` when the index is out of range or the task already
    /// finished. A task that completes before the abort lands keeps its result.
    pub fn cancel(&self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if !entry.handle.is_finished() => {
                debug!(task_id = %entry.task_id, "Cancelling task");
                entry.handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Cancel every task that has not finished yet
    pub fn cancel_all(&self) -> usize {
        (0..self.entries.len()).filter(|i| self.cancel(*i)).count()
    }

    /// Wait for every task and return results in submission order
    pub async fn join(self) -> Vec<ReasoningResult> {
        let mut results = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            let result = match entry.handle.await {
                Ok(result) => result,
                Err(join_error) => {
                    let error = execution_error_from_join(join_error);
                    lock_stats(&self.stats).record_failure();
                    warn!(task_id = %entry.task_id, error = %error, "Task did not complete");
                    ReasoningResult::degraded(entry.task_id, &error)
                }
            };
            results.push(result);
        }

        results
    }
}
