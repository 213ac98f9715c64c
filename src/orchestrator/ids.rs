//! Task identifier generation

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of task ids for tasks submitted without one
///
/// Ids must be unique within a process run.
pub trait TaskIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random `task_<uuid>` ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIds;

impl TaskIdGenerator for UuidTaskIds {
    fn next_id(&self) -> String {
        format!("task_{}", Uuid::new_v4())
    }
}

/// Monotonic `<prefix>_<n>` ids, starting at 1
#[derive(Debug)]
pub struct SequentialTaskIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTaskIds {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialTaskIds {
    fn default() -> Self {
        Self::new("task")
    }
}

impl TaskIdGenerator for SequentialTaskIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}_{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidTaskIds;
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
        assert!(generated.iter().all(|id| id.starts_with("task_")));
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialTaskIds::new("batch");
        assert_eq!(ids.next_id(), "batch_1");
        assert_eq!(ids.next_id(), "batch_2");
    }

    #[test]
    fn test_sequential_ids_unique_across_threads() {
        let ids = Arc::new(SequentialTaskIds::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let all: HashSet<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(all.len(), 1000);
    }
}
