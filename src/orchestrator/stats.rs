//! Running statistics over processed tasks
//!
//! Only successful executions feed the counters and the running average;
//! degraded results are counted separately so a failed or cancelled task never
//! skews the average with a partial timing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::analysis::TaskType;
use crate::routing::ReasoningMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStats {
    pub total_tasks: u64,
    pub failed_tasks: u64,
    pub mode_usage: BTreeMap<ReasoningMode, u64>,
    pub task_types: BTreeMap<TaskType, u64>,
    /// Seconds
    pub avg_execution_time: f64,
}

impl Default for ReasoningStats {
    fn default() -> Self {
        Self {
            total_tasks: 0,
            failed_tasks: 0,
            mode_usage: ReasoningMode::ALL.into_iter().map(|m| (m, 0)).collect(),
            task_types: TaskType::ALL.into_iter().map(|t| (t, 0)).collect(),
            avg_execution_time: 0.0,
        }
    }
}

impl ReasoningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed task
    pub fn record_success(&mut self, task_type: TaskType, mode: ReasoningMode, execution_time: f64) {
        self.total_tasks += 1;
        *self.mode_usage.entry(mode).or_insert(0) += 1;
        *self.task_types.entry(task_type).or_insert(0) += 1;

        let n = self.total_tasks as f64;
        self.avg_execution_time = (self.avg_execution_time * (n - 1.0) + execution_time) / n;
    }

    /// Record a degraded task
    pub fn record_failure(&mut self) {
        self.failed_tasks += 1;
    }

    pub fn mode_count(&self, mode: ReasoningMode) -> u64 {
        self.mode_usage.get(&mode).copied().unwrap_or(0)
    }

    pub fn task_type_count(&self, task_type: TaskType) -> u64 {
        self.task_types.get(&task_type).copied().unwrap_or(0)
    }

    /// Summary with percentage shares; `None` until a task has completed
    pub fn report(&self) -> Option<StatsReport> {
        if self.total_tasks == 0 {
            return None;
        }

        let total = self.total_tasks;
        Some(StatsReport {
            total_tasks: total,
            failed_tasks: self.failed_tasks,
            avg_execution_time: self.avg_execution_time,
            mode_usage: self
                .mode_usage
                .iter()
                .map(|(mode, count)| (*mode, UsageShare::of(*count, total)))
                .collect(),
            task_types: self
                .task_types
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|(task_type, count)| (*task_type, UsageShare::of(*count, total)))
                .collect(),
        })
    }
}

/// Lock shared statistics, recovering the data if a holder panicked
pub(crate) fn lock_stats(stats: &Mutex<ReasoningStats>) -> MutexGuard<'_, ReasoningStats> {
    stats.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Count and its share of the total, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageShare {
    pub count: u64,
    pub percent: f64,
}

impl UsageShare {
    fn of(count: u64, total: u64) -> Self {
        Self {
            count,
            percent: count as f64 / total as f64 * 100.0,
        }
    }
}

impl fmt::Display for UsageShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}%)", self.count, self.percent)
    }
}

/// Reporting view of [`ReasoningStats`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_tasks: u64,
    pub failed_tasks: u64,
    pub avg_execution_time: f64,
    /// Every mode, including unused ones
    pub mode_usage: BTreeMap<ReasoningMode, UsageShare>,
    /// Only task types that were seen
    pub task_types: BTreeMap<TaskType, UsageShare>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total tasks: {}", self.total_tasks)?;
        writeln!(f, "Failed tasks: {}", self.failed_tasks)?;
        writeln!(f, "Average execution time: {:.3}s", self.avg_execution_time)?;
        writeln!(f, "Reasoning modes:")?;
        for (mode, share) in &self.mode_usage {
            writeln!(f, "  {mode}: {share}")?;
        }
        writeln!(f, "Task types:")?;
        for (task_type, share) in &self.task_types {
            writeln!(f, "  {task_type}: {share}")?;
        }
        Ok(())
    }
}
