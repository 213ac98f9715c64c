//! The adaptive reasoner: classify, route, execute, record
//!
//! Classification runs synchronously on the caller. Each execution runs in its
//! own tokio task so executor failures, timeouts, panics and cancellation stay
//! confined to the task that caused them. All executions share one semaphore
//! sized by `batch.max_concurrency`.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{debug, info, warn, Instrument};

use super::batch::BatchRun;
use super::ids::{TaskIdGenerator, UuidTaskIds};
use super::result::{BatchTask, Classification, ReasoningResult};
use super::stats::{lock_stats, ReasoningStats, StatsReport};
use crate::analysis::TaskAnalyzer;
use crate::config::{BatchConfig, ConfigError, ReasonerConfig};
use crate::error::ExecutionError;
use crate::execution::ReasoningExecutor;
use crate::routing::{ModeSelector, ModeThresholds, ThresholdOverrides};

/// Routes tasks to a reasoning mode and executes them through the injected executor
pub struct AdaptiveReasoner {
    analyzer: TaskAnalyzer,
    selector: RwLock<ModeSelector>,
    executor: Arc<dyn ReasoningExecutor>,
    ids: Arc<dyn TaskIdGenerator>,
    stats: Arc<Mutex<ReasoningStats>>,
    batch: BatchConfig,
    permits: Arc<Semaphore>,
}

impl AdaptiveReasoner {
    /// Reasoner with default thresholds and batch settings
    pub fn new(executor: Arc<dyn ReasoningExecutor>) -> Self {
        Self::build(ModeSelector::default(), BatchConfig::default(), executor)
    }

    /// Reasoner from a validated configuration
    pub fn from_config(
        config: &ReasonerConfig,
        executor: Arc<dyn ReasoningExecutor>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let selector = ModeSelector::new(config.thresholds)?;
        Ok(Self::build(selector, config.batch.clone(), executor))
    }

    fn build(
        selector: ModeSelector,
        batch: BatchConfig,
        executor: Arc<dyn ReasoningExecutor>,
    ) -> Self {
        info!(
            executor = executor.name(),
            max_concurrency = batch.max_concurrency,
            task_timeout_ms = ?batch.task_timeout_ms,
            "Creating adaptive reasoner"
        );

        Self {
            analyzer: TaskAnalyzer::new(),
            selector: RwLock::new(selector),
            executor,
            ids: Arc::new(UuidTaskIds),
            stats: Arc::new(Mutex::new(ReasoningStats::default())),
            permits: Arc::new(Semaphore::new(batch.max_concurrency)),
            batch,
        }
    }

    /// Replace the id source used for tasks submitted without an id
    pub fn with_id_generator(mut self, ids: Arc<dyn TaskIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn executor_name(&self) -> &str {
        self.executor.name()
    }

    pub fn batch_config(&self) -> &BatchConfig {
        &self.batch
    }

    /// Classify a task and pick its mode without executing it
    ///
    /// Statistics are not touched.
    pub fn classify_and_select(&self, text: &str, task_id: Option<&str>) -> Classification {
        let task_id = task_id
            .map(str::to_string)
            .unwrap_or_else(|| self.ids.next_id());
        self.classify(text, task_id)
    }

    fn classify(&self, text: &str, task_id: String) -> Classification {
        let features = self.analyzer.analyze(text);
        let (reasoning_mode, confidence_score) = self
            .selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .select_with_confidence(&features);

        debug!(
            task_id = %task_id,
            task_type = %features.task_type,
            complexity = features.complexity_score,
            mode = %reasoning_mode,
            confidence = confidence_score,
            "Classified task"
        );

        Classification {
            task_id,
            task_type: features.task_type,
            complexity_score: features.complexity_score,
            reasoning_mode,
            confidence_score,
            features,
        }
    }

    /// Process one task end to end
    ///
    /// Never fails: executor errors come back as a degraded result.
    pub async fn process_task(&self, text: &str, task_id: Option<String>) -> ReasoningResult {
        let task_id = task_id.unwrap_or_else(|| self.ids.next_id());
        info!(task_id = %task_id, "Processing task");

        let handle = self.spawn_execution(text, task_id.clone());
        match handle.await {
            Ok(result) => result,
            Err(join_error) => {
                let error = execution_error_from_join(join_error);
                self.record_failure();
                warn!(task_id = %task_id, error = %error, "Task did not complete");
                ReasoningResult::degraded(task_id, &error)
            }
        }
    }

    /// Process a batch and return results in input order
    ///
    /// A failing task yields a degraded result in its slot; the others are
    /// unaffected. An empty batch returns an empty vector.
    pub async fn process_batch(&self, tasks: Vec<BatchTask>) -> Vec<ReasoningResult> {
        let span = crate::batch_span!(batch_size = tasks.len());
        async move {
            let results = self.spawn_batch(tasks).join().await;
            let failed = results.iter().filter(|r| r.is_degraded()).count();
            info!(
                completed = results.len() - failed,
                failed, "Batch finished"
            );
            results
        }
        .instrument(span)
        .await
    }

    /// Start every task of a batch and hand back control over the running set
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_batch(&self, tasks: Vec<BatchTask>) -> BatchRun {
        let mut run = BatchRun::new(self.stats.clone());
        for task in tasks {
            let task_id = task.id.unwrap_or_else(|| self.ids.next_id());
            let handle = self.spawn_execution(&task.text, task_id.clone());
            run.push(task_id, handle);
        }
        debug!(tasks = run.len(), "Spawned batch");
        run
    }

    fn spawn_execution(
        &self,
        text: &str,
        task_id: String,
    ) -> tokio::task::JoinHandle<ReasoningResult> {
        let started = Instant::now();
        let classification = self.classify(text, task_id);
        let classify_elapsed = started.elapsed();

        let span = crate::task_span!(
            task_id = %classification.task_id,
            mode = %classification.reasoning_mode,
            task_type = %classification.task_type
        );

        let context = ExecutionContext {
            executor: self.executor.clone(),
            stats: self.stats.clone(),
            permits: self.permits.clone(),
            timeout: self.batch.task_timeout(),
        };

        tokio::spawn(
            run_classified(context, text.to_string(), classification, classify_elapsed)
                .instrument(span),
        )
    }

    /// Snapshot of the running statistics
    pub fn statistics(&self) -> ReasoningStats {
        lock_stats(&self.stats).clone()
    }

    /// Percentage report; `None` until a task has completed
    pub fn report(&self) -> Option<StatsReport> {
        self.statistics().report()
    }

    pub fn reset_statistics(&self) {
        *lock_stats(&self.stats) = ReasoningStats::default();
    }

    pub fn thresholds(&self) -> ModeThresholds {
        *self
            .selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .thresholds()
    }

    /// Replace all thresholds; invalid values leave the current ones in place
    pub fn set_thresholds(&self, thresholds: ModeThresholds) -> Result<(), ConfigError> {
        self.selector
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_thresholds(thresholds)?;
        info!(?thresholds, "Updated mode thresholds");
        Ok(())
    }

    /// Update only the thresholds present in `overrides`
    pub fn update_thresholds(&self, overrides: &ThresholdOverrides) -> Result<(), ConfigError> {
        let mut selector = self.selector.write().unwrap_or_else(PoisonError::into_inner);
        selector.update_thresholds(overrides)?;
        info!(thresholds = ?selector.thresholds(), "Updated mode thresholds");
        Ok(())
    }

    fn record_failure(&self) {
        lock_stats(&self.stats).record_failure();
    }
}

#[derive(Clone)]
struct ExecutionContext {
    executor: Arc<dyn ReasoningExecutor>,
    stats: Arc<Mutex<ReasoningStats>>,
    permits: Arc<Semaphore>,
    timeout: Option<Duration>,
}

/// Execute a classified task and record its outcome
///
/// Nothing after the executor call awaits, so an abort either lands before the
/// outcome is recorded or not at all.
async fn run_classified(
    context: ExecutionContext,
    text: String,
    classification: Classification,
    classify_elapsed: Duration,
) -> ReasoningResult {
    let outcome = match context.permits.acquire().await {
        Ok(_permit) => {
            let started = Instant::now();
            let call = context.executor.execute(
                &text,
                classification.reasoning_mode,
                &classification.features,
            );
            let response = match context.timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(response) => response,
                    Err(_) => Err(ExecutionError::timeout(limit.as_millis() as u64)),
                },
                None => call.await,
            };
            response.map(|response| (response, started.elapsed()))
        }
        Err(_) => Err(ExecutionError::failed("executor pool closed")),
    };

    match outcome {
        Ok((response, execute_elapsed)) => {
            let execution_time = (classify_elapsed + execute_elapsed).as_secs_f64();
            lock_stats(&context.stats).record_success(
                classification.task_type,
                classification.reasoning_mode,
                execution_time,
            );
            info!(execution_time, "Task completed");
            ReasoningResult::completed(&classification, response, execution_time)
        }
        Err(error) => {
            lock_stats(&context.stats).record_failure();
            warn!(error = %error, kind = error.kind(), "Task execution failed");
            ReasoningResult::degraded(classification.task_id, &error)
        }
    }
}

/// Map a tokio join failure onto the execution error it stands for
pub(crate) fn execution_error_from_join(error: JoinError) -> ExecutionError {
    if error.is_cancelled() {
        return ExecutionError::Cancelled;
    }

    let payload = error.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    ExecutionError::Panicked { message }
}
