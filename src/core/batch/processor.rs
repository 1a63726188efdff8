//! Batch processor implementation

use super::types::{BatchConfig, ProgressCallback, TaskOutcome};
use crate::core::cache_manager::LabelCache;
use crate::core::classifier::Classifier;
use crate::core::types::{
    ClassificationResult, ClassificationStatus, ClassificationTask, ProcessingStats,
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs classification tasks against a shared cache and classifier
#[derive(Clone)]
pub struct BatchProcessor {
    classifier: Arc<dyn Classifier>,
    cache: Arc<LabelCache>,
    config: BatchConfig,
}

impl std::fmt::Debug for BatchProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchProcessor")
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(
        classifier: Arc<dyn Classifier>,
        cache: Arc<LabelCache>,
        config: BatchConfig,
    ) -> Self {
        Self {
            classifier,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &Arc<LabelCache> {
        &self.cache
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Resolve one task: cache first, classifier on a miss
    pub async fn process_task(
        classifier: &dyn Classifier,
        cache: &LabelCache,
        task: ClassificationTask,
    ) -> ClassificationResult {
        let ClassificationTask {
            index,
            feedback,
            feedback_key,
        } = task;

        if let Some(label) = cache.get(&feedback_key) {
            debug!("Row {}: cache hit", index);
            return ClassificationResult::labeled(
                index,
                label,
                ClassificationStatus::CacheHit,
                feedback_key,
            );
        }

        match classifier.classify(&feedback).await {
            Some(label) => {
                debug!("Row {}: classified as '{}'", index, label);
                cache.set(feedback_key.clone(), label.clone());
                ClassificationResult::labeled(
                    index,
                    label,
                    ClassificationStatus::ApiSuccess,
                    feedback_key,
                )
            }
            None => {
                warn!("Row {}: classification failed", index);
                ClassificationResult::failed(index, feedback_key)
            }
        }
    }

    /// Process every task and return results ordered by row index.
    ///
    /// Each task runs on its own tokio task so a panicking worker cannot take
    /// its siblings down. A faulted task has no result but is counted as failed.
    /// The cache is saved once, after the last task resolves.
    pub async fn process_batch(
        &self,
        tasks: Vec<ClassificationTask>,
        progress: Option<ProgressCallback>,
    ) -> (Vec<ClassificationResult>, ProcessingStats) {
        let total = tasks.len();
        let start = Instant::now();
        info!(
            "Processing batch of {} tasks (max concurrency {})",
            total, self.config.max_concurrency
        );

        let mut outcomes = stream::iter(tasks)
            .map(|task| {
                let classifier = self.classifier.clone();
                let cache = self.cache.clone();
                let index = task.index;

                async move {
                    let handle = tokio::spawn(async move {
                        Self::process_task(classifier.as_ref(), &cache, task).await
                    });

                    match handle.await {
                        Ok(result) => TaskOutcome::Completed(result),
                        Err(e) => TaskOutcome::Faulted {
                            index,
                            reason: e.to_string(),
                        },
                    }
                }
            })
            .buffer_unordered(self.config.max_concurrency.max(1));

        let mut stats = ProcessingStats::new(total);
        let mut results = Vec::with_capacity(total);
        let mut completed = 0;
        let mut faults = 0;

        while let Some(outcome) = outcomes.next().await {
            completed += 1;

            match outcome {
                TaskOutcome::Completed(result) => {
                    stats.record(result.status);
                    results.push(result);
                }
                TaskOutcome::Faulted { index, reason } => {
                    error!("Row {}: worker fault: {}", index, reason);
                    stats.record(ClassificationStatus::Failed);
                    faults += 1;
                }
            }

            if let Some(progress) = progress.as_ref() {
                progress(completed, total);
            }
        }

        // Sort by index to restore row order
        results.sort_by_key(|r| r.index);

        if faults > 0 {
            warn!("{} task(s) faulted and were left without a result", faults);
        }

        if let Err(e) = self.cache.save().await {
            debug!("New labels kept in memory only: {}", e);
        }

        info!("Batch finished in {:?}: {}", start.elapsed(), stats);
        (results, stats)
    }
}
