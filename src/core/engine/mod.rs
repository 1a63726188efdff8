//! Classification engine
//!
//! Ties topics, the label cache, the classifier and the dispatcher together
//! for one batch of rows at a time.


use crate::config::{Config, TopicConfig, Validate};
use crate::core::aggregate::apply_results;
use crate::core::batch::{BatchConfig, BatchProcessor, ProgressCallback};
use crate::core::cache_manager::LabelCache;
use crate::core::classifier::{Classifier, LlmClient};
use crate::core::normalize::prepare_tasks;
use crate::core::topics::TopicProvider;
use crate::core::types::{BatchReport, ClassificationResult, LabeledRow, Row};
use crate::utils::error::{EngineError, Result};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Everything one batch produced
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// Source rows with label columns, in source order
    pub rows: Vec<LabeledRow>,
    /// One result per task that did not fault, ordered by row index
    pub results: Vec<ClassificationResult>,
    pub report: BatchReport,
}

/// Entry point for classifying batches of rows
pub struct ClassificationEngine {
    config: Config,
    topics: Arc<dyn TopicProvider>,
    cache: Arc<LabelCache>,
}

impl std::fmt::Debug for ClassificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationEngine")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl ClassificationEngine {
    /// Create an engine, loading the label cache from the configured path
    pub async fn new(config: Config, topics: Arc<dyn TopicProvider>) -> Self {
        let cache = Arc::new(LabelCache::open(&config.cache().path).await);
        Self::with_cache(config, topics, cache)
    }

    pub fn with_cache(
        config: Config,
        topics: Arc<dyn TopicProvider>,
        cache: Arc<LabelCache>,
    ) -> Self {
        Self {
            config,
            topics,
            cache,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &Arc<LabelCache> {
        &self.cache
    }

    /// Resolve and validate the topic a batch will use
    pub async fn topic(&self, topic_id: Option<&str>) -> Result<TopicConfig> {
        let topic = self.topics.resolve(topic_id).await?;
        topic.validate().map_err(|e| {
            EngineError::config(format!("Topic '{}' is not usable: {}", topic.id, e))
        })?;
        Ok(topic)
    }

    /// LLM client for a topic, using the processing retry and timeout settings
    pub async fn classifier(&self, topic_id: Option<&str>) -> Result<LlmClient> {
        let topic = self.topic(topic_id).await?;
        LlmClient::new(&topic, self.config.processing())
    }

    /// Classify `rows` with the endpoint of the given topic.
    ///
    /// Only topic resolution and client construction can fail; individual
    /// classification failures show up in the report.
    pub async fn run(
        &self,
        rows: &[Row],
        topic_id: Option<&str>,
        progress: Option<ProgressCallback>,
    ) -> Result<BatchOutcome> {
        let topic = self.topic(topic_id).await?;
        let client = LlmClient::new(&topic, self.config.processing())?;
        info!(
            "Classifying {} rows with topic '{}' ({})",
            rows.len(),
            topic.display_name(),
            client.model()
        );

        Ok(self
            .run_with(Arc::new(client), &topic.id, rows, progress)
            .await)
    }

    /// Classify `rows` with an already built classifier
    pub async fn run_with(
        &self,
        classifier: Arc<dyn Classifier>,
        topic_id: &str,
        rows: &[Row],
        progress: Option<ProgressCallback>,
    ) -> BatchOutcome {
        let started_at = Utc::now();

        let tasks = prepare_tasks(rows, self.config.source().fields.as_slice());
        let processor = BatchProcessor::new(
            classifier,
            self.cache.clone(),
            BatchConfig::new().with_concurrency(self.config.processing().max_concurrency),
        );
        let (results, stats) = processor.process_batch(tasks, progress).await;

        let labeled = apply_results(rows, &results);
        let report = BatchReport::new(topic_id, started_at, Utc::now(), stats);
        info!(
            "Batch {} done: {} of {} rows labeled",
            report.batch_id,
            stats.succeeded(),
            rows.len()
        );

        BatchOutcome {
            rows: labeled,
            results,
            report,
        }
    }

    /// Forget every cached label, in memory and on disk
    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }
}
