//! Pipeline integration tests
//!
//! Rows -> normalizer -> dispatcher -> LLM endpoint -> aggregator.

#[cfg(test)]
mod tests {
    use crate::common::{FakeLlm, FlakyClassifier, TableClassifier, TopicFactory, rows};
    use feedback_classifier::core::sources::{JsonRowSink, JsonRowSource, RowSink, RowSource};
    use feedback_classifier::{
        ClassificationEngine, ClassificationStatus, EngineError, ProgressCallback,
        StaticTopicProvider,
    };
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn engine_for(llm: &FakeLlm, dir: &TempDir) -> ClassificationEngine {
        let config = TopicFactory::config(&llm.base_url(), &dir.path().join("cache.json"));
        let topics = Arc::new(StaticTopicProvider::from_config(&config));
        ClassificationEngine::new(config, topics).await
    }

    // ==================== Against the fake endpoint ====================

    #[tokio::test]
    async fn test_end_to_end_labels_rows() {
        let llm = FakeLlm::start().await;
        llm.always_label("BUYER/Engagement/Seller").await;
        let dir = TempDir::new().unwrap();
        let engine = engine_for(&llm, &dir).await;

        let input = rows(json!([
            {"Title": "Fast delivery", "Content": "", "Description": null},
            {"Title": "", "Content": "  ", "Description": null},
            {"Title": "Rider was rude", "Content": "Rider was rude", "Description": "Late"}
        ]));

        let outcome = engine.run(&input, None, None).await.unwrap();

        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.report.stats.total, 2);
        assert_eq!(outcome.report.stats.api_calls, 2);
        assert_eq!(outcome.report.success_rate, 100.0);

        let first = &outcome.rows[0];
        assert_eq!(first.label.as_deref(), Some("BUYER/Engagement/Seller"));
        assert_eq!(first.levels.label_1.as_deref(), Some("BUYER"));
        assert_eq!(first.levels.label_2.as_deref(), Some("Engagement"));
        assert_eq!(first.levels.label_3.as_deref(), Some("Seller"));
        assert_eq!(first.levels.label_4, None);

        // Empty feedback row is skipped and keeps absent labels
        assert!(!outcome.rows[1].is_labeled());

        // Duplicate field values are merged once, in field order
        let prompts = llm.prompts().await;
        assert_eq!(prompts.len(), 2);
        assert!(prompts.iter().any(|p| p.contains("Rider was rude | Late")));
        assert!(prompts.iter().all(|p| !p.contains("{FEEDBACK}")));
    }

    #[tokio::test]
    async fn test_exhausted_retries_mark_task_failed() {
        let llm = FakeLlm::start().await;
        llm.always_fail(503).await;
        let dir = TempDir::new().unwrap();
        let engine = engine_for(&llm, &dir).await;

        let input = rows(json!([{"Title": "App keeps crashing"}]));
        let outcome = engine.run(&input, None, None).await.unwrap();

        assert_eq!(llm.request_count().await, 3);
        assert_eq!(outcome.results[0].status, ClassificationStatus::Failed);
        assert_eq!(outcome.results[0].label, None);
        assert!(outcome.results[0].levels.is_empty());
        assert_eq!(outcome.report.stats.failed, 1);
        assert_eq!(outcome.report.success_rate, 0.0);
        assert!(!engine.cache().contains("App keeps crashing"));
    }

    #[tokio::test]
    async fn test_second_run_uses_persisted_cache() {
        let llm = FakeLlm::start().await;
        llm.always_label("Delivery/Late").await;
        let dir = TempDir::new().unwrap();
        let input = rows(json!([{"Title": "Late  again |  no refund"}]));

        let first = engine_for(&llm, &dir).await.run(&input, None, None).await.unwrap();
        assert_eq!(first.report.stats.api_calls, 1);

        let second = engine_for(&llm, &dir).await.run(&input, None, None).await.unwrap();
        assert_eq!(second.report.stats.cache_hits, 1);
        assert_eq!(second.report.stats.api_calls, 0);
        assert_eq!(llm.request_count().await, 1);
        assert_eq!(second.results[0].feedback_key, "Late again | no refund");
    }

    #[tokio::test]
    async fn test_clear_cache_forces_fresh_calls() {
        let llm = FakeLlm::start().await;
        llm.always_label("Delivery/Late").await;
        let dir = TempDir::new().unwrap();
        let engine = engine_for(&llm, &dir).await;
        let input = rows(json!([{"Title": "Late"}]));

        engine.run(&input, None, None).await.unwrap();
        engine.clear_cache().await.unwrap();
        let outcome = engine.run(&input, None, None).await.unwrap();

        assert_eq!(outcome.report.stats.api_calls, 1);
        assert_eq!(outcome.report.stats.cache_hits, 0);
        assert_eq!(llm.request_count().await, 2);
    }

    #[tokio::test]
    async fn test_named_topic_endpoint() {
        let default_llm = FakeLlm::start().await;
        default_llm.always_label("Default/Label").await;
        let rider_llm = FakeLlm::start().await;
        rider_llm.always_label("Rider/Behaviour").await;

        let dir = TempDir::new().unwrap();
        let mut config =
            TopicFactory::config(&default_llm.base_url(), &dir.path().join("cache.json"));
        config
            .engine
            .topics
            .push(TopicFactory::create("rider", &rider_llm.base_url()));
        let topics = Arc::new(StaticTopicProvider::from_config(&config));
        let engine = ClassificationEngine::new(config, topics).await;

        let input = rows(json!([{"Title": "Rider shouted"}]));
        let outcome = engine.run(&input, Some("rider"), None).await.unwrap();

        assert_eq!(outcome.report.topic_id, "rider");
        assert_eq!(outcome.rows[0].label.as_deref(), Some("Rider/Behaviour"));
        assert_eq!(default_llm.request_count().await, 0);

        let err = engine.run(&input, Some("buyer"), None).await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    // ==================== Scripted classifiers ====================

    #[tokio::test]
    async fn test_large_batch_keeps_row_order_and_accounting() {
        let dir = TempDir::new().unwrap();
        let llm = FakeLlm::start().await;
        let engine = engine_for(&llm, &dir).await;

        let values: Vec<_> = (0..200)
            .map(|i| json!({"Title": format!("feedback {}", i % 50)}))
            .collect();
        let input = rows(serde_json::Value::Array(values));

        let labels: Vec<(String, String)> = (0..50)
            .filter(|i| i % 7 != 0)
            .map(|i| (format!("feedback {}", i), format!("Group/{}", i)))
            .collect();
        let pairs: Vec<(&str, &str)> = labels
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let classifier = Arc::new(TableClassifier::new(&pairs));

        let progress_seen = Arc::new(Mutex::new(Vec::new()));
        let sink = progress_seen.clone();
        let progress: ProgressCallback =
            Arc::new(move |done: usize, total: usize| sink.lock().push((done, total)));

        let outcome = engine
            .run_with(classifier.clone(), "default", &input, Some(progress))
            .await;

        let stats = outcome.report.stats;
        assert_eq!(stats.total, 200);
        assert_eq!(stats.cache_hits + stats.api_calls + stats.failed, 200);
        assert!(classifier.call_count() <= 200);

        let indices: Vec<_> = outcome.results.iter().map(|r| r.index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);

        for row in &outcome.rows {
            let title = row.values["Title"].as_str().unwrap();
            let n: usize = title.trim_start_matches("feedback ").parse().unwrap();
            if n % 7 == 0 {
                assert!(!row.is_labeled());
            } else {
                assert_eq!(row.label.clone(), Some(format!("Group/{}", n)));
            }
        }

        let progress_seen = progress_seen.lock();
        assert_eq!(progress_seen.len(), 200);
        assert_eq!(progress_seen.last(), Some(&(200, 200)));
    }

    #[tokio::test]
    async fn test_worker_faults_are_counted_not_fatal() {
        let dir = TempDir::new().unwrap();
        let llm = FakeLlm::start().await;
        let engine = engine_for(&llm, &dir).await;

        let values: Vec<_> = (0..9).map(|i| json!({"Title": format!("text {}", i)})).collect();
        let input = rows(serde_json::Value::Array(values));

        let outcome = engine
            .run_with(Arc::new(FlakyClassifier::new(3, "A/B")), "default", &input, None)
            .await;

        let stats = outcome.report.stats;
        assert_eq!(stats.total, 9);
        assert_eq!(stats.api_calls, 6);
        assert_eq!(stats.failed, 3);
        assert_eq!(outcome.results.len(), 6);
        assert_eq!(outcome.rows.iter().filter(|r| r.is_labeled()).count(), 6);
        assert!(stats.is_complete());
    }

    #[tokio::test]
    async fn test_json_files_round_trip() {
        let dir = TempDir::new().unwrap();
        let llm = FakeLlm::start().await;
        let engine = engine_for(&llm, &dir).await;

        let input_path = dir.path().join("rows.json");
        std::fs::write(
            &input_path,
            r#"[{"Title": "Fast delivery", "Rating": 5}, {"Title": "", "Rating": 1}]"#,
        )
        .unwrap();

        let input = JsonRowSource::new(&input_path).read_rows().await.unwrap();
        let classifier = Arc::new(TableClassifier::new(&[("Fast delivery", "BUYER/Engagement")]));
        let outcome = engine.run_with(classifier, "default", &input, None).await;

        let output_path = dir.path().join("labeled.json");
        JsonRowSink::new(&output_path)
            .write_rows(&outcome.rows)
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(written[0]["Rating"], 5);
        assert_eq!(written[0]["label"], "BUYER/Engagement");
        assert_eq!(written[0]["label_2"], "Engagement");
        assert_eq!(written[0]["label_3"], serde_json::Value::Null);
        assert_eq!(written[1]["label"], serde_json::Value::Null);

        let report = serde_json::to_value(&outcome.report).unwrap();
        assert_eq!(report["stats"]["api_calls"], 1);
        assert!(report["batch_id"].is_string());
    }
}
