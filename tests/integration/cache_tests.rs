//! Label cache integration tests
//!
//! Durable store behavior as seen by separate engines sharing one file.

#[cfg(test)]
mod tests {
    use crate::common::{FakeLlm, TableClassifier, TopicFactory, rows};
    use feedback_classifier::{ClassificationEngine, LabelCache, StaticTopicProvider};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_is_readable_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        let cache = LabelCache::open(&path).await;
        cache.set("Giao hàng nhanh", "BUYER/Delivery/Fast");
        cache.save().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Non-ASCII is written as-is and entries are indented
        assert!(content.contains("Giao hàng nhanh"));
        assert!(content.contains("\n  \""));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            parsed,
            json!({"Giao hàng nhanh": {"label": "BUYER/Delivery/Fast"}})
        );
    }

    #[tokio::test]
    async fn test_legacy_store_is_served() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"Fast delivery": {"label_en": "BUYER/Engagement/Seller"}}"#,
        )
        .unwrap();

        let llm = FakeLlm::start().await;
        let config = TopicFactory::config(&llm.base_url(), &path);
        let topics = Arc::new(StaticTopicProvider::from_config(&config));
        let engine = ClassificationEngine::new(config, topics).await;

        let classifier = Arc::new(TableClassifier::default());
        let outcome = engine
            .run_with(
                classifier.clone(),
                "default",
                &rows(json!([{"Title": "Fast delivery"}])),
                None,
            )
            .await;

        assert_eq!(outcome.report.stats.cache_hits, 1);
        assert_eq!(classifier.call_count(), 0);
        assert_eq!(outcome.rows[0].levels.label_3.as_deref(), Some("Seller"));

        // Saved back in the current schema
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["Fast delivery"]["label"], "BUYER/Engagement/Seller");
    }

    #[tokio::test]
    async fn test_corrupt_store_does_not_block_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "\u{0}\u{1} definitely not json").unwrap();

        let llm = FakeLlm::start().await;
        let config = TopicFactory::config(&llm.base_url(), &path);
        let topics = Arc::new(StaticTopicProvider::from_config(&config));
        let engine = ClassificationEngine::new(config, topics).await;
        assert!(engine.cache().is_empty());

        let classifier = Arc::new(TableClassifier::new(&[("Late", "Delivery/Late")]));
        let outcome = engine
            .run_with(classifier, "default", &rows(json!([{"Title": "Late"}])), None)
            .await;
        assert_eq!(outcome.report.stats.api_calls, 1);

        let reopened = LabelCache::open(&path).await;
        assert_eq!(reopened.get("Late").as_deref(), Some("Delivery/Late"));
    }

    #[tokio::test]
    async fn test_unwritable_store_keeps_memory() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the final rename fail
        let path = dir.path().join("cache.json");
        std::fs::create_dir(&path).unwrap();

        let cache = LabelCache::open(&path).await;
        cache.set("k", "A/B");
        assert!(cache.save().await.is_err());
        assert_eq!(cache.get("k").as_deref(), Some("A/B"));
    }
}
