//! Configuration integration tests
//!
//! YAML files on disk through loading, template resolution and validation.

#[cfg(test)]
mod tests {
    use feedback_classifier::config::{Config, Validate};
    use feedback_classifier::{EngineError, StaticTopicProvider, TopicProvider};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_minimal_self_hosted_config() {
        let file = yaml_file(
            r#"
llm:
  base_url: "http://localhost:8000/v1"
  model: "qwen2.5-7b-instruct"
  prompt_template: "Classify: {FEEDBACK}"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.llm().api_key, "DUMMY_KEY");
        assert_eq!(config.processing().max_concurrency, 10);
        assert_eq!(config.processing().max_retry, 3);
        assert_eq!(config.processing().retry_wait_ms, 500);
    }

    #[tokio::test]
    async fn test_named_topics_without_default() {
        let file = yaml_file(
            r#"
topics:
  - id: "buyer"
    base_url: "https://api.openai.com/v1"
    api_key: "sk-buyer"
    model: "gpt-4o-mini"
    prompt_template: "Buyer feedback: {FEEDBACK}"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let topics = StaticTopicProvider::from_config(&config);

        assert!(topics.resolve(Some("buyer")).await.is_ok());
        assert!(matches!(
            topics.resolve(None).await.unwrap_err(),
            EngineError::Config(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_values_rejected() {
        let cases = [
            (
                "bad url",
                r#"
llm:
  base_url: "localhost:8000"
  model: "m"
  prompt_template: "{FEEDBACK}"
"#,
            ),
            (
                "no model",
                r#"
llm:
  base_url: "http://localhost:8000/v1"
  prompt_template: "{FEEDBACK}"
"#,
            ),
            (
                "temperature",
                r#"
llm:
  base_url: "http://localhost:8000/v1"
  model: "m"
  prompt_template: "{FEEDBACK}"
  temperature: 3.5
"#,
            ),
            (
                "concurrency",
                r#"
llm:
  base_url: "http://localhost:8000/v1"
  model: "m"
  prompt_template: "{FEEDBACK}"
processing:
  max_concurrency: 0
"#,
            ),
            (
                "duplicate topics",
                r#"
topics:
  - id: "a"
    base_url: "http://localhost:8000/v1"
    model: "m"
    prompt_template: "{FEEDBACK}"
  - id: "a"
    base_url: "http://localhost:8001/v1"
    model: "m"
    prompt_template: "{FEEDBACK}"
"#,
            ),
        ];

        for (name, yaml) in cases {
            let file = yaml_file(yaml);
            let result = Config::from_file(file.path()).await;
            assert!(
                matches!(result, Err(EngineError::Config(_))),
                "case '{}' should fail validation",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let file = yaml_file("llm: [unclosed");
        assert!(matches!(
            Config::from_file(file.path()).await,
            Err(EngineError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_parse_file_skips_validation() {
        let file = yaml_file("processing:\n  max_concurrency: 0\n");
        let config = Config::parse_file(file.path()).await.unwrap();
        assert_eq!(config.processing().max_concurrency, 0);
        assert!(config.engine.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = tokio_test::block_on(async {
            let file = yaml_file(
                r#"
llm:
  base_url: "http://localhost:8000/v1"
  model: "m"
  prompt_template: "{FEEDBACK}"
source:
  fields: ["Subject", "Body"]
"#,
            );
            Config::from_file(file.path()).await.unwrap()
        });

        let yaml = config.to_yaml().unwrap();
        let file = yaml_file(&yaml);
        let reparsed = tokio_test::block_on(Config::parse_file(file.path())).unwrap();
        assert_eq!(reparsed, config);
        assert_eq!(reparsed.source().fields, vec!["Subject", "Body"]);
    }
}
