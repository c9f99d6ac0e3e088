#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, TriagemConfig, validation,
    };
    use crate::entity_extraction::EntityKind;
    use crate::scoring::ScoringWeights;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TriagemConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.sanitizer.escape_markdown);
        assert_eq!(config.sanitizer.max_chars, None);
        assert_eq!(config.scoring.high_threshold, 70);
        assert_eq!(config.scoring.medium_threshold, 40);
        assert_eq!(config.scoring.max_score, 100);
        assert_eq!(config.scoring.weights.price, 20);
        assert_eq!(config.scoring.weights.scheduling, 30);
        assert_eq!(config.extraction.enabled_kinds.len(), 7);
        assert!(!config.extraction.deduplicate);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_log_level(LogLevel::Debug)
            .without_markdown_escaping()
            .with_max_chars(4096)
            .with_entity_kinds(vec![EntityKind::Email, EntityKind::Phone])
            .with_deduplication(true)
            .with_thresholds(30, 60)
            .build()
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.sanitizer.escape_markdown);
        assert_eq!(config.sanitizer.max_chars, Some(4096));
        assert_eq!(
            config.extraction.enabled_kinds,
            vec![EntityKind::Email, EntityKind::Phone]
        );
        assert!(config.extraction.deduplicate);
        assert_eq!(config.scoring.medium_threshold, 30);
        assert_eq!(config.scoring.high_threshold, 60);
    }

    #[test]
    fn test_validation() {
        let config = TriagemConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let inverted = ConfigBuilder::new().with_thresholds(70, 40).build();
        assert!(inverted.is_err());

        let zero_chars = ConfigBuilder::new().with_max_chars(0).build();
        assert!(zero_chars.is_err());

        let mut config = TriagemConfig::default();
        config.scoring.high_threshold = 120;
        assert!(validation::validate_config(&config).is_err());

        let mut config = TriagemConfig::default();
        config.extraction.confidence_threshold = 1.5;
        assert!(validation::validate_config(&config).is_err());
    }

    #[test]
    fn test_log_file_requires_stdout_off() {
        let mut config = TriagemConfig::default();
        config.logging.file = Some("logs/triagem.log".into());
        assert!(config.logging.stdout);
        assert!(validation::validate_config(&config).is_err());

        config.logging.stdout = false;
        assert!(validation::validate_config(&config).is_ok());

        let built = ConfigBuilder::new().with_log_file("logs/triagem.log").build();
        assert!(built.is_ok());
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(test.logging.level, LogLevel::Warn);
        assert_eq!(test.logging.format, LogFormat::Compact);
        assert_eq!(prod.logging.level, LogLevel::Info);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            price: 5,
            ..ScoringWeights::default()
        };
        let config = ConfigBuilder::new()
            .with_scoring_weights(weights)
            .build()
            .unwrap();

        assert_eq!(config.scoring.weights.price, 5);
        assert_eq!(config.scoring.weights.urgency, 15);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_max_chars(1000)
            .with_log_level(LogLevel::Warn)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TriagemConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_loader_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triagem.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[sanitizer]\nescape_markdown = false\n\n[scoring]\nhigh_threshold = 80\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = ConfigLoader::new()
            .load_file(&path)
            .unwrap()
            .extract()
            .unwrap();

        assert!(!config.sanitizer.escape_markdown);
        assert_eq!(config.scoring.high_threshold, 80);
        assert_eq!(config.scoring.medium_threshold, 40);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_loader_rejects_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triagem.json");
        std::fs::write(&path, r#"{"scoring": {"medium_threshold": 90}}"#).unwrap();

        let result = ConfigLoader::new().load_file(&path).unwrap().extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_loader_missing_and_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::new().load_file(&missing).is_err());

        let ini = dir.path().join("triagem.ini");
        std::fs::write(&ini, "x=1").unwrap();
        assert!(ConfigLoader::new().load_file(&ini).is_err());
    }
}
