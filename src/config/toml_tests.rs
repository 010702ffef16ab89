//! Tests for TOML configuration parsing.

use super::{ConfigError, TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.check.service.is_none());
        assert!(config.check.interval.is_none());
        assert!(config.notify.sink.is_none());
    }

    #[test]
    fn full_document_parses_all_fields() {
        let config = TomlConfig::parse(
            r#"
            [check]
            service = "ifconfig.me"
            interval = 300

            [notify]
            sink = "log"
            "#,
        )
        .unwrap();

        assert_eq!(config.check.service.as_deref(), Some("ifconfig.me"));
        assert_eq!(config.check.interval, Some(300));
        assert_eq!(config.notify.sink.as_deref(), Some("log"));
    }

    #[test]
    fn partial_sections_are_allowed() {
        let config = TomlConfig::parse("[check]\ninterval = 10\n").unwrap();

        assert_eq!(config.check.interval, Some(10));
        assert!(config.check.service.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[check]\nretries = 3\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[alerts]\nemail = \"me@example.com\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[check]\ninterval = \"sixty\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn negative_interval_is_rejected() {
        let result = TomlConfig::parse("[check]\ninterval = -1\n");
        assert!(result.is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[check]\nservice = \"api.ipify.org\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.check.service.as_deref(), Some("api.ipify.org"));
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = TomlConfig::load(&path);

        match result {
            Err(ConfigError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.check.service.as_deref(), Some("icanhazip.com"));
        assert_eq!(config.check.interval, Some(60));
        assert!(config.notify.sink.is_none());
    }
}
