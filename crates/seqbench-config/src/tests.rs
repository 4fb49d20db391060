//! Tests for harness configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        repeat_count = 7
        random_seed = 42
        max_size = 20000
        groups = ["fill_back", "sort"]
        element_types = ["Small"]

        [output]
        format = "csv"
        path = "out.csv"
    "#;

    let config = HarnessConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.repeat_count, 7);
    assert_eq!(config.random_seed, 42);
    assert_eq!(config.max_size, Some(20000));
    assert_eq!(config.groups, vec!["fill_back", "sort"]);
    assert_eq!(config.element_types, vec!["Small"]);
    assert_eq!(config.output.format, OutputFormat::Csv);
    assert_eq!(config.output.path.as_deref(), Some("out.csv"));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        repeat_count: 2
        output:
          format: markdown
        groups:
          - linear_search
    "#;

    let config = HarnessConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.repeat_count, 2);
    assert_eq!(config.random_seed, HarnessConfig::DEFAULT_RANDOM_SEED);
    assert_eq!(config.output.format, OutputFormat::Markdown);
    assert_eq!(config.output.path, None);
    assert_eq!(config.groups, vec!["linear_search"]);
}

#[test]
fn test_empty_toml_is_default() {
    let config = HarnessConfig::from_toml_str("").unwrap();
    assert_eq!(config, HarnessConfig::default());
    assert_eq!(config.repeat_count, 5);
    assert_eq!(config.output.format, OutputFormat::Google);
    assert!(config.groups.is_empty());
    assert!(config.element_types.is_empty());
}

#[test]
fn test_unknown_format_is_rejected() {
    let result = HarnessConfig::from_toml_str("[output]\nformat = \"pdf\"\n");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = HarnessConfig::load("definitely/not/here/seqbench.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("seqbench.yaml");
    std::fs::write(&yaml, "repeat_count: 2\noutput:\n  format: csv\n").unwrap();
    let config = HarnessConfig::load(&yaml).unwrap();
    assert_eq!(config.repeat_count, 2);
    assert_eq!(config.output.format, OutputFormat::Csv);

    let toml = dir.path().join("seqbench.toml");
    std::fs::write(&toml, "random_seed = 7\n").unwrap();
    let config = HarnessConfig::load(&toml).unwrap();
    assert_eq!(config.random_seed, 7);
    assert_eq!(config.repeat_count, HarnessConfig::DEFAULT_REPEAT_COUNT);
}

#[test]
fn test_validate() {
    assert!(HarnessConfig::default().validate().is_ok());

    let zero_repeats = HarnessConfig::new().with_repeat_count(0);
    assert!(matches!(
        zero_repeats.validate(),
        Err(ConfigError::Invalid(_))
    ));

    let zero_cap = HarnessConfig::new().with_max_size(0);
    assert!(matches!(zero_cap.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_builder() {
    let config = HarnessConfig::new()
        .with_repeat_count(1)
        .with_random_seed(123)
        .with_max_size(1000)
        .with_output_format(OutputFormat::Markdown)
        .with_output_path("report.md")
        .with_group("sort")
        .with_element_type("Medium");

    assert_eq!(config.repeat_count, 1);
    assert_eq!(config.random_seed, 123);
    assert_eq!(config.max_size, Some(1000));
    assert_eq!(config.output.format, OutputFormat::Markdown);
    assert_eq!(config.output.path.as_deref(), Some("report.md"));
    assert_eq!(config.groups, vec!["sort"]);
    assert_eq!(config.element_types, vec!["Medium"]);
}
