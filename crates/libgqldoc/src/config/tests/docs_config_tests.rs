use crate::config::ConfigLoadError;
use crate::config::DocsConfig;
use crate::config::DEFAULT_FIELD_EXPANSION_DEPTH;
use crate::navigation::OperationKind;
use serde_json::json;
use std::path::PathBuf;

const YAML_CONFIG: &str = r#"
fieldExpansionDepth: 2
fieldExpansionDepthOverrides:
  queries:
    roomAccessKeys: 6
    settings: 4
  mutations:
    updateReservation: 2
examples:
  reservations:
    excludeArguments: [last]
    overrideArguments:
      first: 15
servers:
  - description: Production
    url: https://api.example.com/graphql
  - url: https://staging.example.com/graphql
"#;

fn temp_config_path(file_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "libgqldoc-{}-{file_name}",
        std::process::id(),
    ))
}

#[test]
fn yaml_sections_are_loaded() -> Result<(), ConfigLoadError> {
    let config = DocsConfig::from_yaml_str(YAML_CONFIG)?;

    assert_eq!(config.field_expansion_depth, 2);
    let overrides = &config.field_expansion_depth_overrides;
    assert_eq!(
        overrides.queries.keys().collect::<Vec<_>>(),
        vec!["roomAccessKeys", "settings"],
    );
    assert_eq!(overrides.depth_for(OperationKind::Query, "settings"), Some(4));
    assert_eq!(overrides.depth_for(OperationKind::Mutation, "updateReservation"), Some(2));
    assert_eq!(overrides.depth_for(OperationKind::Mutation, "settings"), None);

    let reservations = config.examples.get("reservations").unwrap();
    assert_eq!(reservations.exclude_arguments, vec!["last"]);
    assert_eq!(reservations.override_arguments.get("first"), Some(&json!(15)));

    assert_eq!(config.servers.len(), 2);
    assert_eq!(config.servers[0].description, "Production");
    assert_eq!(config.servers[1].description, "");
    assert_eq!(config.servers[1].url, "https://staging.example.com/graphql");
    Ok(())
}

#[test]
fn missing_sections_take_defaults() -> Result<(), ConfigLoadError> {
    let config = DocsConfig::from_yaml_str("servers: []\n")?;
    assert_eq!(config.field_expansion_depth, DEFAULT_FIELD_EXPANSION_DEPTH);
    assert!(config.field_expansion_depth_overrides.queries.is_empty());
    assert!(config.examples.is_empty());

    assert_eq!(DocsConfig::from_yaml_str("")?, DocsConfig::default());
    assert_eq!(DocsConfig::from_json_str("{}")?, DocsConfig::default());
    Ok(())
}

#[test]
fn json_config_is_loaded() -> Result<(), ConfigLoadError> {
    let config = DocsConfig::from_json_str(r#"{
        "fieldExpansionDepthOverrides": { "mutations": { "createRoomAccessKey": 5 } },
        "examples": { "updateReservation": { "excludeResponseFields": ["secret"] } }
    }"#)?;

    assert_eq!(
        config.field_expansion_depth_overrides
            .depth_for(OperationKind::Mutation, "createRoomAccessKey"),
        Some(5),
    );
    assert_eq!(
        config.examples.get("updateReservation").unwrap().exclude_response_fields,
        vec!["secret"],
    );
    Ok(())
}

#[test]
fn malformed_yaml_is_an_error() {
    let result = DocsConfig::from_yaml_str("fieldExpansionDepth: [not, a, number]\n");
    assert!(matches!(result, Err(ConfigLoadError::Yaml(_))));
}

mod from_file {
    use super::*;

    #[test]
    fn format_follows_extension() -> Result<(), ConfigLoadError> {
        let yaml_path = temp_config_path("config.yml");
        std::fs::write(&yaml_path, YAML_CONFIG).unwrap();
        let from_yaml = DocsConfig::from_file(&yaml_path);
        std::fs::remove_file(&yaml_path).unwrap();
        assert_eq!(from_yaml?.field_expansion_depth, 2);

        let json_path = temp_config_path("config.JSON");
        std::fs::write(&json_path, r#"{"fieldExpansionDepth": 3}"#).unwrap();
        let from_json = DocsConfig::from_file(&json_path);
        std::fs::remove_file(&json_path).unwrap();
        assert_eq!(from_json?.field_expansion_depth, 3);
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let path = temp_config_path("does-not-exist.toml");
        let result = DocsConfig::from_file(&path);

        match result {
            Err(ConfigLoadError::UnsupportedExtension(rejected)) => {
                assert_eq!(rejected, path);
            },
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = temp_config_path("does-not-exist.yaml");
        let result = DocsConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }

    #[test]
    fn shipped_config_loads() -> Result<(), ConfigLoadError> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../gqldoc.yaml");
        let config = DocsConfig::from_file(path)?;

        let overrides = &config.field_expansion_depth_overrides;
        assert_eq!(overrides.depth_for(OperationKind::Query, "roomAccessKeys"), Some(6));
        assert_eq!(overrides.depth_for(OperationKind::Mutation, "updateCategoryPrices"), Some(5));
        assert!(config.examples.is_empty());
        Ok(())
    }
}
