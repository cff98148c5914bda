use crate::config::ConfigLoadError;
use crate::example_filter::ExampleConfig;
use crate::navigation::FieldExpansionDepthConfig;
use crate::ServerEntry;
use std::path::Path;

type Result<T> = std::result::Result<T, ConfigLoadError>;

/// Nested-field expansion depth used for operations without an override.
pub const DEFAULT_FIELD_EXPANSION_DEPTH: u32 = 1;

fn default_field_expansion_depth() -> u32 {
    DEFAULT_FIELD_EXPANSION_DEPTH
}

/// Every section is optional:
///
/// ```yaml
/// fieldExpansionDepth: 1
/// fieldExpansionDepthOverrides:
///   queries:
///     settings: 4
///   mutations:
///     updateReservation: 2
/// examples:
///   reservations:
///     excludeArguments: [last]
/// servers:
///   - description: Production
///     url: https://api.example.com/graphql
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    #[serde(default = "default_field_expansion_depth")]
    pub field_expansion_depth: u32,
    pub field_expansion_depth_overrides: FieldExpansionDepthConfig,
    pub examples: ExampleConfig,
    pub servers: Vec<ServerEntry>,
}
impl DocsConfig {
    /// Loads a config file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension =
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase());
        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("yaml" | "yml") => false,
            _ => return Err(ConfigLoadError::UnsupportedExtension(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        log::debug!("Loaded config file {path:?}.");

        if is_json {
            Self::from_json_str(text.as_str())
        } else {
            Self::from_yaml_str(text.as_str())
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// An empty document yields the default config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
impl std::default::Default for DocsConfig {
    fn default() -> Self {
        Self {
            field_expansion_depth: DEFAULT_FIELD_EXPANSION_DEPTH,
            field_expansion_depth_overrides: FieldExpansionDepthConfig::default(),
            examples: ExampleConfig::default(),
            servers: vec![],
        }
    }
}
