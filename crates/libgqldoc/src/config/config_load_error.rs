use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failure while trying to read a config file from disk: {path:?}")]
    Io {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Malformed YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Unsupported config file extension (expected `.yaml`, `.yml` or `.json`): \
        {0:?}"
    )]
    UnsupportedExtension(PathBuf),
}
