use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntrospectionLoadError {
    #[error("Failure while trying to read an introspection file from disk: {file_path:?}")]
    ReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Introspection JSON is malformed or has no `__schema` object: {0}")]
    JsonError(#[from] serde_json::Error),
}
