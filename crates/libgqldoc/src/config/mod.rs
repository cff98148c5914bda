//! The documentation build's configuration file (`gqldoc.yaml` by default).

mod config_load_error;
mod docs_config;

pub use config_load_error::ConfigLoadError;
pub use docs_config::DocsConfig;
pub use docs_config::DEFAULT_FIELD_EXPANSION_DEPTH;

#[cfg(test)]
mod tests;
