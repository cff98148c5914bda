use anyhow::Context;
use clap::CommandFactory;
use crate::commands;
use libgqldoc::config::DocsConfig;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "gqldoc.yaml";

#[derive(clap::Parser, Debug)]
#[command(name = "gqldoc", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value=DEFAULT_CONFIG_PATH,
        global=true,
        help="Path to a YAML or JSON documentation config file. The default \
             path may be absent, in which case built-in defaults are used.",
        long,
    )]
    pub config: PathBuf,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn load_config(&self) -> anyhow::Result<DocsConfig> {
        if self.config.as_os_str() == DEFAULT_CONFIG_PATH && !self.config.exists() {
            log::debug!(
                "No `{DEFAULT_CONFIG_PATH}` found in the working directory. Using \
                default config.",
            );
            return Ok(DocsConfig::default());
        }

        let config = DocsConfig::from_file(self.config.as_path())
            .with_context(|| format!("Failed to load config from {:?}", self.config))?;
        log::debug!(
            "Loaded config from {:?} ({} example filters, {} servers).",
            self.config,
            config.examples.operation_names().count(),
            config.servers.len(),
        );
        Ok(config)
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
