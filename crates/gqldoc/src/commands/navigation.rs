use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqldoc::introspection::IntrospectionSchema;
use libgqldoc::navigation::NavigationBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct NavigationCmd {
    #[arg(
        help="Path to an introspection result, either `{\"__schema\": ...}` or \
             a full `{\"data\": {\"__schema\": ...}}` response.",
        name="INTROSPECTION_JSON",
    )]
    introspection_json: PathBuf,
}
impl NavigationCmd {
    fn execute(&self, cli: &Cli) -> anyhow::Result<String> {
        let config = cli.load_config()?;
        let schema = IntrospectionSchema::from_file(self.introspection_json.as_path())
            .with_context(|| format!(
                "Failed to load introspection result from {:?}",
                self.introspection_json,
            ))?;
        log::debug!(
            "Loaded {} types and {} directives from {:?}.",
            schema.types.len(),
            schema.directives.len(),
            self.introspection_json,
        );

        for operation_name in config.examples.unknown_operations(&schema) {
            log::warn!(
                "Example config for `{operation_name}` matches no query or \
                mutation in the schema and will be ignored.",
            );
        }

        let nav = NavigationBuilder::new(&schema)
            .depth_config(&config.field_expansion_depth_overrides)
            .build();
        Ok(serde_json::to_string_pretty(&nav)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for NavigationCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        self.execute(&cli).into()
    }
}
