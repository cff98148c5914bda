use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqldoc::example_filter::ExampleFilter;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExampleCmd {
    #[arg(
        help="Name of the query or mutation the examples belong to.",
        name="OPERATION",
    )]
    operation: String,

    #[arg(help="Path to the generated Query example (GraphQL).", long)]
    query: Option<PathBuf>,

    #[arg(help="Path to the generated Variables example (a JSON object).", long)]
    variables: Option<PathBuf>,

    #[arg(help="Path to the generated Response example (JSON).", long)]
    response: Option<PathBuf>,
}
impl ExampleCmd {
    fn execute(&self, cli: &Cli) -> anyhow::Result<String> {
        if self.query.is_none() && self.variables.is_none() && self.response.is_none() {
            anyhow::bail!("At least one of --query, --variables or --response is required.");
        }

        let config = cli.load_config()?;
        let filter = ExampleFilter::new(&config.examples);
        if config.examples.get(self.operation.as_str()).is_none() {
            log::debug!(
                "No example config for `{}`. Examples are passed through as-is.",
                self.operation,
            );
        }

        let mut sections = vec![];
        if let Some(path) = &self.query {
            let query = read_file(path)?;
            let filtered = filter.filter_query(query.as_str(), self.operation.as_str());
            validate_query(filtered.as_str())?;
            sections.push(("Query", filtered));
        }
        if let Some(path) = &self.variables {
            let variables: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(read_file(path)?.as_str())
                    .with_context(|| format!("{path:?} is not a JSON object"))?;
            let filtered = filter.filter_variables(&variables, self.operation.as_str());
            sections.push(("Variables", serde_json::to_string_pretty(&filtered)?));
        }
        if let Some(path) = &self.response {
            let response: serde_json::Value =
                serde_json::from_str(read_file(path)?.as_str())
                    .with_context(|| format!("{path:?} is not valid JSON"))?;
            let filtered = filter.filter_response(&response, self.operation.as_str());
            sections.push(("Response", serde_json::to_string_pretty(&filtered)?));
        }

        Ok(render_sections(&sections))
    }
}

#[inherent::inherent]
impl RunnableCommand for ExampleCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        self.execute(&cli).into()
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:?}"))
}

pub(super) fn render_sections(sections: &[(&str, String)]) -> String {
    sections.iter()
        .map(|(title, body)| format!("# {title}\n{}", body.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Filtering is line-based, so make sure the result still parses.
pub(super) fn validate_query(query: &str) -> anyhow::Result<()> {
    graphql_parser::parse_query::<String>(query)
        .map(|_| ())
        .map_err(|err| anyhow::anyhow!("Filtered query is not valid GraphQL: {err}"))
}
