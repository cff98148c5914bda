mod endpoints;
mod example;
mod markdown;
mod navigation;

use crate::Cli;
use crate::CommandResult;
use endpoints::EndpointsCmd;
use example::ExampleCmd;
use markdown::MarkdownCmd;
use navigation::NavigationCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqldoc")]
pub(crate) enum CommandEnum {
    /// Print the configured API endpoints.
    Endpoints(EndpointsCmd),

    /// Filter an operation's generated Query/Variables/Response examples.
    Example(Box<ExampleCmd>),

    /// Expand the custom markdown syntax in documentation files.
    Markdown(Box<MarkdownCmd>),

    /// Print the documentation navigation tree for an introspection result.
    Navigation(Box<NavigationCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Endpoints(cmd) => cmd.run(cli).await,
            Self::Example(cmd) => cmd.run(cli).await,
            Self::Markdown(cmd) => cmd.run(cli).await,
            Self::Navigation(cmd) => cmd.run(cli).await,
        }
    }
}
