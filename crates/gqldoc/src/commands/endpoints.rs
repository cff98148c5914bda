use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct EndpointsCmd {}

#[inherent::inherent]
impl RunnableCommand for EndpointsCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let config = match cli.load_config() {
            Ok(config) => config,
            Err(err) => return CommandResult::from_error(err),
        };

        if config.servers.is_empty() {
            log::warn!("No servers are configured in {:?}.", cli.config);
        }
        CommandResult::stdout(format_args!(
            "{}",
            libgqldoc::format_api_endpoints(&config.servers),
        ))
    }
}
