use crate::CommandResult;
use crate::commands;
use clap::CommandFactory;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Render GraphQL query documents from JSON shape files.",
    name = "gqlshape",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output. Otherwise the level is read from the \
             `LOG_LEVEL` environment variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, print the help text.
    pub(crate) fn run_default(&self) -> CommandResult {
        CommandResult::stdout(format_args!("{}", Self::command().render_help()))
    }
}
