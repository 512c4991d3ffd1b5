mod render;


use crate::Cli;
use crate::CommandResult;
pub(crate) use render::RenderCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlshape")]
pub(crate) enum CommandEnum {
    /// Render the query document described by each JSON shape file.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await
        }
    }
}
