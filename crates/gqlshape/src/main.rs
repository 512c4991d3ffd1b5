mod cli;
mod command;
mod command_result;
mod commands;
mod logging;
mod output_utils;


use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    let result =
        match cli.cmd.take() {
            Some(command) => command.run(&cli).await,
            None => cli.run_default(),
        };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}
