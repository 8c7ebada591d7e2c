//! sparkctl CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use sparkctl_client::cli::Cli;
use sparkctl_client::commands::{self, Outcome};
use sparkctl_client::config::ConfigError;
use sparkctl_client::ClientError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose {
        "sparkctl_client=debug"
    } else {
        "sparkctl_client=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match commands::execute(cli, std::io::stdout()).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::ShowHelp(path)) => {
            if let Err(e) = print_subcommand_help(path) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(ClientError::Config(ConfigError::MissingToken)) => {
            let mut stderr = std::io::stderr();
            if let Err(e) = Cli::command().write_help(&mut stderr) {
                tracing::warn!(error = %e, "failed to print help");
            }
            eprintln!();
            eprintln!("Error: {}", ConfigError::MissingToken);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let ClientError::Api {
                tracking_id: Some(tracking_id),
                ..
            } = &e
            {
                eprintln!("Tracking ID: {tracking_id}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Print help for a nested subcommand such as `rooms delete` to stdout.
fn print_subcommand_help(path: &[&str]) -> std::io::Result<()> {
    let mut command = Cli::command();
    command.build();

    let mut target = command;
    for name in path {
        match target.find_subcommand(name) {
            Some(sub) => target = sub.clone(),
            None => break,
        }
    }
    target.print_help()
}
