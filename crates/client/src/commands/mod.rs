//! Command handlers.
//!
//! Each handler turns one parsed subcommand into a single API call and
//! renders the result. Handlers return errors instead of exiting; `main`
//! decides what the user sees and the exit status.

mod licenses;
mod memberships;
mod messages;
mod organizations;
mod people;
mod roles;
mod rooms;
mod team_memberships;
mod teams;
mod webhooks;


use std::io::Write;

use crate::cli::{Cli, Commands};
use crate::client::{ClientConfig, SparkClient};
use crate::config::Settings;
use crate::error::Result;
use crate::output::trace::TraceSink;
use crate::output::Output;

/// What the caller should do once a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered.
    Done,
    /// A required flag was missing; show help for this subcommand path.
    ShowHelp(&'static [&'static str]),
}

/// Everything a handler needs: the API client, the output sink and the page size.
#[derive(Debug)]
pub struct Context<'a, W: Write> {
    pub client: &'a SparkClient,
    pub output: Output<W>,
    pub max: u32,
}

impl<'a, W: Write> Context<'a, W> {
    pub fn new(client: &'a SparkClient, output: Output<W>, max: u32) -> Self {
        Self {
            client,
            output,
            max,
        }
    }
}

/// Resolve credentials, build the client and run the parsed command.
///
/// Credential resolution happens before the HTTP client exists, so a missing
/// token never reaches the network.
pub async fn execute<W: Write>(cli: Cli, writer: W) -> Result<Outcome> {
    let Cli { global, command } = cli;

    let settings = Settings::resolve(
        global.token.as_deref(),
        global.base_url.as_deref(),
        global.config.as_deref(),
    )?;
    tracing::debug!(
        source = ?settings.token_source,
        base_url = %settings.base_url,
        "resolved credentials"
    );

    let client = SparkClient::new(ClientConfig {
        base_url: settings.base_url,
        token: settings.token,
        insecure: global.insecure,
        trace: global.verbose.then(TraceSink::stderr),
    })?;

    let mut ctx = Context::new(&client, Output::new(writer, global.format), global.max);
    dispatch(command, &mut ctx).await
}

/// Route a subcommand to its handler.
pub async fn dispatch<W: Write>(command: Commands, ctx: &mut Context<'_, W>) -> Result<Outcome> {
    match command {
        Commands::Rooms(cmd) => rooms::run(cmd.action, ctx).await,
        Commands::Messages(cmd) => messages::run(cmd.action, ctx).await,
        Commands::Memberships(cmd) => memberships::run(cmd.action, ctx).await,
        Commands::Teams(cmd) => teams::run(cmd.action, ctx).await,
        Commands::TeamMemberships(cmd) => team_memberships::run(cmd.action, ctx).await,
        Commands::People(cmd) => people::run(cmd.action, ctx).await,
        Commands::Organizations(cmd) => organizations::run(cmd.action, ctx).await,
        Commands::Roles(cmd) => roles::run(cmd.action, ctx).await,
        Commands::Licenses(cmd) => licenses::run(cmd.action, ctx).await,
        Commands::Webhooks(cmd) => webhooks::run(cmd.action, ctx).await,
    }
}
