//! CLI command definitions.

pub mod licenses;
pub mod memberships;
pub mod messages;
pub mod organizations;
pub mod people;
pub mod roles;
pub mod rooms;
pub mod team_memberships;
pub mod teams;
pub mod webhooks;

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{BASE_URL_ENV, TOKEN_ENV};

/// CLI client for the Spark messaging API.
#[derive(Debug, Parser)]
#[command(name = "sparkctl")]
#[command(version, about = "CLI client for the Spark messaging API", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Config file (default is $HOME/.sparkctl.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Max results to return.
    #[arg(short, long, global = true, default_value_t = 10)]
    pub max: u32,

    /// Output format: json or csv. Unknown values fall back to json.
    #[arg(long, global = true, default_value = "json", value_parser = OutputFormat::parse_lenient)]
    pub format: OutputFormat,

    /// Echo outgoing requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip TLS certificate verification.
    #[arg(short = 'k', long, global = true)]
    pub insecure: bool,

    /// API base URL.
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// API access token.
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-space indented JSON.
    #[default]
    Json,
    /// Comma-separated values, flat records only.
    Csv,
}

impl OutputFormat {
    /// Parses a `--format` value; anything but `csv` means JSON.
    pub fn parse_lenient(value: &str) -> Result<Self, Infallible> {
        if value.trim().eq_ignore_ascii_case("csv") {
            Ok(OutputFormat::Csv)
        } else {
            Ok(OutputFormat::Json)
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rooms are virtual meeting places where people post messages.
    Rooms(rooms::RoomsCommand),
    /// Messages are how people communicate in rooms.
    Messages(messages::MessagesCommand),
    /// Memberships represent a person's relationship to a room.
    Memberships(memberships::MembershipsCommand),
    /// Teams are groups of people with a set of rooms visible to all members.
    Teams(teams::TeamsCommand),
    /// Team memberships represent a person's relationship to a team.
    TeamMemberships(team_memberships::TeamMembershipsCommand),
    /// People are registered users of the platform.
    People(people::PeopleCommand),
    /// Organizations (admin only).
    Organizations(organizations::OrganizationsCommand),
    /// Roles that can be assigned to people (admin only).
    Roles(roles::RolesCommand),
    /// Licenses available in an organization (admin only).
    Licenses(licenses::LicensesCommand),
    /// Webhooks notify an app when events occur.
    Webhooks(webhooks::WebhooksCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = parse(&["sparkctl", "teams", "list"]);

        assert_eq!(cli.global.max, 10);
        assert_eq!(cli.global.format, OutputFormat::Json);
        assert!(!cli.global.verbose);
        assert!(!cli.global.insecure);
        assert!(cli.global.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "sparkctl", "rooms", "list", "-m", "25", "--format", "csv", "-v",
        ]);

        assert_eq!(cli.global.max, 25);
        assert_eq!(cli.global.format, OutputFormat::Csv);
        assert!(cli.global.verbose);
    }

    #[test]
    fn test_unknown_format_falls_back_to_json() {
        let cli = parse(&["sparkctl", "--format", "yaml", "roles", "list"]);
        assert_eq!(cli.global.format, OutputFormat::Json);
    }

    #[test]
    fn test_kebab_case_resource_name() {
        let cli = parse(&["sparkctl", "team-memberships", "list", "-t", "team-1"]);
        assert!(matches!(cli.command, Commands::TeamMemberships(_)));
    }

    #[test]
    fn test_no_arguments_shows_help() {
        let err = Cli::try_parse_from(["sparkctl"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
