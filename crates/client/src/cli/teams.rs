//! Team CLI commands.

use clap::{Parser, Subcommand};

/// Team management commands.
#[derive(Debug, Parser)]
pub struct TeamsCommand {
    #[command(subcommand)]
    pub action: TeamsAction,
}

/// Available team actions.
#[derive(Debug, Subcommand)]
pub enum TeamsAction {
    /// List teams the authenticated user belongs to.
    List {
        /// Keep teams whose name contains this text.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Create a team. The authenticated user becomes a member.
    Create {
        /// Team name.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Get team by ID.
    Get {
        /// Team ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Rename a team.
    Update {
        /// Team ID.
        #[arg(short, long)]
        id: Option<String>,
        /// New name.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete team by ID.
    Delete {
        /// Team ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
