//! Team membership CLI commands.

use clap::{Parser, Subcommand};

/// Team membership commands.
#[derive(Debug, Parser)]
pub struct TeamMembershipsCommand {
    #[command(subcommand)]
    pub action: TeamMembershipsAction,
}

/// Available team membership actions.
#[derive(Debug, Subcommand)]
pub enum TeamMembershipsAction {
    /// List team memberships.
    List {
        /// Limit results to a team, by ID.
        #[arg(short, long)]
        team: Option<String>,
    },
    /// Add someone to a team by person ID or email address.
    Create {
        /// Team ID.
        #[arg(short, long)]
        team: Option<String>,
        /// Person ID.
        #[arg(short, long)]
        person_id: Option<String>,
        /// Email address of the person.
        #[arg(short = 'e', long)]
        person_email: Option<String>,
        /// Make the person a team moderator.
        #[arg(short = 'M', long)]
        moderator: bool,
    },
    /// Get team membership by ID.
    Get {
        /// Team membership ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Update a team membership's moderator flag.
    Update {
        /// Team membership ID.
        #[arg(short, long)]
        id: Option<String>,
        /// Moderator flag; omitting it revokes moderation.
        #[arg(short = 'M', long)]
        moderator: bool,
    },
    /// Remove a team membership by ID.
    Delete {
        /// Team membership ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
