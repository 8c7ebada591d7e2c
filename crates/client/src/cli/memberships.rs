//! Room membership CLI commands.

use clap::{Parser, Subcommand};

/// Room membership commands.
#[derive(Debug, Parser)]
pub struct MembershipsCommand {
    #[command(subcommand)]
    pub action: MembershipsAction,
}

/// Available membership actions.
#[derive(Debug, Subcommand)]
pub enum MembershipsAction {
    /// List room memberships, optionally narrowed by room or person.
    List {
        /// Limit results to a room, by ID.
        #[arg(short, long)]
        room: Option<String>,
        /// Limit results to a person, by ID.
        #[arg(short, long)]
        person_id: Option<String>,
        /// Limit results to a person, by email address.
        #[arg(short = 'e', long)]
        person_email: Option<String>,
    },
    /// Add someone to a room by person ID or email address.
    #[command(alias = "add")]
    Create {
        /// Room ID.
        #[arg(short, long)]
        room: Option<String>,
        /// Person ID.
        #[arg(short, long)]
        person_id: Option<String>,
        /// Email address of the person.
        #[arg(short = 'e', long)]
        person_email: Option<String>,
        /// Make the person a room moderator.
        #[arg(short = 'M', long)]
        moderator: bool,
    },
    /// Get membership by ID.
    Get {
        /// Membership ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Update a membership's moderator flag.
    Update {
        /// Membership ID.
        #[arg(short, long)]
        id: Option<String>,
        /// Moderator flag; omitting it revokes moderation.
        #[arg(short = 'M', long)]
        moderator: bool,
    },
    /// Remove a membership by ID.
    Delete {
        /// Membership ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
