//! People CLI commands.

use clap::{Parser, Subcommand};

/// People lookup commands.
#[derive(Debug, Parser)]
pub struct PeopleCommand {
    #[command(subcommand)]
    pub action: PeopleAction,
}

/// Available people actions.
#[derive(Debug, Subcommand)]
pub enum PeopleAction {
    /// Search people by email or display name.
    List {
        /// Exact email address.
        #[arg(short, long)]
        email: Option<String>,
        /// Display name prefix.
        #[arg(short, long)]
        name: Option<String>,
        /// Organization ID.
        #[arg(short, long)]
        org_id: Option<String>,
    },
    /// Get person by ID.
    Get {
        /// Person ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Show the authenticated user.
    Me,
}
