//! Organization CLI commands.

use clap::{Parser, Subcommand};

/// Organization lookup commands.
#[derive(Debug, Parser)]
pub struct OrganizationsCommand {
    #[command(subcommand)]
    pub action: OrganizationsAction,
}

/// Available organization actions.
#[derive(Debug, Subcommand)]
pub enum OrganizationsAction {
    /// List organizations.
    List,
    /// Get organization by ID.
    Get {
        /// Organization ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
