//! Role CLI commands.

use clap::{Parser, Subcommand};

/// Role lookup commands.
#[derive(Debug, Parser)]
pub struct RolesCommand {
    #[command(subcommand)]
    pub action: RolesAction,
}

/// Available role actions.
#[derive(Debug, Subcommand)]
pub enum RolesAction {
    /// List roles.
    List,
    /// Get role by ID.
    Get {
        /// Role ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
