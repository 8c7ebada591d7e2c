//! License CLI commands.

use clap::{Parser, Subcommand};

/// License lookup commands.
#[derive(Debug, Parser)]
pub struct LicensesCommand {
    #[command(subcommand)]
    pub action: LicensesAction,
}

/// Available license actions.
#[derive(Debug, Subcommand)]
pub enum LicensesAction {
    /// List licenses.
    List {
        /// Organization ID, defaults to the user's own.
        #[arg(short, long)]
        org_id: Option<String>,
    },
    /// Get license by ID.
    Get {
        /// License ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
