//! Webhook CLI commands.
//!
//! Only listing is exposed; creating and changing webhooks is left to the API client.

use clap::{Parser, Subcommand};

/// Webhook commands.
#[derive(Debug, Parser)]
pub struct WebhooksCommand {
    #[command(subcommand)]
    pub action: WebhooksAction,
}

/// Available webhook actions.
#[derive(Debug, Subcommand)]
pub enum WebhooksAction {
    /// List webhooks registered by the authenticated user.
    List,
}
