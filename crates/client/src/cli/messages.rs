//! Message CLI commands.

use clap::{Parser, Subcommand};

/// Message commands.
#[derive(Debug, Parser)]
pub struct MessagesCommand {
    #[command(subcommand)]
    pub action: MessagesAction,
}

/// Available message actions.
#[derive(Debug, Subcommand)]
pub enum MessagesAction {
    /// List messages in a room, newest first.
    List {
        /// Room to list messages from.
        #[arg(short, long)]
        room: Option<String>,
        /// Only messages mentioning these people (`me` or person IDs).
        #[arg(long)]
        mentioned_people: Option<String>,
        /// Only messages sent before this ISO 8601 date-time.
        #[arg(long)]
        before: Option<String>,
        /// Only messages sent before this message ID.
        #[arg(long)]
        before_message: Option<String>,
    },
    /// Post a message to a room or a person.
    ///
    /// When several bodies are given, html wins over markdown, which wins over text.
    #[command(alias = "send")]
    Create {
        /// Room to post in.
        #[arg(short, long)]
        room: Option<String>,
        /// Recipient person ID for a direct message.
        #[arg(long)]
        to_person_id: Option<String>,
        /// Recipient email for a direct message.
        #[arg(long)]
        to_person_email: Option<String>,
        /// HTML message body.
        #[arg(short = 'H', long)]
        html: Option<String>,
        /// Markdown message body.
        #[arg(short = 'M', long)]
        markdown: Option<String>,
        /// Plain text message body.
        #[arg(short = 'T', long)]
        text: Option<String>,
    },
    /// Get message by ID.
    Get {
        /// Message ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Delete message by ID.
    Delete {
        /// Message ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
