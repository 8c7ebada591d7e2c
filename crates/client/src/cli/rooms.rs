//! Room CLI commands.

use clap::{Parser, Subcommand, ValueEnum};

use sparkctl_core::models::RoomType as CoreRoomType;

/// Room management commands.
#[derive(Debug, Parser)]
pub struct RoomsCommand {
    #[command(subcommand)]
    pub action: RoomsAction,
}

/// CLI room type (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoomType {
    Direct,
    Group,
}

impl From<RoomType> for CoreRoomType {
    fn from(t: RoomType) -> Self {
        match t {
            RoomType::Direct => CoreRoomType::Direct,
            RoomType::Group => CoreRoomType::Group,
        }
    }
}

/// Available room actions.
#[derive(Debug, Subcommand)]
pub enum RoomsAction {
    /// List rooms the authenticated user belongs to.
    List {
        /// Filter by room type.
        #[arg(short = 'r', long, value_enum)]
        room_type: Option<RoomType>,
        /// Keep rooms whose title contains this text.
        #[arg(short, long)]
        name: Option<String>,
        /// Keep rooms that belong to this team.
        #[arg(short, long)]
        team_id: Option<String>,
    },
    /// Create a room.
    Create {
        /// Room title.
        #[arg(short, long)]
        name: Option<String>,
        /// Team the room belongs to.
        #[arg(short, long)]
        team_id: Option<String>,
    },
    /// Get room by ID.
    Get {
        /// Room ID.
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Update a room's title.
    Update {
        /// Room ID.
        #[arg(short, long)]
        id: Option<String>,
        /// New title.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete room by ID.
    Delete {
        /// Room ID.
        #[arg(short, long)]
        id: Option<String>,
    },
}
