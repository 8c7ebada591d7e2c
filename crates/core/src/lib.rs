//! sparkctl_core - resource records and local filtering shared by the sparkctl client.

pub mod filter;
pub mod models;

pub use filter::{RoomFilter, TeamFilter};
