//! sparkctl_client - CLI client for the Spark messaging REST API.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use client::{ClientConfig, SparkClient};
pub use error::{ClientError, Result};
