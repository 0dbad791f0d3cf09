//! CLI module for the DeepBuilder backend
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API (and optional static front-end bundle)

pub mod serve;

use clap::{Parser, Subcommand};

/// DeepBuilder backend - model configuration and dataset upload API
#[derive(Parser)]
#[command(name = "deepbuilder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
