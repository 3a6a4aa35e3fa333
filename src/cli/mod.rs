//! CLI module for the Course Library API

pub mod serve;

use clap::{Parser, Subcommand};

/// Course Library API - authors and courses over HTTP
#[derive(Parser)]
#[command(name = "course-library")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
