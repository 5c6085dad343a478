//! CLI for the classroom assistant.

pub mod serve;

use clap::{Parser, Subcommand};

/// Classroom assistant - prompt-templating backend for teachers
#[derive(Parser)]
#[command(name = "classroom-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server and serve the browser client
    Serve,
}
