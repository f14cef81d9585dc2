use bugtracker_core::BugStatus;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bugtracker")]
#[command(about = "Bug Tracker - track, triage and resolve bugs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the bug tracker API
    #[arg(long, env = "BUGTRACKER_URL", default_value = "http://localhost:5000")]
    pub server_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all bugs
    List,

    /// Report a new bug
    Add {
        /// Bug title
        title: String,

        /// Bug description
        #[arg(long)]
        description: Option<String>,
    },

    /// Mark a bug as in progress
    Start {
        /// Bug ID
        id: String,
    },

    /// Mark a bug as resolved
    Resolve {
        /// Bug ID
        id: String,
    },

    /// Set a bug's status
    Status {
        /// Bug ID
        id: String,

        /// New status (open, in-progress, resolved)
        status: BugStatus,
    },

    /// Delete a bug
    Delete {
        /// Bug ID
        id: String,
    },

    /// Start API server
    Serve {
        /// Port to listen on
        #[arg(long, env = "BUGTRACKER_PORT", default_value = "5000")]
        port: u16,
    },
}
