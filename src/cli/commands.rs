use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hd", about = concat!("hd v", env!("CARGO_PKG_VERSION"), " - hotel helpdesk ticket dashboard"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $HELPDESK_CONFIG, then ./helpdesk.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (default: $HELPDESK_LOG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with an empty ticket store
    #[arg(long, global = true)]
    pub no_sample: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tickets, filtered and sorted like the dashboard
    List(ListArgs),
    /// List the staff roster
    Staff,
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Filter by priority (low, medium, high, all)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter by status (open, in-progress, closed, all)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by assignee name (or all)
    #[arg(long, value_name = "NAME")]
    pub assigned_to: Option<String>,
    /// Sort order (newest, oldest, highest, lowest)
    #[arg(long)]
    pub sort: Option<String>,
}
