//! FleetNav - command-line client for the robot-fleet cloud API.
//!
//! Main entry point for the fleetnav CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{dispatch, robots, state, task, token};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// FleetNav - dispatch and monitor robot-fleet navigation tasks
#[derive(Parser)]
#[command(name = "fleetnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: discovered fleetnav.toml + user config)
    #[arg(long, global = true, env = "FLEETNAV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Obtain a session token and show its validity window
    Token(token::TokenArgs),

    /// List robots registered with the fleet service
    Robots(robots::RobotsArgs),

    /// Show the live state of one robot
    State(state::StateArgs),

    /// Build a task from a route file and submit it
    Dispatch(dispatch::DispatchArgs),

    /// One-off operations on an existing task
    Task(task::TaskArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — console, filter widened by --verbose
    let filter = if cli.verbose {
        "fleetnav=debug,fleetnav_client=debug,fleetnav_config=debug,info"
    } else {
        "fleetnav=info,fleetnav_client=info,warn"
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
                ),
        )
        .init();

    // Resolve configuration before touching the network
    let config = match &cli.config {
        Some(path) => fleetnav_config::load_config_file(path)?,
        None => fleetnav_config::load_config(None)?.config,
    };

    let ctx = commands::Context {
        config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Token(args) => token::run(args, &ctx).await,
        Commands::Robots(args) => robots::run(args, &ctx).await,
        Commands::State(args) => state::run(args, &ctx).await,
        Commands::Dispatch(args) => dispatch::run(args, &ctx).await,
        Commands::Task(args) => task::run(args, &ctx).await,
    }
}
