//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// User Admin - administrative user management service
#[derive(Parser, Debug)]
#[command(name = "user-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}
