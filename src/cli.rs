// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "customize-build")]
#[command(about = "Write build-time and run-time plugin configuration for a packaged build")]
pub struct Cli {
    /// Load plugin lists and report what would be written, without writing
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run every step in order (default)
    All,
    /// Write BUILD_TIME_PLUGINS into the settings store
    BuildTime,
    /// Write the DEFAULT_SETTINGS_MODULE pointer
    DefaultSettings,
    /// Write RUN_TIME_PLUGINS as the default plugins module
    RunTime,
}
