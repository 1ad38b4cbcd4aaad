mod bootstrap;
mod cli;
mod commands;
mod config;
mod constants;
mod error;
mod plugin_list;
mod render;
mod settings_store;
mod sources;
mod ui;

use std::sync::Arc;

use bootstrap::BuildEnv;
use clap::Parser;
use cli::{Cli, Commands};
use commands::BuildContext;
use config::BuildPaths;
use sources::HttpFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let env = BuildEnv::from_env()?;
    let paths = BuildPaths::from_env()?;
    log::debug!("Resolved environment: {:?}, paths: {:?}", env, paths);

    let fetcher = Arc::new(HttpFetcher::new());
    let mut ctx = BuildContext::new(env, paths, fetcher, cli.dry_run);

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => commands::customize::customize(&mut ctx).await?,
        Commands::BuildTime => commands::build_time::configure_build_time(&mut ctx).await?,
        Commands::DefaultSettings => {
            commands::default_settings::configure_default_settings(&ctx)?
        }
        Commands::RunTime => commands::run_time::configure_run_time(&mut ctx).await?,
    }

    Ok(())
}
