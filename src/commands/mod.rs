// Commands module for the configuration steps

use crate::bootstrap::BuildEnv;
use crate::config::BuildPaths;
use crate::error::Error;
use crate::plugin_list::PluginListLoader;
use crate::sources::ListFetcher;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub mod build_time;
pub mod customize;
pub mod default_settings;
pub mod run_time;

/// State shared by every configuration step in one invocation.
pub struct BuildContext {
    pub env: BuildEnv,
    pub paths: BuildPaths,
    pub loader: PluginListLoader,
    pub dry_run: bool,
}

impl BuildContext {
    pub fn new(
        env: BuildEnv,
        paths: BuildPaths,
        fetcher: Arc<dyn ListFetcher>,
        dry_run: bool,
    ) -> Self {
        Self {
            env,
            paths,
            loader: PluginListLoader::new(fetcher),
            dry_run,
        }
    }
}

/// Write a generated file, creating its directory if needed.
fn write_generated(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::write_failed(dir.display().to_string(), e))?;
    }
    fs::write(path, content).map_err(|e| Error::write_failed(path.display().to_string(), e))?;
    Ok(())
}
