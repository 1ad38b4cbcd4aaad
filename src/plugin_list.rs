// Plugin list loading with a per-invocation cache

use crate::constants;
use crate::error::{Error, Result};
use crate::sources::ListFetcher;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Split plugin list text into one trimmed entry per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Blank lines are kept as
/// empty strings. A trailing line ending does not add an entry.
pub fn parse_plugin_list(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with(constants::REMOTE_SOURCE_PREFIX)
}

fn read_plugin_file(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).map_err(|e| Error::from_read(path.display().to_string(), e))?;
    Ok(parse_plugin_list(&text))
}

/// Loads plugin lists from local paths or URLs.
///
/// Results are memoized by the source string exactly as given, so a URL is
/// cached under the URL and never under the temporary file it was spooled to.
/// The cache lives as long as the loader and is never invalidated.
pub struct PluginListLoader {
    fetcher: Arc<dyn ListFetcher>,
    cache: HashMap<String, Vec<String>>,
}

impl PluginListLoader {
    pub fn new(fetcher: Arc<dyn ListFetcher>) -> Self {
        Self {
            fetcher,
            cache: HashMap::new(),
        }
    }

    pub async fn load(&mut self, source: &str) -> Result<Vec<String>> {
        if let Some(plugins) = self.cache.get(source) {
            debug!("Using cached plugin list for {}", source);
            return Ok(plugins.clone());
        }

        let plugins = if is_remote(source) {
            self.load_remote(source).await?
        } else {
            read_plugin_file(Path::new(source))?
        };

        info!("Loaded {} plugin(s) from {}", plugins.len(), source);
        self.cache.insert(source.to_string(), plugins.clone());
        Ok(plugins)
    }

    async fn load_remote(&self, url: &str) -> Result<Vec<String>> {
        debug!("Fetching {} via {}", url, self.fetcher.name());
        let body = self.fetcher.fetch(url).await?;

        // Spool to disk and read back like any local list
        let mut spooled = tempfile::Builder::new()
            .prefix("plugins-")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| Error::write_failed("temporary plugin list", e))?;
        let spooled_path = spooled.path().display().to_string();
        spooled
            .write_all(&body)
            .and_then(|_| spooled.flush())
            .map_err(|e| Error::write_failed(spooled_path.as_str(), e))?;
        debug!("Spooled {} to {}", url, spooled_path);

        read_plugin_file(spooled.path())
    }

    #[cfg(test)]
    pub fn is_cached(&self, source: &str) -> bool {
        self.cache.contains_key(source)
    }
}
