// Config module for shared configuration utilities

use crate::constants;
use crate::error::{Error, Result};
use std::env::VarError;
use std::path::PathBuf;

/// Read an environment variable, treating only an absent variable as unset.
///
/// A value that is present but not valid UTF-8 is an error.
pub fn env_var(name: &str) -> Result<Option<String>> {
    check_var(name, std::env::var(name))
}

fn check_var(name: &str, value: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(Error::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

pub fn base_dir() -> Result<String> {
    Ok(env_var("CUSTOMIZE_BUILD_DIR")?.unwrap_or_else(|| ".".to_string()))
}

fn in_base_dir(name: &str) -> Result<String> {
    let dir = base_dir()?;
    if dir == "." {
        Ok(name.to_string())
    } else {
        Ok(format!("{}/{}", dir, name))
    }
}

/// Plugin list used when `BUILD_TIME_PLUGINS` or `RUN_TIME_PLUGINS` is unset.
pub fn default_plugins_path() -> Result<String> {
    in_base_dir(constants::DEFAULT_PLUGINS_FILE)
}

pub fn build_config_dir() -> Result<String> {
    match env_var("BUILD_CONFIG_DIR")? {
        Some(dir) => Ok(dir),
        None => in_base_dir(constants::BUILD_CONFIG_DIR),
    }
}

pub fn settings_store_path() -> Result<String> {
    match env_var("SETTINGS_STORE")? {
        Some(path) => Ok(path),
        None => in_base_dir(constants::SETTINGS_STORE_FILE),
    }
}

/// Where generated output lands.
#[derive(Debug, Clone)]
pub struct BuildPaths {
    pub build_config_dir: PathBuf,
    pub settings_store: PathBuf,
}

impl BuildPaths {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            build_config_dir: PathBuf::from(build_config_dir()?),
            settings_store: PathBuf::from(settings_store_path()?),
        })
    }

    pub fn default_settings_file(&self) -> PathBuf {
        self.build_config_dir.join(constants::DEFAULT_SETTINGS_OUTPUT)
    }

    pub fn default_plugins_file(&self) -> PathBuf {
        self.build_config_dir.join(constants::DEFAULT_PLUGINS_OUTPUT)
    }
}
