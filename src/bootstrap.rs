// Bootstrap module for resolving the plugin environment variables

use crate::config;
use crate::constants;
use crate::error::Result;
use log::debug;

/// Plugin-related environment, read once per invocation.
///
/// `BUILD_TIME_PLUGINS` and `RUN_TIME_PLUGINS` fall back to the default
/// plugin list when unset, so after [`BuildEnv::from_env`] both are always
/// present. A variable that is set but not valid UTF-8 is an error, never a
/// reason to fall back to the default. The `Option`s exist so callers can
/// build an environment where a step is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub build_time_plugins: Option<String>,
    pub run_time_plugins: Option<String>,
    pub default_settings_module: Option<String>,
    pub unbuilt_plugins: Option<String>,
}

impl BuildEnv {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(config::env_var, &config::default_plugins_path()?)
    }

    /// Resolve the environment through `lookup`, applying `default_plugins`
    /// to the two plugin list variables when they are absent.
    pub fn from_lookup<F>(lookup: F, default_plugins: &str) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let with_default = |key: &str| -> Result<Option<String>> {
            Ok(lookup(key)?.or_else(|| {
                debug!("{} not set, defaulting to {}", key, default_plugins);
                Some(default_plugins.to_string())
            }))
        };

        let env = Self {
            build_time_plugins: with_default(constants::BUILD_TIME_PLUGINS_VAR)?,
            run_time_plugins: with_default(constants::RUN_TIME_PLUGINS_VAR)?,
            default_settings_module: lookup(constants::DEFAULT_SETTINGS_MODULE_VAR)?,
            unbuilt_plugins: lookup(constants::UNBUILT_PLUGINS_VAR)?,
        };

        if let Some(unbuilt) = &env.unbuilt_plugins {
            debug!(
                "{} is set to {} but unbuilt plugins are not handled here",
                constants::UNBUILT_PLUGINS_VAR,
                unbuilt
            );
        }

        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<Option<String>> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| Ok(vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied_when_unset() {
        let env = BuildEnv::from_lookup(lookup_from(&[]), "tools/default_plugins.txt").unwrap();

        assert_eq!(
            env.build_time_plugins.as_deref(),
            Some("tools/default_plugins.txt")
        );
        assert_eq!(
            env.run_time_plugins.as_deref(),
            Some("tools/default_plugins.txt")
        );
        assert_eq!(env.default_settings_module, None);
        assert_eq!(env.unbuilt_plugins, None);
    }

    #[test]
    fn test_existing_values_are_kept() {
        let env = BuildEnv::from_lookup(
            lookup_from(&[
                ("BUILD_TIME_PLUGINS", "https://example.com/build.txt"),
                ("RUN_TIME_PLUGINS", "/srv/run.txt"),
                ("DEFAULT_SETTINGS_MODULE", "myapp.settings"),
            ]),
            "default_plugins.txt",
        )
        .unwrap();

        assert_eq!(
            env.build_time_plugins.as_deref(),
            Some("https://example.com/build.txt")
        );
        assert_eq!(env.run_time_plugins.as_deref(), Some("/srv/run.txt"));
        assert_eq!(
            env.default_settings_module.as_deref(),
            Some("myapp.settings")
        );
    }

    #[test]
    fn test_only_missing_variable_is_defaulted() {
        let env = BuildEnv::from_lookup(
            lookup_from(&[("RUN_TIME_PLUGINS", "run.txt")]),
            "default_plugins.txt",
        )
        .unwrap();

        assert_eq!(
            env.build_time_plugins.as_deref(),
            Some("default_plugins.txt")
        );
        assert_eq!(env.run_time_plugins.as_deref(), Some("run.txt"));
    }

    #[test]
    fn test_unbuilt_plugins_is_recorded() {
        let env = BuildEnv::from_lookup(
            lookup_from(&[("UNBUILT_PLUGINS", "unbuilt.txt")]),
            "default_plugins.txt",
        )
        .unwrap();

        assert_eq!(env.unbuilt_plugins.as_deref(), Some("unbuilt.txt"));
    }

    #[test]
    fn test_non_utf8_plugin_list_is_not_defaulted() {
        let lookup = |key: &str| {
            if key == "BUILD_TIME_PLUGINS" {
                Err(Error::InvalidEnvVar {
                    name: key.to_string(),
                    value: OsString::from("/srv/plug?ins.txt"),
                })
            } else {
                Ok(None)
            }
        };

        let err = BuildEnv::from_lookup(lookup, "default_plugins.txt").unwrap_err();

        assert!(matches!(err, Error::InvalidEnvVar { .. }));
    }
}
