// Constants module for shared string constants

pub const BUILD_TIME_PLUGINS_VAR: &str = "BUILD_TIME_PLUGINS";
pub const RUN_TIME_PLUGINS_VAR: &str = "RUN_TIME_PLUGINS";
pub const DEFAULT_SETTINGS_MODULE_VAR: &str = "DEFAULT_SETTINGS_MODULE";
pub const UNBUILT_PLUGINS_VAR: &str = "UNBUILT_PLUGINS";

pub const DEFAULT_PLUGINS_FILE: &str = "default_plugins.txt";
pub const BUILD_CONFIG_DIR: &str = "build_config";
pub const SETTINGS_STORE_FILE: &str = "settings.json";

pub const DEFAULT_SETTINGS_OUTPUT: &str = "default_settings.py";
pub const DEFAULT_PLUGINS_OUTPUT: &str = "default_plugins.py";

/// Variable bound in the generated default settings module.
pub const SETTINGS_PATH_VAR: &str = "settings_path";
/// Variable bound in the generated run-time plugins module.
pub const PLUGINS_VAR: &str = "plugins";

/// Settings store key holding the build-time plugin list.
pub const INSTALLED_APPS_KEY: &str = "INSTALLED_APPS";

/// Sources starting with this prefix are fetched over the network.
pub const REMOTE_SOURCE_PREFIX: &str = "http";
