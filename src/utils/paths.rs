use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".savings_core";
const CONFIG_DIR: &str = "config";

/// Environment variable overriding the application data directory.
pub const HOME_ENV: &str = "SAVINGS_CORE_HOME";

/// Returns the application-specific data directory, defaulting to `~/.savings_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}
