// SPDX-License-Identifier: MPL-2.0
//! Locates the directory holding `settings.toml`.
//!
//! Candidates are tried in order, first hit wins:
//! 1. an explicit path handed to [`resolve_config_dir`] (tests, tooling)
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. the `PAW_FEEL_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/PawFeel` via `dirs`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "PawFeel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PAW_FEEL_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which candidate produced the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

/// Records the `--config-dir` argument. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("--config-dir already recorded, ignoring");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolves the config directory and reports where it came from.
///
/// Returns `None` only when no candidate applies and the platform has no
/// config directory (e.g. `$HOME` unset on Linux).
#[must_use]
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    explicit
        .map(|dir| (dir, ConfigDirSource::Explicit))
        .or_else(|| {
            CLI_CONFIG_DIR
                .get()
                .cloned()
                .flatten()
                .map(|dir| (dir, ConfigDirSource::CommandLine))
        })
        .or_else(|| env_config_dir().map(|dir| (dir, ConfigDirSource::Environment)))
        .or_else(|| dirs::config_dir().map(|dir| (dir.join(APP_NAME), ConfigDirSource::Platform)))
}

/// Config directory with an optional explicit path taking precedence.
#[must_use]
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(explicit).map(|(dir, source)| {
        log::debug!("Config directory {} ({source:?})", dir.display());
        dir
    })
}
