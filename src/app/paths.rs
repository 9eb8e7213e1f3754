// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its files.
//!
//! Two directories matter: the data directory holds the favorites mirror,
//! the config directory holds `settings.toml`. Each resolves through the
//! first source that yields a path:
//!
//! 1. an explicit path handed to [`AppDir::resolve`] (tests, portable runs)
//! 2. `--data-dir` / `--config-dir`, recorded by [`init_cli_overrides`]
//! 3. `TCG_MARKET_DATA_DIR` / `TCG_MARKET_CONFIG_DIR`, when non-empty
//! 4. the platform directory from `dirs`, plus `TcgMarket`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "TcgMarket";

pub const ENV_DATA_DIR: &str = "TCG_MARKET_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "TCG_MARKET_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the command-line directory flags. Only the first call counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory flags were already recorded; ignoring the new ones");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// `~/.local/share/TcgMarket` on Linux.
    Data,
    /// `~/.config/TcgMarket` on Linux.
    Config,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let slot = match self {
            AppDir::Data => &CLI_DATA_DIR,
            AppDir::Config => &CLI_CONFIG_DIR,
        };
        slot.get().cloned().flatten()
    }

    fn env_override(self) -> Option<PathBuf> {
        std::env::var_os(self.env_var())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn platform_default(self) -> Option<PathBuf> {
        let base = match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        };
        base.map(|base| base.join(APP_NAME))
    }

    /// The directory to use, `explicit` first. `None` only when no source
    /// yields a path (no home directory).
    #[must_use]
    pub fn resolve(self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| self.cli_override())
            .or_else(|| self.env_override())
            .or_else(|| self.platform_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the process environment take turns
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_path_wins() {
        let explicit = PathBuf::from("/portable/tcg");
        assert_eq!(AppDir::Data.resolve(Some(explicit.clone())), Some(explicit.clone()));
        assert_eq!(AppDir::Config.resolve(Some(explicit.clone())), Some(explicit));
    }

    #[test]
    fn environment_overrides_platform_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        assert_eq!(AppDir::Config.resolve(None), Some(PathBuf::from("/env/config")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        let resolved = AppDir::Data.resolve(None);
        assert_ne!(resolved, Some(PathBuf::new()));
        if let Some(path) = resolved {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn platform_defaults_end_with_app_name() {
        for dir in [AppDir::Data, AppDir::Config] {
            if let Some(path) = dir.platform_default() {
                assert!(path.ends_with(APP_NAME));
            }
        }
    }
}
