use std::{env, path::PathBuf};

use crate::catalog::Catalog;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `ENCORE__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ENCORE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.controls.tick_ms == 0 {
            return Err("controls.tick_ms must be >= 1".to_string());
        }
        if self.cover.timeout_ms == 0 {
            return Err("cover.timeout_ms must be >= 1".to_string());
        }
        Catalog::from_settings(&self.catalog).map_err(|e| format!("catalog: {e}"))?;
        Ok(())
    }

    /// Render the settings as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `ENCORE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ENCORE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/encore/config.toml`
/// or `~/.config/encore/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("encore").join("config.toml"))
}

/// `$<var>` if set, else `$HOME/<home_fallback>`.
pub(crate) fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
