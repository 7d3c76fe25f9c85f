use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::HelpdeskConfig;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "HELPDESK_CONFIG";
/// Config file picked up from the working directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "helpdesk.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by flag or environment; must exist
    Explicit(PathBuf),
    /// Found in the working directory
    Discovered(PathBuf),
    /// Built-in defaults
    Defaults,
}

/// Pick the config source: flag, then environment, then `./helpdesk.toml`.
pub fn resolve_config_source(
    flag: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(value));
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        ConfigSource::Discovered(local)
    } else {
        ConfigSource::Defaults
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<HelpdeskConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config named by `source`
pub fn load_config(source: &ConfigSource) -> Result<HelpdeskConfig, ConfigError> {
    match source {
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            let config = read_config(path)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        }
        ConfigSource::Defaults => Ok(HelpdeskConfig::default()),
    }
}

/// Resolve against the process environment and load
pub fn load_config_from_env(flag: Option<&Path>) -> Result<HelpdeskConfig, Box<dyn std::error::Error>> {
    let env_value = std::env::var(CONFIG_ENV).ok();
    let cwd = std::env::current_dir()?;
    let source = resolve_config_source(flag, env_value.as_deref(), &cwd);
    Ok(load_config(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[desk]
name = "Seaside Inn"
staff = ["Ana Ruiz", "Tom Berg"]
sample_tickets = false

[ui]
show_key_hints = false

[ui.colors]
highlight = "#112233"
"##
    }

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("helpdesk.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.desk.name, "Seaside Inn");
        assert_eq!(config.desk.staff.len(), 2);
        assert!(!config.desk.sample_tickets);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#112233");
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_config(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_read_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[desk\nname = 1").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_resolve_precedence() {
        let tmp = TempDir::new().unwrap();
        let flag = tmp.path().join("flag.toml");

        assert_eq!(
            resolve_config_source(Some(&flag), Some("/env.toml"), tmp.path()),
            ConfigSource::Explicit(flag.clone())
        );
        assert_eq!(
            resolve_config_source(None, Some("/env.toml"), tmp.path()),
            ConfigSource::Explicit(PathBuf::from("/env.toml"))
        );
        assert_eq!(
            resolve_config_source(None, None, tmp.path()),
            ConfigSource::Defaults
        );

        let local = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&local, "").unwrap();
        assert_eq!(
            resolve_config_source(None, Some("  "), tmp.path()),
            ConfigSource::Discovered(local)
        );
    }

    #[test]
    fn test_load_defaults() {
        let config = load_config(&ConfigSource::Defaults).unwrap();
        assert_eq!(config, HelpdeskConfig::default());
    }
}
