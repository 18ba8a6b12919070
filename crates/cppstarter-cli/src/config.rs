//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `CPPSTARTER_<SECTION>__<KEY>`,
//!    e.g. `CPPSTARTER_BUILD__TOOL=gmake`
//! 2. Config file: `$CPPSTARTER_CONFIG`, else `<config dir>/cppstarter/config.toml`
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use cppstarter_core::application::{FailurePolicy, services::DEFAULT_BUILD_TOOL};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "CPPSTARTER";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "CPPSTARTER_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub build: BuildConfig,
    pub generate: GenerateConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Settings for the build passthrough commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Executable invoked by `build`, `run`, `test` and friends.
    pub tool: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_BUILD_TOOL.into(),
        }
    }
}

/// Settings for `new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`. Unset means `error`.
    pub level: Option<String>,
}

impl AppConfig {
    /// Load configuration from the default file location and the process
    /// environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(Self::config_path);
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load with an explicit file and environment source.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(
        file: Option<PathBuf>,
        env: Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness; `None`
    /// when no home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "cppstarter")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_without_file_or_env() {
        let cfg = AppConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.build.tool, "make");
        assert_eq!(cfg.generate.on_failure, FailurePolicy::Continue);
    }

    #[test]
    fn missing_file_is_ignored() {
        let cfg = AppConfig::load_from(
            Some(PathBuf::from("/definitely/not/here/config.toml")),
            env(&[]),
        )
        .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[build]\ntool = \"gmake\"\n\n[generate]\non_failure = \"rollback\"\n\n[output]\nquiet = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(path), env(&[])).unwrap();
        assert_eq!(cfg.build.tool, "gmake");
        assert_eq!(cfg.generate.on_failure, FailurePolicy::Rollback);
        assert!(cfg.output.quiet);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[build]\ntool = \"gmake\"\n").unwrap();

        let cfg = AppConfig::load_from(
            Some(path),
            env(&[
                ("CPPSTARTER_BUILD__TOOL", "ninja"),
                ("CPPSTARTER_LOG__LEVEL", "debug"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.build.tool, "ninja");
        assert_eq!(cfg.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[build\ntool = ").unwrap();
        assert!(AppConfig::load_from(Some(path), env(&[])).is_err());
    }
}
