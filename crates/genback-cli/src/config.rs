//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`Blueprint`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GEN_BACKEND__<SECTION>__<KEY>`
//! 3. Config file (`--config`, or the platform config path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use genback_core::domain::{Blueprint, ConfigurationDefaults};

const ENV_PREFIX: &str = "GEN_BACKEND";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which program installs packages.
    pub package_manager: PackageManagerConfig,
    /// What goes into the generated project.
    pub project: ProjectConfig,
    /// Defaults offered by the configuration prompts.
    pub defaults: DefaultsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManagerConfig {
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    /// `engines.node` constraint; empty disables it.
    pub node_engine: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub port: String,
    pub database_name: String,
    pub mongodb_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub local_path: Option<PathBuf>,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: Blueprint::express_mongo().package_manager,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let blueprint = Blueprint::express_mongo();
        Self {
            dependencies: blueprint.dependencies,
            dev_dependencies: blueprint.dev_dependencies,
            node_engine: blueprint.manifest_patch.node_engine.unwrap_or_default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let defaults = ConfigurationDefaults::default();
        Self {
            port: defaults.port,
            database_name: defaults.database_name,
            mongodb_url: defaults.mongodb_url,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the platform default path is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("project.dependencies")
            .with_list_parse_key("project.dev_dependencies");

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gen-backend.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gen-backend", "gen-backend")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gen-backend.toml"))
    }

    /// The file `config init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Directory templates should be read from, if not the built-in set.
    pub fn templates_dir(&self, flag: Option<&PathBuf>) -> Option<PathBuf> {
        flag.cloned().or_else(|| self.templates.local_path.clone())
    }

    /// The scaffold blueprint this configuration describes.
    pub fn blueprint(&self, package_manager: Option<&str>) -> Blueprint {
        let node_engine = Some(self.project.node_engine.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Blueprint::express_mongo()
            .with_package_manager(package_manager.unwrap_or(&self.package_manager.program))
            .with_dependencies(self.project.dependencies.clone())
            .with_dev_dependencies(self.project.dev_dependencies.clone())
            .with_node_engine(node_engine)
            .with_defaults(ConfigurationDefaults {
                port: self.defaults.port.clone(),
                database_name: self.defaults.database_name.clone(),
                mongodb_url: self.defaults.mongodb_url.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn default_blueprint_matches_express_mongo() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.blueprint(None), Blueprint::express_mongo());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_overrides_only_what_it_names() {
        let (_temp, path) = write_config(
            r#"
[defaults]
port = "3000"

[package_manager]
program = "pnpm"
"#,
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.defaults.port, "3000");
        assert_eq!(cfg.defaults.database_name, "My_DB");
        assert_eq!(cfg.package_manager.program, "pnpm");
        assert_eq!(cfg.project.dev_dependencies, vec!["nodemon"]);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_temp, path) = write_config("[defaults\nport = ");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn blank_dependency_entries_are_not_installed() {
        let (_temp, path) = write_config(
            r#"
[project]
dependencies = ["express", "", "  "]
dev_dependencies = [""]
"#,
        );

        let blueprint = AppConfig::load(Some(&path)).unwrap().blueprint(None);

        assert_eq!(
            blueprint.install_command().unwrap().to_string(),
            "npm install express"
        );
        assert!(blueprint.dev_install_command().is_none());
    }

    #[test]
    fn flag_beats_config_for_package_manager() {
        let mut cfg = AppConfig::default();
        cfg.package_manager.program = "yarn".into();

        assert_eq!(cfg.blueprint(None).package_manager, "yarn");
        assert_eq!(cfg.blueprint(Some("pnpm")).package_manager, "pnpm");
    }

    #[test]
    fn empty_node_engine_disables_it() {
        let mut cfg = AppConfig::default();
        cfg.project.node_engine = "  ".into();
        assert_eq!(cfg.blueprint(None).manifest_patch.node_engine, None);
    }

    #[test]
    fn templates_flag_beats_config() {
        let mut cfg = AppConfig::default();
        cfg.templates.local_path = Some(PathBuf::from("/from/config"));

        assert_eq!(cfg.templates_dir(None), Some(PathBuf::from("/from/config")));
        let flag = PathBuf::from("/from/flag");
        assert_eq!(cfg.templates_dir(Some(&flag)), Some(flag.clone()));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
