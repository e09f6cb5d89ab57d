//! Blueprint: everything that varies between scaffold flavours, as data.
//!
//! The orchestration in `ScaffoldService` never names a package, a folder,
//! or a template file; it reads them from here. A different dependency list
//! or layout is a new `Blueprint`, not new code.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::layout::{DirectoryPlan, TemplateManifest},
    error::DomainError,
    value_objects::CommandSpec,
};

/// Default package manager program.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Changes applied to `package.json` once dependencies are installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPatch {
    /// Value for `"type"`, written before dependency installation.
    pub module_type: String,
    /// Value for `"main"`.
    pub entry_point: String,
    /// Script aliases merged into `"scripts"`.
    pub scripts: Vec<(String, String)>,
    /// `engines.node` constraint, only written when none exists.
    pub node_engine: Option<String>,
}

impl Default for ManifestPatch {
    fn default() -> Self {
        Self {
            module_type: "module".into(),
            entry_point: "src/server.js".into(),
            scripts: vec![
                ("dev".into(), "nodemon src/server.js".into()),
                ("start".into(), "node src/server.js".into()),
            ],
            node_engine: Some(">=18".into()),
        }
    }
}

/// Defaults offered by the configuration prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDefaults {
    pub port: String,
    pub database_name: String,
    pub mongodb_url: String,
}

impl Default for ConfigurationDefaults {
    fn default() -> Self {
        Self {
            port: "8000".into(),
            database_name: "My_DB".into(),
            mongodb_url: "mongodb://0.0.0.0:27017".into(),
        }
    }
}

/// Complete description of one scaffold flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub package_manager: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub directories: DirectoryPlan,
    pub templates: TemplateManifest,
    pub manifest_patch: ManifestPatch,
    pub defaults: ConfigurationDefaults,
    pub manifest_file: String,
    pub env_file: String,
    /// Directory whose existence marks the project as already initialized.
    pub guard_dir: String,
}

impl Blueprint {
    /// Express + MongoDB backend with the conventional `src/` layout.
    pub fn express_mongo() -> Self {
        Self {
            package_manager: DEFAULT_PACKAGE_MANAGER.into(),
            dependencies: ["cors", "dotenv", "express", "mongoose", "cookie-parser", "morgan"]
                .map(String::from)
                .to_vec(),
            dev_dependencies: vec!["nodemon".into()],
            directories: [
                "src",
                "src/config",
                "src/controllers",
                "src/middlewares",
                "src/models",
                "src/routes",
                "src/services",
                "src/utils",
                "src/error",
            ]
            .into_iter()
            .collect(),
            templates: TemplateManifest::new()
                .with_entry("api.js", "src/routes/api.js")
                .with_entry("apiError.js", "src/error/apiError.js")
                .with_entry("apiResponse.js", "src/error/apiResponse.js")
                .with_entry("app.js", "src/app.js")
                .with_entry("asyncHandler.js", "src/error/asyncHandler.js")
                .with_entry("db.js", "src/config/db.js")
                .with_entry("index.js", "src/routes/index.js")
                .with_entry("server.js", "src/server.js"),
            manifest_patch: ManifestPatch::default(),
            defaults: ConfigurationDefaults::default(),
            manifest_file: "package.json".into(),
            env_file: ".env".into(),
            guard_dir: "src".into(),
        }
    }

    pub fn with_package_manager(mut self, program: impl Into<String>) -> Self {
        self.package_manager = program.into();
        self
    }

    /// Blank entries are dropped, the rest trimmed.
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = package_names(&dependencies);
        self
    }

    /// Blank entries are dropped, the rest trimmed.
    pub fn with_dev_dependencies(mut self, dev_dependencies: Vec<String>) -> Self {
        self.dev_dependencies = package_names(&dev_dependencies);
        self
    }

    pub fn with_node_engine(mut self, constraint: Option<String>) -> Self {
        self.manifest_patch.node_engine = constraint;
        self
    }

    pub fn with_defaults(mut self, defaults: ConfigurationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// `<pm> init --yes`
    pub fn init_command(&self) -> CommandSpec {
        CommandSpec::new(&self.package_manager).args(["init", "--yes"])
    }

    /// `<pm> install <deps...>`, or `None` when there is nothing to install.
    pub fn install_command(&self) -> Option<CommandSpec> {
        let packages = package_names(&self.dependencies);
        (!packages.is_empty())
            .then(|| CommandSpec::new(&self.package_manager).arg("install").args(packages))
    }

    /// `<pm> install --save-dev <deps...>`, or `None` when there is nothing
    /// to install.
    pub fn dev_install_command(&self) -> Option<CommandSpec> {
        let packages = package_names(&self.dev_dependencies);
        (!packages.is_empty()).then(|| {
            CommandSpec::new(&self.package_manager)
                .args(["install", "--save-dev"])
                .args(packages)
        })
    }

    /// Command the user runs to start the generated dev server.
    pub fn start_command(&self) -> String {
        format!("{} run dev", self.package_manager)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.package_manager.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "package_manager",
            });
        }
        if self.manifest_file.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "manifest_file",
            });
        }
        if self.env_file.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "env_file" });
        }
        if self.guard_dir.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "guard_dir" });
        }
        self.directories.validate()?;
        self.templates.validate()
    }
}

fn package_names(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::express_mongo()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn express_mongo_is_valid() {
        assert!(Blueprint::express_mongo().validate().is_ok());
    }

    #[test]
    fn express_mongo_plans_nine_directories() {
        let bp = Blueprint::express_mongo();
        assert_eq!(bp.directories.len(), 9);
        assert_eq!(bp.directories.directories().next(), Some(Path::new("src")));
    }

    #[test]
    fn install_commands_batch_every_dependency() {
        let bp = Blueprint::express_mongo();
        assert_eq!(
            bp.install_command().unwrap().to_string(),
            "npm install cors dotenv express mongoose cookie-parser morgan"
        );
        assert_eq!(
            bp.dev_install_command().unwrap().to_string(),
            "npm install --save-dev nodemon"
        );
        assert_eq!(bp.init_command().to_string(), "npm init --yes");
    }

    #[test]
    fn empty_dependency_list_means_no_command() {
        let bp = Blueprint::express_mongo().with_dev_dependencies(vec![]);
        assert!(bp.dev_install_command().is_none());
    }

    #[test]
    fn blank_entries_are_never_installed() {
        let bp = Blueprint::express_mongo()
            .with_dependencies(vec!["cors".into(), String::new(), " express ".into()])
            .with_dev_dependencies(vec![String::new()]);

        assert_eq!(bp.dependencies, vec!["cors", "express"]);
        assert_eq!(
            bp.install_command().unwrap().to_string(),
            "npm install cors express"
        );
        assert!(bp.dev_install_command().is_none());
    }

    #[test]
    fn blank_entries_set_directly_are_skipped_too() {
        let mut bp = Blueprint::express_mongo();
        bp.dev_dependencies = vec!["  ".into()];
        assert!(bp.dev_install_command().is_none());
    }

    #[test]
    fn package_manager_drives_every_command() {
        let bp = Blueprint::express_mongo().with_package_manager("pnpm");
        assert_eq!(bp.init_command().program(), "pnpm");
        assert_eq!(bp.install_command().unwrap().program(), "pnpm");
        assert_eq!(bp.start_command(), "pnpm run dev");
    }

    #[test]
    fn blank_package_manager_is_rejected() {
        let bp = Blueprint::express_mongo().with_package_manager("  ");
        assert_eq!(
            bp.validate(),
            Err(DomainError::MissingRequiredField {
                field: "package_manager"
            })
        );
    }
}
