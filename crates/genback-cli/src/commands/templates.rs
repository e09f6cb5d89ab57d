//! `gen-backend templates`: inspect and export template payloads.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use genback_adapters::{EmbeddedStore, LocalFilesystem};
use genback_core::{
    application::ports::{Filesystem, TemplateStore},
    domain::TemplateEntry,
};

use crate::{
    cli::{ListFormat, TemplatesCommands},
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of `templates list --format json`.
#[derive(Debug, Serialize)]
struct TemplateRow<'a> {
    #[serde(flatten)]
    entry: &'a TemplateEntry,
    available: bool,
}

pub fn execute(
    cmd: TemplatesCommands,
    templates_flag: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        TemplatesCommands::List { format } => {
            let store = template_store(config.templates_dir(templates_flag))?;
            list(&config, store.as_ref(), format, &output)
        }
        TemplatesCommands::Export { dir, force } => {
            let written = export(&EmbeddedStore::express_mongo(), &dir, force)?;
            output.success(&format!(
                "Exported {} templates to {}",
                written.len(),
                dir.display()
            ))?;
            output.info(&format!(
                "Use them with: gen-backend --yes --templates {}",
                dir.display()
            ))?;
            Ok(())
        }
    }
}

fn list(
    config: &AppConfig,
    store: &dyn TemplateStore,
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    let blueprint = config.blueprint(None);
    let rows: Vec<TemplateRow<'_>> = blueprint
        .templates
        .entries()
        .iter()
        .map(|entry| TemplateRow {
            entry,
            available: store.contains(&entry.source),
        })
        .collect();

    match format {
        ListFormat::Table => {
            output.header(&format!("Templates ({}):", store.describe()))?;
            for row in &rows {
                let marker = if row.available { "✓" } else { "✗ missing" };
                output.print(&format!(
                    "  {:<18} -> {:<28} {}",
                    row.entry.source,
                    row.entry.destination.display(),
                    marker
                ))?;
            }
        }

        // Machine-readable formats bypass OutputManager so they survive --quiet.
        ListFormat::List => {
            for row in &rows {
                println!("{}", row.entry.source);
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Write every payload in `store` under `dir`. Nothing is written when a
/// file would be overwritten and `force` is off.
#[instrument(skip(store, dir), fields(dir = %dir.display()))]
fn export(store: &dyn TemplateStore, dir: &Path, force: bool) -> CliResult<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is a file, expected a directory", dir.display()),
            source: None,
        });
    }

    let names = store.names()?;

    if !force
        && let Some(existing) = names.iter().map(|n| dir.join(n)).find(|p| p.exists())
    {
        return Err(CliError::OutputExists { path: existing });
    }

    let fs = LocalFilesystem::new();
    let mut written = Vec::with_capacity(names.len());

    for name in &names {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, &store.read(name)?)?;
        debug!(template = %name, path = %path.display(), "Template exported");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genback_adapters::{DirectoryStore, InMemoryStore};
    use tempfile::TempDir;

    #[test]
    fn export_writes_every_builtin_template() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("templates");

        let written = export(&EmbeddedStore::express_mongo(), &out, false).unwrap();

        assert_eq!(written.len(), 8);
        assert!(out.join("server.js").is_file());
    }

    #[test]
    fn exported_directory_serves_as_a_store() {
        let temp = TempDir::new().unwrap();
        let embedded = EmbeddedStore::express_mongo();
        export(&embedded, temp.path(), false).unwrap();

        let dir = DirectoryStore::new(temp.path());
        assert_eq!(dir.names().unwrap(), embedded.names().unwrap());
        assert_eq!(dir.read("db.js").unwrap(), embedded.read("db.js").unwrap());
    }

    #[test]
    fn export_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.js"), "custom").unwrap();

        let err = export(&EmbeddedStore::express_mongo(), temp.path(), false).unwrap_err();
        assert!(matches!(err, CliError::OutputExists { .. }));
        assert_eq!(err.exit_code(), 2);
        // Nothing else was written.
        assert!(!temp.path().join("server.js").exists());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("app.js")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn export_with_force_overwrites() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.js"), "custom").unwrap();

        export(&EmbeddedStore::express_mongo(), temp.path(), true).unwrap();
        assert_ne!(
            std::fs::read_to_string(temp.path().join("app.js")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn export_into_a_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("out");
        std::fs::write(&file, "").unwrap();

        let err = export(&EmbeddedStore::express_mongo(), &file, false).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn json_rows_flatten_the_entry() {
        let store = InMemoryStore::new()
            .with_template("app.js", b"x".to_vec())
            .unwrap();
        let entry = TemplateEntry::new("app.js", "src/app.js");
        let row = TemplateRow {
            entry: &entry,
            available: store.contains("app.js"),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["source"], "app.js");
        assert_eq!(value["destination"], "src/app.js");
        assert_eq!(value["available"], true);
    }
}
