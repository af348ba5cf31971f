// src/scripts/scaffold.rs
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ScaffoldKind, CONTROLLERS_DIR, SUBDIRS, VIEW_DIR};
use crate::naming::ScaffoldNames;
use crate::templates::Templates;

#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub view: PathBuf,
    pub controller: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub names: ScaffoldNames,
    /// Scaffold directory relative to the project root, e.g. `lib/screens/home_screen`
    pub relative_dir: PathBuf,
    pub scaffold_dir: PathBuf,
    pub files: GeneratedFiles,
}

/// Derive names, create the directory tree, then write the view and controller.
/// Nothing is rolled back if a later step fails.
pub fn scaffold(project_root: &Path, kind: ScaffoldKind, raw_name: &str) -> Result<ScaffoldReport> {
    info!("Scaffolding {} '{}' under {}", kind, raw_name, project_root.display());

    let names = ScaffoldNames::derive(raw_name, kind);
    debug!("Derived names: {:?}", names);
    if names.pascal_name.is_empty() {
        warn!(
            "'{}' has no ASCII letters or digits; generated classes will be named {} and {}",
            names.raw, names.view_class, names.controller_class
        );
    }

    let scaffold_dir = create_directories(project_root, &names)?;
    let files = write_templates(&scaffold_dir, &names)?;
    let relative_dir = Path::new(kind.layout().root_dir).join(&names.dir_name);

    info!("Scaffold for '{}' written to {}", raw_name, scaffold_dir.display());
    Ok(ScaffoldReport { names, relative_dir, scaffold_dir, files })
}

/// Ensures the kind's root directory, the scaffold directory and its fixed
/// subdirectories exist. Existing directories are left as they are.
pub fn create_directories(project_root: &Path, names: &ScaffoldNames) -> Result<PathBuf> {
    let root_dir = project_root.join(names.kind.layout().root_dir);
    fs::create_dir_all(&root_dir)
        .with_context(|| format!("Failed to create directory {}", root_dir.display()))?;

    let scaffold_dir = root_dir.join(&names.dir_name);
    for sub in SUBDIRS {
        let dir = scaffold_dir.join(sub);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        debug!("Ensured directory {}", dir.display());
    }

    Ok(scaffold_dir)
}

/// Writes the view and controller files, replacing any existing ones.
pub fn write_templates(scaffold_dir: &Path, names: &ScaffoldNames) -> Result<GeneratedFiles> {
    let view = scaffold_dir.join(VIEW_DIR).join(names.view_file());
    fs::write(&view, Templates::view(names))
        .with_context(|| format!("Failed to write {}", view.display()))?;
    debug!("Wrote view {}", view.display());

    let controller = scaffold_dir.join(CONTROLLERS_DIR).join(names.controller_file());
    fs::write(&controller, Templates::controller(names))
        .with_context(|| format!("Failed to write {}", controller.display()))?;
    debug!("Wrote controller {}", controller.display());

    Ok(GeneratedFiles { view, controller })
}

/// Runs the pipeline against the current directory and prints what was created.
pub fn run_in_current_dir(kind: ScaffoldKind, name: &str) -> Result<ScaffoldReport> {
    let project_root = std::env::current_dir().context("Failed to get current directory")?;

    let report = scaffold(&project_root, kind, name)?;

    for file in [&report.files.view, &report.files.controller] {
        let shown = file.strip_prefix(&project_root).unwrap_or(file.as_path());
        println!("✅ Created {}", shown.display());
    }
    debug!("Scaffold directory: {}", report.scaffold_dir.display());

    Ok(report)
}
