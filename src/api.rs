use crate::{
    generator::{self, GenerateError},
    name::{ClassName, NameError},
    preview::preview_as_tree,
    vfs::VirtualFS,
};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PluginError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),
}

/// Generates a new plugin named `class_name` under `base` and returns the
/// path of the created plugin root.
///
/// # Errors
///
/// Returns a [`PluginError`] if:
///
/// - `class_name` is not a usable class name. Nothing is touched on disk.
/// - Something already exists at `base/<class_name>`. Nothing is touched on disk.
/// - A directory or file cannot be created or written. Everything created so
///   far is removed again.
pub fn new_plugin_in(base: &Path, class_name: &str) -> Result<PathBuf, PluginError> {
    let name = ClassName::parse(class_name)?;

    log::info!("generating plugin '{}' in {}", name, base.display());

    let vfs = VirtualFS::for_plugin(&name);

    let committed = generator::generate(&vfs, base)?;

    log::debug!(
        "created: {}",
        committed
            .created()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    preview_as_tree(&vfs);

    println!(
        "\n{}",
        format!("Project structure for '{name}' has been created.").bold()
    );

    Ok(base.join(&vfs.root))
}
