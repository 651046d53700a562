use crate::{
    errors::{FileOperation, IoError},
    transactions::{Active, Committed, RollbackOperation, Transaction},
    vfs::VirtualFS,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error("Target folder already exists: '{}'", path.display())]
    #[diagnostic(
        code(mkplugin::generate::already_exists),
        help("Choose another class name or remove the existing folder first")
    )]
    AlreadyExists { path: PathBuf },
}

/// Fails with [`GenerateError::AlreadyExists`] if anything (file, directory or
/// symlink, dangling or not) is present at `path`.
fn ensure_absent(path: &Path) -> Result<(), GenerateError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(GenerateError::AlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(IoError::new(FileOperation::Stat, path.to_path_buf(), error).into()),
    }
}
/// Creates a single directory and records it on the transaction.
///
/// Uses [`fs::create_dir`] rather than `create_dir_all`: the parent must exist
/// and the directory itself must not, so an entry that appears between the
/// existence check and this call surfaces as a conflict instead of being
/// silently reused.
fn create_directory(trx: &mut Transaction<Active>, path: &Path) -> Result<(), GenerateError> {
    fs::create_dir(path).map_err(|error| {
        if error.kind() == io::ErrorKind::AlreadyExists {
            GenerateError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            IoError::new(FileOperation::Mkdir, path.to_path_buf(), error).into()
        }
    })?;

    log::debug!("created directory {}", path.display());

    trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

    Ok(())
}
/// Writes a new file and records it on the transaction. Existing files are
/// never overwritten.
fn write_file(
    trx: &mut Transaction<Active>,
    path: &Path,
    contents: &str,
) -> Result<(), GenerateError> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    log::debug!("wrote file {}", path.display());

    Ok(())
}
/// Materializes `vfs` under `base`.
///
/// The root is checked before anything is created. Directories are created in
/// order, then files. If any step fails the transaction is dropped and every
/// entry created so far is removed again; `create` lines are only printed for
/// a committed transaction.
pub fn generate(vfs: &VirtualFS, base: &Path) -> Result<Transaction<Committed>, GenerateError> {
    let root = base.join(&vfs.root);

    if let Err(error) = ensure_absent(&root) {
        log::debug!("refusing to generate into {}", root.display());
        return Err(error);
    }

    let mut trx = Transaction::<Active>::new();

    for dir in vfs.directories() {
        create_directory(&mut trx, &base.join(dir))?;
    }

    for (relative, contents) in vfs.files() {
        write_file(&mut trx, &base.join(relative), contents)?;
    }

    let committed = trx.commit();

    for path in committed.created_files() {
        let shown = path.strip_prefix(base).unwrap_or(path);
        println!("{} {}", "create".green(), shown.display());
    }

    Ok(committed)
}
