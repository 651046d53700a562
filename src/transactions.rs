use std::{fs, marker::PhantomData, path::Path, path::PathBuf};

/// Filesystem entry created during a transaction, undone in reverse order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}
impl RollbackOperation {
    pub fn path(&self) -> &Path {
        match self {
            Self::RemoveFile(path) | Self::RemoveDir(path) => path,
        }
    }
}
/// Active Transaction
pub struct Active;
/// Committed Transaction
pub struct Committed;
/// A trait that tells us if rollback should occur when dropped.
pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}
/// Tracks every directory and file created while generating a plugin.
///
/// A `Transaction<Active>` that is dropped without being committed undoes its
/// operations in reverse order: files are removed first, then the directories
/// that held them. Only entries recorded through [`Transaction::add_operation`]
/// are touched, so rollback never removes anything that existed beforehand.
///
/// ```rust,ignore
/// let mut trx = Transaction::<Active>::new();
/// std::fs::create_dir(&root)?;
/// trx.add_operation(RollbackOperation::RemoveDir(root));
/// let committed = trx.commit(); // nothing is removed
/// ```
pub struct Transaction<State: TransactionState> {
    operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}
impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            operations: vec![],
            state: PhantomData,
        }
    }
    /// Records an entry that was just created.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.operations.push(operation);
    }
    /// Finalizes the transaction; the returned value keeps the list of created
    /// entries but never rolls them back.
    pub fn commit(mut self) -> Transaction<Committed> {
        let operations = std::mem::take(&mut self.operations);

        Transaction {
            operations,
            state: PhantomData,
        }
    }
}
impl Default for Transaction<Active> {
    fn default() -> Self {
        Self::new()
    }
}
impl Transaction<Committed> {
    /// Paths created by the transaction, in creation order.
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.operations.iter().map(RollbackOperation::path)
    }
    /// Files created by the transaction, in creation order.
    pub fn created_files(&self) -> impl Iterator<Item = &Path> {
        self.operations.iter().filter_map(|operation| match operation {
            RollbackOperation::RemoveFile(path) => Some(path.as_path()),
            RollbackOperation::RemoveDir(_) => None,
        })
    }
}
impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if S::SHOULD_ROLLBACK && !self.operations.is_empty() {
            log::warn!("rolling back {} created entries", self.operations.len());
            while let Some(operation) = self.operations.pop() {
                let result = match &operation {
                    RollbackOperation::RemoveDir(path) => {
                        log::debug!("removing dir: {}", path.display());
                        fs::remove_dir(path)
                    }
                    RollbackOperation::RemoveFile(path) => {
                        log::debug!("removing file: {}", path.display());
                        fs::remove_file(path)
                    }
                };
                if let Err(error) = result {
                    log::warn!(
                        "unable to remove '{}' during rollback: {}",
                        operation.path().display(),
                        error
                    );
                }
            }
        } else if !S::SHOULD_ROLLBACK {
            log::debug!("committed {} entries", self.operations.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populate(trx: &mut Transaction<Active>, base: &Path) -> (PathBuf, PathBuf) {
        let dir = base.join("Plugin");
        fs::create_dir(&dir).unwrap();
        trx.add_operation(RollbackOperation::RemoveDir(dir.clone()));

        let file = dir.join("CMakeLists.txt");
        fs::write(&file, "project(Plugin)").unwrap();
        trx.add_operation(RollbackOperation::RemoveFile(file.clone()));

        (dir, file)
    }

    #[test]
    fn test_drop_without_commit_rolls_back() {
        let tmp = tempfile::tempdir().unwrap();

        let dir = {
            let mut trx = Transaction::<Active>::new();
            let (dir, file) = populate(&mut trx, tmp.path());
            assert!(file.exists());
            dir
        };

        assert!(!dir.exists());
        assert!(tmp.path().exists());
    }

    #[test]
    fn test_commit_keeps_entries() {
        let tmp = tempfile::tempdir().unwrap();

        let mut trx = Transaction::<Active>::new();
        let (dir, file) = populate(&mut trx, tmp.path());
        let committed = trx.commit();

        assert_eq!(
            committed.created().collect::<Vec<_>>(),
            vec![dir.as_path(), file.as_path()]
        );
        assert_eq!(
            committed.created_files().collect::<Vec<_>>(),
            vec![file.as_path()]
        );
        drop(committed);

        assert!(file.exists());
    }

    #[test]
    fn test_rollback_leaves_unrecorded_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("existing.txt");
        fs::write(&existing, "keep me").unwrap();

        {
            let mut trx = Transaction::<Active>::new();
            populate(&mut trx, tmp.path());
        }

        assert!(existing.exists());
    }
}
