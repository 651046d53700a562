use crate::{
    name::ClassName,
    templates::{self, CMAKE_TEMPLATE, HEADER_TEMPLATE, IMPLEMENTATION_TEMPLATE},
};
use std::path::{Path, PathBuf};

pub const SOURCE_DIR: &str = "src";
pub const INCLUDE_DIR: &str = "include";
pub const CMAKE_FILE: &str = "CMakeLists.txt";

/// A directory or file staged in memory before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// Path of the entry, relative to the directory the plugin is generated in.
    pub destination: PathBuf,
    /// Rendered contents; `None` for directories.
    pub content: Option<String>,
}
impl VirtualEntry {
    fn dir(destination: PathBuf) -> Self {
        Self {
            destination,
            content: None,
        }
    }

    fn file(destination: PathBuf, content: String) -> Self {
        Self {
            destination,
            content: Some(content),
        }
    }

    pub fn is_file(&self) -> bool {
        self.content.is_some()
    }
}
/// The full output of one generation: the plugin root, its subdirectories and
/// the rendered file manifest, in creation order.
#[derive(Debug, Clone)]
pub struct VirtualFS {
    pub root: PathBuf,
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    /// Stages the fixed plugin layout for `name`.
    pub fn for_plugin(name: &ClassName) -> Self {
        let root = PathBuf::from(name.as_str());

        let entries = vec![
            VirtualEntry::dir(root.clone()),
            VirtualEntry::dir(root.join(SOURCE_DIR)),
            VirtualEntry::dir(root.join(INCLUDE_DIR)),
            VirtualEntry::file(
                root.join(SOURCE_DIR).join(format!("{name}.cpp")),
                templates::render(IMPLEMENTATION_TEMPLATE, name),
            ),
            VirtualEntry::file(
                root.join(INCLUDE_DIR).join(format!("{name}.hpp")),
                templates::render(HEADER_TEMPLATE, name),
            ),
            VirtualEntry::file(root.join(CMAKE_FILE), templates::render(CMAKE_TEMPLATE, name)),
        ];

        log::debug!("staged {} entries for plugin '{}'", entries.len(), name);

        Self { root, entries }
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| !e.is_file())
            .map(|e| e.destination.as_path())
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|e| {
            e.content
                .as_deref()
                .map(|content| (e.destination.as_path(), content))
        })
    }
}
