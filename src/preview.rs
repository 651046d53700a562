use crate::vfs::{VirtualEntry, VirtualFS};
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

fn children<'a>(vfs: &'a VirtualFS, parent: &'a Path) -> impl Iterator<Item = &'a VirtualEntry> {
    vfs.entries
        .iter()
        .filter(move |e| e.destination.parent() == Some(parent))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Appends `entry` and everything below it, one line per entry.
fn render_node(vfs: &VirtualFS, entry: &VirtualEntry, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    let name = entry_name(&entry.destination);
    let name = if entry.is_file() { name.green() } else { name.blue() };

    // writing into a String cannot fail
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector.yellow(), name);

    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };

    let nodes: Vec<&VirtualEntry> = children(vfs, &entry.destination).collect();
    let len = nodes.len();
    for (i, child) in nodes.into_iter().enumerate() {
        render_node(vfs, child, &child_prefix, i == len - 1, out);
    }
}

/// Renders the staged plugin as an ASCII tree, directories in blue and files
/// in green, children in creation order.
pub fn render_tree(vfs: &VirtualFS) -> String {
    let mut out = String::new();

    if let Some(root) = vfs.entries.iter().find(|e| e.destination == vfs.root) {
        render_node(vfs, root, "", true, &mut out);
    }

    out
}

pub fn preview_as_tree(vfs: &VirtualFS) {
    println!(
        "\n{} {}\n",
        "┌─".bold().bright_blue(),
        "Plugin layout".bold().bright_blue()
    );

    print!("{}", render_tree(vfs));

    println!(
        "\nLegend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );
}
