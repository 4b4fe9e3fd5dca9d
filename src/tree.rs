/*!
 * Directory tree rendering with box-drawing connectors
 */

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::filter::is_excluded_dir;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_PREFIX: &str = "│   ";
const SPACE_PREFIX: &str = "    ";

/// Render the tree under `root` as display lines
///
/// The first line is the root's own name. Children of a directory at depth
/// `d` are listed only while `d <= max_depth`, with the root at depth 0, so
/// `max_depth = 0` lists just the root's immediate children. Directories
/// come before files at every level, each group sorted by name.
pub fn render_tree(root: &Path, exclude_dirs: &BTreeSet<String>, max_depth: usize) -> Vec<String> {
    let root_name = root
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let mut lines = vec![format!("{}/", root_name)];
    lines.extend(render_children(root, "", 0, exclude_dirs, max_depth));
    lines
}

fn render_children(
    dir: &Path,
    prefix: &str,
    depth: usize,
    exclude_dirs: &BTreeSet<String>,
    max_depth: usize,
) -> Vec<String> {
    if depth > max_depth {
        return Vec::new();
    }

    let (dirs, files) = match list_children(dir, exclude_dirs) {
        Ok(children) => children,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let total = dirs.len() + files.len();
    let mut lines = Vec::new();

    for (index, name) in dirs.iter().enumerate() {
        let is_last = index + 1 == total;
        let (connector, child_prefix) = if is_last {
            (LAST_BRANCH, SPACE_PREFIX)
        } else {
            (BRANCH, PIPE_PREFIX)
        };

        lines.push(format!("{}{}{}/", prefix, connector, name));
        lines.extend(render_children(
            &dir.join(name),
            &format!("{}{}", prefix, child_prefix),
            depth + 1,
            exclude_dirs,
            max_depth,
        ));
    }

    for (index, name) in files.iter().enumerate() {
        let is_last = dirs.len() + index + 1 == total;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, connector, name));
    }

    lines
}

/// Sorted (directories, files) directly under `dir`, minus excluded names
fn list_children(
    dir: &Path,
    exclude_dirs: &BTreeSet<String>,
) -> io::Result<(Vec<String>, Vec<String>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if is_excluded_dir(&name, exclude_dirs) {
            continue;
        }

        // Follows symlinks, so a link to a directory is listed as one
        if entry.path().is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }

    dirs.sort();
    files.sort();
    Ok((dirs, files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    use tempfile::tempdir;

    fn excluded() -> BTreeSet<String> {
        Config::default().exclude_dirs
    }

    fn root_line(root: &Path) -> String {
        format!("{}/", root.file_name().unwrap().to_string_lossy())
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let lines = render_tree(dir.path(), &excluded(), 3);
        assert_eq!(lines, vec![root_line(dir.path())]);
    }

    #[test]
    fn test_only_excluded_children() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let lines = render_tree(dir.path(), &excluded(), 3);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_project_layout() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("src")).unwrap();
        fs::create_dir(root.join("tests")).unwrap();
        fs::create_dir(root.join("__pycache__")).unwrap();
        fs::write(root.join("src/main.py"), "print('hi')").unwrap();
        fs::write(root.join("tests/test_main.py"), "").unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();
        fs::write(root.join("__pycache__/x.pyc"), "binary").unwrap();

        let lines = render_tree(root, &excluded(), 3);
        assert_eq!(
            lines,
            vec![
                root_line(root),
                "├── src/".to_string(),
                "│   └── main.py".to_string(),
                "├── tests/".to_string(),
                "│   └── test_main.py".to_string(),
                "└── README.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_directories_before_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("m.txt"), "").unwrap();
        fs::create_dir(root.join("z_dir")).unwrap();
        fs::create_dir(root.join("b_dir")).unwrap();

        let lines = render_tree(root, &excluded(), 3);
        assert_eq!(
            &lines[1..],
            &["├── b_dir/", "├── z_dir/", "├── a.txt", "└── m.txt"]
        );
    }

    #[test]
    fn test_last_directory_uses_space_prefix() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("only/inner")).unwrap();
        fs::write(root.join("only/inner/leaf.rs"), "").unwrap();
        fs::write(root.join("only/file.rs"), "").unwrap();

        let lines = render_tree(root, &excluded(), 3);
        assert_eq!(
            &lines[1..],
            &[
                "└── only/",
                "    ├── inner/",
                "    │   └── leaf.rs",
                "    └── file.rs",
            ]
        );
    }

    #[test]
    fn test_max_depth_zero_lists_immediate_children() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("a/b/c/file.txt"), "deep").unwrap();

        let lines = render_tree(root, &excluded(), 0);
        assert_eq!(&lines[1..], &["└── a/"]);
    }

    #[test]
    fn test_max_depth_limits_descent() {
        let dir = tempdir().unwrap();
        let mut current = dir.path().to_path_buf();
        for i in 0..5 {
            current = current.join(format!("dir{}", i));
            fs::create_dir(&current).unwrap();
            fs::write(current.join(format!("file{}.txt", i)), "content").unwrap();
        }

        let text = render_tree(dir.path(), &excluded(), 2).join("\n");
        assert!(text.contains("dir0/"));
        assert!(text.contains("dir1/"));
        assert!(text.contains("dir2/"));
        assert!(text.contains("file1.txt"));
        assert!(!text.contains("file2.txt"));
        assert!(!text.contains("dir3/"));
    }

    #[test]
    fn test_unlistable_root_has_no_children() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let lines = render_tree(&file, &excluded(), 3);
        assert_eq!(lines, vec!["plain.txt/".to_string()]);
    }
}
