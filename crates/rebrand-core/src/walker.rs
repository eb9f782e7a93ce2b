use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::filter::PathFilter;
use crate::RebrandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleFile {
    pub path: PathBuf,
    pub dir: PathBuf,
}

/// Lazily yields every eligible file under `root`, depth first, sorted by name.
///
/// Ineligible directories are pruned before descending, so nothing below them
/// is ever listed. The root itself is never pruned by name. Listing failures
/// are yielded as errors.
pub fn walk<'a>(
    root: &Path,
    filter: &'a PathFilter,
) -> impl Iterator<Item = Result<EligibleFile, RebrandError>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| is_entry_eligible(entry, filter))
        .filter_map(move |entry| match entry {
            Ok(entry) => select_file(entry, filter).map(Ok),
            Err(e) => Some(Err(RebrandError::Walk(e))),
        })
}

fn is_entry_eligible(entry: &DirEntry, filter: &PathFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    filter.is_directory_eligible(&entry.file_name().to_string_lossy())
}

fn select_file(entry: DirEntry, filter: &PathFilter) -> Option<EligibleFile> {
    // Symlinks to files count as files; symlinked directories are never descended.
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    if !is_file || !filter.is_file_eligible(&entry.file_name().to_string_lossy()) {
        return None;
    }

    let path = entry.into_path();
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Some(EligibleFile { path, dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PathFilterConfig;
    use std::fs;
    use tempfile::TempDir;

    fn filter() -> PathFilter {
        PathFilter::new(PathFilterConfig {
            skip_dir_names: ["node_modules", ".git", "out"].map(String::from).into(),
            allowed_extensions: [".ts", ".css"].map(String::from).into(),
            allowed_exact_names: ["package.json"].map(String::from).into(),
        })
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "Void").unwrap();
    }

    fn collect(root: &Path, filter: &PathFilter) -> Vec<PathBuf> {
        walk(root, filter)
            .map(|f| f.unwrap().path.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn test_walk_selects_eligible_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/main.ts");
        touch(dir.path(), "src/main.rs");
        touch(dir.path(), "media/void.css");
        touch(dir.path(), "package.json");
        touch(dir.path(), "tsconfig.json");

        let files = collect(dir.path(), &filter());

        assert_eq!(
            files,
            vec![
                PathBuf::from("media/void.css"),
                PathBuf::from("package.json"),
                PathBuf::from("src/main.ts"),
            ]
        );
    }

    #[test]
    fn test_walk_prunes_skipped_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "node_modules/lib/index.ts");
        touch(dir.path(), "src/node_modules/deep/index.ts");
        touch(dir.path(), "src/out/bundle.ts");
        touch(dir.path(), "src/output/kept.ts");

        let files = collect(dir.path(), &filter());

        assert_eq!(files, vec![PathBuf::from("src/output/kept.ts")]);
    }

    #[test]
    fn test_root_is_never_pruned() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "out/inner.ts");
        let root = dir.path().join("out");

        let files = collect(&root, &filter());

        assert_eq!(files, vec![PathBuf::from("inner.ts")]);
    }

    #[test]
    fn test_walk_pairs_file_with_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/b/c.ts");

        let filter = filter();
        let file = walk(dir.path(), &filter).next().unwrap().unwrap();

        assert_eq!(file.path, dir.path().join("a/b/c.ts"));
        assert_eq!(file.dir, dir.path().join("a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_symlink_is_yielded_even_into_skipped_dir() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "node_modules/shared.ts");
        touch(dir.path(), "src/real.ts");
        std::os::unix::fs::symlink(
            dir.path().join("node_modules/shared.ts"),
            dir.path().join("src/linked.ts"),
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path().join("src"), dir.path().join("src-link")).unwrap();

        let files = collect(dir.path(), &filter());

        assert_eq!(
            files,
            vec![PathBuf::from("src/linked.ts"), PathBuf::from("src/real.ts")]
        );
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let filter = filter();

        let results: Vec<_> = walk(&dir.path().join("missing"), &filter).collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(RebrandError::Walk(_))));
    }
}
