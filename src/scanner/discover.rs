use crate::utils::file::is_path_excluded;
use glob::Pattern;
use log::warn;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// Shard files found under a dataset directory.
#[derive(Debug, Default)]
pub struct Discovery {
    /// `.json` files, sorted by path.
    pub shards: Vec<PathBuf>,
    pub dirs_count: usize,
    pub excluded_count: usize,
}

/// Collect the `.json` shard files under `path`.
///
/// Subdirectories are entered while `max_depth` is above zero; excluded
/// entries are counted but never read. Only a failure to list `path` itself
/// is an error: unreadable entries and subdirectories are skipped.
pub fn discover<P: AsRef<Path>>(
    path: P,
    max_depth: usize,
    exclude_patterns: &[Pattern],
) -> std::io::Result<Discovery> {
    let path = path.as_ref();
    let mut discovery = Discovery::default();

    if is_path_excluded(path, exclude_patterns) {
        discovery.excluded_count += 1;
        return Ok(discovery);
    }

    let entries = fs::read_dir(path)?;
    walk_entries(entries, max_depth, exclude_patterns, &mut discovery);
    discovery.shards.sort();
    Ok(discovery)
}

fn walk(path: &Path, max_depth: usize, exclude_patterns: &[Pattern], discovery: &mut Discovery) {
    if is_path_excluded(path, exclude_patterns) {
        discovery.excluded_count += 1;
        return;
    }

    match fs::read_dir(path) {
        Ok(entries) => walk_entries(entries, max_depth, exclude_patterns, discovery),
        Err(e) => warn!("Skipping directory {}: {}", path.display(), e),
    }
}

fn walk_entries(
    entries: ReadDir,
    max_depth: usize,
    exclude_patterns: &[Pattern],
    discovery: &mut Discovery,
) {
    discovery.dirs_count += 1;

    for entry in entries {
        let entry_path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if is_path_excluded(&entry_path, exclude_patterns) {
            discovery.excluded_count += 1;
            continue;
        }

        match fs::metadata(&entry_path) {
            Ok(metadata) if metadata.is_file() => {
                if is_shard(&entry_path) {
                    discovery.shards.push(entry_path);
                }
            }
            Ok(metadata) if metadata.is_dir() => {
                if max_depth > 0 {
                    walk(&entry_path, max_depth - 1, exclude_patterns, discovery);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Skipping {}: {}", entry_path.display(), e),
        }
    }
}

fn is_shard(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
