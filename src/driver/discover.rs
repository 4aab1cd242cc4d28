use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::driver::config::GenConfig;

/// Project-relative paths (`/`-separated) of every scene file under `project_root`.
///
/// Hidden entries and directories holding the ignore marker are pruned with their
/// descendants. Results are sorted.
pub fn discover_scenes(project_root: &Path, cfg: &GenConfig) -> Vec<String> {
    let mut scenes = Vec::new();

    let walker = WalkDir::new(project_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(e, &cfg.ignore_marker));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !cfg.is_scene_file(entry.path()) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(project_root) else {
            continue;
        };
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        scenes.push(rel);
    }

    scenes.sort();
    tracing::debug!(count = scenes.len(), "discovered scenes");
    scenes
}

fn is_pruned(entry: &DirEntry, ignore_marker: &str) -> bool {
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    hidden || (entry.file_type().is_dir() && entry.path().join(ignore_marker).exists())
}

#[cfg(test)]
#[path = "../../tests/unit/driver/discover.rs"]
mod tests;
