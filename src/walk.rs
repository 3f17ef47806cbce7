// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directory traversal with fixed exclusion rules

use crate::types::Language;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory basenames never descended into, at any depth.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "venv",
    ".venv",
    "env",
    "__pycache__",
    "node_modules",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "dist",
    "build",
    ".idea",
    ".vscode",
    ".ipynb_checkpoints",
];

/// R projects additionally cache packages under `renv/`.
const R_SKIP_DIRS: &[&str] = &["renv"];

fn should_skip(name: &str, language: Language) -> bool {
    SKIP_DIRS.contains(&name) || (language == Language::R && R_SKIP_DIRS.contains(&name))
}

/// Enumerate source files for one language under `root`.
///
/// Excluded directories are pruned before descent, so their contents are
/// never visited. Entries are walked in file-name order to keep
/// processed-file lists and ranking tie-breaks reproducible across runs.
pub fn source_files(root: &Path, language: Language) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            // The root itself is always walked, whatever its name.
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_str().unwrap_or("");
            !should_skip(name, language)
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if Language::detect(entry.path()) == Some(language) {
            files.push(entry.into_path());
        }
    }
    files
}
