// SPDX-License-Identifier: PMPL-1.0-or-later

//! One language pass: walk the tree, scan each file, fold the counts

pub mod patterns;
pub mod scanner;

use crate::aggregate::CountTable;
use crate::types::{Language, RankedVar};
use crate::walk;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use patterns::PatternSet;
pub use scanner::{scan_file, FileScan};

/// Results of scanning one language across a tree.
#[derive(Debug)]
pub struct LanguageScan {
    pub language: Language,
    /// Corpus-wide tally, folded from per-file tables in traversal order.
    pub totals: CountTable,
    /// Files successfully read and scanned, in traversal order.
    pub processed_files: Vec<PathBuf>,
}

impl LanguageScan {
    /// Ranking by count descending; ties keep first-seen order.
    pub fn ranking(&self) -> Vec<RankedVar> {
        self.totals.ranking()
    }
}

/// Scan every `language` source file under `root`.
///
/// Unreadable files are skipped with a diagnostic and left out of the
/// processed-file list; they never abort the pass.
pub fn scan_tree(root: &Path, language: Language) -> Result<LanguageScan> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let patterns = PatternSet::for_language(language);
    let mut totals = CountTable::new();
    let mut processed_files = Vec::new();

    for file in walk::source_files(root, language) {
        match scanner::scan_file(&file, &patterns) {
            FileScan::Scanned(counts) => {
                totals.merge(&counts);
                processed_files.push(file);
            }
            FileScan::Unreadable => {}
        }
    }

    Ok(LanguageScan {
        language,
        totals,
        processed_files,
    })
}
