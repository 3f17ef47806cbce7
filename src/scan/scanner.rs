// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-file scanning: read, decode, apply the pattern set

use crate::aggregate::CountTable;
use crate::scan::patterns::PatternSet;
use std::fs;
use std::path::Path;

/// Outcome of scanning one file.
///
/// Unreadable files are routine (permissions, deletion races), so they
/// are a variant rather than an error: the caller skips them and the
/// pass continues.
#[derive(Debug)]
pub enum FileScan {
    Scanned(CountTable),
    Unreadable,
}

impl FileScan {
    pub fn is_scanned(&self) -> bool {
        matches!(self, FileScan::Scanned(_))
    }
}

/// Read one file and tally its assignment sites.
///
/// Undecodable byte sequences are substituted rather than failing; a
/// file only counts as unreadable when the read itself errors.
pub fn scan_file(path: &Path, patterns: &PatternSet) -> FileScan {
    let raw = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Skipping unreadable file: {} ({})", path.display(), e);
            return FileScan::Unreadable;
        }
    };

    let content = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _) = encoding_rs::UTF_8.decode_without_bom_handling(&bytes);
            decoded.into_owned()
        }
    };

    FileScan::Scanned(patterns.match_counts(&content))
}
