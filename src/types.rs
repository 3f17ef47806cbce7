// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for var-census

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Languages covered by the census
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    R,
}

impl Language {
    /// Detect a census language from a file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        match ext {
            "py" => Some(Language::Python),
            "R" | "r" => Some(Language::R),
            _ => None,
        }
    }

    /// Lowercase tag used in output file names and the combined CSV.
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::R => "r",
        }
    }

    /// Human-facing name for console summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::R => "R",
        }
    }
}

/// One entry of a per-language ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedVar {
    pub name: String,
    pub count: usize,
}

/// One entry of the cross-language merged ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedVar {
    pub name: String,
    pub count: usize,
    pub language: Language,
}

/// A name assigned in both languages, with its per-language counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedVar {
    pub name: String,
    pub python_count: usize,
    pub r_count: usize,
}

impl SharedVar {
    pub fn total(&self) -> usize {
        self.python_count + self.r_count
    }
}
