// SPDX-License-Identifier: PMPL-1.0-or-later

//! var-census — lexical census of assignment sites in Python and R trees.
//!
//! The engine decomposes raw source text into candidate assignment
//! occurrences using fixed per-language regex rule sets, folds per-file
//! tallies into global rankings, and cross-references the two languages
//! to surface names assigned in both.
//!
//! This is pattern scanning, not parsing: there is no AST, no scoping,
//! and no awareness of string or comment contexts. The false positives
//! and negatives that follow are a deliberate trade for simplicity.

pub mod aggregate;
pub mod combine;
pub mod report;
pub mod scan;
pub mod types;
pub mod walk;
