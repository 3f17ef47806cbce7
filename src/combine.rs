// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cross-language merging and shared-variable extraction

use crate::scan::LanguageScan;
use crate::types::{Language, RankedVar, SharedVar, TaggedVar};

/// Concatenate both rankings, tag each entry with its language, and
/// re-sort by count descending. The sort is stable, so equal counts keep
/// Python-before-R concatenation order.
pub fn merge_and_tag(python: &[RankedVar], r: &[RankedVar]) -> Vec<TaggedVar> {
    let tag = |entries: &[RankedVar], language: Language| {
        entries
            .iter()
            .map(|entry| TaggedVar {
                name: entry.name.clone(),
                count: entry.count,
                language,
            })
            .collect::<Vec<_>>()
    };

    let mut combined = tag(python, Language::Python);
    combined.extend(tag(r, Language::R));
    combined.sort_by(|a, b| b.count.cmp(&a.count));
    combined
}

/// Names assigned in both languages, ranked by combined count.
///
/// Counts are looked up in the per-language tables, not the rankings, so
/// the records are independent of either ranking's sort order. The
/// intersection is walked in the Python table's first-seen order, which
/// makes equal-total ordering deterministic.
pub fn shared_variables(python: &LanguageScan, r: &LanguageScan) -> Vec<SharedVar> {
    let mut shared: Vec<SharedVar> = python
        .totals
        .iter()
        .filter(|(name, _)| r.totals.contains(name))
        .map(|(name, python_count)| SharedVar {
            name: name.to_string(),
            python_count,
            r_count: r.totals.get(name),
        })
        .collect();
    shared.sort_by(|a, b| b.total().cmp(&a.total()));
    shared
}
