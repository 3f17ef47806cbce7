// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report emitters: tabular file outputs and console summaries

use crate::scan::LanguageScan;
use crate::types::{SharedVar, TaggedVar};
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Rows shown in each console table.
const TOP_N: usize = 10;

/// Write `<prefix>_var_counts.csv` and `processed_<prefix>_files.txt`
/// into `out_dir`, returning both paths.
pub fn save_language_outputs(scan: &LanguageScan, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let prefix = scan.language.prefix();

    let counts_path = out_dir.join(format!("{prefix}_var_counts.csv"));
    let mut csv = String::from("var,count\n");
    for entry in scan.ranking() {
        csv.push_str(&format!("{},{}\n", entry.name, entry.count));
    }
    fs::write(&counts_path, csv)?;

    let files_path = out_dir.join(format!("processed_{prefix}_files.txt"));
    let mut listing = String::new();
    for file in &scan.processed_files {
        listing.push_str(&format!("{}\n", file.display()));
    }
    fs::write(&files_path, listing)?;

    Ok((counts_path, files_path))
}

/// Write `combined_vars.csv`: every identifier from both languages,
/// tagged and sorted by count descending.
pub fn save_combined(combined: &[TaggedVar], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join("combined_vars.csv");
    let mut csv = String::from("var,count,language\n");
    for entry in combined {
        csv.push_str(&format!(
            "{},{},{}\n",
            entry.name,
            entry.count,
            entry.language.prefix()
        ));
    }
    fs::write(&path, csv)?;
    Ok(path)
}

/// Write `shared_variables.csv`: one row per name assigned in both
/// languages, with per-language counts and the combined total.
pub fn save_shared(shared: &[SharedVar], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join("shared_variables.csv");
    let mut csv = String::from("var,python_count,r_count,total\n");
    for entry in shared {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            entry.name,
            entry.python_count,
            entry.r_count,
            entry.total()
        ));
    }
    fs::write(&path, csv)?;
    Ok(path)
}

/// Per-language console summary with a top-10 table.
pub fn print_language_summary(scan: &LanguageScan) {
    let ranking = scan.ranking();
    let label = scan.language.label();

    println!("Found {} {} variables", ranking.len(), label);
    println!("Processed {} {} scripts", scan.processed_files.len(), label);

    if ranking.is_empty() {
        return;
    }

    println!("\n{} variables (descending freq):", label);
    println!("  {:<30} {:>8}", "VARIABLE", "N");
    for entry in ranking.iter().take(TOP_N) {
        println!("  {:<30} {:>8}", entry.name, entry.count);
    }
}

/// Combined console summary across both languages.
pub fn print_combined_summary(python: &LanguageScan, r: &LanguageScan, shared: &[SharedVar]) {
    println!("\n{}", "=== COMBINED SUMMARY ===".bold().cyan());
    println!(
        "Total files processed: {}",
        python.processed_files.len() + r.processed_files.len()
    );
    println!(
        "Total variables found: {}",
        python.totals.len() + r.totals.len()
    );
    println!("Shared variables: {}", shared.len());

    if shared.is_empty() {
        return;
    }

    println!("\nTop shared variables (Python count, R count):");
    println!("  {:<30} {:>8} {:>8}", "VARIABLE", "PYTHON", "R");
    for entry in shared.iter().take(TOP_N) {
        println!(
            "  {:<30} {:>8} {:>8}",
            entry.name, entry.python_count, entry.r_count
        );
    }
}
