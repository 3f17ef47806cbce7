// SPDX-License-Identifier: PMPL-1.0-or-later

//! var-census: count variable assignment sites across Python and R trees
//!
//! Scans a directory for `.py` and `.R`/`.r` files, tallies lexical
//! assignment sites per identifier with fixed regex rule sets, and emits
//! per-language, combined, and shared-variable reports.

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use var_census::combine;
use var_census::report;
use var_census::scan::{self, LanguageScan};
use var_census::types::Language;

#[derive(Parser)]
#[command(name = "var-census")]
#[command(version)]
#[command(about = "Count variable assignment sites across Python and R source trees")]
struct Cli {
    /// Directory tree to scan
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,
}

fn run_language_pass(directory: &Path, language: Language, out_dir: &Path) -> Result<LanguageScan> {
    println!(
        "{}",
        format!("=== ANALYZING {} FILES ===", language.label().to_uppercase())
            .bold()
            .cyan()
    );

    let pass = scan::scan_tree(directory, language)?;
    let (counts_file, files_file) = report::save_language_outputs(&pass, out_dir)?;
    println!(
        "Results saved to {} and {}",
        counts_file.display(),
        files_file.display()
    );
    report::print_language_summary(&pass);

    Ok(pass)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let out_dir = Path::new(".");

    let python = run_language_pass(&cli.directory, Language::Python, out_dir)?;
    println!();
    let r = run_language_pass(&cli.directory, Language::R, out_dir)?;

    let combined = combine::merge_and_tag(&python.ranking(), &r.ranking());
    let combined_file = report::save_combined(&combined, out_dir)?;
    println!("\nCombined results saved to {}", combined_file.display());

    let shared = combine::shared_variables(&python, &r);
    let shared_file = report::save_shared(&shared, out_dir)?;

    report::print_combined_summary(&python, &r, &shared);
    println!("\nShared variables saved to {}", shared_file.display());

    Ok(())
}
