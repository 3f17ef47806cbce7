// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: scan a tree, combine languages, emit reports

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use var_census::combine;
use var_census::report;
use var_census::scan;
use var_census::types::Language;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

#[test]
fn test_python_ranking_end_to_end() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "x = 1\ny = 2\nx = 3\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let ranking = pass.ranking();

    assert_eq!(ranking.len(), 2);
    assert_eq!((ranking[0].name.as_str(), ranking[0].count), ("x", 2));
    assert_eq!((ranking[1].name.as_str(), ranking[1].count), ("y", 1));
    assert_eq!(pass.processed_files.len(), 1);
}

#[test]
fn test_loop_and_augmented_end_to_end() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "for i in range(3):\n    total += i\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    assert_eq!(pass.totals.get("i"), 1);
    assert_eq!(pass.totals.get("total"), 1);
    assert_eq!(pass.totals.len(), 2);
}

#[test]
fn test_mutate_end_to_end() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "b.R", "mutate(x = y + 1, z = 2)\n");

    let pass = scan::scan_tree(tree.path(), Language::R).unwrap();
    assert_eq!(pass.totals.get("x"), 1);
    assert_eq!(pass.totals.get("z"), 1);
    assert_eq!(pass.totals.get("y"), 0);
}

#[test]
fn test_shared_variable_counts_and_csv() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "count = 1\n");
    write_file(tree.path(), "b.R", "count <- 2\ncount <- 3\n");

    let python = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let r = scan::scan_tree(tree.path(), Language::R).unwrap();

    let shared = combine::shared_variables(&python, &r);
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].name, "count");
    assert_eq!(shared[0].python_count, 1);
    assert_eq!(shared[0].r_count, 2);
    assert_eq!(shared[0].total(), 3);

    let out = TempDir::new().unwrap();
    let path = report::save_shared(&shared, out.path()).unwrap();
    let written = fs::read_to_string(path).unwrap();
    assert_eq!(written, "var,python_count,r_count,total\ncount,1,2,3\n");
}

#[test]
fn test_combined_csv_sorted_and_tagged() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "alpha = 1\nalpha = 2\n");
    write_file(tree.path(), "b.R", "beta <- 1\nbeta <- 2\nbeta <- 3\n");

    let python = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let r = scan::scan_tree(tree.path(), Language::R).unwrap();

    let combined = combine::merge_and_tag(&python.ranking(), &r.ranking());
    let out = TempDir::new().unwrap();
    let path = report::save_combined(&combined, out.path()).unwrap();
    let written = fs::read_to_string(path).unwrap();

    assert_eq!(written, "var,count,language\nbeta,3,r\nalpha,2,python\n");
}

#[test]
fn test_language_outputs_schema_and_order() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "x = 1\ny = 2\nx = 3\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let out = TempDir::new().unwrap();
    let (counts_path, files_path) = report::save_language_outputs(&pass, out.path()).unwrap();

    assert!(counts_path.ends_with("python_var_counts.csv"));
    assert!(files_path.ends_with("processed_python_files.txt"));

    let counts_csv = fs::read_to_string(counts_path).unwrap();
    assert_eq!(counts_csv, "var,count\nx,2\ny,1\n");

    let listing = fs::read_to_string(files_path).unwrap();
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.trim_end().ends_with("a.py"));
}

#[test]
fn test_global_count_is_sum_of_per_file_counts() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "one.py", "n = 1\nn = 2\n");
    write_file(tree.path(), "sub/two.py", "n = 3\nm = 4\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    assert_eq!(pass.totals.get("n"), 3);
    assert_eq!(pass.totals.get("m"), 1);

    let ranking_sum: usize = pass.ranking().iter().map(|entry| entry.count).sum();
    assert_eq!(ranking_sum, pass.totals.total());
    assert_eq!(ranking_sum, 4);
}

#[test]
fn test_ranking_ties_break_by_traversal_order() {
    let tree = TempDir::new().unwrap();
    // Both names end up with count 1; alpha.py is walked first.
    write_file(tree.path(), "alpha.py", "first_seen = 1\n");
    write_file(tree.path(), "omega.py", "second_seen = 1\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let ranking = pass.ranking();
    assert_eq!(ranking[0].name, "first_seen");
    assert_eq!(ranking[1].name, "second_seen");
}

#[test]
fn test_rescans_are_deterministic() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.py", "x = 1\nshared = 2\n");
    write_file(tree.path(), "b/c.py", "shared = 3\nz = 4\n");
    write_file(tree.path(), "d.R", "shared <- 5\n");

    let first_py = scan::scan_tree(tree.path(), Language::Python).unwrap();
    let second_py = scan::scan_tree(tree.path(), Language::Python).unwrap();
    assert_eq!(first_py.ranking(), second_py.ranking());
    assert_eq!(first_py.processed_files, second_py.processed_files);

    let first_r = scan::scan_tree(tree.path(), Language::R).unwrap();
    let second_r = scan::scan_tree(tree.path(), Language::R).unwrap();
    assert_eq!(first_r.ranking(), second_r.ranking());
}

#[test]
fn test_excluded_files_never_reach_processed_list() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "keep.py", "x = 1\n");
    write_file(tree.path(), ".git/skip.py", "x = 1\n");
    write_file(tree.path(), "lib/node_modules/skip.py", "x = 1\n");

    let pass = scan::scan_tree(tree.path(), Language::Python).unwrap();
    assert_eq!(pass.processed_files.len(), 1);
    assert!(pass.processed_files[0].ends_with("keep.py"));
    assert_eq!(pass.totals.get("x"), 1);
}

#[test]
fn test_missing_root_is_an_error() {
    let tree = TempDir::new().unwrap();
    let missing = tree.path().join("nope");
    assert!(scan::scan_tree(&missing, Language::Python).is_err());
}
