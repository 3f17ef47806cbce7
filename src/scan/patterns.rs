// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lexical assignment rules, one fixed set per language.
//!
//! Every rule is a single compiled regex applied independently to the
//! whole buffer with exhaustive, non-overlapping left-to-right matching.
//! Counts are additive across rules; the one exception is that the
//! simple-assignment rule never re-counts the final target of a
//! multi-target run (`a, b, c = 1` yields one occurrence per target).

use crate::aggregate::CountTable;
use crate::types::Language;
use regex::{Captures, Regex};

/// Python identifier: letter or underscore, then letters/digits/underscores.
const PY_IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// R identifier: letter, then letters/digits/underscores/dots.
const R_IDENT: &str = r"[A-Za-z][A-Za-z0-9_.]*";

/// Keywords that legitimately precede a bare `=` in comparison or
/// control-flow positions and must never count as assignment targets.
const PY_KEYWORDS: &[&str] = &[
    "if", "while", "for", "elif", "return", "and", "or", "not", "is", "in", "None", "True",
    "False",
];

/// Compiled rule set for one language, built once per scan invocation and
/// passed explicitly to the file scanner. No process-wide singletons.
pub struct PatternSet {
    language: Language,
    rules: Rules,
}

enum Rules {
    Python(PythonRules),
    R(RRules),
}

struct PythonRules {
    equals: Regex,
    walrus: Regex,
    multi: Regex,
    augmented: Regex,
    for_loop: Regex,
    ident: Regex,
}

struct RRules {
    arrow: Regex,
    walrus: Regex,
    mutate: Regex,
    equals: Regex,
}

/// A hard-coded pattern failing to compile is a programming error, not a
/// runtime condition.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

impl PatternSet {
    pub fn for_language(language: Language) -> Self {
        let rules = match language {
            Language::Python => Rules::Python(PythonRules::new()),
            Language::R => Rules::R(RRules::new()),
        };
        Self { language, rules }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Apply every rule for this language to one text buffer and return
    /// the local name-to-occurrences tally.
    pub fn match_counts(&self, content: &str) -> CountTable {
        let mut counts = CountTable::new();
        match &self.rules {
            Rules::Python(rules) => rules.scan(content, &mut counts),
            Rules::R(rules) => rules.scan(content, &mut counts),
        }
        counts
    }
}

/// The identifier capture every rule is built around.
fn target<'t>(caps: &'t Captures) -> &'t str {
    caps.name("varname")
        .expect("rule always captures varname")
        .as_str()
}

impl PythonRules {
    fn new() -> Self {
        Self {
            // The regex crate has no lookahead; capturing an optional
            // second `=` and rejecting it is equivalent to `=(?!=)`.
            equals: compile(&format!(r"(?P<varname>{PY_IDENT})\s*=(?P<eq>=)?")),
            walrus: compile(&format!(r"(?P<varname>{PY_IDENT})\s*:=")),
            multi: compile(&format!(
                r"(?P<targets>{PY_IDENT}(?:\s*,\s*{PY_IDENT})+)\s*="
            )),
            augmented: compile(&format!(
                r"(?P<varname>{PY_IDENT})\s*(?://=|>>=|<<=|\*\*=|[+\-*/%@&|^]=)"
            )),
            for_loop: compile(&format!(r"for\s*(?P<varname>{PY_IDENT})\s*in")),
            ident: compile(PY_IDENT),
        }
    }

    fn scan(&self, content: &str, counts: &mut CountTable) {
        // Multi-target lists go first: their spans mask the equals rule
        // below, so every target counts exactly once.
        let mut multi_spans: Vec<(usize, usize)> = Vec::new();
        for caps in self.multi.captures_iter(content) {
            let targets = caps
                .name("targets")
                .expect("multi rule always captures targets");
            multi_spans.push((targets.start(), targets.end()));
            for ident in self.ident.find_iter(targets.as_str()) {
                counts.add(ident.as_str());
            }
        }

        for caps in self.equals.captures_iter(content) {
            if caps.name("eq").is_some() {
                continue; // `==` comparison, not an assignment
            }
            let var = caps.name("varname").expect("equals rule always captures varname");
            if PY_KEYWORDS.contains(&var.as_str()) {
                continue;
            }
            let inside_multi = multi_spans
                .iter()
                .any(|&(start, end)| var.start() >= start && var.end() <= end);
            if inside_multi {
                continue;
            }
            counts.add(var.as_str());
        }

        for caps in self.walrus.captures_iter(content) {
            counts.add(target(&caps));
        }
        for caps in self.augmented.captures_iter(content) {
            counts.add(target(&caps));
        }
        for caps in self.for_loop.captures_iter(content) {
            counts.add(target(&caps));
        }
    }
}

impl RRules {
    fn new() -> Self {
        Self {
            arrow: compile(&format!(r"(?P<varname>{R_IDENT})\s*<-")),
            walrus: compile(&format!(r"(?P<varname>{R_IDENT})\s*:=")),
            // Non-greedy to the first `)`. Nested calls inside the
            // argument list lose their tail; accepted limitation.
            mutate: compile(r"(?s)mutate\s*\((?P<content>.*?)\)"),
            equals: compile(&format!(r"(?P<varname>{R_IDENT})\s*=")),
        }
    }

    fn scan(&self, content: &str, counts: &mut CountTable) {
        for caps in self.arrow.captures_iter(content) {
            counts.add(target(&caps));
        }
        for caps in self.walrus.captures_iter(content) {
            counts.add(target(&caps));
        }
        // Keyword arguments only count as assignments inside mutate().
        for caps in self.mutate.captures_iter(content) {
            let body = caps
                .name("content")
                .expect("mutate rule always captures content");
            for arg in self.equals.captures_iter(body.as_str()) {
                counts.add(target(&arg));
            }
        }
    }
}
