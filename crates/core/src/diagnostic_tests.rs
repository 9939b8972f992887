// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn duplicate_triple_is_collapsed() {
    let mut set = DiagnosticSet::new();
    assert!(set.insert(Diagnostic::error(Some("/src/A.m"), "boom")));
    assert!(!set.insert(Diagnostic::error(Some("/src/A.m"), "boom").at(Some(9), Some(1))));
    assert_eq!(set.len(), 1);
    // First occurrence wins, including its (absent) position
    assert_eq!(set.into_vec()[0].line, None);
}

#[yare::parameterized(
    different_severity = { Diagnostic::warning(Some("/src/A.m"), "boom") },
    different_path     = { Diagnostic::error(Some("/src/B.m"), "boom") },
    missing_path       = { Diagnostic::error(None, "boom") },
    different_message  = { Diagnostic::error(Some("/src/A.m"), "bang") },
)]
fn distinct_triples_are_kept(other: Diagnostic) {
    let set: DiagnosticSet = [Diagnostic::error(Some("/src/A.m"), "boom"), other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn order_is_first_seen() {
    let set: DiagnosticSet = [
        Diagnostic::warning(Some("/b.m"), "w"),
        Diagnostic::error(Some("/a.m"), "e"),
        Diagnostic::warning(Some("/b.m"), "w"),
        Diagnostic::error(None, "link failed"),
    ]
    .into_iter()
    .collect();
    let messages: Vec<_> = set.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["w", "e", "link failed"]);
}

#[yare::parameterized(
    full        = { Diagnostic::error(Some("/src/A.swift"), "oops").at(Some(3), Some(7)), "/src/A.swift:3:7: oops" },
    line_only   = { Diagnostic::error(Some("/src/A.swift"), "oops").at(Some(3), None),    "/src/A.swift:3: oops" },
    path_only   = { Diagnostic::warning(Some("/src/A.swift"), "oops"),                    "/src/A.swift: oops" },
    no_path     = { Diagnostic::error(None, "Command PhaseScriptExecution failed"),       "Command PhaseScriptExecution failed" },
)]
fn display(diagnostic: Diagnostic, expected: &str) {
    assert_eq!(diagnostic.to_string(), expected);
}

#[test]
fn json_omits_absent_fields() {
    let json = serde_json::to_string(&Diagnostic::error(None, "x")).unwrap();
    assert_eq!(json, r#"{"severity":"error","message":"x"}"#);
}

#[test]
fn json_includes_location() {
    let d = Diagnostic::warning(Some("/src/Helper.m"), "unused variable 'temp'").at(Some(12), Some(9));
    let value = serde_json::to_value(&d).unwrap();
    assert_eq!(value["severity"], "warning");
    assert_eq!(value["file_path"], "/src/Helper.m");
    assert_eq!(value["line"], 12);
    assert_eq!(value["column"], 9);
}

fn arb_diagnostic() -> impl Strategy<Value = Diagnostic> {
    (
        prop::bool::ANY,
        prop::option::of(prop::sample::select(vec!["/a.m", "/b.swift", "/c.h"])),
        prop::sample::select(vec!["expected ';'", "unused variable", "type mismatch"]),
        prop::option::of(1u32..4),
        prop::option::of(1u32..4),
    )
        .prop_map(|(is_error, path, message, line, column)| {
            let diagnostic = if is_error {
                Diagnostic::error(path, message)
            } else {
                Diagnostic::warning(path, message)
            };
            diagnostic.at(line, column)
        })
}

fn identity(d: &Diagnostic) -> (Severity, Option<&Path>, &str) {
    (d.severity, d.file_path(), d.message.as_str())
}

proptest! {
    #[test]
    fn set_never_holds_duplicate_triples(input in prop::collection::vec(arb_diagnostic(), 0..40)) {
        let set: DiagnosticSet = input.iter().cloned().collect();
        let out = set.into_vec();
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                prop_assert_ne!(identity(a), identity(b));
            }
        }
    }

    #[test]
    fn set_preserves_first_seen_order(input in prop::collection::vec(arb_diagnostic(), 0..40)) {
        let mut expected: Vec<Diagnostic> = Vec::new();
        for d in &input {
            if !expected.iter().any(|e| identity(e) == identity(d)) {
                expected.push(d.clone());
            }
        }
        let set: DiagnosticSet = input.into_iter().collect();
        prop_assert_eq!(set.into_vec(), expected);
    }
}
