//! Decoding structured build logs
//!
//! Verify the report format and exit status for primary-decoded logs.

use crate::prelude::*;

fn failing_build() -> SectionSpec {
    SectionSpec::new("Build App")
        .section(
            SectionSpec::new("Compile ViewController.m").message(
                MessageSpec::error(
                    Some("/Users/dev/App/ViewController.h"),
                    "expected ';' after method prototype",
                )
                .at(12, 30),
            ),
        )
        .section(
            SectionSpec::new("Compile Helper.m").message(
                MessageSpec::warning(Some("/Users/dev/App/Helper.m"), "unused variable 'temp'")
                    .at(8, 9),
            ),
        )
}

#[test]
fn errors_and_warnings_are_reported() {
    let ws = Workspace::new();
    let log = ws.build_log("Logs/Build/A.xcactivitylog", &failing_build());

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED)
        .stdout_eq(&format!(
            "\
log: {} (primary decode)

Errors (1):
  ● /Users/dev/App/ViewController.h:12:30: expected ';' after method prototype

Warnings (1):
  ● /Users/dev/App/Helper.m:8:9: unused variable 'temp'

BUILD FAILED (1 error)
",
            log.display()
        ));
}

#[test]
fn clean_build_succeeds() {
    let ws = Workspace::new();
    let log = ws.build_log(
        "A.xcactivitylog",
        &SectionSpec::new("Build App").section(SectionSpec::new("Compile main.swift")),
    );

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .passes()
        .stdout_has("BUILD SUCCEEDED\n")
        .stdout_lacks("Errors");
}

#[test]
fn warnings_alone_do_not_fail_the_build() {
    let ws = Workspace::new();
    let log = ws.build_log(
        "A.xcactivitylog",
        &SectionSpec::new("Build App").message(MessageSpec::warning(
            None,
            "Run script build phase 'Lint' will be run during every build",
        )),
    );

    ws.xcr()
        .args(&["decode"])
        .arg_path(&log)
        .passes()
        .stdout_has("  ● Run script build phase 'Lint' will be run during every build\n")
        .stdout_has("BUILD SUCCEEDED WITH WARNINGS (1 warning)");
}

#[test]
fn repeated_diagnostics_are_reported_once() {
    let ws = Workspace::new();
    let error = || MessageSpec::error(Some("/src/Shared.h"), "redefinition of 'Point'").at(3, 8);
    let log = ws.build_log(
        "A.xcactivitylog",
        &SectionSpec::new("Build App")
            .section(SectionSpec::new("Compile a.m").message(error()))
            .section(SectionSpec::new("Compile b.m").message(error())),
    );

    let run = ws
        .xcr()
        .args(&["decode"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED);
    assert_eq!(run.stdout().matches("redefinition of 'Point'").count(), 1);
}

#[test]
fn json_output_carries_diagnostics() {
    let ws = Workspace::new();
    let log = ws.build_log("A.xcactivitylog", &failing_build());

    let run = ws
        .xcr()
        .args(&["decode", "-o", "json"])
        .arg_path(&log)
        .exits(EXIT_BUILD_FAILED);
    let json = run.json();

    assert_eq!(json["status"], "failed");
    assert_eq!(json["strategy"], "primary");
    assert_eq!(json["artifact"], log.to_str().unwrap());
    assert_eq!(json["errors"][0]["file_path"], "/Users/dev/App/ViewController.h");
    assert_eq!(json["errors"][0]["line"], 12);
    assert_eq!(json["warnings"][0]["message"], "unused variable 'temp'");
}

#[test]
fn missing_log_is_an_error() {
    let ws = Workspace::new();

    ws.xcr()
        .args(&["decode"])
        .arg_path(ws.path().join("absent.xcactivitylog"))
        .exits(EXIT_BUILD_FAILED)
        .stderr_has("cannot read build log");
}
