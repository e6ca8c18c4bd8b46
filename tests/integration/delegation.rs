use predicates::prelude::*;

use crate::common::StubRuntime;

fn expected_call(stub: &StubRuntime, query: &str, max_results: &str) -> Vec<String> {
    let volume = format!("{}:/data/output:rw", stub.resolved_workdir().join("out").display());
    [
        "run",
        "--rm",
        "--name",
        "arxiv-processor",
        "-v",
        volume.as_str(),
        "arxiv-processor:latest",
        query,
        max_results,
        "/data/output",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[test]
fn delegates_with_resolved_arguments() {
    let stub = StubRuntime::new();

    stub.command(0)
        .args(["quantum computing", "10", "./out"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(stub.workdir().join("out").is_dir());
    assert_eq!(stub.calls(), expected_call(&stub, "quantum computing", "10"));
}

#[test]
fn boundary_values_are_delegated() {
    for value in ["1", "100"] {
        let stub = StubRuntime::new();
        stub.command(0)
            .args(["cat:cs.LG", value, "./out"])
            .assert()
            .success();
        assert_eq!(stub.calls(), expected_call(&stub, "cat:cs.LG", value));
    }
}

#[test]
fn hyphenated_query_is_forwarded_verbatim() {
    let stub = StubRuntime::new();

    stub.command(0)
        .args(["-all:electron", "3", "./out"])
        .assert()
        .success();

    assert_eq!(stub.calls(), expected_call(&stub, "-all:electron", "3"));
}

#[test]
fn flag_spelled_query_is_delegated() {
    for query in ["-h", "--help", "--dry-run", "-V"] {
        let stub = StubRuntime::new();
        stub.command(0)
            .args([query, "10", "./out"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        assert_eq!(stub.calls(), expected_call(&stub, query, "10"));
    }
}

#[test]
fn double_dash_separates_flag_spelled_query() {
    let stub = StubRuntime::new();

    let output = stub
        .command(0)
        .args(["--dry-run", "--", "-h", "10", "./out"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["query"], "-h");
    assert!(!stub.was_invoked());
}

#[test]
fn non_utf8_query_is_forwarded_as_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let stub = StubRuntime::new();

    stub.command(0)
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .args(["2", "./out"])
        .assert()
        .success();

    let log = stub.raw_calls();
    let lines: Vec<&[u8]> = log.split(|&b| b == b'\n').collect();
    assert_eq!(lines[7], b"caf\xe9");
    assert_eq!(lines[8], b"2");
}

#[test]
fn processor_exit_code_is_propagated() {
    let stub = StubRuntime::new();

    stub.command(3)
        .args(["quantum computing", "10", "./out"])
        .assert()
        .code(3);

    assert!(stub.was_invoked());
}

#[test]
fn existing_output_directory_is_reused() {
    let stub = StubRuntime::new();

    for _ in 0..2 {
        stub.command(0)
            .args(["quantum computing", "10", "./out"])
            .assert()
            .success();
    }

    let mut twice = expected_call(&stub, "quantum computing", "10");
    twice.extend(expected_call(&stub, "quantum computing", "10"));
    assert_eq!(stub.calls(), twice);
}

#[test]
fn flags_override_runtime_settings() {
    let stub = StubRuntime::new();

    stub.command(0)
        .args(["--image", "arxiv-processor:dev", "--name", "arxiv-dev"])
        .args(["q", "5", "./out"])
        .assert()
        .success();

    let calls = stub.calls();
    assert_eq!(calls[3], "arxiv-dev");
    assert_eq!(calls[6], "arxiv-processor:dev");
}

#[test]
fn missing_runtime_exits_127() {
    let stub = StubRuntime::new();

    stub.command(0)
        .env("ARXIV_GATE_RUNTIME", stub.workdir().join("no-such-runtime"))
        .args(["q", "5", "./out"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("failed to start container runtime"));
}

#[test]
fn dry_run_prints_plan_without_side_effects() {
    let stub = StubRuntime::new();

    let output = stub
        .command(0)
        .args(["--dry-run", "quantum computing", "10", "./out"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["query"], "quantum computing");
    assert_eq!(plan["max_results"], 10);
    assert_eq!(plan["mount_point"], "/data/output");
    assert_eq!(plan["args"][1], "--rm");
    assert!(!stub.workdir().join("out").exists());
    assert!(!stub.was_invoked());
}
