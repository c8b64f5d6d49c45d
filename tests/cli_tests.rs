use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quaylint").unwrap()
}

fn write_dockerfile(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("Dockerfile");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn clean_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(
        dir.path(),
        "FROM alpine:3.19\nUSER nobody\nCMD [\"sh\"]\n",
    );
    cmd().arg("check").arg(&path).assert().success();
}

#[test]
fn sensitive_copy_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nCOPY secrets.py /app/\n");
    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("DL001"))
        .stdout(predicate::str::contains("CRITICAL"));
}

#[test]
fn major_findings_pass_under_default_fail_on() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nUSER root\nCMD [\"sh\"]\n");
    // root user is major, the default blocking tier is critical
    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("DL005"));
}

#[test]
fn fail_on_major_gates_root_user() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nUSER root\nCMD [\"sh\"]\n");
    cmd()
        .args(["check", path.to_str().unwrap(), "--fail-on", "major"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn rendered_line_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nUSER root\nCMD [\"sh\"]\n");
    let expected = format!("{}:2 - DL005 - MAJOR", path.display());
    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn file_scope_findings_render_line_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nCMD [\"sh\"]\n");
    let expected = format!("{}:0 - DL009 - INFO", path.display());
    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn json_output_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nCOPY secrets.py /app/\n");
    let output = cmd()
        .args(["check", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["summary"]["critical"].as_u64().unwrap(), 1);
    let findings = parsed["findings"].as_array().unwrap();
    assert!(findings
        .iter()
        .any(|f| f["code"] == "DL001" && f["severity"] == "critical" && f["line"] == 2));
}

#[test]
fn dockerignore_silences_dl002() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nCMD [\"sh\"]\n");
    fs::write(dir.path().join(".dockerignore"), ".git\n").unwrap();

    let output = cmd()
        .args(["check", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    let findings = parsed["findings"].as_array().unwrap();
    assert!(findings.iter().all(|f| f["code"] != "DL002"));
}

#[test]
fn config_can_disable_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nUSER root\nCMD [\"sh\"]\n");
    fs::write(
        dir.path().join(".quaylintrc.toml"),
        "disabled_rules = [\"DL005\"]\n",
    )
    .unwrap();

    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("DL005").not());
}

#[test]
fn missing_dockerfile_fails() {
    cmd()
        .args(["check", "/nonexistent/Dockerfile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dockerfile not found"));
}

#[test]
fn unknown_instruction_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FRM alpine\n");
    cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown instruction"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .quaylintrc.toml"));

    assert!(dir.path().join(".quaylintrc.toml").exists());
}

#[test]
fn init_fails_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".quaylintrc.toml"), "").unwrap();
    cmd()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn explain_lists_all_rules() {
    cmd()
        .args(["explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DL001"))
        .stdout(predicate::str::contains("DL012"));
}

#[test]
fn explain_known_rule() {
    cmd()
        .args(["explain", "DL005"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Severity: major"));
}

#[test]
fn explain_unknown_rule_exits_1() {
    cmd()
        .args(["explain", "DL999"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rule does not exist"));
}

#[test]
fn explicit_ignore_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dockerfile(dir.path(), "FROM alpine\nCMD [\"sh\"]\n");
    let ignore = dir.path().join("custom.ignore");
    fs::write(&ignore, "*.log\n").unwrap();

    let output = cmd()
        .args([
            "check",
            path.to_str().unwrap(),
            "--ignore-file",
            ignore.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    let findings = parsed["findings"].as_array().unwrap();
    assert!(findings.iter().all(|f| f["code"] != "DL002"));
}
