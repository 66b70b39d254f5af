use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

struct TestDirs {
    _base: TempDir,
    data: PathBuf,
    config: PathBuf,
}

fn test_dirs() -> TestDirs {
    let base = tempdir().expect("tempdir");
    let data = base.path().join("data");
    let config = base.path().join("config.toml");
    std::fs::create_dir_all(&data).expect("create data dir");
    TestDirs {
        data,
        config,
        _base: base,
    }
}

fn diary(dirs: &TestDirs, user: &str, password: &str) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("DIARY_DATA_DIR", &dirs.data)
        .env("DIARY_CONFIG", &dirs.config)
        .env("DIARY_USER", user)
        .env("DIARY_PASSWORD", password);
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("run diary binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn register(dirs: &TestDirs, user: &str, password: &str) {
    let output = run(diary(dirs, user, password).args(["register", "--no-input"]));
    assert!(output.status.success(), "register failed: {}", stderr(&output));
}

fn add_entry(dirs: &TestDirs, user: &str, password: &str, body: &str) {
    let output = run(diary(dirs, user, password).args(["add", "--no-input", "--body", body]));
    assert!(output.status.success(), "add failed: {}", stderr(&output));
}

#[test]
fn test_register_add_list_persists_across_runs() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "Had a good day");

    // separate process: entries must come back from disk
    let output = run(diary(&dirs, "alice", "secret123").arg("list"));
    assert!(output.status.success(), "list failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Had a good day"), "missing entry in: {}", out);
    assert!(out.contains("]\nHad a good day"), "missing header in: {}", out);
}

#[test]
fn test_diary_file_layout() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "first note");

    let record = dirs.data.join("alice_diary.txt");
    let contents = std::fs::read_to_string(&record).expect("read diary file");
    let mut lines = contents.lines();
    let hash = lines.next().expect("hash line");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(contents.contains("\nfirst note\n"));
}

#[test]
fn test_register_duplicate_exits_4() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let output = run(diary(&dirs, "alice", "other").args(["register", "--no-input"]));
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_wrong_password_exits_5() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let output = run(diary(&dirs, "alice", "wrong").arg("list"));
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Incorrect password"));
}

#[test]
fn test_missing_account_exits_3_with_hint() {
    let dirs = test_dirs();

    let output = run(diary(&dirs, "nobody", "secret123").arg("list"));
    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("No account found for nobody"), "got: {}", err);
    assert!(err.contains("diary register"), "got: {}", err);
}

#[test]
fn test_list_empty_diary() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let output = run(diary(&dirs, "alice", "secret123").arg("list"));
    assert!(output.status.success());
    assert!(stdout(&output).contains("No entries yet."));
}

#[test]
fn test_search_finds_keyword_case_insensitively() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "Walked the Dog");
    add_entry(&dirs, "alice", "secret123", "Stayed home");

    let output = run(diary(&dirs, "alice", "secret123").args(["search", "dog"]));
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Walked the Dog"));
    assert!(!out.contains("Stayed home"));

    let output = run(diary(&dirs, "alice", "secret123").args(["search", "volcano"]));
    assert!(output.status.success());
    assert!(stdout(&output).contains("No matching entries found."));
}

#[test]
fn test_search_json_output() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "Walked the dog");

    let output = run(diary(&dirs, "alice", "secret123").args(["search", "dog", "--json"]));
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("valid JSON output");
    let list = parsed.as_array().expect("JSON array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["text"], "Walked the dog");
    assert!(list[0]["timestamp"].is_string());
}

#[test]
fn test_export_text() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "first note");
    add_entry(&dirs, "alice", "secret123", "second note");

    let dest = dirs.data.join("export.txt");
    let output = run(diary(&dirs, "alice", "secret123")
        .args(["export", dest.to_str().expect("utf8 path")]));
    assert!(output.status.success(), "export failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported 2 entries"));

    let contents = std::fs::read_to_string(&dest).expect("read export");
    assert!(contents.contains("first note\n"));
    assert!(contents.contains("second note\n"));
}

#[cfg(feature = "pdf")]
#[test]
fn test_export_pdf() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");
    add_entry(&dirs, "alice", "secret123", "first note");

    let dest = dirs.data.join("export.pdf");
    let output = run(diary(&dirs, "alice", "secret123").args([
        "export",
        dest.to_str().expect("utf8 path"),
        "--format",
        "pdf",
    ]));
    assert!(output.status.success(), "export failed: {}", stderr(&output));

    let bytes = std::fs::read(&dest).expect("read export");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_empty_diary_exits_4() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let dest = dirs.data.join("export.txt");
    let output = run(diary(&dirs, "alice", "secret123")
        .args(["export", dest.to_str().expect("utf8 path")]));
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("No entries to export."));
    assert!(!dest.exists());
}

#[test]
fn test_add_empty_body_exits_4() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let output = run(diary(&dirs, "alice", "secret123").args(["add", "--no-input", "--body", "  "]));
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_quiet_mode_suppresses_receipts() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let output = run(diary(&dirs, "alice", "secret123")
        .args(["--quiet", "add", "--no-input", "--body", "silent note"]));
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_no_command_prints_quickstart() {
    let dirs = test_dirs();

    let output = run(&mut diary(&dirs, "alice", "secret123"));
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Quickstart"));
    assert!(out.contains("diary register"));
}

#[test]
fn test_register_writes_starter_config() {
    let dirs = test_dirs();
    register(&dirs, "alice", "secret123");

    let contents = std::fs::read_to_string(&dirs.config).expect("read config");
    let parsed: toml::Value = toml::from_str(&contents).expect("valid TOML");
    assert_eq!(
        parsed["diary"]["data_dir"].as_str(),
        dirs.data.to_str()
    );
    assert_eq!(parsed["diary"]["user"].as_str(), Some("alice"));
}
