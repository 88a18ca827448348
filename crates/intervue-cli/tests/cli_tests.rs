//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn intervue() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("intervue").unwrap()
}

#[test]
fn help_output() {
    intervue()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Guided interview sessions with scored reports",
        ));
}

#[test]
fn version_output() {
    intervue()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intervue"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created intervue.toml"))
        .stdout(predicate::str::contains("Created sample-resume.txt"));

    assert!(dir.path().join("intervue.toml").exists());
    assert!(dir.path().join("sample-resume.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn run_nonexistent_document_fails() {
    let dir = TempDir::new().unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--document")
        .arg("no_such_resume.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("document not found"));
}

#[test]
fn run_empty_document_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("empty.txt"), "").unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--document")
        .arg("empty.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("document is empty"));
}

#[test]
fn run_unknown_service_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("resume.txt"), "Python developer").unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--document")
        .arg("resume.txt")
        .arg("--service")
        .arg("no-such-service")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in config"));
}

#[test]
fn skills_extracts_from_document() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("resume.txt"),
        "Seasoned Python and SQL engineer, comfortable with Docker.",
    )
    .unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("skills")
        .arg("--document")
        .arg("resume.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("sql"))
        .stdout(predicate::str::contains("docker"));
}

#[test]
fn skills_reports_no_matches() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("resume.txt"), "Professional beekeeper.").unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("skills")
        .arg("--document")
        .arg("resume.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found."));
}

#[test]
fn export_saved_session() {
    let dir = TempDir::new().unwrap();
    let session_path = dir.path().join("session.json");
    std::fs::write(&session_path, make_session_json()).unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("export")
        .arg("--session")
        .arg(&session_path)
        .arg("--output")
        .arg("exports")
        .arg("--format")
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text report:"))
        .stdout(predicate::str::contains("JSON report:"));

    let text = std::fs::read_to_string(dir.path().join("exports/session.txt")).unwrap();
    assert!(text.contains("Interview Report"));
    assert!(text.contains("Overall Score: 80.00"));
    assert!(text.contains("Q2: Second question"));
    assert!(text.contains("Answer: N/A"));

    assert!(dir.path().join("exports/session.paged.json").exists());
}

#[test]
fn export_nonexistent_session_fails() {
    intervue()
        .arg("export")
        .arg("--session")
        .arg("no_such_session.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

/// A minimal valid session report JSON.
fn make_session_json() -> String {
    r#"{
    "id": "00000000-0000-0000-0000-000000000000",
    "created_at": "2025-01-01T00:00:00Z",
    "role": "Software Engineer",
    "skills": ["python", "sql"],
    "overall_score": 80.0,
    "blocks": [
        {
            "number": 1,
            "question": "First question",
            "answer": "A thorough answer",
            "feedback": {
                "sentiment": 0.5,
                "keyword_coverage": 1.0,
                "score": 80.0,
                "tips": ["Add concrete examples and outcomes (numbers, impact)."]
            }
        },
        {
            "number": 2,
            "question": "Second question",
            "answer": null,
            "feedback": null
        }
    ]
}"#
    .to_string()
}
