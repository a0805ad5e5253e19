use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

const BACKEND_ENV: [&str; 6] = [
    "TEXT_BACKEND",
    "TEXT_MODEL",
    "TEXT_COMMAND",
    "README_AGENT_REQUEST",
    "README_AGENT_IGNORE",
    "PROGRESS_FILE",
];

fn project(root: &Path) {
    for (rel, body) in [
        ("docs/guide.md", "Start here. Then read the API notes."),
        ("docs/api.md", "Every endpoint returns JSON."),
        ("src/main.rs", "fn main() { println!(\"hi\"); }"),
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }
}

fn agent() -> Command {
    let mut cmd = Command::cargo_bin("readme-agent").unwrap();
    for var in BACKEND_ENV {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn extractive_backend_writes_readme_for_explicit_folder() {
    let tmp = tempfile::tempdir().unwrap();
    project(tmp.path());
    let progress = tmp.path().join("progress.md");

    let out = agent()
        .arg("--root")
        .arg(tmp.path())
        .args(["--folder", "docs", "--backend", "extractive"])
        .arg("--progress-file")
        .arg(&progress)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let printed = String::from_utf8_lossy(&out.stdout);
    assert!(printed.trim().ends_with("README.md"));
    let readme = fs::read_to_string(tmp.path().join("docs/README.md")).unwrap();
    assert!(!readme.trim().is_empty());

    let report = fs::read_to_string(&progress).unwrap();
    assert!(report.contains("- Getting started..."));
    assert!(report.contains("- I think you mean this folder: ./docs"));
    assert!(report.contains("- Summarizing file 1 of 2: api.md"));
    assert!(report.trim_end().ends_with("- README generated!"));
}

#[test]
fn existing_readme_fails_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    project(tmp.path());
    fs::write(tmp.path().join("docs/README.md"), "hand written").unwrap();
    let progress = tmp.path().join("progress.md");

    let out = agent()
        .arg("--root")
        .arg(tmp.path())
        .args(["--folder", "docs", "--backend", "extractive"])
        .arg("--progress-file")
        .arg(&progress)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("already has a README.md"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("docs/README.md")).unwrap(),
        "hand written"
    );
    assert!(fs::read_to_string(&progress)
        .unwrap()
        .contains("💥💥 ERROR: Error generating README"));
}

#[test]
fn missing_request_and_folder_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let out = agent()
        .arg("--root")
        .arg(tmp.path())
        .args(["--backend", "extractive"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid config"));
}

#[cfg(unix)]
#[test]
fn command_backend_resolves_folder_from_request() {
    let tmp = tempfile::tempdir().unwrap();
    project(tmp.path());
    let script = r#"p=$(cat)
case "$p" in
  *"referring to the folder"*) echo "docs" ;;
  "Generate a README.md"*) printf '\n# docs\n\n' ;;
  *) echo "A documentation file." ;;
esac"#;

    let out = agent()
        .arg("--root")
        .arg(tmp.path())
        .args(["--request", "Can you document the docs folder?"])
        .args(["--backend", "command", "--command-path", "sh"])
        .args(["--command-arg", "-c", "--command-arg", script])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(tmp.path().join("docs/README.md")).unwrap(),
        "# docs"
    );
    assert!(!tmp.path().join("src/README.md").exists());
}
