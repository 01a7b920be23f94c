use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
}

fn run(exe: &str, store_path: &Path, args: &[&str]) -> std::process::Output {
    Command::new(exe)
        .args(args)
        .env("TASKLIST_FILE", store_path)
        .output()
        .expect("failed to run command")
}

fn stdout_of(exe: &str, store_path: &Path, args: &[&str]) -> String {
    let output = run(exe, store_path, args);
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// Full workflow against one store file, in the order a user would run it.
#[test]
fn workflow_from_empty_store() {
    let exe = env!("CARGO_BIN_EXE_tasklist");
    let store_path = temp_path("cli-workflow.json");

    assert!(run(exe, &store_path, &["add", "test", "task", "number", "1"])
        .status
        .success());

    let mut child = Command::new(exe)
        .args(["add"])
        .env("TASKLIST_FILE", &store_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn add command");
    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(b"test task number 2\n")
        .expect("write to stdin");
    assert!(child.wait_with_output().expect("wait for add").status.success());

    assert_eq!(
        stdout_of(exe, &store_path, &["list"]),
        "  1: test task number 1\n  2: test task number 2\n"
    );

    assert!(run(exe, &store_path, &["add", "incomplete task"]).status.success());
    assert!(run(exe, &store_path, &["complete", "3"]).status.success());

    assert_eq!(
        stdout_of(exe, &store_path, &["incomplete"]),
        "  1: test task number 1\n  2: test task number 2\n"
    );
    assert_eq!(
        stdout_of(exe, &store_path, &["list"]),
        "  1: test task number 1\n  2: test task number 2\nX 3: incomplete task\n"
    );

    assert!(run(exe, &store_path, &["delete", "1"]).status.success());
    let rendered = stdout_of(exe, &store_path, &["list"]);
    std::fs::remove_file(&store_path).ok();

    assert_eq!(rendered, "  1: test task number 2\nX 2: incomplete task\n");
}
