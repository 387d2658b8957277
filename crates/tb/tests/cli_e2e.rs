//! CLI-focused end-to-end tests driving the `tb` binary.
//!
//! These tests validate realistic user workflows: scanning a directory of
//! markdown files, rendering a configured board, toggling a task line, and
//! managing configuration. They are intentionally scenario-driven (few
//! tests, multi-step flows) and run entirely against a sandbox directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

struct CliContext {
    sandbox: TempDir,
    config_path: PathBuf,
}

impl CliContext {
    fn new() -> Self {
        let sandbox = TempDir::new().expect("failed to create temporary sandbox");
        let config_path = sandbox.path().join("tb-config.toml");
        Self {
            sandbox,
            config_path,
        }
    }

    fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.sandbox.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(&path, content).expect("failed to write sandbox file");
        path
    }

    fn run_allow_failure(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tb"));
        cmd.args(args);
        // Keep the run hermetic: config resolution must never reach the real
        // home directory.
        cmd.env("TB_CONFIG", &self.config_path);
        cmd.env("XDG_CONFIG_HOME", self.sandbox.path().join("xdg-config"));
        cmd.output().expect("failed to spawn tb")
    }

    fn run(&self, args: &[&str]) -> Output {
        let output = self.run_allow_failure(args);
        if output.status.success() {
            return output;
        }
        panic!(
            "tb command failed\nargs: {:?}\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout).unwrap_or_else(|err| {
            panic!(
                "command did not emit valid JSON\nargs: {:?}\nerror: {}\nstdout:\n{}",
                args, err, stdout
            )
        })
    }

    fn path_arg(&self, path: &PathBuf) -> String {
        path.to_string_lossy().into_owned()
    }
}

#[test]
fn test_scan_workflow() {
    let ctx = CliContext::new();
    ctx.write_file(
        "notes/todo.md",
        "- [ ] Write report #in/wip 📅 2024-03-15\n\
         \x20 - [x] Outline\n\
         \x20 - [ ] Draft\n\
         - [x] File expenses ✅ 2024-03-01\n\
         - [ ] Water plants #home\n",
    );
    ctx.write_file("notes/skip.txt", "- [ ] not markdown\n");
    let dir = ctx.path_arg(&ctx.sandbox.path().join("notes"));

    // Open tasks, full document order.
    let tasks = ctx.run_json(&["--json", "scan", &dir]);
    let tasks = tasks.as_array().expect("scan output is a JSON array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["text"], "Write report");
    assert_eq!(tasks[0]["lineNumber"], 1);
    assert_eq!(tasks[0]["dueDate"], "2024-03-15");
    assert_eq!(tasks[0]["subtasks"].as_array().unwrap().len(), 2);
    assert_eq!(tasks[1]["text"], "Water plants");

    // Completed side of the split.
    let done = ctx.run_json(&["--json", "scan", &dir, "--completed"]);
    assert_eq!(done.as_array().unwrap().len(), 1);
    assert_eq!(done[0]["completedDate"], "2024-03-01");

    // A filter narrows the list; a bare include tag gets its # prefix.
    let wip = ctx.run_json(&["--json", "scan", &dir, "--filter", "#in/wip AND NOT #blocked"]);
    assert_eq!(wip.as_array().unwrap().len(), 1);
    assert_eq!(wip[0]["text"], "Write report");

    let home = ctx.run_json(&["--json", "scan", &dir, "--include-tag", "home"]);
    assert_eq!(home.as_array().unwrap().len(), 1);
    assert_eq!(home[0]["text"], "Water plants");

    // Malformed filters warn and fall back to matching everything.
    let output = ctx.run(&["--json", "scan", &dir, "--filter", "(#in/wip"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"), "expected warning, got: {stderr}");
    let all: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[test]
fn test_board_workflow() {
    let ctx = CliContext::new();
    fs::write(
        &ctx.config_path,
        r##"
version = 1

[[boards]]
id = "work"
name = "Work"
filter = { type = "tag", value = "#for/work" }
hideFilterTags = ["#for/work"]

[[boards.columns]]
id = "wip"
name = "WIP"
type = "filtered"
filter = { type = "tag", value = "#in/wip" }

[[boards.columns]]
id = "done"
name = "Done"
type = "completed"
filter = { type = "or", children = [] }
"##,
    )
    .unwrap();
    ctx.write_file(
        "tasks.md",
        "- [ ] Ship the release #for/work #in/wip\n\
         - [x] Cut the branch #for/work\n\
         - [ ] Personal errand #home\n",
    );
    let file = ctx.path_arg(&ctx.sandbox.path().join("tasks.md"));

    let board = ctx.run_json(&["--json", "board", &file, "--board", "work"]);
    assert_eq!(board["name"], "Work");
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0]["tasks"][0]["text"], "Ship the release");
    assert_eq!(columns[1]["tasks"][0]["text"], "Cut the branch");

    // Table rendering carries counts and hides the board filter tag.
    let output = ctx.run(&["--no-color", "board", &file, "--board", "Work"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WIP (1)"));
    assert!(stdout.contains("#in/wip"));
    assert!(!stdout.contains("#for/work"));

    // A close miss suggests the configured name and exits with NOT_FOUND.
    let output = ctx.run_allow_failure(&["board", &file, "--board", "Wrok"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Did you mean 'Work'?"), "stderr: {stderr}");

    // Boards listing shows the configured board.
    let output = ctx.run(&["--no-color", "boards"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("work"));
    assert!(stdout.contains("filter: #for/work"));
}

#[test]
fn test_done_round_trip() {
    let ctx = CliContext::new();
    let path = ctx.write_file("todo.md", "- [ ] first\n- [ ] second\n");
    let file = ctx.path_arg(&path);

    let output = ctx.run(&["done", &file, "2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("- [x] second ✅ "), "stdout: {stdout}");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("- [ ] first"));
    assert!(content.contains("- [x] second ✅ "));

    // Toggling again removes the stamp it added.
    ctx.run(&["done", &file, "2"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "- [ ] first\n- [ ] second\n");

    let output = ctx.run_allow_failure(&["done", &file, "9"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_filter_diagnostics() {
    let ctx = CliContext::new();

    let tree = ctx.run_json(&["--json", "filter", "#a AND NOT #b"]);
    assert_eq!(tree["type"], "and");
    assert_eq!(tree["children"][0]["value"], "#a");
    assert_eq!(tree["children"][1]["type"], "not");

    let output = ctx.run(&["filter", "#a AND NOT #b"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Expression: #a AND NOT #b"));

    // Without --check a malformed query degrades to match-all.
    let fallback = ctx.run_json(&["--json", "filter", "(#a OR"]);
    assert_eq!(fallback["type"], "or");
    assert_eq!(fallback["children"].as_array().unwrap().len(), 0);

    // With --check it is an error.
    let output = ctx.run_allow_failure(&["filter", "(#a OR", "--check"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unmatched opening parenthesis"), "stderr: {stderr}");
}

#[test]
fn test_config_workflow() {
    let ctx = CliContext::new();

    // Before init the resolved config is the built-in default.
    let config = ctx.run_json(&["--json", "config", "show"]);
    assert_eq!(config["version"], 1);
    assert_eq!(config["boards"].as_array().unwrap().len(), 0);

    let output = ctx.run(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), ctx.config_path.to_string_lossy());

    ctx.run(&["config", "init"]);
    assert!(ctx.config_path.exists());
    let content = fs::read_to_string(&ctx.config_path).unwrap();
    assert!(content.contains("version = 1"));

    // A second init refuses to overwrite.
    let output = ctx.run_allow_failure(&["config", "init"]);
    assert_eq!(output.status.code(), Some(5));
}
