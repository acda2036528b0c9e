//! Build orchestration with a scripted build tool.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use spa_bridge::build::{build_all, BuildError, BuildTarget, BuildTool};

const SHELL: &str = "<head><link href=\"/static/css/main.css\"></head><div id=\"root\"></div>";
const PROCESSED: &str = "<div id=\"root\"></div><link href=\"/static/css/main.css\">";

/// A fake package manager invoked as `sh <script> build --prefix <dir>`.
fn write_tool(dir: &Path) -> BuildTool {
    let script = dir.join("fake-npm.sh");
    fs::write(
        &script,
        r#"
case "$3" in
  *warns*) echo "compiling $3"; echo "Module not found: ./missing" >&2 ;;
  *exits*) echo "compiling $3"; exit 3 ;;
  *) echo "compiled $3" ;;
esac
"#,
    )
    .unwrap();
    BuildTool::custom("sh", [script.display().to_string()])
}

fn app(root: &Path, name: &str) -> BuildTarget {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("build")).unwrap();
    fs::write(dir.join("build/index.html"), SHELL).unwrap();
    BuildTarget {
        name: name.to_string(),
        dir,
    }
}

fn index(target: &BuildTarget) -> PathBuf {
    target.dir.join("build/index.html")
}

#[tokio::test]
async fn test_stderr_fails_run_but_siblings_finish() {
    let root = tempfile::tempdir().unwrap();
    let tool = write_tool(root.path());
    let targets = vec![
        app(root.path(), "one"),
        app(root.path(), "warns"),
        app(root.path(), "three"),
    ];

    let report = build_all(&tool, targets.clone()).await;

    assert_eq!(report.exit_code(), 1);
    let names: Vec<_> = report.outcomes.iter().map(|o| o.app.as_str()).collect();
    assert_eq!(names, ["one", "warns", "three"]);

    assert!(report.outcomes[0].result.is_ok());
    assert!(report.outcomes[2].result.is_ok());
    match &report.outcomes[1].result {
        Err(BuildError::ToolFailed { stdout, stderr, .. }) => {
            assert!(stdout.contains("compiling"));
            assert!(stderr.contains("Module not found"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(fs::read_to_string(index(&targets[0])).unwrap(), PROCESSED);
    assert_eq!(fs::read_to_string(index(&targets[2])).unwrap(), PROCESSED);
    // the failed app is left untouched
    assert_eq!(fs::read_to_string(index(&targets[1])).unwrap(), SHELL);
}

#[tokio::test]
async fn test_nonzero_exit_fails() {
    let root = tempfile::tempdir().unwrap();
    let tool = write_tool(root.path());

    let report = build_all(&tool, vec![app(root.path(), "exits")]).await;

    assert_eq!(report.exit_code(), 1);
    assert!(matches!(
        report.outcomes[0].result,
        Err(BuildError::ToolFailed { status: Some(3), .. })
    ));
}

#[tokio::test]
async fn test_missing_index_fails_post_processing() {
    let root = tempfile::tempdir().unwrap();
    let tool = write_tool(root.path());
    let target = BuildTarget {
        name: "bare".into(),
        dir: root.path().join("bare"),
    };
    fs::create_dir_all(&target.dir).unwrap();

    let report = build_all(&tool, vec![target]).await;

    assert!(matches!(
        report.outcomes[0].result,
        Err(BuildError::PostProcess { .. })
    ));
}

#[tokio::test]
async fn test_missing_tool_is_spawn_error() {
    let root = tempfile::tempdir().unwrap();
    let tool = BuildTool::custom("/nonexistent/npm", ["run"]);

    let report = build_all(&tool, vec![app(root.path(), "one")]).await;

    assert!(matches!(
        report.outcomes[0].result,
        Err(BuildError::Spawn { .. })
    ));
    assert!(!report.succeeded());
}

#[tokio::test]
async fn test_all_succeed() {
    let root = tempfile::tempdir().unwrap();
    let tool = write_tool(root.path());

    let report = build_all(&tool, vec![app(root.path(), "one"), app(root.path(), "two")]).await;

    assert!(report.succeeded());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.failures().count(), 0);
}
