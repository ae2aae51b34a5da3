//! Cross-process determinism: the `search_fixture` binary prints the same
//! report as the in-process fixtures, whatever the working directory and
//! environment.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");
    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} in {work_dir}: {e}"));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn binary_matches_in_process_report() {
    let expected: String = lock_tests::fixture_lines()
        .unwrap()
        .into_iter()
        .map(|line| line + "\n")
        .collect();
    assert_eq!(run_variant(&workspace_root(), &[]), expected);
}

#[test]
fn report_ignores_cwd_and_environment() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("puzzle_astar_digest=sha256:"));
    assert!(baseline.contains("queens_min_conflicts=Some("));

    let tmp = std::env::temp_dir();
    assert_eq!(baseline, run_variant(&tmp.to_string_lossy(), &[]), "cwd changed");
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("RUST_LOG", "trace"), ("TZ", "America/New_York")]),
        "noise env changed"
    );
}
