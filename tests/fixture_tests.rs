//! Fixture-driven rewrite tests.
//!
//! Each case under `tests/fixtures/strip/<case>/` provides:
//! - `input.tsx`    file copied to a temp directory and rewritten
//! - `expected.tsx` expected content after the run
//! - `case.toml`    optional extra command-line arguments

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

#[derive(Debug, Default, Deserialize)]
struct Case {
    #[serde(default)]
    args: Vec<String>,
}

#[test]
fn test_strip_fixtures() {
    let root = Path::new("tests").join("fixtures").join("strip");
    assert!(root.exists(), "Fixture root missing: {}", root.display());

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No fixture cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case_name = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let case_path = case_dir.join("case.toml");
    let case: Case = if case_path.exists() {
        let content = fs::read_to_string(&case_path).unwrap();
        toml::from_str(&content).unwrap_or_else(|e| {
            panic!(
                "Case '{}' has invalid TOML in {}: {}",
                case_name,
                case_path.display(),
                e
            )
        })
    } else {
        Case::default()
    };

    let temp = tempfile::TempDir::new().unwrap();
    let target = temp.path().join("input.tsx");
    fs::copy(case_dir.join("input.tsx"), &target).unwrap();
    let expected = normalize_newlines(&fs::read_to_string(case_dir.join("expected.tsx")).unwrap());

    // Twice: the second run must not change anything.
    for run in 1..=2 {
        let output = run_tagstrip(temp.path(), &case.args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            output.status.success(),
            "Case '{}', run #{} failed.\nstdout:\n{}\nstderr:\n{}",
            case_name,
            run,
            stdout,
            stderr
        );
        assert!(
            stdout.contains("Fixed input.tsx"),
            "Case '{}', run #{} missing confirmation.\nstdout:\n{}",
            case_name,
            run,
            stdout
        );

        let actual = normalize_newlines(&fs::read_to_string(&target).unwrap());
        if actual != expected {
            panic!(
                "Case '{}', run #{} content mismatch.\n{}",
                case_name,
                run,
                first_text_diff(&expected, &actual)
            );
        }
    }
}

fn run_tagstrip(cwd: &Path, args: &[String]) -> Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_tagstrip"));
    cmd.current_dir(cwd)
        .env_remove("TAGSTRIP_TAG")
        .args(args)
        .arg("input.tsx");

    cmd.output().unwrap_or_else(|e| {
        panic!(
            "Failed to execute tagstrip in {} with args {:?}: {}",
            cwd.display(),
            args,
            e
        )
    })
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

fn first_text_diff(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let min_len = expected_lines.len().min(actual_lines.len());

    for i in 0..min_len {
        if expected_lines[i] != actual_lines[i] {
            return format!(
                "First difference at line {}.\nexpected: {:?}\nactual:   {:?}",
                i + 1,
                expected_lines[i],
                actual_lines[i]
            );
        }
    }

    if expected_lines.len() != actual_lines.len() {
        return format!(
            "Line count differs.\nexpected: {} lines\nactual:   {} lines",
            expected_lines.len(),
            actual_lines.len()
        );
    }

    "Content differs only in trailing whitespace or newlines.".to_string()
}
