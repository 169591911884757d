//! Integration tests for prodexport CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const PRODUCTS: &str = r#"[
    {"id": 7, "description": "Widget", "brand": "Acme", "model": "W-1", "stock": 3},
    {"id": 8, "description": null, "brand": "Globex", "model": "G-2", "stock": 0}
]"#;

fn cargo_run(args: &[&str]) -> Command {
    let mut cmd_args = vec!["run", "-q", "-p", "prodexport", "--"];
    cmd_args.extend(args);

    let mut cmd = Command::new("cargo");
    cmd.args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..");
    cmd
}

fn run_prodexport(args: &[&str]) -> (String, String, bool) {
    let output = cargo_run(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_with_stdin(args: &[&str], input: &str) -> (String, String, bool) {
    let mut child = cargo_run(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    if let Some(mut stdin) = child.stdin.take() {
        // The process may exit before reading (e.g. on a bad --format).
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for command");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_prodexport(&["--help"]);

    assert!(success);
    assert!(stdout.contains("prodexport"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--column"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_prodexport(&["--version"]);

    assert!(success);
    assert!(stdout.contains("prodexport"));
}

#[test]
fn test_list_formats() {
    let (stdout, _, success) = run_prodexport(&["--list-formats"]);

    assert!(success);
    assert!(stdout.contains("markdown"));
    assert!(stdout.contains("html"));
}

#[test]
fn test_markdown_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("products.json");
    fs::write(&input, PRODUCTS).unwrap();

    let (stdout, _, success) = run_prodexport(&[input.to_str().unwrap()]);

    assert!(success);
    assert_eq!(
        stdout,
        "|ID|Description|Stock\n\n|---------|---------|---------\n|7|Widget|3\n|8||0\n\n"
    );
}

#[test]
fn test_extra_columns() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("products.json");
    fs::write(&input, PRODUCTS).unwrap();

    let (stdout, _, success) =
        run_prodexport(&[input.to_str().unwrap(), "--column", "brand,model"]);

    assert!(success);
    assert!(stdout.starts_with("|ID|Description|Stock|Brand|Model\n"));
    assert!(stdout.contains("|7|Widget|3|Acme|W-1\n"));
}

#[test]
fn test_html_from_stdin() {
    let (stdout, _, success) = run_with_stdin(&["--format", "html"], PRODUCTS);

    assert!(success);
    assert!(stdout.starts_with("<table>\n"));
    assert!(stdout.contains("<td>Widget</td>"));
    assert!(stdout.ends_with("</table>\n"));
}

#[test]
fn test_output_file_picks_format_from_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("products.json");
    let output = dir.path().join("products.html");
    fs::write(&input, PRODUCTS).unwrap();

    let (stdout, _, success) = run_prodexport(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.is_empty());
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("<td>ID</td>"));
}

#[test]
fn test_unknown_format() {
    let (_, stderr, success) = run_with_stdin(&["--format", "pdf"], PRODUCTS);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("pdf"));
}

#[test]
fn test_invalid_input_file() {
    let (_, stderr, success) = run_prodexport(&["/nonexistent/products.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_malformed_json() {
    let (_, stderr, success) = run_with_stdin(&[], "{not json");

    assert!(!success);
    assert!(stderr.contains("failed to parse products"));
}
