use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const ELLIPSE: &str = "\\left(\\frac{x-1}{2}\\right)^{2}+\\left(\\frac{y-3}{4}\\right)^{2}=1";

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "svg2expressions-cli-{}-{}.svg",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svg2expressions"))
        .args(args)
        .output()
        .unwrap()
}

fn run_fixture(name: &str, contents: &str) -> Output {
    let path = write_fixture(name, contents);
    let output = run(&[path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();
    output
}

#[test]
fn prints_expressions() {
    let output = run_fixture(
        "ok",
        r#"<svg><ellipse cx="1" cy="3" rx="2" ry="4"/><path d="M 0,0 L 1,1"/></svg>"#,
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n\\left([0.0,0.0],[1.0,1.0]\\right)\n", ELLIPSE)
    );
}

#[test]
fn help() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("USAGE"));
}

#[test]
fn missing_argument() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("USAGE"));
}

#[test]
fn missing_file() {
    let output = run(&["/nonexistent/svg2expressions/drawing.svg"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn malformed_xml() {
    let output = run_fixture(
        "malformed",
        r#"<svg><ellipse cx="1" cy="3" rx="2" ry="4"/><path d="M 0 0"></svg>"#,
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_path_keeps_earlier_output() {
    let output = run_fixture(
        "bad-path",
        r#"
        <svg>
            <ellipse cx="1" cy="3" rx="2" ry="4"/>
            <path d="M 0 0 L foo"/>
            <ellipse cx="1" cy="3" rx="2" ry="4"/>
        </svg>
        "#,
    );
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", ELLIPSE)
    );
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("SVG path parse error"));
}
