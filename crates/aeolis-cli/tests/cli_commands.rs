use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aeolis-utils"))
        .args(args)
        .output()
        .expect("aeolis-utils should run")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn read_json(path: &Path) -> Value {
    let source = fs::read_to_string(path).expect("response should exist");
    serde_json::from_str(&source).expect("response should be valid JSON")
}

fn as_f64_rows(value: &Value) -> Vec<Vec<f64>> {
    value
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| {
            row.as_array()
                .expect("row array")
                .iter()
                .map(|entry| entry.as_f64().expect("numeric entry"))
                .collect()
        })
        .collect()
}

#[test]
fn interp_command_writes_one_row_per_series() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    let response_path = temp.path().join("out/response.json");
    write_file(
        &request_path,
        r#"
        {
          "x": [0.5, 1.5],
          "xp": [0.0, 1.0, 2.0],
          "fp": [[0.0, 10.0], [1.0, 20.0], [2.0, 30.0]]
        }
        "#,
    );

    let output = run_cli(&[
        "interp",
        "--input",
        request_path.to_str().expect("utf-8 path"),
        "--output",
        response_path.to_str().expect("utf-8 path"),
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let response = read_json(&response_path);
    assert_eq!(
        as_f64_rows(&response["series"]),
        vec![vec![0.5, 1.5], vec![15.0, 25.0]]
    );
}

#[test]
fn interp_command_forwards_boundary_fills() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    let response_path = temp.path().join("response.json");
    write_file(
        &request_path,
        r#"{ "x": [-1.0, 3.0], "xp": [0.0, 2.0], "fp": [[4.0], [8.0]], "left": -1.0, "right": 99.0 }"#,
    );

    let output = run_cli(&[
        "interp",
        "--input",
        request_path.to_str().expect("utf-8 path"),
        "--output",
        response_path.to_str().expect("utf-8 path"),
    ]);

    assert!(output.status.success());
    let response = read_json(&response_path);
    assert_eq!(as_f64_rows(&response["series"]), vec![vec![-1.0, 99.0]]);
}

#[test]
fn normalize_command_prints_to_stdout_when_no_output_is_given() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    write_file(
        &request_path,
        r#"{ "shape": [2, 2], "data": [2.0, 0.0, 2.0, 0.0] }"#,
    );

    let output = run_cli(&[
        "normalize",
        "--input",
        request_path.to_str().expect("utf-8 path"),
        "--fill",
        "-1",
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let response: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(response["shape"], serde_json::json!([2, 2]));
    assert_eq!(response["data"], serde_json::json!([0.5, -1.0, 0.5, -1.0]));
}

#[test]
fn normalize_command_accepts_explicit_reference_and_axis() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    let response_path = temp.path().join("response.json");
    write_file(
        &request_path,
        r#"
        {
          "shape": [2, 2],
          "data": [4.0, 6.0, 1.0, 3.0],
          "reference": { "shape": [2, 1], "data": [10.0, 0.0] }
        }
        "#,
    );

    let output = run_cli(&[
        "normalize",
        "--input",
        request_path.to_str().expect("utf-8 path"),
        "--output",
        response_path.to_str().expect("utf-8 path"),
        "--axis",
        "1",
    ]);

    assert!(output.status.success());
    let response = read_json(&response_path);
    assert_eq!(response["data"], serde_json::json!([0.4, 0.6, 0.0, 0.0]));
}

#[test]
fn shape_mismatch_exits_with_input_validation_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    write_file(
        &request_path,
        r#"{ "x": [0.5], "xp": [0.0, 1.0, 2.0], "fp": [[0.0], [1.0]] }"#,
    );

    let output = run_cli(&[
        "interp",
        "--input",
        request_path.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.INTERP_LENGTH_MISMATCH]"));
    assert!(stderr.contains("FATAL EXIT CODE: 2"));
}

#[test]
fn missing_request_file_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("absent.json");

    let output = run_cli(&[
        "normalize",
        "--input",
        request_path.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [IO.CLI] failed to read request"));
}

#[test]
fn unknown_subcommand_is_a_usage_error_and_help_succeeds() {
    let output = run_cli(&["smooth"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("INPUT.CLI_USAGE"));

    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("interp"));
    assert!(stdout.contains("normalize"));
}

#[test]
fn normalize_command_accepts_negative_axis() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    write_file(
        &request_path,
        r#"{ "shape": [2, 2], "data": [1.0, 3.0, 0.0, 0.0] }"#,
    );

    let output = run_cli(&[
        "normalize",
        "--input",
        request_path.to_str().expect("utf-8 path"),
        "--axis",
        "-1",
        "--fill",
        "0.5",
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let response: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(response["data"], serde_json::json!([0.25, 0.75, 0.5, 0.5]));
}

#[test]
fn oversized_shape_exits_with_input_validation_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let request_path = temp.path().join("request.json");
    write_file(
        &request_path,
        r#"{ "shape": [4294967296, 4294967296, 4294967296], "data": [1.0] }"#,
    );

    let output = run_cli(&[
        "normalize",
        "--input",
        request_path.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.CLI_SHAPE]"));
    assert!(stderr.contains("too many elements"));
}
