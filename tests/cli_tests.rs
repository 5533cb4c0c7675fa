// tests/cli_tests.rs
//! End-to-end runs of the `grand` binary
#![cfg(feature = "cli")]

use std::process::{Command, Output};

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use data_encoding::{BASE32, BASE32HEX, BASE32HEX_NOPAD, BASE32_NOPAD};

fn grand(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grand"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run grand")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.ends_with('\n'), "stdout does not end with a newline");
    text.lines().map(str::to_owned).collect()
}

fn decode(encoding: &str, text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    match encoding {
        "hex" => hex::decode(text).unwrap(),
        "b64s" => STANDARD.decode(text).unwrap(),
        "b64sr" => STANDARD_NO_PAD.decode(text).unwrap(),
        "b64u" => URL_SAFE.decode(text).unwrap(),
        "b64ur" => URL_SAFE_NO_PAD.decode(text).unwrap(),
        "b32s" => BASE32.decode(bytes).unwrap(),
        "b32sr" => BASE32_NOPAD.decode(bytes).unwrap(),
        "b32h" => BASE32HEX.decode(bytes).unwrap(),
        "b32hr" => BASE32HEX_NOPAD.decode(bytes).unwrap(),
        other => panic!("no decoder for {other}"),
    }
}

fn assert_usage_error(args: &[&str]) -> String {
    let output = grand(args);
    assert_eq!(output.status.code(), Some(2), "args {args:?}");
    assert!(output.stdout.is_empty(), "args {args:?} wrote to stdout");
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(stderr.contains("Usage"), "no usage text for {args:?}: {stderr}");
    stderr
}

#[test]
fn test_defaults_print_one_line_of_32_hex_chars() {
    let output = grand(&[]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 32);
    assert_eq!(decode("hex", &lines[0]).len(), 16);
}

#[test]
fn test_fixed_range_two_lines() {
    let output = grand(&["-e", "hex", "-s", "8-8", "-n", "2"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line.len(), 16);
        assert_eq!(decode("hex", line).len(), 8);
    }
}

#[test]
fn test_range_sizes_stay_in_bounds() {
    let output = grand(&["-e", "hex", "-s", "8-16", "-n", "40"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 40);
    for line in &lines {
        let size = decode("hex", line).len();
        assert!((8..=16).contains(&size), "size {size}");
    }
}

#[test]
fn test_every_encoding_decodes_to_sixteen_bytes() {
    for encoding in ["hex", "b64s", "b64sr", "b64u", "b64ur", "b32s", "b32sr", "b32h", "b32hr"] {
        let output = grand(&["-e", encoding, "-n", "1", "-s", "16"]);
        assert!(output.status.success(), "{encoding}");
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 1);
        assert_eq!(decode(encoding, &lines[0]).len(), 16, "{encoding}");
    }
}

#[test]
fn test_invalid_encoding() {
    let stderr = assert_usage_error(&["-e", "bogus"]);
    assert!(stderr.contains("encoding not found"), "{stderr}");
    assert_usage_error(&["-e", "x"]);
}

#[test]
fn test_invalid_count() {
    let stderr = assert_usage_error(&["-n", "0"]);
    assert!(stderr.contains("n must be greater than zero"), "{stderr}");
    assert_usage_error(&["-n", "x"]);
    assert_usage_error(&["-n", "-3"]);
}

#[test]
fn test_invalid_size() {
    let cases = [
        ("x", "parse error"),
        ("0", "size must be greater than zero"),
        ("x-1", "parse error"),
        ("1-x", "parse error"),
        ("0-1", "size min must be greater than zero"),
        ("2-1", "size max must not be less than size min"),
        ("-1", "parse error"),
        ("-5-3", "parse error"),
    ];
    for (size, message) in cases {
        let stderr = assert_usage_error(&["-s", size]);
        assert!(stderr.contains(message), "-s {size}: {stderr}");
    }
}

#[test]
fn test_help_lists_every_encoding() {
    let output = grand(&["--help"]);
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    for encoding in ["hex", "b64s", "b64sr", "b64u", "b64ur", "b32s", "b32sr", "b32h", "b32hr"] {
        assert!(help.contains(&format!("\"{encoding}\"")), "{encoding} missing");
    }
}

#[test]
fn test_size_error_names_the_flag_and_value() {
    let stderr = assert_usage_error(&["-s", "2-1"]);
    let expected = "invalid value \"2-1\" for flag -s: size max must not be less than size min";
    assert!(stderr.contains(expected), "{stderr}");
    let stderr = assert_usage_error(&["-s", "-1"]);
    assert!(stderr.contains("invalid value \"-1\" for flag -s: parse error"), "{stderr}");
}
