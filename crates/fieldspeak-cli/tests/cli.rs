//! Integration tests for the fieldspeak binary.

use assert_cmd::Command;
use std::io::Write;

fn fieldspeak() -> Command {
    let mut cmd = Command::cargo_bin("fieldspeak").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FIELDSPEAK_PRETTY")
        .env_remove("FIELDSPEAK_ENV")
        .env_remove("FIELDSPEAK_LOG");
    cmd
}

fn stdout_json(output: std::process::Output) -> serde_json::Value {
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn split_prints_one_phrase_per_line() {
    let output = fieldspeak()
        .args(["split", "OldPassword", "VisitorID", "Artist[0]"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Old password\nVisitor id\nArtist [ 0 ]\n"
    );
}

#[cfg(unix)]
#[test]
fn split_echoes_non_utf8_argument() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = [0x4f, 0x6c, 0x64, 0xff, 0x50];
    let output = fieldspeak()
        .arg("split")
        .arg(OsStr::from_bytes(&raw))
        .arg("VisitorID")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(output.stdout, b"Old\xffP\nVisitor id\n".to_vec());
}

#[test]
fn split_requires_an_identifier() {
    fieldspeak().arg("split").assert().failure();
}

#[test]
fn render_reads_json_lines_from_stdin() {
    let input = r#"{"field": "Make", "tag": "required"}
{"field": "Password", "tag": "nefield", "param": "OldPassword"}
{"field": "X", "tag": "bogus_tag"}
"#;

    let output = fieldspeak()
        .arg("render")
        .write_stdin(input)
        .output()
        .unwrap();

    assert_eq!(
        stdout_json(output),
        serde_json::json!({
            "Make": "Make is required",
            "Password": "Password must not be the same as Old password",
            "X": "X is not valid"
        })
    );
}

#[test]
fn render_reads_array_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"field": "Artist", "tag": "gte", "param": "1", "kind": "sequence"}}]"#
    )
    .unwrap();

    let output = fieldspeak()
        .args(["render", "--pretty", "--input"])
        .arg(file.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.contains("\n  \"Artist\""));
    assert_eq!(
        stdout_json(output),
        serde_json::json!({"Artist": "Artist must contain at least 1 entry"})
    );
}

#[test]
fn render_rejects_bad_descriptor() {
    fieldspeak()
        .arg("render")
        .write_stdin("{\"field\": \"Make\"}\n")
        .assert()
        .failure();
}

#[test]
fn render_rejects_bad_config() {
    fieldspeak()
        .env("FIELDSPEAK_PRETTY", "maybe")
        .arg("render")
        .write_stdin("")
        .assert()
        .failure();
}
