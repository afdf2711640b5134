//! Tests for the command-line tool

use std::process::Command;

fn camblock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_camblock"))
}

#[test]
fn writes_factory_block() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eeprom.bin");

    let status = camblock().arg(&path).status().unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 256);
    assert_eq!(&bytes[..8], &[0x59, 0x31, 0x36, 0x20, 0x02, 0x80, 0x01, 0xE0]);
    assert!(bytes[8..].iter().all(|&b| b == 0xFF));
}

#[test]
fn custom_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eeprom.bin");

    let status = camblock()
        .arg(&path)
        .args(["--fourcc", "YUY2", "--width", "1280", "--height", "720"])
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &[b'Y', b'U', b'Y', b'2', 0x05, 0x00, 0x02, 0xD0]);
}

#[test]
fn missing_path_fails() {
    let output = camblock().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn bad_fourcc_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eeprom.bin");

    let output = camblock()
        .arg(&path)
        .args(["--fourcc", "Y16"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!path.exists());
}

#[test]
fn unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("eeprom.bin");

    let output = camblock().arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"));
}
