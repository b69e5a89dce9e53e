//! End-to-end tests driving the `oxihuff` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn oxihuff(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oxihuff"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run oxihuff")
}

#[test]
fn test_compress_then_decompress() {
    let dir = TempDir::new().unwrap();
    let text = b"Peter Piper picked a peck of pickled peppers.\n".repeat(20);
    std::fs::write(dir.path().join("peter.txt"), &text).unwrap();

    let out = oxihuff(dir.path(), &["compress", "peter.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("peterCompressed.txt"));
    assert!(stdout.contains("peterCodes.txt"));

    let compressed = std::fs::read(dir.path().join("peterCompressed.txt")).unwrap();
    assert!(compressed.len() < text.len());

    let out = oxihuff(dir.path(), &["decompress", "peterCompressed.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::read(dir.path().join("peterDecompressed.txt")).unwrap(), text);
}

#[test]
fn test_show_codes_single_symbol() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), vec![b'A'; 1000]).unwrap();

    let out = oxihuff(dir.path(), &["compress", "a.txt", "--show-codes"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("'A'  0"));
    assert_eq!(std::fs::read(dir.path().join("aCompressed.txt")).unwrap().len(), 125);
}

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("aab.txt"), b"aab").unwrap();
    assert!(oxihuff(dir.path(), &["compress", "aab.txt"]).status.success());

    let out = oxihuff(dir.path(), &["info", "aabCompressed.txt", "--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"alphabet_size\": 2"));
    assert!(stdout.contains("\"original_size\": 3"));
    assert!(stdout.contains("\"compressed_size\": 1"));
}

#[test]
fn test_portable_byte_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("p.txt"), b"portable").unwrap();

    let out = oxihuff(dir.path(), &["--byte-order", "big", "compress", "p.txt"]);
    assert!(out.status.success());
    let table = std::fs::read(dir.path().join("pCodes.txt")).unwrap();
    assert_eq!(&table[..8], &[0, 0, 0, 8, 0, 0, 0, 8]);

    let out = oxihuff(dir.path(), &["decompress", "pCompressed.txt", "--byte-order", "big"]);
    assert!(out.status.success());
    assert_eq!(std::fs::read(dir.path().join("pDecompressed.txt")).unwrap(), b"portable");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = oxihuff(dir.path(), &["compress", "nothing.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: Not found: nothing.txt"));
}

#[test]
fn test_test_command_reports_failures() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ok.txt"), b"round and round it goes").unwrap();
    assert!(oxihuff(dir.path(), &["compress", "ok.txt"]).status.success());

    let out = oxihuff(dir.path(), &["test", "okCompressed.txt"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("All files OK"));

    std::fs::write(dir.path().join("okCompressed.txt"), b"").unwrap();
    let out = oxihuff(dir.path(), &["test", "okCompressed.txt"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stdout).contains("FAILED"));
}
