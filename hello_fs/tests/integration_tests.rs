//! Integration tests for the hello filesystem
//!
//! These tests validate:
//! - Listing through the native fill ABI
//! - Resuming a listing after a full reply buffer
//! - Config-driven file name and contents
//! - The demo binary's output

use dir_listing::{collect_entry, CollectingFiller, FillOutcome};
use fill_abi::{EntryKind, RawFiller};
use hello_fs::{HelloConfig, HelloFs, FILE_INO, HELLO_CONFIG_NAME, ROOT_INO};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_native_readdir_lists_root() {
    let fs = HelloFs::new(HelloConfig::default()).unwrap();
    let mut collector = CollectingFiller::new();
    let buffer = collector.as_buffer();
    let mut filler = unsafe { RawFiller::new(collect_entry) };

    let outcome = fs.readdir(ROOT_INO, 0, &mut filler, buffer).unwrap();

    assert!(outcome.is_complete());
    let entries = collector.into_entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].kind, Some(EntryKind::Directory));
    assert_eq!(entries[2].name, "hello_from_rust");
    assert_eq!(entries[2].kind, Some(EntryKind::RegularFile));
    assert_eq!(entries[2].offset, 3);
}

#[test]
fn test_readdir_resumes_after_full_buffer() {
    let fs = HelloFs::new(HelloConfig::default()).unwrap();

    let mut first = CollectingFiller::bounded(2);
    let buffer = first.as_buffer();
    let mut filler = unsafe { RawFiller::new(collect_entry) };
    let outcome = fs.readdir(ROOT_INO, 0, &mut filler, buffer).unwrap();

    let resume = match outcome {
        FillOutcome::BufferFull { resume_offset, .. } => resume_offset,
        other => panic!("expected a full buffer, got {:?}", other),
    };
    assert_eq!(resume, 2);

    let mut second = CollectingFiller::new();
    let buffer = second.as_buffer();
    fs.readdir(ROOT_INO, resume, &mut filler, buffer).unwrap();

    assert_eq!(second.entries().len(), 1);
    assert_eq!(second.entries()[0].name, "hello_from_rust");
}

#[test]
fn test_lookup_open_read_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(HELLO_CONFIG_NAME),
        r#"{ "file_name": "motd", "contents": "be excellent\n", "attr_timeout_secs": 5.0 }"#,
    )
    .unwrap();

    let config = HelloConfig::load_from_dir(dir.path()).unwrap();
    let hello = HelloFs::new(config).unwrap();

    let reply = hello.lookup(ROOT_INO, "motd").unwrap();
    assert_eq!(reply.ino, FILE_INO);
    assert_eq!(reply.attr_timeout, 5.0);
    assert_eq!(reply.metadata.size, 13);

    let handle = hello.open(reply.ino, libc::O_RDONLY).unwrap();
    assert_eq!(handle.fh, 0);
    assert_eq!(hello.read(reply.ino, 4, 3).unwrap(), b"exce");
}

#[test]
fn test_binary_lists_from_offset() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello_fs"))
        .args(["--offset", "1"])
        .output()
        .expect("failed to run hello_fs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "2\t..\n3\thello_from_rust\n");
}

#[test]
fn test_binary_reports_resume_offset() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello_fs"))
        .args(["--capacity", "1"])
        .output()
        .expect("failed to run hello_fs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "1\t.\nresume at 1\n");
}

#[test]
fn test_binary_uses_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(HELLO_CONFIG_NAME);
    fs::write(&path, r#"{ "file_name": "greeting" }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hello_fs"))
        .arg("--config")
        .arg(&path)
        .output()
        .expect("failed to run hello_fs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("3\tgreeting\n"));
}

#[test]
fn test_binary_rejects_unknown_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello_fs"))
        .arg("--bogus")
        .output()
        .expect("failed to run hello_fs");

    assert!(!output.status.success());
}
