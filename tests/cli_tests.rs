//! CLI integration tests for rvdis.

use std::process::{Command, Output};

fn run_rvdis(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rvdis"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute rvdis")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const SAMPLE: &str = "tests/fixtures/sample.hex";

#[test]
fn test_help() {
    let output = run_rvdis(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("ADDR_SPEC"));
    assert!(stdout.contains("--color"));
}

#[test]
fn test_whole_image() {
    let output = run_rvdis(&["--color", "never", SAMPLE]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\
00001000: 00000537  lui x10,0
00001004: 000080e7  jalr x1,x1,0
00001008: 00c50533  add x10,x10,x12
0000100c: 00000063  beq x0,x0,0
00001010: ffffffff  unknown 0xffffffff
00001100: ff010113  addi x2,x2,-16
00001104: 00112623  sw x1,12(x2)
00001108: 40315093  srai x1,x2,1027
0000110c: 00003003  l? x0,0(x0)
"
    );
}

#[test]
fn test_selected_addresses_deduplicated() {
    let output = run_rvdis(&["--color", "never", SAMPLE, "1100+2", "0x1000", "1100..1108", "2000"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\
00001100: ff010113  addi x2,x2,-16
00001104: 00112623  sw x1,12(x2)
00001000: 00000537  lui x10,0
00002000: 00000000  unknown 0x00000000
"
    );
}

#[test]
fn test_piped_output_is_plain() {
    let output = run_rvdis(&[SAMPLE, "1000"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "00001000: 00000537  lui x10,0\n");
}

#[test]
fn test_bad_address_spec() {
    let output = run_rvdis(&[SAMPLE, "1000", "zzz"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid address 'zzz'"));
}

#[test]
fn test_missing_file() {
    let output = run_rvdis(&["tests/fixtures/missing.hex"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_malformed_dump() {
    let path = std::env::temp_dir().join(format!("rvdis-cli-{}.hex", std::process::id()));
    std::fs::write(&path, "@1000\n13 05\nq0 00\n").unwrap();
    let output = run_rvdis(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3: invalid byte 'q0'"));
    assert!(stderr.contains(">>>    3: q0 00"));
}

#[test]
fn test_oversized_range_is_rejected() {
    let output = run_rvdis(&[SAMPLE, "0..ffffffff"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("more than the limit of 65536"));
}
