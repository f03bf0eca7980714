//! End-to-end tests for the muxpeek binary.
//!
//! These run the compiled binary against whatever tmux (if any) is on the
//! host, using session names that cannot exist, so they hold with or without
//! a running tmux server.

use std::process::Command;

fn muxpeek() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_muxpeek"));
    // Keep host configuration out of the picture.
    cmd.env("MUXPEEK_CONFIG", "/nonexistent/muxpeek/preview.yaml")
        .env_remove("RUST_LOG");
    cmd
}

fn unlikely_session() -> String {
    format!("muxpeek-e2e-{}-missing", std::process::id())
}

#[test]
fn missing_session_prints_placeholder_and_exits_zero() {
    let session = unlikely_session();
    let output = muxpeek()
        .args(["preview", &session])
        .env("FZF_PREVIEW_COLUMNS", "60")
        .env("FZF_PREVIEW_LINES", "20")
        .output()
        .expect("failed to launch muxpeek binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("  New session: {}\n", session));
}

#[test]
fn garbled_fzf_size_still_renders() {
    let session = unlikely_session();
    let output = muxpeek()
        .args(["preview", &session])
        .env("FZF_PREVIEW_COLUMNS", "")
        .env("FZF_PREVIEW_LINES", "lots")
        .output()
        .expect("failed to launch muxpeek binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("  New session: {}\n", session));
}

#[test]
fn missing_session_has_no_windows() {
    let output = muxpeek()
        .args(["windows", &unlikely_session(), "--json"])
        .output()
        .expect("failed to launch muxpeek binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn unknown_subcommand_fails() {
    let output = muxpeek()
        .arg("frobnicate")
        .output()
        .expect("failed to launch muxpeek binary");
    assert!(!output.status.success());
}
