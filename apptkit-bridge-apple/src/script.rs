//! Swift script execution.
//!
//! EventKit is only reachable from Swift/ObjC, so each bridge command runs
//! a short Swift program via `swift -`, passed on stdin to avoid shell
//! escaping issues. Scripts print their result as JSON on stdout, or a
//! line starting with `error:` for platform-level failures.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

pub fn run_swift_script(script: &str) -> Result<String> {
    let mut child = Command::new("swift")
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to run swift (is a Swift toolchain installed?)")?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(script.as_bytes())?;
    }

    let output = child.wait_with_output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "swift exited with status {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if let Some(message) = stdout.strip_prefix("error:") {
        bail!("{}", message.trim());
    }

    Ok(stdout)
}

/// Escape a string for embedding in a Swift string literal.
pub fn escape_swift_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
