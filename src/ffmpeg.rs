use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Launch ffmpeg detached and return immediately.
///
/// The child gets null stdio and its handle is dropped, so the cut keeps
/// running after this process exits. Nothing observes the exit status; a
/// failed encode only shows up as a missing or truncated output file.
/// Only a launch failure (ffmpeg not installed) is reported.
pub fn launch(args: &[String]) -> Result<()> {
    Command::new("ffmpeg")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to launch ffmpeg (is it installed and on PATH?)")?;
    Ok(())
}
