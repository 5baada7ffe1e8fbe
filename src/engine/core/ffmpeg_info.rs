use anyhow::{Context, Result};
use std::process::Command;

/// Check the encoder is installed and return its version line
pub fn encoder_version(program: &str) -> Result<String> {
    let output = Command::new(program)
        .arg("-version")
        .output()
        .with_context(|| format!("Failed to execute {}. Is it installed and in PATH?", program))?;

    if !output.status.success() {
        anyhow::bail!("{} -version failed with status: {}", program, output.status);
    }

    Ok(parse_version_line(&String::from_utf8_lossy(&output.stdout)))
}

/// First line of `-version` output, e.g. `ffmpeg version 7.1 Copyright (c) ...`
pub fn parse_version_line(stdout: &str) -> String {
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or("Unknown version")
        .to_string()
}
