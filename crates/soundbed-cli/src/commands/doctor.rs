//! Doctor command implementation
//!
//! Checks the environment soundbed runs in: ffmpeg availability for MP3
//! transcoding and output directory permissions.

use std::env;
use std::process::{Command, ExitCode};

use anyhow::Result;
use colored::Colorize;

use crate::transcode::{ffmpeg_version, find_ffmpeg};

/// Run the doctor command
///
/// Checks:
/// - soundbed and rustc versions
/// - ffmpeg installation (optional, needed for MP3 output)
/// - current directory write permissions
///
/// # Returns
/// Exit code: 0 if all hard checks pass, 1 otherwise. A missing ffmpeg is a
/// warning, not a failure.
pub fn run() -> Result<ExitCode> {
    println!("{}", "soundbed doctor".cyan().bold());
    println!("{}", "===============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} soundbed-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    match rustc_version() {
        Some(version) => println!("  {} rustc {}", "->".green(), version),
        None => println!("  {} rustc (not found)", "->".yellow()),
    }

    println!();

    println!("{}", "Dependencies:".bold());
    match find_ffmpeg() {
        Some(path) => {
            let version = ffmpeg_version(&path).unwrap_or_else(|| "unknown".to_string());
            println!(
                "  {} ffmpeg {} ({})",
                "ok".green(),
                version,
                path.display()
            );
        }
        None => {
            println!("  {} ffmpeg not found in PATH", "!!".yellow());
            println!(
                "     {}",
                "ffmpeg is only needed for MP3 output; WAV generation works without it.".dimmed()
            );
        }
    }

    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let test_file = dir.join(".soundbed_write_test");
            match std::fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = std::fs::remove_file(&test_file);
                    println!(
                        "  {} current directory is writable ({})",
                        "ok".green(),
                        dir.display()
                    );
                }
                Err(e) => {
                    println!("  {} cannot write to current directory: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} cannot determine current directory: {}", "!!".red(), e);
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", "Some checks failed".red().bold());
        Ok(ExitCode::from(1))
    }
}

fn parse_rustc_version(output: &str) -> Option<String> {
    // Parse "rustc 1.75.0 (...)"
    output.split_whitespace().nth(1).map(|s| s.to_string())
}

fn rustc_version() -> Option<String> {
    let output = Command::new("rustc").arg("--version").output().ok()?;
    if output.status.success() {
        parse_rustc_version(&String::from_utf8_lossy(&output.stdout))
    } else {
        None
    }
}
