//! WAV-to-MP3 transcoding through an external ffmpeg binary.
//!
//! ffmpeg is optional: when it is not on the PATH the caller degrades to
//! WAV-only output. A transcoding failure for one file never aborts the
//! batch; the WAV intermediate is kept instead.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};

/// MP3 bitrate passed to ffmpeg.
pub const MP3_BITRATE: &str = "128k";

/// Locates an ffmpeg binary on the PATH.
pub fn find_ffmpeg() -> Option<PathBuf> {
    which::which("ffmpeg").ok()
}

/// Transcodes a WAV file to MP3 with ffmpeg.
///
/// Runs `ffmpeg -v error -y -i <wav> -b:a 128k <mp3>`. On a non-zero exit
/// the captured stderr becomes the error message.
pub fn transcode_to_mp3(ffmpeg: &Path, wav_path: &Path, mp3_path: &Path) -> Result<()> {
    let output = Command::new(ffmpeg)
        .arg("-v")
        .arg("error")
        .arg("-y")
        .arg("-i")
        .arg(wav_path)
        .arg("-b:a")
        .arg(MP3_BITRATE)
        .arg(mp3_path)
        .output()
        .with_context(|| format!("failed to execute {}", ffmpeg.display()))?;

    if !output.status.success() {
        return Err(anyhow!(
            "ffmpeg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(())
}

/// Parses the ffmpeg version from `ffmpeg -version` output.
///
/// The first line looks like `ffmpeg version 6.1.1 Copyright ...`.
pub fn parse_ffmpeg_version(output: &str) -> Option<String> {
    output
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("ffmpeg version "))
        .and_then(|rest| rest.split_whitespace().next())
        .map(|v| v.to_string())
}

/// Queries the version of an ffmpeg binary.
pub fn ffmpeg_version(ffmpeg: &Path) -> Option<String> {
    let output = Command::new(ffmpeg).arg("-version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_ffmpeg_version(&String::from_utf8_lossy(&output.stdout))
}
