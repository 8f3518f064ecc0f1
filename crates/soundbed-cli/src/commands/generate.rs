//! Generate command implementation
//!
//! Batch-generates the placeholder ambient sound files into an output
//! directory, transcoding each WAV to MP3 when ffmpeg is available.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use soundbed_synth::{generate, GenerateParams};

use crate::transcode::{find_ffmpeg, transcode_to_mp3};

/// Ambient sounds produced when no names are given on the command line.
pub const DEFAULT_SOUNDS: &[&str] = &[
    "rain.mp3",
    "ocean.mp3",
    "wind.mp3",
    "thunder.mp3",
    "forest.mp3",
    "cafe.mp3",
    "city.mp3",
    "fire.mp3",
    "birds.mp3",
];

/// Output container for generated sounds.
///
/// MP3 still needs an ffmpeg binary on the PATH; without one the run
/// degrades to WAV with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Transcode each WAV to MP3 when ffmpeg is available.
    Mp3,
    /// Uncompressed WAV only, no transcoding.
    Wav,
}

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the sound files are written into.
    pub out_dir: PathBuf,
    /// Length of each sound in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Base seed for the per-sound noise streams.
    pub seed: u32,
    /// Requested output container.
    pub format: OutputFormat,
    /// Keep the WAV intermediate after a successful transcode.
    pub keep_wav: bool,
    /// Sound names to generate; empty means [`DEFAULT_SOUNDS`].
    pub sounds: Vec<String>,
}

/// Run the generate command
///
/// Creates the output directory, then per sound: synthesizes the waveform,
/// writes the WAV, and transcodes to MP3 when requested and possible. A
/// failed transcode keeps the WAV, prints a warning, and moves on to the
/// next sound. Filesystem errors abort the batch.
///
/// # Returns
/// Exit code: 0 on success (transcode warnings included), propagated error
/// on fatal failures
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();

    let sounds: Vec<&str> = if options.sounds.is_empty() {
        DEFAULT_SOUNDS.to_vec()
    } else {
        options.sounds.iter().map(|s| s.as_str()).collect()
    };

    let params = GenerateParams {
        duration_seconds: options.duration_seconds,
        sample_rate: options.sample_rate,
        seed: options.seed,
    };

    println!(
        "{} {}",
        "Generating into:".cyan().bold(),
        options.out_dir.display()
    );
    println!(
        "{} {}s @ {} Hz, seed {}",
        "Parameters:".dimmed(),
        params.duration_seconds,
        params.sample_rate,
        params.seed
    );

    // Resolve ffmpeg once; a missing binary downgrades the whole run.
    let wants_mp3 =
        options.format == OutputFormat::Mp3 && sounds.iter().any(|s| s.ends_with(".mp3"));
    let ffmpeg = if wants_mp3 { find_ffmpeg() } else { None };
    if wants_mp3 && ffmpeg.is_none() {
        println!(
            "  {} ffmpeg not found in PATH, creating WAV files only",
            "!".yellow()
        );
    }

    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            options.out_dir.display()
        )
    })?;

    let mut created = 0usize;
    let mut transcode_warnings = 0usize;

    for &name in &sounds {
        let result = generate(name, &params)
            .with_context(|| format!("failed to synthesize {}", name))?;

        let wav_name = match name.strip_suffix(".mp3") {
            Some(stem) => format!("{}.wav", stem),
            None => name.to_string(),
        };
        let wav_path = options.out_dir.join(&wav_name);
        fs::write(&wav_path, &result.wav.wav_data)
            .with_context(|| format!("failed to write {}", wav_path.display()))?;

        let mut written = wav_name.clone();
        if name.ends_with(".mp3") {
            if let Some(ffmpeg) = &ffmpeg {
                let mp3_path = options.out_dir.join(name);
                match transcode_to_mp3(ffmpeg, &wav_path, &mp3_path) {
                    Ok(()) => {
                        if !options.keep_wav {
                            fs::remove_file(&wav_path).with_context(|| {
                                format!("failed to remove {}", wav_path.display())
                            })?;
                        }
                        written = name.to_string();
                    }
                    Err(e) => {
                        // Keep the WAV and carry on with the remaining sounds.
                        transcode_warnings += 1;
                        println!(
                            "  {} could not transcode {}: {}",
                            "!".yellow(),
                            wav_name,
                            e
                        );
                    }
                }
            }
        }

        created += 1;
        println!(
            "  {} {} ({}, {} samples)",
            "ok".green(),
            written,
            result.category,
            result.wav.num_samples
        );
    }

    println!();
    let elapsed = start.elapsed().as_secs_f64();
    if transcode_warnings > 0 {
        println!(
            "{} {} file(s) in {:.2}s, {} kept as WAV after transcode failures",
            "Created".green().bold(),
            created,
            elapsed,
            transcode_warnings.to_string().yellow()
        );
    } else {
        println!(
            "{} {} file(s) in {:.2}s",
            "Created".green().bold(),
            created,
            elapsed
        );
    }

    Ok(ExitCode::SUCCESS)
}
