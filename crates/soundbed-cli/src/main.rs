//! soundbed - placeholder ambient sound generator
//!
//! This binary batch-generates synthetic ambient sound files (rain, ocean,
//! wind, ...) as mono 16-bit WAV, optionally transcoded to MP3 when ffmpeg
//! is available.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use soundbed_cli::commands;
use soundbed_cli::commands::generate::{GenerateOptions, OutputFormat};

/// soundbed - Placeholder Ambient Sound Generator
#[derive(Parser)]
#[command(name = "soundbed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the ambient sound files
    Generate {
        /// Output directory for the generated files
        #[arg(short, long, default_value = "assets/audio")]
        out_dir: PathBuf,

        /// Duration of each sound in seconds
        #[arg(short, long, default_value_t = 10.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Base seed for the noise streams
        #[arg(long, default_value_t = 42)]
        seed: u32,

        /// Output container (mp3 falls back to wav without ffmpeg)
        #[arg(long, value_enum, default_value = "mp3")]
        format: OutputFormat,

        /// Keep the WAV intermediate after a successful transcode
        #[arg(long)]
        keep_wav: bool,

        /// Sound names to generate (default: the built-in ambient set)
        sounds: Vec<String>,
    },

    /// Check ffmpeg availability and environment
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            duration,
            sample_rate,
            seed,
            format,
            keep_wav,
            sounds,
        } => commands::generate::run(&GenerateOptions {
            out_dir,
            duration_seconds: duration,
            sample_rate,
            seed,
            format,
            keep_wav,
            sounds,
        }),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
