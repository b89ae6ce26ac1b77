//! CLI Module
//!
//! Command-line driver for the Soundlab toolkit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::ExportFormat;

/// Soundlab - play with sounds as lists of numbers
#[derive(Parser, Debug)]
#[command(name = "soundlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write 32-bit float WAV files instead of 16-bit PCM
    #[arg(long, global = true)]
    pub float: bool,

    /// Seed for reproducible static
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings shared by every command
    pub fn options(&self) -> Options {
        Options {
            format: if self.float {
                ExportFormat::float32()
            } else {
                ExportFormat::pcm16()
            },
            seed: self.seed,
        }
    }
}

/// Settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Output WAV format
    pub format: ExportFormat,
    /// Seed for randomized transformations
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize a pure sine tone
    #[command(name = "tone")]
    Tone {
        /// Frequency in Hz
        #[arg(short, long)]
        freq: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Synthesize a melody from note names (A, C#, B♭, ...)
    #[command(name = "melody")]
    Melody {
        /// Note names, played in order
        #[arg(required = true)]
        notes: Vec<String>,

        /// Duration of each note in seconds
        #[arg(short, long, default_value_t = crate::synth::DEFAULT_NOTE_DURATION)]
        duration: f64,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Synthesize "Twinkle, Twinkle, Little Star"
    #[command(name = "twinkle")]
    Twinkle {
        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Scale the volume of a sound
    #[command(name = "volume")]
    Volume {
        input: PathBuf,
        output: PathBuf,

        /// Scale factor (negative inverts the phase)
        #[arg(short, long, allow_hyphen_values = true)]
        factor: f64,
    },

    /// Play a sound backwards
    #[command(name = "reverse")]
    Reverse { input: PathBuf, output: PathBuf },

    /// Swap the two halves of a sound
    #[command(name = "flipflop")]
    Flipflop { input: PathBuf, output: PathBuf },

    /// Replace random samples with static
    #[command(name = "static")]
    Static {
        input: PathBuf,
        output: PathBuf,

        /// Chance of replacing each sample (0 to 1)
        #[arg(short, long)]
        probability: f64,
    },

    /// Add an echo
    #[command(name = "echo")]
    Echo {
        input: PathBuf,
        output: PathBuf,

        /// Delay of the echo in seconds
        #[arg(short, long)]
        delay: f64,
    },

    /// Relabel the sample rate without resampling
    #[command(name = "speed")]
    Speed {
        input: PathBuf,
        output: PathBuf,

        /// New sample rate in Hz
        #[arg(short, long)]
        rate: u32,
    },

    /// Mix several sounds with equal weight
    #[command(name = "overlay")]
    Overlay {
        /// Input WAV files (the first one sets the sample rate)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Apply a JSON transformation chain
    #[command(name = "chain")]
    Chain {
        input: PathBuf,
        output: PathBuf,

        /// JSON file describing the chain
        #[arg(short, long)]
        chain: PathBuf,
    },

    /// Print a JSON summary of a WAV file
    #[command(name = "info")]
    Info { input: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_volume_with_negative_factor() {
        let cli = Cli::try_parse_from([
            "soundlab", "volume", "in.wav", "out.wav", "--factor", "-0.5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Volume { factor, .. }) => assert_eq!(factor, -0.5),
            other => panic!("Expected volume command, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "soundlab", "static", "in.wav", "out.wav", "-p", "0.1", "--seed", "7", "--float",
        ])
        .unwrap();

        let options = cli.options();
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.format, ExportFormat::float32());
    }

    #[test]
    fn test_parse_melody() {
        let cli = Cli::try_parse_from(["soundlab", "melody", "A", "C#", "E", "-o", "m.wav"]).unwrap();

        match cli.command {
            Some(Commands::Melody {
                notes, duration, ..
            }) => {
                assert_eq!(notes, vec!["A", "C#", "E"]);
                assert_eq!(duration, crate::synth::DEFAULT_NOTE_DURATION);
            }
            other => panic!("Expected melody command, got: {:?}", other),
        }
    }

    #[test]
    fn test_overlay_requires_inputs() {
        assert!(Cli::try_parse_from(["soundlab", "overlay", "-o", "out.wav"]).is_err());
    }
}
