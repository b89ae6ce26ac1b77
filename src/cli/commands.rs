//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use log::info;
use rand::RngCore;
use serde_json::json;

use crate::cli::Options;
use crate::dsp::{self, TransformChain};
use crate::engine::{self, Sound};
use crate::error::Result;
use crate::synth;

/// Synthesize a pure tone and save it.
pub fn tone(freq: f64, duration: f64, output: &Path, options: Options) -> Result<()> {
    info!("Generating {} Hz tone for {}s", freq, duration);
    write(&synth::pure_tone(freq, duration), output, options)
}

/// Synthesize a melody and save it.
pub fn melody(notes: &[String], duration: f64, output: &Path, options: Options) -> Result<()> {
    info!("Generating melody of {} notes", notes.len());
    let sound = synth::make_melody(notes, duration)?;
    write(&sound, output, options)
}

/// Synthesize the twinkle example and save it.
pub fn twinkle(output: &Path, options: Options) -> Result<()> {
    write(&synth::twinkle()?, output, options)
}

/// Scale the volume of a file.
pub fn volume(input: &Path, output: &Path, factor: f64, options: Options) -> Result<()> {
    transform(input, output, options, |s| Ok(dsp::volume(s, factor)))
}

/// Reverse a file.
pub fn reverse(input: &Path, output: &Path, options: Options) -> Result<()> {
    transform(input, output, options, |s| Ok(dsp::reverse(s)))
}

/// Swap the halves of a file.
pub fn flipflop(input: &Path, output: &Path, options: Options) -> Result<()> {
    transform(input, output, options, |s| Ok(dsp::flipflop(s)))
}

/// Add static to a file.
pub fn static_noise(
    input: &Path,
    output: &Path,
    probability: f64,
    options: Options,
) -> Result<()> {
    let mut rng = make_rng(options.seed);
    transform(input, output, options, |s| {
        Ok(dsp::static_noise_with_rng(s, probability, rng.as_mut()))
    })
}

/// Add an echo to a file.
pub fn echo(input: &Path, output: &Path, delay: f64, options: Options) -> Result<()> {
    transform(input, output, options, |s| Ok(dsp::echo(s, delay)))
}

/// Relabel the sample rate of a file.
pub fn speed(input: &Path, output: &Path, rate: u32, options: Options) -> Result<()> {
    transform(input, output, options, |s| Ok(dsp::change_speed(s, rate)))
}

/// Mix several files into one.
pub fn overlay<P: AsRef<Path>>(inputs: &[P], output: &Path, options: Options) -> Result<()> {
    let sounds = inputs
        .iter()
        .map(|p| engine::load(p.as_ref()))
        .collect::<Result<Vec<Sound>>>()?;

    let mixed = dsp::overlay(&sounds)?;
    write(&mixed, output, options)
}

/// Apply a JSON chain file to a sound file.
pub fn chain(input: &Path, output: &Path, chain_path: &Path, options: Options) -> Result<()> {
    let chain = TransformChain::from_json(&fs::read_to_string(chain_path)?)?;
    info!(
        "Loaded chain of {} transforms from {}",
        chain.len(),
        chain_path.display()
    );

    let mut rng = make_rng(options.seed);
    transform(input, output, options, |s| {
        Ok(chain.apply_with_rng(s, rng.as_mut()))
    })
}

/// Print a JSON summary of a sound file.
pub fn info(input: &Path) -> Result<()> {
    let sound = engine::load(input)?;
    println!("{}", serde_json::to_string_pretty(&summary(input, &sound))?);
    Ok(())
}

/// JSON summary of a sound
pub fn summary(path: &Path, sound: &Sound) -> serde_json::Value {
    json!({
        "path": path.display().to_string(),
        "rate": sound.rate(),
        "samples": sound.len(),
        "duration_secs": sound.duration_secs(),
        "peak": sound.peak(),
        "rms": sound.rms(),
    })
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn transform<F>(input: &Path, output: &Path, options: Options, modifier: F) -> Result<()>
where
    F: FnOnce(&Sound) -> Result<Sound>,
{
    engine::modify_file(input, modifier, output, options.format)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn write(sound: &Sound, output: &Path, options: Options) -> Result<()> {
    engine::save(sound, output, options.format)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(dsp::seeded_rng(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
