//! Sound transformations
//!
//! Every function here borrows its input and returns a new `Sound`. The
//! sample rate is carried over unchanged unless the transformation says
//! otherwise.

use log::debug;
use rand::Rng;

use crate::dsp::ops::{add_and_scale, replace_some_with_rng, scale};
use crate::engine::Sound;
use crate::error::{Result, SoundError};

/// Mix sounds with equal weight
///
/// Each sound is scaled by `1/N` and the results are summed. The mix is as
/// long as the shortest input and takes the rate of the first one.
///
/// # Errors
/// * `EmptyOverlay` - If `sounds` is empty
pub fn overlay(sounds: &[Sound]) -> Result<Sound> {
    let first = sounds.first().ok_or(SoundError::EmptyOverlay)?;

    let lists: Vec<&[f64]> = sounds.iter().map(Sound::samples).collect();
    let mixed = mix_equally(&lists, first.rate());

    debug!(
        "Overlaid {} sounds into {} samples at {} Hz",
        sounds.len(),
        mixed.len(),
        mixed.rate()
    );
    Ok(mixed)
}

/// Relabel the playback rate without resampling
pub fn change_speed(sound: &Sound, new_rate: u32) -> Sound {
    Sound::new(sound.samples().to_vec(), new_rate)
}

/// Swap the two halves of a sound
///
/// The split point is `len / 2`, so for odd lengths the first half is one
/// sample shorter than the second.
pub fn flipflop(sound: &Sound) -> Sound {
    let samples = sound.samples();
    let mid = samples.len() / 2;

    let mut swapped = Vec::with_capacity(samples.len());
    swapped.extend_from_slice(&samples[mid..]);
    swapped.extend_from_slice(&samples[..mid]);

    Sound::new(swapped, sound.rate())
}

/// Play a sound backwards
pub fn reverse(sound: &Sound) -> Sound {
    Sound::new(sound.samples().iter().rev().copied().collect(), sound.rate())
}

/// Scale every sample by `factor`
///
/// Negative factors invert the phase. No clamping is applied.
pub fn volume(sound: &Sound, factor: f64) -> Sound {
    Sound::new(scale(sound.samples(), factor), sound.rate())
}

/// Replace samples with random static using the thread-local generator
pub fn static_noise(sound: &Sound, probability: f64) -> Sound {
    static_noise_with_rng(sound, probability, &mut rand::thread_rng())
}

/// Replace each sample with probability `probability` by a random value
pub fn static_noise_with_rng<R: Rng + ?Sized>(
    sound: &Sound,
    probability: f64,
    rng: &mut R,
) -> Sound {
    Sound::new(
        replace_some_with_rng(sound.samples(), probability, rng),
        sound.rate(),
    )
}

/// Mix a sound with a copy of itself delayed by `delay_secs`
///
/// The delayed copy is the original prefixed with `floor(rate * delay_secs)`
/// zeros. Because [`overlay`] truncates to the shortest input, the result
/// has the original's length and the tail of the delayed copy is dropped.
pub fn echo(sound: &Sound, delay_secs: f64) -> Sound {
    let num_silent = (sound.rate() as f64 * delay_secs).floor() as usize;
    // Padding past the original's length is always truncated away.
    let num_silent = num_silent.min(sound.len());

    let mut padded = vec![0.0; num_silent];
    padded.extend_from_slice(sound.samples());

    debug!("Echo with {} silent samples of delay", num_silent);
    mix_equally(&[sound.samples(), &padded[..]], sound.rate())
}

/// Shared body of [`overlay`]: `lists` must be non-empty
fn mix_equally(lists: &[&[f64]], rate: u32) -> Sound {
    let weight = 1.0 / lists.len() as f64;
    let factors = vec![weight; lists.len()];
    Sound::new(add_and_scale(lists, &factors), rate)
}
