//! Tone and melody generation
//!
//! Tones are sine waves at full 16-bit amplitude, always sampled at
//! [`TONE_SAMPLE_RATE`]. Melodies are tones laid end to end.

use std::f64::consts::PI;

use log::debug;

use crate::engine::sound::{Sound, MAX_AMPLITUDE, TONE_SAMPLE_RATE};
use crate::error::Result;
use crate::synth::notes::frequency;

/// Default length of each note in a melody, in seconds
pub const DEFAULT_NOTE_DURATION: f64 = 0.5;

/// Generate a sine wave of `freq` Hz lasting `duration_secs`
///
/// Produces `floor(duration_secs * 44100)` samples; sample `i` is
/// `32767 * sin(2π * freq * i / 44100)`.
pub fn pure_tone(freq: f64, duration_secs: f64) -> Sound {
    let rate = TONE_SAMPLE_RATE as f64;
    let num_samples = (duration_secs * rate).floor() as usize;

    let samples = (0..num_samples)
        .map(|i| MAX_AMPLITUDE * (2.0 * PI * freq * i as f64 / rate).sin())
        .collect();

    Sound::new(samples, TONE_SAMPLE_RATE)
}

/// Play each named note for `duration_secs`, one after another
///
/// An empty note list yields an empty sound at the tone rate.
///
/// # Errors
/// * `NoteNotFound` - If any note name is unknown
pub fn make_melody<S: AsRef<str>>(notes: &[S], duration_secs: f64) -> Result<Sound> {
    let mut melody = Vec::new();

    for note in notes {
        let tone = pure_tone(frequency(note.as_ref())?, duration_secs);
        melody.extend_from_slice(tone.samples());
    }

    debug!("Built melody of {} notes, {} samples", notes.len(), melody.len());
    Ok(Sound::new(melody, TONE_SAMPLE_RATE))
}

/// Notes of "Twinkle, Twinkle, Little Star"
pub fn twinkle_notes() -> Vec<&'static str> {
    let part1 = [
        "A", "A", "E", "E", "F#", "F#", "E", "D", "D", "C#", "C#", "B", "B", "A",
    ];
    let part2 = ["E", "E", "D", "D", "C#", "C#", "B"];

    [&part1[..], &part2[..], &part2[..], &part1[..]].concat()
}

/// "Twinkle, Twinkle, Little Star" at the default note duration
pub fn twinkle() -> Result<Sound> {
    make_melody(&twinkle_notes(), DEFAULT_NOTE_DURATION)
}
