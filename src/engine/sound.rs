//! The Sound value type
//!
//! A `Sound` is a single channel of samples paired with the rate they were
//! recorded (or synthesized) at. Samples live on the 16-bit amplitude scale,
//! so a full-scale sine peaks at 32767.0. Nothing in this crate clamps sample
//! values; only the WAV writer does, at the file boundary.
//!
//! Sounds are never mutated in place. Every transformation borrows its input
//! and returns a freshly allocated `Sound`.

use serde::{Deserialize, Serialize};

/// Sample rate used by the tone generator (CD quality)
pub const TONE_SAMPLE_RATE: u32 = 44100;

/// Largest value a 16-bit sample can hold
pub const MAX_AMPLITUDE: f64 = 32767.0;

/// Smallest value a 16-bit sample can hold
pub const MIN_AMPLITUDE: f64 = -32768.0;

/// One channel of digitized audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    samples: Vec<f64>,
    rate: u32,
}

impl Sound {
    /// Create a sound from its samples and sample rate
    pub fn new(samples: Vec<f64>, rate: u32) -> Self {
        Self { samples, rate }
    }

    /// A sound with no samples
    pub fn empty(rate: u32) -> Self {
        Self::new(Vec::new(), rate)
    }

    /// The sample sequence, in time order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples per second
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the sound has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds at the sound's own rate
    pub fn duration_secs(&self) -> f64 {
        if self.rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.rate as f64
    }

    /// Split the sound into its samples and rate
    pub fn into_parts(self) -> (Vec<f64>, u32) {
        (self.samples, self.rate)
    }

    /// Largest absolute sample value. Returns 0.0 for empty sounds.
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
    }

    /// Root mean square of the samples. Returns 0.0 for empty sounds.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_squares: f64 = self.samples.iter().map(|s| s * s).sum();
        (sum_squares / self.samples.len() as f64).sqrt()
    }

    /// Check whether any sample lies outside the 16-bit range
    pub fn exceeds_16bit_range(&self) -> bool {
        self.samples
            .iter()
            .any(|&s| !(MIN_AMPLITUDE..=MAX_AMPLITUDE).contains(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sound_accessors() {
        let sound = Sound::new(vec![1.0, -2.0, 3.0, -4.0], 4);
        assert_eq!(sound.len(), 4);
        assert_eq!(sound.rate(), 4);
        assert!(!sound.is_empty());
        assert_relative_eq!(sound.duration_secs(), 1.0);
        assert_eq!(sound.samples(), &[1.0, -2.0, 3.0, -4.0]);
    }

    #[test]
    fn test_empty_sound_statistics() {
        let sound = Sound::empty(44100);
        assert!(sound.is_empty());
        assert_eq!(sound.peak(), 0.0);
        assert_eq!(sound.rms(), 0.0);
        assert_eq!(sound.duration_secs(), 0.0);
    }

    #[test]
    fn test_zero_rate_duration() {
        let sound = Sound::new(vec![1.0, 2.0], 0);
        assert_eq!(sound.duration_secs(), 0.0);
    }

    #[test]
    fn test_peak_and_rms() {
        let sound = Sound::new(vec![3.0, -4.0, 3.0, -4.0], 8000);
        assert_relative_eq!(sound.peak(), 4.0);
        assert_relative_eq!(sound.rms(), 12.5_f64.sqrt());
    }

    #[test]
    fn test_exceeds_16bit_range() {
        assert!(!Sound::new(vec![MAX_AMPLITUDE, MIN_AMPLITUDE], 1).exceeds_16bit_range());
        assert!(Sound::new(vec![40000.0], 1).exceeds_16bit_range());
        assert!(Sound::new(vec![-40000.0], 1).exceeds_16bit_range());
    }

    #[test]
    fn test_into_parts() {
        let (samples, rate) = Sound::new(vec![0.5], 22050).into_parts();
        assert_eq!(samples, vec![0.5]);
        assert_eq!(rate, 22050);
    }

    #[test]
    fn test_json_shape() {
        let sound = Sound::new(vec![1.0, 2.0], 2);
        let json = serde_json::to_value(&sound).unwrap();
        assert_eq!(json["rate"], 2);
        assert_eq!(json["samples"][1], 2.0);

        let back: Sound = serde_json::from_value(json).unwrap();
        assert_eq!(back, sound);
    }
}
