//! Soundlab - Sounds as Lists of Numbers
//!
//! A small toolkit for manipulating digitized sound. A [`Sound`] is a single
//! channel of samples plus a sample rate; every transformation takes a sound
//! and returns a new one, so operations compose freely.
//!
//! # Architecture
//!
//! - `dsp`: numeric list helpers, sound transformations, transformation chains
//! - `synth`: pure tones and melodies built from note names
//! - `engine`: the `Sound` type and WAV file I/O
//! - `cli`: command-line driver

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod synth;

pub use engine::Sound;
pub use error::{Result, SoundError};
