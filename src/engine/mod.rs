//! Sound Engine Module
//!
//! The `Sound` value type and the WAV file adapter that produces and
//! consumes it.

pub mod io;
pub mod sound;

pub use io::{load, modify_file, save, ExportFormat};
pub use sound::{Sound, MAX_AMPLITUDE, MIN_AMPLITUDE, TONE_SAMPLE_RATE};
