//! Tone and melody synthesis

pub mod notes;
pub mod tone;

pub use notes::{frequency, NOTE_FREQUENCIES};
pub use tone::{make_melody, pure_tone, twinkle, twinkle_notes, DEFAULT_NOTE_DURATION};
