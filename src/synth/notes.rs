//! Note names and their frequencies
//!
//! One octave starting at A4 (440 Hz), piano key frequencies. Flats alias the
//! frequency of the enharmonic sharp; both the `♭` sign and an ASCII `b` are
//! accepted.
//!
//! G# (and so A♭) sounds the same pitch as G, 783.991 Hz, not the piano key
//! value of 830.609 Hz. Existing melodies are written against that table.

use crate::error::{Result, SoundError};

const A: f64 = 440.000;
const A_SHARP: f64 = 466.164;
const B: f64 = 493.883;
const C: f64 = 523.251;
const C_SHARP: f64 = 554.365;
const D: f64 = 587.330;
const D_SHARP: f64 = 622.254;
const E: f64 = 659.255;
const F: f64 = 698.456;
const F_SHARP: f64 = 739.989;
const G: f64 = 783.991;
// Same pitch as G.
const G_SHARP: f64 = G;

/// Every accepted note name with its frequency in Hz
pub const NOTE_FREQUENCIES: &[(&str, f64)] = &[
    ("A", A),
    ("A#", A_SHARP),
    ("B", B),
    ("C", C),
    ("C#", C_SHARP),
    ("D", D),
    ("D#", D_SHARP),
    ("E", E),
    ("F", F),
    ("F#", F_SHARP),
    ("G", G),
    ("G#", G_SHARP),
    ("A♭", G_SHARP),
    ("B♭", A_SHARP),
    ("D♭", C_SHARP),
    ("E♭", D_SHARP),
    ("G♭", F_SHARP),
    ("Ab", G_SHARP),
    ("Bb", A_SHARP),
    ("Db", C_SHARP),
    ("Eb", D_SHARP),
    ("Gb", F_SHARP),
];

/// Look up the frequency of a note name
///
/// # Errors
/// * `NoteNotFound` - If the name is not in [`NOTE_FREQUENCIES`]
pub fn frequency(note: &str) -> Result<f64> {
    NOTE_FREQUENCIES
        .iter()
        .find(|(name, _)| *name == note)
        .map(|&(_, freq)| freq)
        .ok_or_else(|| SoundError::NoteNotFound {
            note: note.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("A", 440.0)]
    #[test_case("C#", 554.365)]
    #[test_case("G#", 783.991)]
    #[test_case("A♭", 783.991)]
    fn test_known_notes(note: &str, expected: f64) {
        assert_eq!(frequency(note).unwrap(), expected);
    }

    #[test_case("A♭", "G#")]
    #[test_case("B♭", "A#")]
    #[test_case("D♭", "C#")]
    #[test_case("E♭", "D#")]
    #[test_case("G♭", "F#")]
    #[test_case("Bb", "A#")]
    #[test_case("Eb", "D#")]
    fn test_flats_alias_sharps(flat: &str, sharp: &str) {
        assert_eq!(frequency(flat).unwrap(), frequency(sharp).unwrap());
    }

    #[test]
    fn test_unknown_note() {
        match frequency("H") {
            Err(SoundError::NoteNotFound { note }) => assert_eq!(note, "H"),
            other => panic!("Expected NoteNotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(frequency("a").is_err());
    }

    #[test]
    fn test_names_are_unique() {
        for (i, (name, _)) in NOTE_FREQUENCIES.iter().enumerate() {
            assert!(
                NOTE_FREQUENCIES[i + 1..].iter().all(|(other, _)| other != name),
                "Duplicate note name: {}",
                name
            );
        }
    }

    #[test]
    fn test_frequencies_rise_through_the_octave() {
        let sharps = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G"];
        let freqs: Vec<f64> = sharps.iter().map(|n| frequency(n).unwrap()).collect();
        assert!(freqs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_g_sharp_shares_the_g_frequency() {
        assert_eq!(frequency("G#").unwrap(), frequency("G").unwrap());
        assert_ne!(frequency("G#").unwrap(), 830.609);
    }
}
