//! Audio file I/O for Soundlab
//!
//! Reads and writes mono WAV files. Samples are kept on the 16-bit amplitude
//! scale in memory regardless of the bit depth on disk, so a sound loaded from
//! a 24-bit file and one loaded from a 16-bit file can be mixed directly.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{info, warn};

use crate::engine::sound::{Sound, MAX_AMPLITUDE, MIN_AMPLITUDE};
use crate::error::{Result, SoundError};

/// Divisor between the in-memory scale and 32-bit float samples on disk
const FLOAT_SCALE: f64 = 32768.0;

/// Export format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    /// Bit depth: 16 (integer PCM) or 32 (IEEE float). Default: 16
    pub bit_depth: u16,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::pcm16()
    }
}

impl ExportFormat {
    /// Create an export format with the given bit depth
    pub fn new(bit_depth: u16) -> Self {
        ExportFormat { bit_depth }
    }

    /// 16-bit integer PCM, the format most players expect
    pub fn pcm16() -> Self {
        ExportFormat { bit_depth: 16 }
    }

    /// 32-bit float, which stores out-of-range samples without clipping
    pub fn float32() -> Self {
        ExportFormat { bit_depth: 32 }
    }
}

/// Load a mono WAV file into a `Sound`
///
/// Integer samples of any supported width are rescaled onto the 16-bit range;
/// float samples are multiplied by 32768.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidAudio` - If the file is not a readable WAV file
/// * `UnsupportedFormat` - If the file uses a compressed encoding, has more
///   than one channel, or has an unsupported bit depth
pub fn load(path: &Path) -> Result<Sound> {
    if !path.exists() {
        return Err(SoundError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let reader = WavReader::open(path).map_err(|e| match e {
        hound::Error::Unsupported => SoundError::UnsupportedFormat {
            format: format!("WAV encoding of {}", path.display()),
        },
        other => SoundError::InvalidAudio {
            reason: format!("Failed to open WAV file: {}", other),
            source: Some(Box::new(other)),
        },
    })?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(SoundError::UnsupportedFormat {
            format: format!("{}-channel audio (only mono supported)", spec.channels),
        });
    }

    let samples = read_samples(reader, spec.bits_per_sample, spec.sample_format)?;
    info!(
        "Loaded {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );

    Ok(Sound::new(samples, spec.sample_rate))
}

/// Write a `Sound` to a mono WAV file
///
/// 16-bit output rounds each sample and clamps it to the i16 range. This is
/// the only place in the crate where amplitudes are clamped.
pub fn save(sound: &Sound, path: &Path, format: ExportFormat) -> Result<()> {
    let sample_format = match format.bit_depth {
        16 => SampleFormat::Int,
        32 => SampleFormat::Float,
        other => {
            return Err(SoundError::UnsupportedFormat {
                format: format!("{}-bit output (only 16 and 32 supported)", other),
            });
        }
    };

    let spec = WavSpec {
        channels: 1,
        sample_rate: sound.rate(),
        bits_per_sample: format.bit_depth,
        sample_format,
    };

    let mut writer = WavWriter::create(path, spec).map_err(SoundError::from_wav_write)?;

    match sample_format {
        SampleFormat::Int => {
            if sound.exceeds_16bit_range() {
                warn!(
                    "{} has samples outside the 16-bit range; they will be clipped",
                    path.display()
                );
            }
            for &sample in sound.samples() {
                let clamped = sample.round().clamp(MIN_AMPLITUDE, MAX_AMPLITUDE) as i16;
                writer
                    .write_sample(clamped)
                    .map_err(SoundError::from_wav_write)?;
            }
        }
        SampleFormat::Float => {
            for &sample in sound.samples() {
                writer
                    .write_sample((sample / FLOAT_SCALE) as f32)
                    .map_err(SoundError::from_wav_write)?;
            }
        }
    }

    writer.finalize().map_err(SoundError::from_wav_write)?;
    info!(
        "Saved {} samples at {} Hz to {}",
        sound.len(),
        sound.rate(),
        path.display()
    );

    Ok(())
}

/// Load a sound, transform it, and save the result
///
/// Returns the transformed sound so callers can inspect or reuse it.
pub fn modify_file<F>(input: &Path, modifier: F, output: &Path, format: ExportFormat) -> Result<Sound>
where
    F: FnOnce(&Sound) -> Result<Sound>,
{
    let sound = load(input)?;
    let modified = modifier(&sound)?;
    save(&modified, output, format)?;
    Ok(modified)
}

// ============================================================================
// Internal helper functions
// ============================================================================

/// Read samples from a WAV reader onto the 16-bit amplitude scale
fn read_samples<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f64>> {
    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64 * FLOAT_SCALE))
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|e| SoundError::InvalidAudio {
                reason: format!("Failed to read float samples: {}", e),
                source: Some(Box::new(e)),
            }),
        SampleFormat::Int => {
            if !matches!(bits_per_sample, 8 | 16 | 24 | 32) {
                return Err(SoundError::UnsupportedFormat {
                    format: format!("{}-bit integer audio", bits_per_sample),
                });
            }
            let to_16bit = 2f64.powi(16 - bits_per_sample as i32);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 * to_16bit))
                .collect::<std::result::Result<Vec<f64>, _>>()
                .map_err(|e| SoundError::InvalidAudio {
                    reason: format!("Failed to read {}-bit samples: {}", bits_per_sample, e),
                    source: Some(Box::new(e)),
                })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
