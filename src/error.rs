//! Error handling for Soundlab

use thiserror::Error;

/// Result type alias for Soundlab operations
pub type Result<T> = std::result::Result<T, SoundError>;

/// Main error type for Soundlab operations
#[derive(Error, Debug)]
pub enum SoundError {
    // Synthesis Errors
    #[error("Unknown note name: {note:?}")]
    NoteNotFound { note: String },

    // Mixing Errors
    #[error("Cannot overlay an empty list of sounds")]
    EmptyOverlay,

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SoundError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SoundError::NoteNotFound { .. } => "NOTE_NOT_FOUND",
            SoundError::EmptyOverlay => "EMPTY_OVERLAY",
            SoundError::FileNotFound { .. } => "FILE_NOT_FOUND",
            SoundError::InvalidAudio { .. } => "INVALID_AUDIO",
            SoundError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            SoundError::Io(_) => "IO_ERROR",
            SoundError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Wrap a hound error raised while writing a file
    pub(crate) fn from_wav_write(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => SoundError::Io(io),
            other => SoundError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                other.to_string(),
            )),
        }
    }
}
