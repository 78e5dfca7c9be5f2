//! Error types for audio loading and scene configuration.

use thiserror::Error;

/// User-facing text shown when a selected file cannot be decoded as audio.
pub const DECODE_FAILURE_MESSAGE: &str = "Unable to play this audio file, please try another file.";
/// User-facing text shown when a selected file cannot be read.
pub const READ_FAILURE_MESSAGE: &str = "Error reading the file, please try again.";

/// Why a single load attempt was abandoned.
///
/// Both kinds are terminal for that attempt only; an already playing session
/// is never affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioLoadError {
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("failed to decode audio data: {0}")]
    Decode(String),
}

impl AudioLoadError {
    /// Fixed message for the blocking notification shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AudioLoadError::Read(_) => READ_FAILURE_MESSAGE,
            AudioLoadError::Decode(_) => DECODE_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("fft size {0} must be a power of two between 32 and 32768")]
    InvalidFftSize(u32),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}
