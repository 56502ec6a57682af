//! Error types and result utilities for audio analysis operations.

use thiserror::Error;

/// Convenience type alias for results that may contain AudioSpectraError
pub type AudioSpectraResult<T> = Result<T, AudioSpectraError>;

/// Error types that can occur during audio analysis operations.
#[derive(Error, Debug)]
pub enum AudioSpectraError {
    /// Error that occurs when invalid input is provided to an operation.
    ///
    /// This includes cases like empty signals, a zero sample rate, a window
    /// longer than the signal, an overlap at or above the window size, and
    /// segment requests that start past the end of a file. The message names
    /// the offending value.
    #[error("Invalid input error: {0}")]
    InvalidInput(String),

    /// Error that occurs when a WAV file cannot be opened, decoded, or written.
    ///
    /// Wraps the underlying decoder error, including unsupported formats and
    /// I/O failures.
    #[error("Wav I/O error: {0}")]
    Wav(#[from] hound::Error),

    /// Error that occurs when a plot cannot be drawn or saved.
    ///
    /// This typically happens when the output path is not writable or the
    /// drawing backend rejects the plot geometry.
    #[error("Render error: {0}")]
    Render(String),
}
