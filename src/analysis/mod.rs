//! Spectrogram analysis: windowing, the short-time Fourier transform, and
//! per-frame peak extraction.
//!
//! # Modules
//!
//! - [`spectrogram`] - The analyzer and the grid types it produces
//! - [`peaks`] - Per-frame dominant-frequency extraction
//! - [`window`] - Window functions applied to analysis frames

pub mod peaks;
pub mod spectrogram;
pub mod window;

pub use peaks::PeakProfile;
pub use spectrogram::{
    Analysis, DEFAULT_OVERLAP, DEFAULT_WINDOW_SIZE, Spectrogram, SpectrogramAnalyzer,
};
pub use window::WindowKind;
