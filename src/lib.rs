// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::box_collection)] // Warns on boxed `Vec`, `String`, etc.
#![warn(clippy::vec_box)] // Avoids using `Vec<Box<T>>` when unnecessary
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![allow(clippy::too_many_arguments)]
// Allow functions with many parameters (very few and far between)
#![deny(missing_docs)] // Documentation is a must for release

//! # AudioSpectra
//!
//! A spectrogram analysis library for Rust that turns mono audio signals into
//! time/frequency magnitude grids, extracts the dominant frequency of every
//! analysis frame, and renders the result as a static plot.
//!
//! ## Overview
//!
//! The core of the crate is [`SpectrogramAnalyzer`]: configure a window size
//! and overlap once, then feed it [`Signal`] values. Each analysis produces an
//! [`Analysis`] bundling a [`Spectrogram`] (frequency axis, time axis, and a
//! decibel magnitude grid) with a [`PeakProfile`] (the strongest frequency in
//! every frame). Decoding WAV files, generating synthetic test signals, and
//! rendering plots are separate collaborators in [`io`], [`utils::generation`],
//! and [`render`], so the numeric pipeline stays free of file and drawing
//! concerns.
//!
//! ## Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! audio_spectra = "0.1.0"
//! ```
//!
//! or more easily with:
//! ```bash
//! cargo add audio_spectra
//! ```
//!
//! ## Quick Start
//!
//! ### Analyzing a Signal
//!
//! ```rust
//! use audio_spectra::{SpectrogramAnalyzer, sine_wave};
//! use std::time::Duration;
//!
//! // frequency, duration, sample rate, amplitude
//! let audio = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
//!
//! let analyzer = SpectrogramAnalyzer::new(256, 128).unwrap();
//! let analysis = analyzer.analyze(&audio).unwrap();
//!
//! // One-sided spectrum: 256 / 2 + 1 frequency bins.
//! assert_eq!(analysis.spectrogram().num_bins(), 129);
//!
//! // Every frame's dominant frequency lands within one bin of 440 Hz.
//! for &hz in analysis.peaks().frequencies() {
//!     assert!((hz - 440.0).abs() <= 8000.0 / 256.0);
//! }
//! ```
//!
//! ### Reading WAV Files
//!
//! ```rust,no_run
//! use audio_spectra::{SpectrogramAnalyzer, read_wav, read_wav_segment};
//! use std::time::Duration;
//!
//! // Whole file, downmixed to mono.
//! let signal = read_wav::<f32, _>("track.wav").unwrap();
//!
//! // Five seconds starting at 15 s, like an editor preview.
//! let excerpt = read_wav_segment::<f32, _>(
//!     "track.wav",
//!     Duration::from_secs(15),
//!     Some(Duration::from_secs(5)),
//! )
//! .unwrap();
//!
//! let analysis = SpectrogramAnalyzer::new(1024, 512)
//!     .unwrap()
//!     .analyze(&excerpt)
//!     .unwrap();
//! println!("{} frames analyzed", analysis.spectrogram().num_frames());
//! # let _ = signal;
//! ```
//!
//! ### Rendering Plots
//!
//! ```rust,no_run
//! use audio_spectra::{
//!     PlotOptions, SpectrogramAnalyzer, render_spectrogram, render_waveform, sine_wave,
//! };
//! use std::time::Duration;
//!
//! let audio = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
//! let analysis = SpectrogramAnalyzer::new(256, 128)
//!     .unwrap()
//!     .analyze(&audio)
//!     .unwrap();
//!
//! render_spectrogram(&analysis, "spectrogram.png", &PlotOptions::default()).unwrap();
//!
//! let waveform_options = PlotOptions {
//!     title: "Waveform".to_string(),
//!     ..PlotOptions::default()
//! };
//! render_waveform(&audio, "waveform.png", &waveform_options).unwrap();
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`AudioSpectraResult`] with a single flat
//! error enum:
//!
//! ```rust
//! use audio_spectra::{AudioSpectraError, AudioSpectraResult, SpectrogramAnalyzer};
//!
//! // Overlap must be strictly smaller than the window size.
//! let result: AudioSpectraResult<SpectrogramAnalyzer> = SpectrogramAnalyzer::new(256, 256);
//!
//! match result {
//!     Ok(_) => {}
//!     Err(AudioSpectraError::InvalidInput(msg)) => eprintln!("Invalid input: {msg}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## License
//!
//! MIT License

mod error;
mod signal;

pub mod analysis;
pub mod io;
pub mod render;
pub mod utils;

pub use crate::analysis::{
    Analysis, PeakProfile, Spectrogram, SpectrogramAnalyzer, WindowKind,
};
pub use crate::error::{AudioSpectraError, AudioSpectraResult};
pub use crate::io::{read_wav, read_wav_segment, write_wav};
pub use crate::render::{FrequencyScale, PlotOptions, render_spectrogram, render_waveform};
pub use crate::signal::Signal;
pub use crate::utils::{
    audio_math::{
        DB_EPSILON, fft_frequencies, frame_center_times, log_frequency_axis, power_to_db,
    },
    generation::{chirp, silence, sine_wave, white_noise},
};

use num_traits::{Float, FloatConst, NumCast};
use rustfft::FftNum;

/// Marker trait for real floating-point sample types (f32, f64)
pub trait RealFloat: Float + FloatConst + NumCast + FftNum {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Wraps `num_traits::NumCast::from` so generic DSP code can mix sample
/// values, indices, and literal constants without explicit `as` conversions,
/// staying agnostic to whether `F` is `f32` or `f64`.
///
/// # Arguments
/// * `value` - The numeric value to convert to the target floating-point type
///
/// # Returns
/// The input value converted to the target floating-point type `F`.
///
/// # Examples
/// ```
/// use audio_spectra::to_precision;
///
/// let value_i32 = 42i32;
/// let value_f32: f32 = to_precision(value_i32);
/// assert_eq!(value_f32, 42.0);
///
/// let value_f64: f64 = to_precision(value_i32);
/// assert_eq!(value_f64, 42.0);
/// ```
///
/// # Panics
/// Panics if the numeric conversion fails.
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat + NumCast,
    T: NumCast,
{
    NumCast::from(value).expect("to_precision: valid numeric conversion")
}
