//! Audio mathematics utilities shared by the analysis and rendering paths.
//!
//! This module provides the numeric conventions the rest of the crate is
//! built on: the decibel conversion policy, FFT bin frequencies, frame-center
//! timestamps, and the logarithmic display transform for frequency axes.
//!
//! # Examples
//!
//! ```rust
//! use audio_spectra::{fft_frequencies, power_to_db};
//!
//! // One-sided bin frequencies for a 256-sample window at 8 kHz.
//! let freqs = fft_frequencies::<f64>(256, 8000.0);
//! assert_eq!(freqs.len(), 129);
//!
//! // Decibel conversion with the crate-wide epsilon offset.
//! let db = power_to_db(0.5); // ≈ -3.01 dB
//! ```

use crate::{RealFloat, to_precision};

/// Additive offset applied inside every `log10` in this crate.
///
/// Keeps zero-power bins and the DC frequency finite instead of producing
/// negative infinity: `power_to_db(0.0)` evaluates to exactly -100 dB.
pub const DB_EPSILON: f64 = 1e-10;

// =============================================================================
// AMPLITUDE CONVERSIONS
// =============================================================================

/// Converts a power value (squared magnitude) to decibels.
///
/// Uses the formula `10 * log10(power + DB_EPSILON)`. The epsilon offset makes
/// the conversion total over non-negative inputs: silence maps to -100 dB
/// rather than negative infinity, and the mapping stays strictly increasing,
/// so ordering comparisons (such as per-frame peak picking) give the same
/// answer on the dB grid as on the linear grid.
///
/// # Arguments
/// * `power` - Linear power value (non-negative)
///
/// # Returns
/// Power in decibels
///
/// # Examples
///
/// ```rust
/// use audio_spectra::power_to_db;
///
/// let db = power_to_db(1.0); // ≈ 0.0 dB
/// let db_half = power_to_db(0.5); // ≈ -3.01 dB
/// let db_floor = power_to_db(0.0); // -100.0 dB
/// ```
pub fn power_to_db<F: RealFloat>(power: F) -> F {
    to_precision::<F, _>(10.0) * (power + to_precision::<F, _>(DB_EPSILON)).log10()
}

// =============================================================================
// FREQUENCY AND TIME AXES
// =============================================================================

/// Computes the center frequencies of a one-sided FFT spectrum.
///
/// Returns `window_size / 2 + 1` frequencies from DC up to the Nyquist
/// frequency, spaced by `sample_rate / window_size`.
///
/// # Arguments
/// * `window_size` - FFT size in samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Vector of bin center frequencies in Hz
///
/// # Examples
///
/// ```rust
/// use audio_spectra::fft_frequencies;
///
/// let freqs = fft_frequencies(1024, 44100.0);
/// assert_eq!(freqs.len(), 513); // window_size / 2 + 1
/// assert_eq!(freqs[0], 0.0); // DC component
/// assert!(freqs[freqs.len() - 1] <= 22050.0f64); // Nyquist frequency
/// ```
pub fn fft_frequencies<F: RealFloat>(window_size: usize, sample_rate: F) -> Vec<F> {
    let n_bins = window_size / 2 + 1;
    let freq_resolution = sample_rate / to_precision::<F, _>(window_size);

    (0..n_bins)
        .map(|i| to_precision::<F, _>(i) * freq_resolution)
        .collect()
}

/// Computes the timestamp of each analysis frame's window center.
///
/// Frame `i` covers samples `[i * hop_size, i * hop_size + window_size)`, so
/// its center sits at `(i * hop_size + window_size / 2) / sample_rate`
/// seconds. Centers match what scipy's `spectrogram` reports, which keeps
/// rendered plots aligned with that tooling.
///
/// # Arguments
/// * `num_frames` - Number of analysis frames
/// * `window_size` - Window length in samples
/// * `hop_size` - Samples advanced between consecutive frames
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Vector of frame-center times in seconds
///
/// # Examples
///
/// ```rust
/// use audio_spectra::frame_center_times;
///
/// let times = frame_center_times(3, 256, 128, 8000.0);
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[0], 0.016); // (0 * 128 + 128) / 8000
/// ```
pub fn frame_center_times<F: RealFloat>(
    num_frames: usize,
    window_size: usize,
    hop_size: usize,
    sample_rate: F,
) -> Vec<F> {
    (0..num_frames)
        .map(|i| to_precision::<F, _>(i * hop_size + window_size / 2) / sample_rate)
        .collect()
}

// =============================================================================
// DISPLAY TRANSFORMS
// =============================================================================

/// Maps a frequency axis onto a logarithmic display scale.
///
/// Each frequency becomes `10 * log10(f + DB_EPSILON)`, and the first entry
/// (DC, whose log value would be -100) is pinned to zero so the axis starts
/// at the origin. The output is only meaningful for plotting; analysis always
/// works on the linear axis.
///
/// # Arguments
/// * `frequencies` - Bin center frequencies in Hz, DC first
///
/// # Returns
/// Vector of display positions, one per input frequency
///
/// # Examples
///
/// ```rust
/// use audio_spectra::log_frequency_axis;
///
/// let axis = log_frequency_axis(&[0.0, 31.25, 4000.0]);
/// assert_eq!(axis[0], 0.0);
/// assert!(axis[1] < axis[2]);
/// ```
pub fn log_frequency_axis<F: RealFloat>(frequencies: &[F]) -> Vec<F> {
    let mut axis: Vec<F> = frequencies
        .iter()
        .map(|&f| to_precision::<F, _>(10.0) * (f + to_precision::<F, _>(DB_EPSILON)).log10())
        .collect();
    if let Some(first) = axis.first_mut() {
        *first = F::zero();
    }
    axis
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_power_to_db_known_values() {
        assert_approx_eq!(power_to_db(1.0f64), 0.0, 1e-8);
        assert_approx_eq!(power_to_db(0.5f64), -3.0103, 1e-3);
        assert_approx_eq!(power_to_db(100.0f64), 20.0, 1e-8);
    }

    #[test]
    fn test_power_to_db_zero_is_finite_floor() {
        let db = power_to_db(0.0f64);
        assert!(db.is_finite());
        assert_approx_eq!(db, -100.0, 1e-9);
    }

    #[test]
    fn test_power_to_db_is_strictly_increasing() {
        let values = [0.0f64, 1e-9, 1e-4, 0.1, 0.5, 1.0, 10.0];
        for pair in values.windows(2) {
            assert!(power_to_db(pair[0]) < power_to_db(pair[1]));
        }
    }

    #[test]
    fn test_fft_frequencies_span_dc_to_nyquist() {
        let freqs = fft_frequencies::<f64>(256, 8000.0);
        assert_eq!(freqs.len(), 129);
        assert_approx_eq!(freqs[0], 0.0, 1e-12);
        assert_approx_eq!(freqs[1], 31.25, 1e-12);
        assert_approx_eq!(freqs[128], 4000.0, 1e-9);
    }

    #[test]
    fn test_fft_frequencies_resolution() {
        let freqs = fft_frequencies::<f64>(512, 44100.0);
        let resolution = 44100.0 / 512.0;
        for (i, &f) in freqs.iter().enumerate() {
            assert_approx_eq!(f, i as f64 * resolution, 1e-9);
        }
    }

    #[test]
    fn test_frame_center_times_spacing_is_hop() {
        let times = frame_center_times::<f64>(4, 256, 128, 8000.0);
        assert_eq!(times.len(), 4);
        assert_approx_eq!(times[0], 128.0 / 8000.0, 1e-12);
        for pair in times.windows(2) {
            assert_approx_eq!(pair[1] - pair[0], 128.0 / 8000.0, 1e-12);
        }
    }

    #[test]
    fn test_log_frequency_axis_pins_dc_to_zero() {
        let axis = log_frequency_axis(&[0.0f64, 31.25, 62.5, 4000.0]);
        assert_approx_eq!(axis[0], 0.0, 1e-12);
        assert_approx_eq!(axis[1], 14.9485, 1e-3);
        assert_approx_eq!(axis[3], 36.0206, 1e-3);
    }

    #[test]
    fn test_log_frequency_axis_preserves_order_above_dc() {
        let freqs = fft_frequencies::<f64>(256, 8000.0);
        let axis = log_frequency_axis(&freqs);
        for pair in axis[1..].windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_log_frequency_axis_empty_input() {
        let axis = log_frequency_axis::<f64>(&[]);
        assert!(axis.is_empty());
    }
}
