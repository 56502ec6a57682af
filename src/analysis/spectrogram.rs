//! Short-time Fourier analysis and the types it produces.
//!
//! [`SpectrogramAnalyzer`] slides a window across a signal, FFTs each frame,
//! and keeps the one-sided power spectrum. The result is a grid with
//! `window_size / 2 + 1` frequency rows and one column per frame, converted
//! to decibels for the caller together with the axes that label it.
//!
//! # Time-Frequency Trade-offs
//!
//! - **Larger window_size**: Better frequency resolution, worse time resolution
//! - **Smaller window_size**: Better time resolution, worse frequency resolution
//! - **Larger overlap**: Smoother time evolution, more computation

use ndarray::{Array1, Array2};
use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::{debug, trace};

use crate::analysis::peaks::PeakProfile;
use crate::analysis::window::WindowKind;
use crate::utils::audio_math::{fft_frequencies, frame_center_times, power_to_db};
use crate::{AudioSpectraError, AudioSpectraResult, RealFloat, Signal, to_precision};

/// Default analysis window length in samples.
pub const DEFAULT_WINDOW_SIZE: usize = 256;

/// Default overlap between consecutive windows in samples.
///
/// One eighth of the default window, matching the convention scipy's
/// `spectrogram` uses when no overlap is given.
pub const DEFAULT_OVERLAP: usize = 32;

/// Windowed FFT analyzer with fixed framing parameters.
///
/// Frame `i` covers samples `[i * hop, i * hop + window_size)` where
/// `hop = window_size - overlap`. Frames that would run past the end of the
/// signal are dropped, so every analyzed frame is a full window.
///
/// The analyzer holds no signal state and never mutates its input; analyzing
/// the same signal twice produces identical grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrogramAnalyzer {
    window_size: usize,
    overlap: usize,
    window: WindowKind,
}

impl Default for SpectrogramAnalyzer {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap: DEFAULT_OVERLAP,
            window: WindowKind::default(),
        }
    }
}

impl SpectrogramAnalyzer {
    /// Creates an analyzer with the given window size and overlap, both in
    /// samples.
    ///
    /// Uses a Hann window; combine with [`with_window`](Self::with_window) to
    /// select another shape.
    ///
    /// # Errors
    /// Returns [`AudioSpectraError::InvalidInput`] if `window_size` is zero or
    /// if `overlap` is not strictly smaller than `window_size`.
    ///
    /// # Examples
    /// ```
    /// use audio_spectra::SpectrogramAnalyzer;
    ///
    /// let analyzer = SpectrogramAnalyzer::new(256, 128).unwrap();
    /// assert_eq!(analyzer.hop_size(), 128);
    ///
    /// assert!(SpectrogramAnalyzer::new(256, 256).is_err());
    /// ```
    pub fn new(window_size: usize, overlap: usize) -> AudioSpectraResult<Self> {
        if window_size == 0 {
            return Err(AudioSpectraError::InvalidInput(
                "Window size must be greater than 0".to_string(),
            ));
        }
        if overlap >= window_size {
            return Err(AudioSpectraError::InvalidInput(format!(
                "Overlap ({overlap}) must be smaller than the window size ({window_size})"
            )));
        }

        Ok(Self {
            window_size,
            overlap,
            window: WindowKind::default(),
        })
    }

    /// Replaces the window shape applied to each frame.
    #[must_use]
    pub const fn with_window(mut self, window: WindowKind) -> Self {
        self.window = window;
        self
    }

    /// Returns the window length in samples.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the overlap between consecutive windows in samples.
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Returns the window shape applied to each frame.
    pub const fn window(&self) -> WindowKind {
        self.window
    }

    /// Returns the hop between consecutive frames in samples.
    pub const fn hop_size(&self) -> usize {
        self.window_size - self.overlap
    }

    /// Computes the one-sided Short-Time Fourier Transform.
    ///
    /// Returns complex spectra with dimensions `(window_size / 2 + 1,
    /// num_frames)` where `num_frames = (signal_len - window_size) / hop + 1`.
    /// Trailing samples that do not fill a whole window are dropped.
    ///
    /// # Errors
    /// Returns [`AudioSpectraError::InvalidInput`] if the signal is empty, its
    /// sample rate is zero, or it is shorter than the window.
    pub fn stft<F: RealFloat>(
        &self,
        signal: &Signal<F>,
    ) -> AudioSpectraResult<Array2<Complex<F>>> {
        self.validate(signal)?;

        let samples = signal.samples().to_vec();
        let hop_size = self.hop_size();
        let num_frames = (samples.len() - self.window_size) / hop_size + 1;
        let n_bins = self.window_size / 2 + 1;
        trace!(
            "Computing STFT: {} bins x {} frames (window {}, hop {})",
            n_bins, num_frames, self.window_size, hop_size
        );

        let window = self.window.coefficients::<F>(self.window_size);

        // STFT matrix: frequency bins x time frames
        let mut stft_matrix = Array2::zeros((n_bins, num_frames));

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(self.window_size);

        for frame_idx in 0..num_frames {
            let start = frame_idx * hop_size;
            let end = start + self.window_size;

            // Extract windowed frame
            let mut frame_buffer: Vec<Complex<F>> = samples[start..end]
                .iter()
                .zip(window.iter())
                .map(|(&sample, &w)| Complex::new(sample * w, F::zero()))
                .collect();

            fft.process(&mut frame_buffer);

            // Real input: keep the non-redundant half of the spectrum.
            for (freq_idx, &value) in frame_buffer[..n_bins].iter().enumerate() {
                stft_matrix[[freq_idx, frame_idx]] = value;
            }
        }

        Ok(stft_matrix)
    }

    /// Computes the linear power grid (squared STFT magnitudes).
    ///
    /// Every entry is non-negative. This is the grid the decibel conversion
    /// in [`analyze`](Self::analyze) is applied to.
    ///
    /// # Errors
    /// Returns [`AudioSpectraError::InvalidInput`] under the same conditions
    /// as [`stft`](Self::stft).
    pub fn power_spectrum<F: RealFloat>(
        &self,
        signal: &Signal<F>,
    ) -> AudioSpectraResult<Array2<F>> {
        let stft_matrix = self.stft(signal)?;
        Ok(stft_matrix.mapv(|complex_val| complex_val.norm_sqr()))
    }

    /// Runs the full analysis: power grid, decibel conversion, axes, and the
    /// per-frame peak profile.
    ///
    /// Decibel values follow the crate policy `10 * log10(power + 1e-10)`, so
    /// silent bins floor at -100 dB instead of diverging.
    ///
    /// # Errors
    /// Returns [`AudioSpectraError::InvalidInput`] if the signal is empty, its
    /// sample rate is zero, or it is shorter than the window.
    ///
    /// # Examples
    /// ```
    /// use audio_spectra::{SpectrogramAnalyzer, sine_wave};
    /// use std::time::Duration;
    ///
    /// let audio = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
    /// let analysis = SpectrogramAnalyzer::new(256, 128)
    ///     .unwrap()
    ///     .analyze(&audio)
    ///     .unwrap();
    ///
    /// assert_eq!(analysis.spectrogram().num_bins(), 129);
    /// assert_eq!(analysis.spectrogram().num_frames(), 61);
    /// ```
    pub fn analyze<F: RealFloat>(&self, signal: &Signal<F>) -> AudioSpectraResult<Analysis<F>> {
        debug!(
            "Starting spectrogram analysis: {} samples at {} Hz (window {}, overlap {})",
            signal.len(),
            signal.sample_rate(),
            self.window_size,
            self.overlap
        );

        let power = self.power_spectrum(signal)?;
        let sample_rate_f = to_precision::<F, _>(signal.sample_rate());

        let frequencies = Array1::from_vec(fft_frequencies(self.window_size, sample_rate_f));
        let times = Array1::from_vec(frame_center_times(
            power.ncols(),
            self.window_size,
            self.hop_size(),
            sample_rate_f,
        ));
        let magnitudes_db = power.mapv(power_to_db);

        let spectrogram = Spectrogram::new(frequencies, times, magnitudes_db);
        let peaks = PeakProfile::from_spectrogram(&spectrogram);

        debug!(
            "Analysis produced {} bins x {} frames",
            spectrogram.num_bins(),
            spectrogram.num_frames()
        );

        Ok(Analysis { spectrogram, peaks })
    }

    fn validate<F: RealFloat>(&self, signal: &Signal<F>) -> AudioSpectraResult<()> {
        if signal.sample_rate() == 0 {
            return Err(AudioSpectraError::InvalidInput(
                "Sample rate must be greater than 0".to_string(),
            ));
        }
        if signal.is_empty() {
            return Err(AudioSpectraError::InvalidInput(
                "Signal is empty".to_string(),
            ));
        }
        if signal.len() < self.window_size {
            return Err(AudioSpectraError::InvalidInput(format!(
                "Signal length ({}) is shorter than the window size ({})",
                signal.len(),
                self.window_size
            )));
        }
        Ok(())
    }
}

/// Time-frequency grid produced by [`SpectrogramAnalyzer::analyze`].
///
/// The magnitude grid has shape `(num_bins, num_frames)`; `frequencies` labels
/// its rows (DC first, Nyquist last) and `times` labels its columns with each
/// frame's window-center instant in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram<F: RealFloat> {
    frequencies: Array1<F>,
    times: Array1<F>,
    magnitudes_db: Array2<F>,
}

impl<F: RealFloat> Spectrogram<F> {
    pub(crate) const fn new(
        frequencies: Array1<F>,
        times: Array1<F>,
        magnitudes_db: Array2<F>,
    ) -> Self {
        Self {
            frequencies,
            times,
            magnitudes_db,
        }
    }

    /// Returns the bin center frequencies in Hz, one per grid row.
    pub const fn frequencies(&self) -> &Array1<F> {
        &self.frequencies
    }

    /// Returns the frame-center times in seconds, one per grid column.
    pub const fn times(&self) -> &Array1<F> {
        &self.times
    }

    /// Returns the decibel magnitude grid with shape `(num_bins, num_frames)`.
    pub const fn magnitudes_db(&self) -> &Array2<F> {
        &self.magnitudes_db
    }

    /// Returns the number of frequency bins (grid rows).
    pub fn num_bins(&self) -> usize {
        self.magnitudes_db.nrows()
    }

    /// Returns the number of analysis frames (grid columns).
    pub fn num_frames(&self) -> usize {
        self.magnitudes_db.ncols()
    }
}

/// Complete result of one analysis pass: the spectrogram and its peak profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<F: RealFloat> {
    spectrogram: Spectrogram<F>,
    peaks: PeakProfile<F>,
}

impl<F: RealFloat> Analysis<F> {
    /// Returns the time-frequency magnitude grid.
    pub const fn spectrogram(&self) -> &Spectrogram<F> {
        &self.spectrogram
    }

    /// Returns the per-frame peak profile.
    pub const fn peaks(&self) -> &PeakProfile<F> {
        &self.peaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generation::{chirp, silence, sine_wave, white_noise};
    use approx_eq::assert_approx_eq;
    use std::time::Duration;

    fn sine_8k() -> Signal<f64> {
        sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8)
    }

    #[test]
    fn test_new_rejects_zero_window() {
        assert!(matches!(
            SpectrogramAnalyzer::new(0, 0),
            Err(AudioSpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_rejects_overlap_at_or_above_window() {
        assert!(SpectrogramAnalyzer::new(256, 256).is_err());
        assert!(SpectrogramAnalyzer::new(256, 300).is_err());
        assert!(SpectrogramAnalyzer::new(256, 255).is_ok());
    }

    #[test]
    fn test_default_matches_scipy_convention() {
        let analyzer = SpectrogramAnalyzer::default();
        assert_eq!(analyzer.window_size(), 256);
        assert_eq!(analyzer.overlap(), 32);
        assert_eq!(analyzer.window(), WindowKind::Hann);
    }

    #[test]
    fn test_with_window_replaces_shape() {
        let analyzer = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .with_window(WindowKind::Blackman);
        assert_eq!(analyzer.window(), WindowKind::Blackman);
    }

    #[test]
    fn test_sine_scenario_dimensions() {
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&sine_8k())
            .unwrap();
        let spec = analysis.spectrogram();

        // (8000 - 256) / 128 + 1 frames, 256 / 2 + 1 bins.
        assert_eq!(spec.num_bins(), 129);
        assert_eq!(spec.num_frames(), 61);
        assert_eq!(spec.frequencies().len(), 129);
        assert_eq!(spec.times().len(), 61);
        assert_eq!(analysis.peaks().len(), 61);
    }

    #[test]
    fn test_sine_peaks_within_one_bin_of_440() {
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&sine_8k())
            .unwrap();

        let bin_width = 8000.0 / 256.0;
        for &hz in analysis.peaks().frequencies() {
            assert!(
                (hz - 440.0).abs() <= bin_width,
                "peak {hz} Hz further than one bin from 440 Hz"
            );
        }
    }

    #[test]
    fn test_times_are_window_centers() {
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&sine_8k())
            .unwrap();
        let times = analysis.spectrogram().times();

        assert_approx_eq!(times[0], 128.0 / 8000.0, 1e-12);
        assert_approx_eq!(times[1] - times[0], 128.0 / 8000.0, 1e-12);
    }

    #[test]
    fn test_power_spectrum_is_non_negative() {
        let noise = white_noise::<f64>(Duration::from_millis(500), 8000, 0.5, Some(11));
        let power = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .power_spectrum(&noise)
            .unwrap();
        assert!(power.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_db_grid_applies_power_policy() {
        let analyzer = SpectrogramAnalyzer::new(256, 128).unwrap();
        let signal = sine_8k();

        let power = analyzer.power_spectrum(&signal).unwrap();
        let analysis = analyzer.analyze(&signal).unwrap();

        let expected = power.mapv(power_to_db);
        assert_eq!(analysis.spectrogram().magnitudes_db(), &expected);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let analyzer = SpectrogramAnalyzer::new(256, 128).unwrap();
        let signal = sine_8k();

        let first = analyzer.analyze(&signal).unwrap();
        let second = analyzer.analyze(&signal).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_window_equal_to_signal_yields_single_frame() {
        let signal = Signal::from_vec(vec![0.5f64; 256], 8000);
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&signal)
            .unwrap();

        assert_eq!(analysis.spectrogram().num_frames(), 1);
        assert_approx_eq!(analysis.spectrogram().times()[0], 128.0 / 8000.0, 1e-12);
    }

    #[test]
    fn test_window_longer_than_signal_is_rejected() {
        let signal = Signal::from_vec(vec![0.5f64; 255], 8000);
        let result = SpectrogramAnalyzer::new(256, 128).unwrap().analyze(&signal);
        assert!(matches!(
            result,
            Err(AudioSpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_signal_is_rejected() {
        let signal = Signal::<f64>::from_vec(Vec::new(), 8000);
        let result = SpectrogramAnalyzer::new(256, 128).unwrap().analyze(&signal);
        assert!(matches!(
            result,
            Err(AudioSpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let signal = Signal::from_vec(vec![0.5f64; 1024], 0);
        let result = SpectrogramAnalyzer::new(256, 128).unwrap().analyze(&signal);
        assert!(matches!(
            result,
            Err(AudioSpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_overlap_frame_count_drops_trailing_samples() {
        // 1030 samples, hop 256: frames start at 0, 256, 512, 768; the last
        // 6 samples never fill a window.
        let signal = Signal::from_vec(vec![0.25f64; 1030], 8000);
        let analysis = SpectrogramAnalyzer::new(256, 0)
            .unwrap()
            .analyze(&signal)
            .unwrap();
        assert_eq!(analysis.spectrogram().num_frames(), 4);
    }

    #[test]
    fn test_peaks_track_chirp_upward() {
        let sweep = chirp::<f64>(100.0, 1000.0, Duration::from_secs(2), 8000, 1.0);
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&sweep)
            .unwrap();

        let peaks = analysis.peaks().frequencies();
        let first = peaks[0];
        let last = peaks[peaks.len() - 1];
        assert!(last - first > 700.0, "sweep rose only {first} -> {last} Hz");

        // Never falls by more than one bin between consecutive frames.
        let bin_width = 8000.0 / 256.0;
        for pair in peaks.to_vec().windows(2) {
            assert!(pair[1] + bin_width >= pair[0]);
        }
    }

    #[test]
    fn test_silence_floors_at_minus_100_db_with_dc_peaks() {
        let quiet = silence::<f64>(Duration::from_secs(1), 8000);
        let analysis = SpectrogramAnalyzer::new(256, 128)
            .unwrap()
            .analyze(&quiet)
            .unwrap();

        for &db in analysis.spectrogram().magnitudes_db() {
            assert_approx_eq!(db, -100.0, 1e-6);
        }
        // All bins tie at the floor, so the first (DC) bin wins everywhere.
        assert!(analysis.peaks().bins().iter().all(|&bin| bin == 0));
    }

    #[test]
    fn test_f32_and_f64_peaks_agree() {
        let tone64 = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
        let tone32 = sine_wave::<f32>(440.0, Duration::from_secs(1), 8000, 0.8);
        let analyzer = SpectrogramAnalyzer::new(256, 128).unwrap();

        let bins64 = analyzer.analyze(&tone64).unwrap().peaks().bins().to_vec();
        let bins32 = analyzer.analyze(&tone32).unwrap().peaks().bins().to_vec();
        assert_eq!(bins64, bins32);
    }
}
