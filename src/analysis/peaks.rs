//! Per-frame peak extraction from spectrogram grids.

use ndarray::Array1;

use crate::RealFloat;
use crate::analysis::spectrogram::Spectrogram;

/// Dominant frequency of every analysis frame.
///
/// For each grid column the profile records the row holding the largest
/// magnitude and the frequency that row is centered on. Rows are scanned from
/// DC upward with a strictly-greater comparison, so when several bins tie for
/// the maximum the lowest-frequency bin wins. This matches numpy's `argmax`
/// and makes the choice deterministic, which matters for all-tie columns such
/// as digital silence.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakProfile<F: RealFloat> {
    bins: Vec<usize>,
    frequencies: Array1<F>,
}

impl<F: RealFloat> PeakProfile<F> {
    /// Extracts the peak profile from a spectrogram, one entry per frame.
    ///
    /// The scan runs over the decibel grid. The decibel conversion is
    /// strictly increasing, so the selected bins are identical to an argmax
    /// over the linear power grid.
    pub fn from_spectrogram(spectrogram: &Spectrogram<F>) -> Self {
        let grid = spectrogram.magnitudes_db();
        let freq_axis = spectrogram.frequencies();

        let mut bins = Vec::with_capacity(grid.ncols());
        let mut frequencies = Vec::with_capacity(grid.ncols());

        for column in grid.columns() {
            let mut best_bin = 0usize;
            let mut best_value = F::neg_infinity();
            for (bin, &value) in column.iter().enumerate() {
                if value > best_value {
                    best_value = value;
                    best_bin = bin;
                }
            }
            bins.push(best_bin);
            frequencies.push(freq_axis[best_bin]);
        }

        Self {
            bins,
            frequencies: Array1::from_vec(frequencies),
        }
    }

    /// Returns the peak bin index of each frame.
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    /// Returns the peak frequency of each frame in Hz.
    ///
    /// Entry `i` is the bin center frequency of `bins()[i]`.
    pub const fn frequencies(&self) -> &Array1<F> {
        &self.frequencies
    }

    /// Returns the number of frames in the profile.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` when the profile covers no frames.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
