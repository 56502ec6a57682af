//! Core signal representation for mono audio.
//!
//! [`Signal`] pairs an `ndarray` buffer of floating-point samples with the
//! sample rate they were captured at. The type is deliberately passive: it
//! stores whatever it is given, including an empty buffer or a zero rate, and
//! leaves validation to the analysis entry points so that every rejection
//! happens in exactly one place with one error message.
//!
//! Samples are normalized floats (nominally in `[-1.0, 1.0]` when decoded
//! from PCM), stored in a single channel. Multi-channel input is downmixed
//! before a `Signal` is ever constructed.

use ndarray::Array1;

use crate::{RealFloat, to_precision};

/// A mono audio signal: sample data plus the rate it was captured at.
///
/// The samples are immutable after construction. Analysis never mutates a
/// signal, so repeated calls over the same `Signal` always see identical
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<F: RealFloat> {
    samples: Array1<F>,
    sample_rate: u32,
}

impl<F: RealFloat> Signal<F> {
    /// Creates a new signal from sample data and a sample rate in Hz.
    ///
    /// No validation is performed. A signal with no samples or a zero rate is
    /// representable, and is rejected by the analyzer rather than here.
    pub const fn new(samples: Array1<F>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates a new signal from a sample vector and a sample rate in Hz.
    pub fn from_vec(samples: Vec<F>, sample_rate: u32) -> Self {
        Self::new(Array1::from_vec(samples), sample_rate)
    }

    /// Returns the sample data.
    pub const fn samples(&self) -> &Array1<F> {
        &self.samples
    }

    /// Returns the sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the duration in seconds
    pub fn duration_seconds(&self) -> F {
        to_precision::<F, _>(self.len()) / to_precision::<F, _>(self.sample_rate)
    }

    /// Returns the largest absolute sample value, or zero for an empty signal.
    pub fn peak(&self) -> F {
        self.samples
            .iter()
            .fold(F::zero(), |acc, &s| acc.max(s.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_new_stores_samples_and_rate() {
        let signal = Signal::new(array![0.1f64, -0.5, 0.3], 44100);
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.sample_rate(), 44100);
        assert_approx_eq!(signal.samples()[1], -0.5, 1e-12);
    }

    #[test]
    fn test_from_vec_matches_array_construction() {
        let a = Signal::from_vec(vec![0.25f64, 0.75], 8000);
        let b = Signal::new(array![0.25f64, 0.75], 8000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_signal_is_representable() {
        let signal = Signal::<f64>::from_vec(Vec::new(), 8000);
        assert!(signal.is_empty());
        assert_eq!(signal.len(), 0);
    }

    #[test]
    fn test_duration_seconds() {
        let signal = Signal::from_vec(vec![0.0f64; 4000], 8000);
        assert_approx_eq!(signal.duration_seconds(), 0.5, 1e-12);
    }

    #[test]
    fn test_peak_is_largest_absolute_sample() {
        let signal = Signal::from_vec(vec![0.1f64, -0.9, 0.4], 8000);
        assert_approx_eq!(signal.peak(), 0.9, 1e-12);

        let empty = Signal::<f64>::from_vec(Vec::new(), 8000);
        assert_approx_eq!(empty.peak(), 0.0, 1e-12);
    }
}
