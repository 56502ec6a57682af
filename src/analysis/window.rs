//! Window functions applied to analysis frames before the FFT.

use num_traits::FloatConst;

use crate::{RealFloat, to_precision};

/// Window shapes for spectral analysis.
///
/// Different window types provide different trade-offs between frequency
/// resolution and spectral leakage in FFT-based analysis. [`WindowKind::Hann`]
/// is the default and a good general-purpose choice for spectrograms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowKind {
    /// Rectangular window (no windowing) - best frequency resolution but high leakage.
    Rectangular,
    /// Hann window - good general-purpose window with moderate leakage.
    #[default]
    Hann,
    /// Hamming window - similar to Hann but does not reach zero at the edges.
    Hamming,
    /// Blackman window - low leakage but wider main lobe.
    Blackman,
}

impl WindowKind {
    /// Computes the window coefficients for a frame of `size` samples.
    ///
    /// The cosine windows use the symmetric form with a `size - 1`
    /// denominator. A single-sample window is the degenerate case where that
    /// denominator vanishes, so it is returned as `[1.0]` for every kind.
    pub fn coefficients<F: RealFloat>(&self, size: usize) -> Vec<F> {
        if size <= 1 {
            return vec![F::one(); size];
        }

        let n_max = to_precision::<F, _>(size - 1);
        let two_pi = to_precision::<F, _>(2.0) * <F as FloatConst>::PI();

        match self {
            Self::Rectangular => vec![F::one(); size],
            Self::Hann => (0..size)
                .map(|i| {
                    to_precision::<F, _>(0.5)
                        * (F::one() - (two_pi * to_precision::<F, _>(i) / n_max).cos())
                })
                .collect(),
            Self::Hamming => (0..size)
                .map(|i| {
                    to_precision::<F, _>(0.54)
                        - to_precision::<F, _>(0.46)
                            * (two_pi * to_precision::<F, _>(i) / n_max).cos()
                })
                .collect(),
            Self::Blackman => (0..size)
                .map(|i| {
                    let n = to_precision::<F, _>(i);
                    to_precision::<F, _>(0.42)
                        - to_precision::<F, _>(0.5) * (two_pi * n / n_max).cos()
                        + to_precision::<F, _>(0.08)
                            * (to_precision::<F, _>(2.0) * two_pi * n / n_max).cos()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_default_window_is_hann() {
        assert_eq!(WindowKind::default(), WindowKind::Hann);
    }

    #[test]
    fn test_every_kind_produces_requested_length() {
        for kind in [
            WindowKind::Rectangular,
            WindowKind::Hann,
            WindowKind::Hamming,
            WindowKind::Blackman,
        ] {
            assert_eq!(kind.coefficients::<f64>(256).len(), 256);
            assert_eq!(kind.coefficients::<f64>(0).len(), 0);
        }
    }

    #[test]
    fn test_rectangular_is_all_ones() {
        let w = WindowKind::Rectangular.coefficients::<f64>(64);
        assert!(w.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_hann_endpoints_and_center() {
        let w = WindowKind::Hann.coefficients::<f64>(257);
        assert_approx_eq!(w[0], 0.0, 1e-12);
        assert_approx_eq!(w[256], 0.0, 1e-9);
        assert_approx_eq!(w[128], 1.0, 1e-9);
    }

    #[test]
    fn test_hamming_endpoints() {
        let w = WindowKind::Hamming.coefficients::<f64>(129);
        assert_approx_eq!(w[0], 0.08, 1e-9);
        assert_approx_eq!(w[128], 0.08, 1e-9);
    }

    #[test]
    fn test_blackman_endpoints_and_center() {
        let w = WindowKind::Blackman.coefficients::<f64>(257);
        assert_approx_eq!(w[0], 0.0, 1e-9);
        assert_approx_eq!(w[128], 1.0, 1e-9);
    }

    #[test]
    fn test_cosine_windows_are_symmetric() {
        for kind in [WindowKind::Hann, WindowKind::Hamming, WindowKind::Blackman] {
            let w = kind.coefficients::<f64>(100);
            for i in 0..50 {
                assert_approx_eq!(w[i], w[99 - i], 1e-9);
            }
        }
    }

    #[test]
    fn test_single_sample_window_is_unity() {
        for kind in [
            WindowKind::Rectangular,
            WindowKind::Hann,
            WindowKind::Hamming,
            WindowKind::Blackman,
        ] {
            assert_eq!(kind.coefficients::<f64>(1), vec![1.0]);
        }
    }
}
