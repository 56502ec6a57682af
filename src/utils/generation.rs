//! Audio signal generation utilities.
//!
//! This module provides functions for generating synthetic test signals:
//! pure tones, linear chirps, seeded white noise, and silence. The generators
//! back the crate's tests and demo programs, and give callers known-content
//! input for exercising the analysis pipeline.

use std::time::Duration;

use ndarray::Array1;
use num_traits::{FloatConst, ToPrimitive};
use rand::distr::StandardUniform;

use crate::{RealFloat, Signal, to_precision};

/// Number of samples a generator produces for the given duration and rate.
///
/// Counted in f64 regardless of the sample type, so long durations are not
/// subject to f32 mantissa rounding.
fn sample_count(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_secs_f64() * f64::from(sample_rate))
        .to_usize()
        .expect("duration and sample_rate are non-negative so their product is a valid usize")
}

/// Generates a sine wave with the specified parameters.
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `duration` - Duration of the signal
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Amplitude of the sine wave (0.0 to 1.0)
///
/// # Returns
/// A [`Signal`] containing the generated sine wave.
///
/// # Panics
/// - If the computed number of samples cannot be represented as `usize`.
///
/// # Examples
/// ```
/// use audio_spectra::sine_wave;
/// use std::time::Duration;
///
/// let tone = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
/// assert_eq!(tone.len(), 8000);
/// ```
pub fn sine_wave<F: RealFloat>(
    frequency: F,
    duration: Duration,
    sample_rate: u32,
    amplitude: F,
) -> Signal<F> {
    let sample_rate_f = to_precision::<F, _>(sample_rate);
    let num_samples = sample_count(duration, sample_rate);

    let two_pi_freq = to_precision::<F, _>(2.0) * <F as FloatConst>::PI() * frequency;
    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = to_precision::<F, _>(i) / sample_rate_f;
        samples.push(amplitude * (two_pi_freq * t).sin());
    }

    Signal::new(Array1::from_vec(samples), sample_rate)
}

/// Generates a chirp (linear frequency sweep) signal.
///
/// The instantaneous frequency moves linearly from `start_freq` to
/// `end_freq` over the duration. Phase is accumulated sample by sample and
/// left unwrapped, so the waveform stays continuous across the sweep.
///
/// # Arguments
/// * `start_freq` - Starting frequency in Hz
/// * `end_freq` - Ending frequency in Hz
/// * `duration` - Duration of the signal
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Amplitude of the chirp (0.0 to 1.0)
///
/// # Returns
/// A [`Signal`] containing the generated chirp.
///
/// # Panics
/// - If the computed number of samples cannot be represented as `usize`.
pub fn chirp<F: RealFloat>(
    start_freq: F,
    end_freq: F,
    duration: Duration,
    sample_rate: u32,
    amplitude: F,
) -> Signal<F> {
    let num_samples = sample_count(duration, sample_rate);
    let mut samples = Vec::with_capacity(num_samples);

    let sr_f = to_precision::<F, _>(sample_rate);
    let duration_f = to_precision::<F, _>(duration.as_secs_f64());
    let k = (end_freq - start_freq) / duration_f; // linear frequency slope
    let mut phase = F::zero(); // radians, unwrapped

    let two_pi = to_precision::<F, _>(2.0) * <F as FloatConst>::PI();
    for i in 0..num_samples {
        let t = to_precision::<F, _>(i) / sr_f;

        // Instantaneous frequency: f(t) = f0 + k t
        let freq = start_freq + k * t;

        // Phase increment = 2π f(t) / sample_rate
        phase = phase + two_pi * freq / sr_f;

        samples.push(amplitude * phase.sin());
    }

    Signal::new(Array1::from_vec(samples), sample_rate)
}

/// Generates white noise with the specified parameters.
///
/// Samples are drawn uniformly from `[-amplitude, amplitude)`. Passing a seed
/// makes the output reproducible across runs, which the tests rely on;
/// passing `None` draws from operating-system entropy.
///
/// # Arguments
/// * `duration` - Duration of the signal
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Amplitude of the noise (0.0 to 1.0)
/// * `seed` - Optional RNG seed for reproducible output
///
/// # Returns
/// A [`Signal`] containing the generated noise.
///
/// # Panics
/// - If the computed number of samples cannot be represented as `usize`.
pub fn white_noise<F>(
    duration: Duration,
    sample_rate: u32,
    amplitude: F,
    seed: Option<u64>,
) -> Signal<F>
where
    F: RealFloat,
    StandardUniform: rand::distr::Distribution<F>,
{
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let num_samples = sample_count(duration, sample_rate);
    let mut samples = Vec::with_capacity(num_samples);

    let half = to_precision::<F, _>(0.5);
    let two = to_precision::<F, _>(2.0);

    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_samples {
            let random_value = (rng.random::<F>() - half) * two;
            samples.push(amplitude * random_value);
        }
    } else {
        for _ in 0..num_samples {
            let random_value = (rand::random::<F>() - half) * two;
            samples.push(amplitude * random_value);
        }
    }

    Signal::new(Array1::from_vec(samples), sample_rate)
}

/// Generates silence (all zero samples).
///
/// # Arguments
/// * `duration` - Duration of the signal
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// A [`Signal`] containing only zeros.
///
/// # Panics
/// - If the computed number of samples cannot be represented as `usize`.
pub fn silence<F: RealFloat>(duration: Duration, sample_rate: u32) -> Signal<F> {
    let num_samples = sample_count(duration, sample_rate);
    Signal::new(Array1::from_vec(vec![F::zero(); num_samples]), sample_rate)
}
