//! WAV decoding and encoding.
//!
//! Files are decoded with `hound`, normalized to floating-point samples, and
//! downmixed to mono by averaging channels, so the rest of the crate only
//! ever sees a [`Signal`]. Supported input formats are 16/24/32-bit integer
//! PCM and 32-bit float; output is always 16-bit integer PCM.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::{AudioSpectraError, AudioSpectraResult, RealFloat, Signal, to_precision};

/// Reads a WAV file into a mono signal.
///
/// Integer samples are normalized by their type maximum into `[-1.0, 1.0]`
/// and multi-channel audio is downmixed to the per-frame channel mean.
///
/// # Errors
/// Returns [`AudioSpectraError::Wav`] if the file cannot be opened or
/// decoded, and [`AudioSpectraError::InvalidInput`] for sample formats this
/// crate does not handle.
///
/// # Examples
/// ```no_run
/// use audio_spectra::read_wav;
///
/// let signal = read_wav::<f32, _>("track.wav").unwrap();
/// println!("{} samples at {} Hz", signal.len(), signal.sample_rate());
/// ```
pub fn read_wav<F: RealFloat, P: AsRef<Path>>(path: P) -> AudioSpectraResult<Signal<F>> {
    read_wav_segment(path, Duration::ZERO, None)
}

/// Reads a section of a WAV file into a mono signal.
///
/// Decoding starts `offset` into the file and stops after `duration`, or at
/// the end of the file when `duration` is `None` or reaches past it. Both are
/// converted to whole frames at the file's sample rate.
///
/// # Errors
/// Returns [`AudioSpectraError::InvalidInput`] if a non-zero `offset` lies at
/// or past the end of the file or the requested segment covers no frames (a
/// `duration` that rounds to zero frames, or an empty file), and
/// [`AudioSpectraError::Wav`] for decode failures. An empty signal is never
/// returned.
pub fn read_wav_segment<F: RealFloat, P: AsRef<Path>>(
    path: P,
    offset: Duration,
    duration: Option<Duration>,
) -> AudioSpectraResult<Signal<F>> {
    let mut reader = hound::WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(AudioSpectraError::InvalidInput(
            "WAV file reports zero channels".to_string(),
        ));
    }
    let total_frames = reader.duration() as usize;

    let start_frame = (offset.as_secs_f64() * f64::from(sample_rate)).round() as usize;
    if start_frame > 0 && start_frame >= total_frames {
        return Err(AudioSpectraError::InvalidInput(format!(
            "Segment offset ({:.3} s) is past the end of the file ({} frames at {} Hz)",
            offset.as_secs_f64(),
            total_frames,
            sample_rate
        )));
    }

    let remaining = total_frames - start_frame.min(total_frames);
    let frame_count = match duration {
        Some(d) => ((d.as_secs_f64() * f64::from(sample_rate)).round() as usize).min(remaining),
        None => remaining,
    };
    if frame_count == 0 {
        return Err(AudioSpectraError::InvalidInput(match duration {
            Some(d) => format!(
                "Segment duration ({:.3} s) covers no frames at {} Hz",
                d.as_secs_f64(),
                sample_rate
            ),
            None => "WAV file contains no frames".to_string(),
        }));
    }

    let skip = start_frame * channels;
    let take = frame_count * channels;

    let samples: Vec<F> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .skip(skip)
            .take(take)
            .map(|s| s.map(|v| to_precision::<F, _>(v) / to_precision::<F, _>(i16::MAX)))
            .collect::<Result<_, _>>()?,
        (hound::SampleFormat::Int, 24) => reader
            .samples::<i32>()
            .skip(skip)
            .take(take)
            .map(|s| s.map(|v| to_precision::<F, _>(v) / to_precision::<F, _>(1 << 23)))
            .collect::<Result<_, _>>()?,
        (hound::SampleFormat::Int, 32) => reader
            .samples::<i32>()
            .skip(skip)
            .take(take)
            .map(|s| s.map(|v| to_precision::<F, _>(v) / to_precision::<F, _>(i32::MAX)))
            .collect::<Result<_, _>>()?,
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .skip(skip)
            .take(take)
            .map(|s| s.map(to_precision::<F, _>))
            .collect::<Result<_, _>>()?,
        (format, bits) => {
            return Err(AudioSpectraError::InvalidInput(format!(
                "Unsupported WAV format: {format:?} at {bits} bits per sample"
            )));
        }
    };

    // Down-mix to mono
    let mono_samples: Vec<F> = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| {
                frame.iter().fold(F::zero(), |acc, &s| acc + s)
                    / to_precision::<F, _>(channels)
            })
            .collect()
    } else {
        samples
    };

    debug!(
        "Decoded {} frames at {} Hz ({} channels) from {}",
        mono_samples.len(),
        sample_rate,
        channels,
        path.as_ref().display()
    );

    Ok(Signal::from_vec(mono_samples, sample_rate))
}

/// Writes a mono signal as a 16-bit integer PCM WAV file.
///
/// Samples are clamped to `[-1.0, 1.0]` before quantization, so out-of-range
/// values saturate instead of wrapping.
///
/// # Errors
/// Returns [`AudioSpectraError::Wav`] if the file cannot be created or
/// written.
pub fn write_wav<F: RealFloat, P: AsRef<Path>>(
    path: P,
    signal: &Signal<F>,
) -> AudioSpectraResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in signal.samples() {
        let clamped = sample.max(-F::one()).min(F::one());
        let scaled = to_precision::<f32, _>(clamped) * f32::from(i16::MAX);
        writer.write_sample(scaled as i16)?;
    }
    writer.finalize()?;

    debug!(
        "Wrote {} samples at {} Hz to {}",
        signal.len(),
        signal.sample_rate(),
        path.as_ref().display()
    );
    Ok(())
}
