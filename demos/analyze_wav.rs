//! WAV Analysis Example
//!
//! Scans a directory for WAV files, loads a five second excerpt from the
//! first one, and renders both its waveform and a log-scale spectrogram with
//! the dominant frequency of every frame marked in red.
//!
//! Run with: `cargo run --example analyze_wav -- path/to/audio/dir`
//! (defaults to `./audio` when no directory is given)

use audio_spectra::{
    AudioSpectraError, AudioSpectraResult, FrequencyScale, PlotOptions, SpectrogramAnalyzer,
    read_wav, read_wav_segment, render_spectrogram, render_waveform,
};
use std::path::PathBuf;
use std::time::Duration;

fn main() -> AudioSpectraResult<()> {
    println!("🎵 WAV Analysis Example");
    println!("=======================\n");

    let audio_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./audio".to_string());

    let Some(wav_path) = first_wav_in(&audio_dir) else {
        println!("No .wav files found in {audio_dir}");
        println!("Pass a directory containing WAV files as the first argument.");
        return Ok(());
    };
    println!("📂 {}", wav_path.display());

    // Take a five second excerpt starting at 15s, or the whole clip if it is
    // too short for that.
    let audio = match read_wav_segment::<f64, _>(
        &wav_path,
        Duration::from_secs(15),
        Some(Duration::from_secs(5)),
    ) {
        Ok(audio) => audio,
        Err(AudioSpectraError::InvalidInput(_)) => {
            println!("   Clip is shorter than 15 seconds, reading it whole");
            read_wav::<f64, _>(&wav_path)?
        }
        Err(err) => return Err(err),
    };

    println!("📊 Signal Information:");
    println!("   Sample rate: {} Hz", audio.sample_rate());
    println!("   Samples: {}", audio.len());
    println!("   Duration: {:.3} seconds", audio.duration_seconds());
    println!("   Peak amplitude: {:.4}", audio.peak());
    println!();

    let analysis = SpectrogramAnalyzer::default().analyze(&audio)?;
    let spectrogram = analysis.spectrogram();
    let peaks = analysis.peaks();

    println!("📈 Analysis:");
    println!(
        "   Grid: {} frequency bins x {} frames",
        spectrogram.num_bins(),
        spectrogram.num_frames()
    );
    let strongest = peaks
        .frequencies()
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    println!("   Highest per-frame peak: {strongest:.1} Hz");
    println!();

    let spectrogram_options = PlotOptions {
        title: "Spectrogram with Maximum Frequencies".to_string(),
        frequency_scale: FrequencyScale::Log,
        ..PlotOptions::default()
    };
    render_spectrogram(&analysis, "wav_spectrogram.png", &spectrogram_options)?;
    println!("💾 Saved wav_spectrogram.png");

    let waveform_options = PlotOptions {
        title: "Waveform".to_string(),
        ..PlotOptions::default()
    };
    render_waveform(&audio, "wav_waveform.png", &waveform_options)?;
    println!("💾 Saved wav_waveform.png");

    Ok(())
}

// First .wav in the directory, in name order so runs are deterministic.
fn first_wav_in(dir: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut wavs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        })
        .collect();
    wavs.sort();
    wavs.into_iter().next()
}
