//! Chirp Spectrogram Example
//!
//! Generates a five second linear chirp sweeping from 100 Hz to 1000 Hz,
//! analyzes it, and renders the spectrogram with the per-frame peak
//! frequencies overlaid. The peak track should climb steadily across the
//! image, tracing the sweep.
//!
//! Run with: `cargo run --example chirp_spectrogram`

use audio_spectra::{
    AudioSpectraResult, PlotOptions, SpectrogramAnalyzer, chirp, render_spectrogram,
};
use std::time::Duration;

fn main() -> AudioSpectraResult<()> {
    println!("🎵 Chirp Spectrogram Example");
    println!("============================\n");

    let sample_rate = 44100;
    let audio = chirp::<f64>(100.0, 1000.0, Duration::from_secs(5), sample_rate, 1.0);

    println!("📊 Signal Information:");
    println!("   Sample rate: {} Hz", audio.sample_rate());
    println!("   Samples: {}", audio.len());
    println!("   Duration: {:.3} seconds", audio.duration_seconds());
    println!();

    let analyzer = SpectrogramAnalyzer::new(512, 256)?;
    let analysis = analyzer.analyze(&audio)?;
    let spectrogram = analysis.spectrogram();

    println!("📈 Analysis:");
    println!(
        "   Grid: {} frequency bins x {} frames",
        spectrogram.num_bins(),
        spectrogram.num_frames()
    );
    println!(
        "   Bin width: {:.2} Hz",
        spectrogram.frequencies()[1] - spectrogram.frequencies()[0]
    );

    let peaks = analysis.peaks();
    println!(
        "   Peak frequency: {:.1} Hz in the first frame, {:.1} Hz in the last",
        peaks.frequencies()[0],
        peaks.frequencies()[peaks.len() - 1]
    );
    println!();

    let options = PlotOptions {
        title: "Spectrogram of Chirp Signal".to_string(),
        ..PlotOptions::default()
    };
    render_spectrogram(&analysis, "chirp_spectrogram.png", &options)?;
    println!("💾 Saved chirp_spectrogram.png");

    Ok(())
}
