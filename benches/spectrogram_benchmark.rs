//! Benchmark for spectrogram analysis across window sizes
//!
//! This benchmark validates that:
//! 1. Short clips stay well under interactive latency budgets
//! 2. Analysis cost scales roughly linearly with signal duration
//! 3. Larger windows trade frame count against per-frame FFT cost

use audio_spectra::{SpectrogramAnalyzer, sine_wave};
use std::time::{Duration, Instant};

/// Benchmark a full analysis (STFT, dB conversion, peak extraction)
fn benchmark_analysis(duration_seconds: f64, window_size: usize, label: &str) {
    let sample_rate = 44100;
    let audio = sine_wave::<f64>(
        440.0,
        Duration::from_secs_f64(duration_seconds),
        sample_rate,
        0.5,
    );
    let overlap = window_size / 2;
    let analyzer = SpectrogramAnalyzer::new(window_size, overlap)
        .expect("benchmark parameters are valid");

    println!(
        "Benchmarking {}: {:.1}s audio, {} samples, window {}, overlap {}",
        label,
        duration_seconds,
        audio.len(),
        window_size,
        overlap
    );

    // Warm up
    for _ in 0..3 {
        let _ = analyzer.analyze(&audio);
    }

    // Benchmark runs
    let num_runs = 10;
    let mut times = Vec::new();
    let mut num_frames = 0;

    for _ in 0..num_runs {
        let start = Instant::now();
        let result = analyzer.analyze(&audio);
        let elapsed = start.elapsed();

        assert!(result.is_ok(), "Analysis failed");
        if let Ok(analysis) = result {
            num_frames = analysis.spectrogram().num_frames();
        }
        times.push(elapsed.as_secs_f64() * 1000.0); // Convert to milliseconds
    }

    // Calculate statistics
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let median = times[times.len() / 2];
    let min = times[0];
    let max = times[times.len() - 1];
    let std_dev =
        (times.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / times.len() as f64).sqrt();

    println!(
        "Results: {:.2}ms ± {:.2}ms (median: {:.2}ms, range: {:.2}-{:.2}ms)",
        mean, std_dev, median, min, max
    );
    println!(
        "         {} frames, {:.1} µs/frame",
        num_frames,
        mean * 1000.0 / num_frames.max(1) as f64
    );
    println!();
}

fn main() {
    println!("🎵 AudioSpectra Spectrogram Benchmark");
    println!("=====================================");
    println!();

    // Sweep durations at the default window, then windows at a fixed duration
    let duration_cases = vec![
        (0.5, 256, "Very Short"),
        (1.0, 256, "Short"),
        (5.0, 256, "Medium"),
        (30.0, 256, "Long"),
    ];

    for (duration, window_size, label) in duration_cases {
        benchmark_analysis(duration, window_size, label);
    }

    let window_cases = vec![
        (5.0, 512, "Window 512"),
        (5.0, 1024, "Window 1024"),
        (5.0, 4096, "Window 4096"),
    ];

    for (duration, window_size, label) in window_cases {
        benchmark_analysis(duration, window_size, label);
    }

    println!("🏁 Benchmark Complete!");
}
