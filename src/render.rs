//! Static PNG rendering for analyses and waveforms.
//!
//! Spectrograms are drawn as one filled rectangle per grid cell on a viridis
//! color ramp, with the per-frame peak frequencies optionally overlaid as red
//! markers and an intensity bar along the right edge. Waveforms are drawn as
//! a decimated line series. Rendering never feeds back into analysis; these
//! functions only consume what the analyzer produced.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::utils::audio_math::log_frequency_axis;
use crate::{
    Analysis, AudioSpectraError, AudioSpectraResult, RealFloat, Signal, to_precision,
};

/// Scale used for the frequency axis of spectrogram plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrequencyScale {
    /// Bin center frequencies plotted as-is.
    #[default]
    Linear,
    /// Bin center frequencies compressed through
    /// [`log_frequency_axis`](crate::log_frequency_axis) before plotting.
    Log,
}

/// Options controlling plot output.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Title drawn across the top of the chart. An empty string draws none.
    pub title: String,
    /// Frequency axis scale for spectrogram plots.
    pub frequency_scale: FrequencyScale,
    /// Whether to overlay per-frame peak markers on spectrogram plots.
    pub draw_peaks: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            title: "Spectrogram".to_string(),
            frequency_scale: FrequencyScale::Linear,
            draw_peaks: true,
        }
    }
}

// Viridis control points, dark-to-bright. Intermediate values are linearly
// interpolated, which stays within a couple of counts of the reference ramp.
const VIRIDIS_ANCHORS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Maps a normalized magnitude in `[0, 1]` to a viridis color.
fn viridis(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
    let frac = scaled - idx as f64;

    let (r0, g0, b0) = VIRIDIS_ANCHORS[idx];
    let (r1, g1, b1) = VIRIDIS_ANCHORS[idx + 1];
    let lerp =
        |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

// Cell boundaries around each axis value: midpoints between neighbors, with
// the first and last cells extended half a step outward. A lone value gets a
// unit-wide cell.
fn cell_edges(values: &[f64]) -> Vec<f64> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![values[0] - 0.5, values[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(values[0] - (values[1] - values[0]) / 2.0);
            for pair in values.windows(2) {
                edges.push((pair[0] + pair[1]) / 2.0);
            }
            edges.push(values[n - 1] + (values[n - 1] - values[n - 2]) / 2.0);
            edges
        }
    }
}

fn to_render_error<E: std::error::Error>(err: E) -> AudioSpectraError {
    AudioSpectraError::Render(err.to_string())
}

/// Renders an analysis as a spectrogram heatmap PNG.
///
/// Cells are colored by decibel magnitude normalized over the grid's own
/// range. When [`PlotOptions::draw_peaks`] is set, each frame's dominant
/// frequency is overlaid as a red marker, and the legend names the series.
/// With [`FrequencyScale::Log`] both the cells and the peak markers are
/// positioned on the transformed axis.
///
/// # Errors
/// Returns [`AudioSpectraError::Render`] if the backend cannot draw or save
/// the image.
///
/// # Examples
/// ```no_run
/// use audio_spectra::{PlotOptions, SpectrogramAnalyzer, render_spectrogram, sine_wave};
/// use std::time::Duration;
///
/// let audio = sine_wave::<f64>(440.0, Duration::from_secs(1), 8000, 0.8);
/// let analysis = SpectrogramAnalyzer::new(256, 128)
///     .unwrap()
///     .analyze(&audio)
///     .unwrap();
/// render_spectrogram(&analysis, "spectrogram.png", &PlotOptions::default()).unwrap();
/// ```
pub fn render_spectrogram<F: RealFloat, P: AsRef<Path>>(
    analysis: &Analysis<F>,
    path: P,
    options: &PlotOptions,
) -> AudioSpectraResult<()> {
    let spec = analysis.spectrogram();
    debug!(
        "Rendering {} x {} spectrogram to {}",
        spec.num_bins(),
        spec.num_frames(),
        path.as_ref().display()
    );

    let times: Vec<f64> = spec
        .times()
        .iter()
        .map(|&t| to_precision::<f64, _>(t))
        .collect();
    let freqs_hz: Vec<f64> = spec
        .frequencies()
        .iter()
        .map(|&f| to_precision::<f64, _>(f))
        .collect();
    let freq_axis = match options.frequency_scale {
        FrequencyScale::Linear => freqs_hz,
        FrequencyScale::Log => log_frequency_axis(&freqs_hz),
    };

    let t_edges = cell_edges(&times);
    let f_edges = cell_edges(&freq_axis);

    // Normalize colors over the grid's own dynamic range.
    let mut db_min = f64::INFINITY;
    let mut db_max = f64::NEG_INFINITY;
    for &v in spec.magnitudes_db() {
        let v = to_precision::<f64, _>(v);
        db_min = db_min.min(v);
        db_max = db_max.max(v);
    }
    let db_span = (db_max - db_min).max(1e-12);

    let root =
        BitMapBackend::new(path.as_ref(), (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_error)?;
    let (chart_area, bar_area) = root.split_horizontally(options.width.saturating_sub(70) as i32);

    let mut builder = ChartBuilder::on(&chart_area);
    builder.margin(10).x_label_area_size(30).y_label_area_size(40);
    if !options.title.is_empty() {
        builder.caption(&options.title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(
            t_edges[0]..t_edges[t_edges.len() - 1],
            f_edges[0]..f_edges[f_edges.len() - 1],
        )
        .map_err(to_render_error)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(match options.frequency_scale {
            FrequencyScale::Linear => "Frequency (Hz)",
            FrequencyScale::Log => "Frequency (log scale)",
        })
        .draw()
        .map_err(to_render_error)?;

    let grid = spec.magnitudes_db();
    chart
        .draw_series(
            (0..spec.num_bins())
                .flat_map(|bin| (0..spec.num_frames()).map(move |frame| (bin, frame)))
                .map(|(bin, frame)| {
                    let db = to_precision::<f64, _>(grid[[bin, frame]]);
                    let norm = (db - db_min) / db_span;
                    Rectangle::new(
                        [
                            (t_edges[frame], f_edges[bin]),
                            (t_edges[frame + 1], f_edges[bin + 1]),
                        ],
                        viridis(norm).filled(),
                    )
                }),
        )
        .map_err(to_render_error)?;

    if options.draw_peaks {
        let peak_points: Vec<(f64, f64)> = analysis
            .peaks()
            .bins()
            .iter()
            .enumerate()
            .map(|(frame, &bin)| (times[frame], freq_axis[bin]))
            .collect();
        chart
            .draw_series(
                peak_points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, RED.filled())),
            )
            .map_err(to_render_error)?
            .label("Peak frequency")
            .legend(|(x, y)| Circle::new((x, y), 3, RED.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(to_render_error)?;
    }

    draw_intensity_bar(&bar_area, db_min, db_max)?;

    chart_area.present().map_err(to_render_error)?;
    Ok(())
}

// Vertical viridis ramp with the dB range labeled at both ends, standing in
// for a full colorbar.
fn draw_intensity_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    db_min: f64,
    db_max: f64,
) -> AudioSpectraResult<()> {
    let (_, height) = area.dim_in_pixel();
    let top = 45i32;
    let bottom = height as i32 - 35;
    if bottom <= top {
        return Ok(());
    }

    for y in top..bottom {
        let frac = 1.0 - f64::from(y - top) / f64::from(bottom - top - 1).max(1.0);
        area.draw(&Rectangle::new(
            [(8, y), (28, y + 1)],
            viridis(frac).filled(),
        ))
        .map_err(to_render_error)?;
    }

    area.draw(&Text::new(
        format!("{db_max:.0}"),
        (32, top - 6),
        ("sans-serif", 12),
    ))
    .map_err(to_render_error)?;
    area.draw(&Text::new(
        format!("{db_min:.0}"),
        (32, bottom - 6),
        ("sans-serif", 12),
    ))
    .map_err(to_render_error)?;
    area.draw(&Text::new("dB", (8, 20), ("sans-serif", 12)))
        .map_err(to_render_error)?;
    Ok(())
}

/// Renders a signal's waveform as a PNG line plot.
///
/// Long signals are decimated to roughly four points per horizontal pixel
/// before drawing; the amplitude axis is scaled to the signal's own peak.
///
/// # Errors
/// Returns [`AudioSpectraError::InvalidInput`] for an empty signal or a zero
/// sample rate, and [`AudioSpectraError::Render`] if the backend cannot draw
/// or save the image.
pub fn render_waveform<F: RealFloat, P: AsRef<Path>>(
    signal: &Signal<F>,
    path: P,
    options: &PlotOptions,
) -> AudioSpectraResult<()> {
    if signal.is_empty() {
        return Err(AudioSpectraError::InvalidInput(
            "Signal is empty".to_string(),
        ));
    }
    if signal.sample_rate() == 0 {
        return Err(AudioSpectraError::InvalidInput(
            "Sample rate must be greater than 0".to_string(),
        ));
    }
    debug!(
        "Rendering waveform of {} samples to {}",
        signal.len(),
        path.as_ref().display()
    );

    let sample_rate = f64::from(signal.sample_rate());
    let max_points = options.width as usize * 4;
    let step = (signal.len() / max_points.max(1)).max(1);

    let points: Vec<(f64, f64)> = signal
        .samples()
        .iter()
        .step_by(step)
        .enumerate()
        .map(|(i, &s)| {
            (
                (i * step) as f64 / sample_rate,
                to_precision::<f64, _>(s),
            )
        })
        .collect();

    let amp = to_precision::<f64, _>(signal.peak()).max(1e-3) * 1.1;
    let duration = signal.len() as f64 / sample_rate;

    let root =
        BitMapBackend::new(path.as_ref(), (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(10).x_label_area_size(30).y_label_area_size(40);
    if !options.title.is_empty() {
        builder.caption(&options.title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..duration, -amp..amp)
        .map_err(to_render_error)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Amplitude")
        .draw()
        .map_err(to_render_error)?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(to_render_error)?;

    root.present().map_err(to_render_error)?;
    Ok(())
}
