//! Rendering of a segmented raw-signal trace to a PNG.
use crate::segmentation::Span;
use log::*;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 600;
const SHADE_ALPHA: f64 = 0.35;

fn to_io_error<E: std::fmt::Display>(err: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

/// Draw the signal as a line over sample index and shade each segmentation
/// span with its region color. The signal must be nonempty.
pub fn render<P: AsRef<Path>>(
    signal: &[f64],
    spans: &[Span; 5],
    readname: &str,
    out: P,
) -> std::io::Result<()> {
    let out = out.as_ref();
    debug!("Rendering {} samples to {}", signal.len(), out.display());
    let min = signal.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = signal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Headroom so the trace does not touch the frame.
    let pad = (max - min).max(1.) * 0.05;
    let (y_min, y_max) = (min - pad, max + pad);
    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(to_io_error)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Segmentation: {}", readname), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..signal.len() as f64, y_min..y_max)
        .map_err(to_io_error)?;
    chart
        .configure_mesh()
        .x_desc("Sample Index (3' to 5')")
        .y_desc("Current (pA)")
        .draw()
        .map_err(to_io_error)?;
    for span in spans.iter() {
        let (r, g, b) = span.region.color();
        let color = RGBColor(r, g, b).mix(SHADE_ALPHA);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(span.start as f64, y_min), (span.end as f64, y_max)],
                color.filled(),
            )))
            .map_err(to_io_error)?
            .label(span.region.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }
    let trace = signal
        .iter()
        .enumerate()
        .map(|(idx, &sample)| (idx as f64, sample));
    chart
        .draw_series(LineSeries::new(trace, &BLACK))
        .map_err(to_io_error)?;
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_io_error)?;
    root.present().map_err(to_io_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::partition;
    use definitions::{PolyaRecord, QcTag};

    #[test]
    fn render_writes_a_png() {
        let record = PolyaRecord {
            readname: "read-1".to_string(),
            qc_tag: QcTag::Pass,
            polya_length: 30.,
            leader_start: 10,
            adapter_start: 50,
            polya_start: 120,
            transcript_start: 300,
        };
        let signal: Vec<f64> = (0..500).map(|i| 80. + (i as f64 / 10.).sin() * 5.).collect();
        let spans = partition(&record, signal.len() as u64);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("segmentation.read-1.png");
        render(&signal, &spans, "read-1", &out).unwrap();
        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0);
    }
}
