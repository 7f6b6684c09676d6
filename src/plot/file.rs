//! Saved plot images.
//!
//! Only `.svg` is written: plotters is built without a font backend, and the
//! SVG backend is the one that emits text itself. Any other extension is
//! rejected before a file is created.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::TaucPlot;
use crate::error::TaucError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, TaucError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(Self::Svg),
            "" => Err(TaucError::file(path, "plot output needs a .svg extension")),
            other => Err(TaucError::file(
                path,
                format!("unsupported plot format '.{other}' (only .svg is supported)"),
            )),
        }
    }
}

/// Draw `plot` into an image file at `path`.
pub fn save_plot(plot: &TaucPlot, path: &Path, size: (u32, u32)) -> Result<(), TaucError> {
    match ImageFormat::from_path(path)? {
        ImageFormat::Svg => draw_tauc(SVGBackend::new(path, size).into_drawing_area(), plot)
            .map_err(|e| TaucError::file(path, format!("cannot draw plot: {e}"))),
    }
}

fn draw_tauc<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    plot: &TaucPlot,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let [x0, x1] = plot.x_bounds;
    let [y0, y1] = plot.y_bounds;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&plot.title, ("sans-serif", 22))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_label)
        .y_desc(plot.y_label)
        .x_label_formatter(&|v| format!("{v:.2}"))
        .y_label_formatter(&|v| format!("{v:.3}"))
        .draw()?;

    let data_color = RGBColor(70, 110, 180);
    let edge_color = RGBColor(230, 120, 20);

    chart
        .draw_series(plot.points.iter().map(|&p| Circle::new(p, 3, data_color.filled())))?
        .label("Tauc data")
        .legend(move |(x, y)| Circle::new((x, y), 3, data_color.filled()));

    chart
        .draw_series(plot.edge.iter().map(|&p| Circle::new(p, 4, edge_color.filled())))?
        .label("Edge window")
        .legend(move |(x, y)| Circle::new((x, y), 4, edge_color.filled()));

    chart
        .draw_series(LineSeries::new(plot.fit_line.iter().copied(), RED.stroke_width(2)))?
        .label("Linear fit")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    // Energy axis, so the intercept reads against y = 0.
    chart.draw_series(LineSeries::new([(x0, 0.0), (x1, 0.0)], BLACK.mix(0.4)))?;

    if let Some(marker) = plot.intercept {
        chart
            .draw_series(std::iter::once(Cross::new(marker, 7, BLACK.stroke_width(2))))?
            .label(format!("Eg = {:.3} eV", plot.band_gap_ev))
            .legend(|(x, y)| Cross::new((x + 10, y), 5, BLACK.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EdgeOptions, Spectrum, TransitionType};
    use crate::fit::analyze;

    fn scenario_plot() -> TaucPlot {
        let spectrum = Spectrum::from_pairs(&[(300.0, 0.1), (350.0, 0.3), (400.0, 0.8), (450.0, 0.95), (500.0, 0.97)]);
        let run = analyze(&spectrum, TransitionType::Direct, &EdgeOptions::default()).unwrap();
        TaucPlot::new(&run.points, &run.fit, &run.estimate)
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tauc-gap-{}-{name}", std::process::id()))
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.svg")).unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.SVG")).unwrap(), ImageFormat::Svg);
        for name in ["a.png", "a.jpg", "a.jpeg", "a.bmp", "a.pdf", "plot"] {
            assert!(
                matches!(ImageFormat::from_path(Path::new(name)), Err(TaucError::File { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn every_supported_extension_is_written() {
        let plot = scenario_plot();
        for name in ["plot.svg", "plot-upper.SVG"] {
            let path = temp_path(name);
            save_plot(&plot, &path, (640, 480)).unwrap();
            let text = std::fs::read_to_string(&path).unwrap();
            std::fs::remove_file(&path).ok();

            assert!(!text.is_empty(), "{name}");
            assert!(text.starts_with("<svg"), "{name}");
            assert!(text.contains("Photon energy (eV)"), "{name}");
        }
    }

    #[test]
    fn raster_output_is_a_file_error_and_writes_nothing() {
        let plot = scenario_plot();
        for name in ["plot.png", "plot.jpg", "plot.bmp"] {
            let path = temp_path(name);
            let err = save_plot(&plot, &path, (640, 480)).unwrap_err();
            assert!(matches!(err, TaucError::File { .. }), "{name}: {err}");
            assert_eq!(err.exit_code(), 2);
            assert!(!path.exists(), "{name}");
        }
    }
}
