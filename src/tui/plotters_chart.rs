//! Plotters-powered Tauc chart widget for Ratatui.
//!
//! Plotters gives us axes, tick labels and line drawing that Ratatui's own
//! `Chart` widget would need by hand. Its output is drawn into the Ratatui
//! buffer through `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Render-only chart description.
///
/// All series and bounds come from [`crate::plot::TaucPlot`], so this widget
/// draws exactly what the ASCII and file renderers draw.
pub struct TaucPlottersChart<'a> {
    /// Every Tauc point, `(energy, tauc_y)`.
    pub points: &'a [(f64, f64)],
    /// Points inside the fitted window (drawn over `points`' colour).
    pub edge: &'a [(f64, f64)],
    /// Fitted line, extended to the intercept when one is plotted.
    pub fit_line: &'a [(f64, f64)],
    /// `(Eg, 0)` when the estimate lies in the measured energy range.
    pub intercept: Option<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl Widget for TaucPlottersChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters fails to lay out a chart in a tiny area. Show a hint
        // instead of an empty or broken frame.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        // The backend draws through Ratatui's `Canvas`; `widget_fn` keeps its
        // backend types out of this module.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Tauc ordinates run to several digits, so the left label
                // area is wider than the bottom one.
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Mesh lines are noise at terminal resolution; axes and ticks suffice.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let fit_color = RGBColor(255, 0, 0);
            let edge_color = RGBColor(255, 165, 0);
            let axis_color = RGBColor(128, 128, 128);

            // Draw order matters: later series overwrite earlier cells.
            // 1) y = 0 so the intercept reads against it, then the fit.
            chart.draw_series(LineSeries::new([(x0, 0.0), (x1, 0.0)], &axis_color))?;
            chart.draw_series(LineSeries::new(self.fit_line.iter().copied(), &fit_color))?;

            // 2) Data, then the edge window over it.
            //
            // No `Circle` markers here. `plotters-ratatui-backend` maps circle
            // radii from pixels straight into normalized canvas units, so even a
            // radius of 1 covers a large part of the chart. A coloured `Pixel`
            // stays one dot and cleanly overrides the white base point.
            chart.draw_series(self.points.iter().map(|&p| Pixel::new(p, WHITE)))?;
            chart.draw_series(self.edge.iter().map(|&p| Pixel::new(p, edge_color)))?;

            // 3) Band gap marker on the energy axis.
            if let Some(marker) = self.intercept {
                chart.draw_series(std::iter::once(Cross::new(marker, 1, &CYAN)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
