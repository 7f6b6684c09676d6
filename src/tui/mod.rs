//! Ratatui-based Tauc plot viewer.
//!
//! Read-only: shows the chart and the estimate until `q` or `Esc`.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::error::TaucError;
use crate::plot::TaucPlot;

mod plotters_chart;

use plotters_chart::TaucPlottersChart;

/// Show `plot` full-screen until the user closes it.
pub fn show(plot: &TaucPlot) -> Result<(), TaucError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| terminal_error(format!("failed to initialize terminal: {e}")))?;

    Viewer { plot }.event_loop(&mut terminal)
}

fn terminal_error(message: String) -> TaucError {
    TaucError::file("<terminal>", message)
}

/// Restores raw mode and the main screen on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, TaucError> {
        enable_raw_mode().map_err(|e| terminal_error(format!("failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(terminal_error(format!("failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Viewer<'a> {
    plot: &'a TaucPlot,
}

impl Viewer<'_> {
    fn event_loop<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), TaucError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| terminal_error(format!("draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100)).map_err(|e| terminal_error(format!("event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| terminal_error(format!("event read error: {e}")))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let gap_style = if self.plot.intercept.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut gap = format!("Eg ≈ {:.3} eV", self.plot.band_gap_ev);
        if self.plot.intercept.is_none() {
            gap.push_str(" (outside measured range)");
        }

        let lines = vec![
            Line::from(vec![Span::styled(gap, gap_style), Span::raw(format!("  {}", self.plot.title))]),
            Line::from(Span::styled(self.plot.subtitle.as_str(), Style::default().fg(Color::Gray))),
        ];
        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Tauc plot").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let widget = TaucPlottersChart {
            points: &self.plot.points,
            edge: &self.plot.edge,
            fit_line: &self.plot.fit_line,
            intercept: self.plot.intercept,
            x_bounds: self.plot.x_bounds,
            y_bounds: self.plot.y_bounds,
            x_label: self.plot.x_label,
            y_label: self.plot.y_label,
            fmt_x: fmt_energy,
            fmt_y: fmt_tauc,
        };
        frame.render_widget(widget, inner);
    }
}

fn draw_footer(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::styled("q/Esc close", Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled("white: data  orange: edge window  red: fit", Style::default().fg(Color::Gray)),
    ]);
    let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn fmt_energy(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_tauc(v: f64) -> String {
    format!("{v:.2}")
}
