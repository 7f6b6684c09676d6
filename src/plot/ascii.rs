//! ASCII plotting for terminal output.
//!
//! Fixed-size grid, deterministic output (golden tests rely on it).
//!
//! Plot elements:
//! - Tauc points: `o`
//! - points inside the fitted edge window: `*`
//! - fitted line: `-`
//! - band gap intercept on the energy axis: `X`

use super::TaucPlot;

/// Render a Tauc plot as text, `width` columns by `height` rows plus a header.
pub fn render_ascii_plot(plot: &TaucPlot, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let [x_min, x_max] = plot.x_bounds;
    let [y_min, y_max] = plot.y_bounds;

    let mut grid = vec![vec![' '; width]; height];

    // Line first so the markers overlay it.
    draw_polyline(&mut grid, &plot.fit_line, plot.x_bounds, plot.y_bounds);

    for (series, ch) in [(&plot.points, 'o'), (&plot.edge, '*')] {
        for &(x, y) in series {
            let col = map_x(x, x_min, x_max, width);
            let row = map_y(y, y_min, y_max, height);
            grid[row][col] = ch;
        }
    }

    if let Some((x, y)) = plot.intercept {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'X';
    }

    let mut out = format!(
        "Tauc plot: E=[{x_min:.3}, {x_max:.3}] eV | y=[{y_min:.2}, {y_max:.2}] | Eg ≈ {:.3} eV{}\n",
        plot.band_gap_ev,
        if plot.intercept.is_some() { "" } else { " (outside measured range)" }
    );
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // row 0 is the top
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], line: &[(f64, f64)], x_bounds: [f64; 2], y_bounds: [f64; 2]) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    let cells: Vec<(usize, usize)> = line
        .iter()
        .map(|&(x, y)| {
            (
                map_x(x, x_bounds[0], x_bounds[1], width),
                map_y(y, y_bounds[0], y_bounds[1], height),
            )
        })
        .collect();

    for pair in cells.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        draw_line(grid, x0, y0, x1, y1, '-');
    }
}

/// Integer line drawing (Bresenham).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
