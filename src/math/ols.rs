//! Closed-form simple linear regression.
//!
//! The Tauc fit is a single straight line, so the normal equations reduce to
//! sums over centred values:
//!
//! ```text
//! slope     = Σ (x_i - x̄)(y_i - ȳ) / Σ (x_i - x̄)^2
//! intercept = ȳ - slope · x̄
//! ```
//!
//! Centering before accumulating keeps the result stable when energies are
//! large compared with their spread.

/// Raw statistics of a straight-line least squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Fit `y = slope · x + intercept`.
///
/// Returns `None` when there are fewer than two points, the lengths differ,
/// or the x-values have zero variance.
pub fn fit_line(x: &[f64], y: &[f64]) -> Option<LineFit> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return None;
    }

    let n_f = n as f64;
    let x_mean = x.iter().sum::<f64>() / n_f;
    let y_mean = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if !(sxx.is_finite() && sxx > 0.0) {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let sse: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - (slope * xi + intercept);
            r * r
        })
        .sum();

    // A constant y is fitted exactly by the zero-slope line.
    let r_squared = if syy > 0.0 {
        1.0 - sse / syy
    } else if sse == 0.0 {
        1.0
    } else {
        0.0
    };

    Some(LineFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let fit = fit_line(&[0.0, 1.0, 2.0], &[2.0, 5.0, 8.0]).unwrap();
        assert!((fit.intercept - 2.0).abs() < 1e-12);
        assert!((fit.slope - 3.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_line_has_r_squared_below_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.1, 1.9, 3.2, 3.8];
        let fit = fit_line(&x, &y).unwrap();
        // Hand-computed: Sxy = 4.7, Sxx = 5.0
        assert!((fit.slope - 0.94).abs() < 1e-12);
        assert!((fit.intercept - 0.15).abs() < 1e-12);
        assert!(fit.r_squared < 1.0 && fit.r_squared > 0.9);
    }

    #[test]
    fn zero_x_variance_is_rejected() {
        assert!(fit_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(fit_line(&[1.0], &[1.0]).is_none());
    }

    #[test]
    fn constant_y_gives_zero_slope() {
        let fit = fit_line(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 1.0);
    }
}
