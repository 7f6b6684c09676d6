//! Finite differences on sampled curves.

/// Forward-difference slopes `(y[k+1] - y[k]) / (x[k+1] - x[k])`.
///
/// Output has `len - 1` entries. A segment of zero (or negative) width carries
/// no slope information and yields `0.0`.
pub fn forward_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| {
            let dx = xs[1] - xs[0];
            if dx > 0.0 { (ys[1] - ys[0]) / dx } else { 0.0 }
        })
        .collect()
}

/// Prefix sums with a leading zero, so `sum(v[a..b]) = p[b] - p[a]`.
pub fn prefix_sums(v: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(v.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for &x in v {
        acc += x;
        out.push(acc);
    }
    out
}
