//! Sample grids for sweeps.

/// Generate `n` geometrically spaced values from `a` to `b`.
///
/// `x_i = 10^(log10(a) + i * step)` with `step = (log10(b) - log10(a)) / (n - 1)`,
/// so the first value is `a` and the last is `b` up to rounding.
///
/// Requires `0 < a < b` and `n >= 2`; the result is meaningless otherwise.
pub fn logspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "logspace needs at least two points");
    debug_assert!(a > 0.0 && b > 0.0, "logspace bounds must be positive");

    let la = a.log10();
    let lb = b.log10();
    let step = (lb - la) / (n - 1) as f64;
    (0..n).map(|i| 10f64.powf(la + step * i as f64)).collect()
}

/// Generate `n` evenly spaced values from `0` to `stop`.
///
/// Sample `i` is `i * (stop / (n - 1))`.
pub fn linspace_from_zero(stop: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "linspace needs at least two points");

    let step = stop / (n - 1) as f64;
    (0..n).map(|i| i as f64 * step).collect()
}
