//! Continuous distributions sampled from a uniform `Rng`.

use rand::Rng;

/// Draw from `Exponential` with the given scale (mean) by inverse transform.
pub fn sample_exponential<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> f64 {
    // gen::<f64>() is in [0, 1), so 1 - u is in (0, 1] and ln stays finite.
    let u: f64 = rng.gen();
    -scale * (1.0 - u).ln()
}

/// Draw from `Normal(mean, std_dev)` using the Box-Muller transform.
/// A zero or non-finite `std_dev` returns `mean` exactly.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 || !std_dev.is_finite() {
        return mean;
    }
    let u1 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
