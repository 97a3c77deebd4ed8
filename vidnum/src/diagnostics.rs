use std::fmt;

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::math::linalg::symmetric_eigenvalues;

/// The `k` smallest and `k` largest eigenvalues of a symmetric matrix, both
/// ascending. `k` is clamped to the matrix size.
pub fn spectrum_summary(m: &DMatrix<f64>, k: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    let vals = symmetric_eigenvalues(m)?;
    let k = k.min(vals.len());
    let smallest = vals[..k].to_vec();
    let largest = vals[vals.len() - k..].to_vec();
    Ok((smallest, largest))
}

/// Number of eigenvalues with `|lambda| <= tol`.
pub fn count_zero_modes(eigenvalues: &[f64], tol: f64) -> usize {
    eigenvalues.iter().filter(|v| v.abs() <= tol).count()
}

#[derive(Debug, Clone)]
pub struct SpectrumReport {
    pub name: String,
    pub n: usize,
    pub smallest: Vec<f64>,
    pub largest: Vec<f64>,
}

impl SpectrumReport {
    pub fn new(m: &DMatrix<f64>, name: &str, k: usize) -> Result<Self> {
        let (smallest, largest) = spectrum_summary(m, k)?;
        Ok(Self {
            name: name.to_string(),
            n: m.nrows(),
            smallest,
            largest,
        })
    }
}

fn fmt_values(vals: &[f64]) -> String {
    let parts: Vec<String> = vals.iter().map(|v| format!("{:.6}", v)).collect();
    format!("[{}]", parts.join(", "))
}

impl fmt::Display for SpectrumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Spectrum summary for {} (n={}) ===", self.name, self.n)?;
        writeln!(f, "Smallest {} eigenvalues:", self.smallest.len())?;
        writeln!(f, "{}", fmt_values(&self.smallest))?;
        writeln!(f, "Largest {} eigenvalues:", self.largest.len())?;
        writeln!(f, "{}", fmt_values(&self.largest))?;
        write!(f, "{}", "-".repeat(50))
    }
}

/// Log a spectrum report at info level, one line per row.
pub fn log_spectrum_report(m: &DMatrix<f64>, name: &str, k: usize) -> Result<SpectrumReport> {
    let report = SpectrumReport::new(m, name, k)?;
    for line in report.to_string().lines() {
        log::info!("{}", line);
    }
    Ok(report)
}

/// Randomized check that `L L+` acts as the projection onto the complement
/// of the constant vector, as it must for a connected graph's Laplacian.
///
/// Draws `probes` vectors uniformly from [-1, 1)^n with an RNG seeded by
/// `seed` and returns the worst max-abs residual of
/// `L L+ x - (x - mean(x) 1)`.
pub fn projection_probe(l: &DMatrix<f64>, l_pinv: &DMatrix<f64>, seed: u64, probes: usize) -> f64 {
    let n = l.nrows();
    if n == 0 {
        return 0.0;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let proj = l * l_pinv;

    let mut worst = 0.0_f64;
    for _ in 0..probes {
        let x = DVector::from_fn(n, |_, _| rng.gen_range(-1.0..1.0));
        let centered = x.add_scalar(-x.mean());
        let residual = (&proj * &x - centered).amax();
        worst = worst.max(residual);
    }
    log::debug!("projection probe: seed={} probes={} worst={:.3e}", seed, probes, worst);
    worst
}
