use nalgebra::DMatrix;

use crate::error::Result;
use crate::math::linalg::operator_norm;

pub const DEFAULT_RHO: f64 = 0.25;
pub const DEFAULT_TERMS: usize = 12;

/// Operator norms of the terms and partial sums of T = sum_m rho^m A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceSeries {
    /// ||rho^m A||_2 for m = 1..=M
    pub term_norms: Vec<f64>,
    /// ||sum_{k<=m} rho^k A||_2 for m = 1..=M
    pub partial_norms: Vec<f64>,
}

impl ConvergenceSeries {
    pub fn len(&self) -> usize {
        self.term_norms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_norms.is_empty()
    }
}

/// Norm convergence of the infinity-sector series built on adjacency `a`.
pub fn infinity_sector_series(a: &DMatrix<f64>, rho: f64, terms: usize) -> Result<ConvergenceSeries> {
    let mut series = ConvergenceSeries::default();
    let mut partial = DMatrix::zeros(a.nrows(), a.ncols());
    let mut scale = 1.0;
    for _ in 0..terms {
        scale *= rho;
        let term = a * scale;
        partial += &term;
        series.term_norms.push(operator_norm(&term)?);
        series.partial_norms.push(operator_norm(&partial)?);
    }
    Ok(series)
}
