use nalgebra::{DMatrix, DVector};

use crate::error::Result;
use crate::graph::Topology;
use crate::math::linalg::symmetric_eigenpairs;

/// Three-node coherence-gradient toy: H = -kappa L + eta G on a path graph,
/// where G is the Laplacian weighted by squared coherence differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoherenceToy {
    pub kappa: f64,
    pub eta: f64,
}

impl Default for CoherenceToy {
    fn default() -> Self {
        Self { kappa: 1.0, eta: 0.5 }
    }
}

#[derive(Debug, Clone)]
pub struct ToySolution {
    pub l: DMatrix<f64>,
    pub d: DMatrix<f64>,
    pub g: DMatrix<f64>,
    pub h: DMatrix<f64>,
    /// ascending
    pub evals: DVector<f64>,
    pub evecs: DMatrix<f64>,
}

impl CoherenceToy {
    pub const COHERENCE: [f64; 3] = [1.0, 0.0, -1.0];

    pub fn solve(&self) -> Result<ToySolution> {
        let graph = Topology::Path { n: 3 }.build()?;
        let l = graph.laplacian();
        let d = &l * -self.kappa;

        let c = Self::COHERENCE;
        let g = graph.weighted_laplacian(|i, j| (c[i] - c[j]).powi(2));

        let h = &d + &g * self.eta;
        let (evals, evecs) = symmetric_eigenpairs(&h)?;
        Ok(ToySolution { l, d, g, h, evals, evecs })
    }
}
