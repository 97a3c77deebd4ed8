use std::str::FromStr;

use nalgebra::linalg::{SymmetricEigen, SVD};
use nalgebra::{DMatrix, DVector};

use crate::error::{ensure_square, NumericsError, Result};

/// Singular values / eigenvalues at or below this magnitude are treated as
/// the null space.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Eigenvalues within this distance of zero count as zero modes when
/// reading a computed spectrum back (eigensolver noise sits well below it).
pub const ZERO_MODE_TOLERANCE: f64 = 1e-6;

// Same epsilon as nalgebra's `SVD::new` / `SymmetricEigen::new`, but with a
// bounded iteration count so non-convergence surfaces as an error.
const CONVERGENCE_EPS: f64 = f64::EPSILON * 5.0;
const MAX_ITERATIONS: usize = 1000;

/// How the pseudoinverse is computed. Both give the same result for a
/// symmetric matrix; `Eigh` only applies to symmetric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinvMethod {
    #[default]
    Svd,
    Eigh,
}

impl FromStr for PinvMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svd" => Ok(PinvMethod::Svd),
            "eigh" | "eig" | "spectral" => Ok(PinvMethod::Eigh),
            other => Err(format!("unknown method '{}' (expected svd or eigh)", other)),
        }
    }
}

fn ensure_finite(m: &DMatrix<f64>) -> Result<()> {
    match m.iter().position(|v| !v.is_finite()) {
        // column-major storage
        Some(k) => Err(NumericsError::NonFinite {
            row: k % m.nrows(),
            col: k / m.nrows(),
        }),
        None => Ok(()),
    }
}

/// Square, finite input or a typed error. Returns the dimension.
fn check_input(m: &DMatrix<f64>) -> Result<usize> {
    let n = ensure_square(m.nrows(), m.ncols())?;
    ensure_finite(m)?;
    Ok(n)
}

/// Moore-Penrose pseudoinverse of a square matrix. A 0x0 input gives a 0x0
/// result.
pub fn pseudoinverse(m: &DMatrix<f64>, tol: f64, method: PinvMethod) -> Result<DMatrix<f64>> {
    match method {
        PinvMethod::Svd => pinv_svd(m, tol),
        PinvMethod::Eigh => pinv_eigh(m, tol),
    }
}

/// L+ = V S+ U^T, inverting singular values `s > tol`.
pub fn pinv_svd(m: &DMatrix<f64>, tol: f64) -> Result<DMatrix<f64>> {
    if check_input(m)? == 0 {
        return Ok(DMatrix::zeros(0, 0));
    }
    let svd = SVD::try_new(m.clone(), true, true, CONVERGENCE_EPS, MAX_ITERATIONS)
        .ok_or(NumericsError::Decomposition("svd"))?;
    let u = svd.u.ok_or(NumericsError::Decomposition("svd: missing U"))?;
    let v_t = svd.v_t.ok_or(NumericsError::Decomposition("svd: missing V^T"))?;
    let s_inv = svd.singular_values.map(|s| if s > tol { 1.0 / s } else { 0.0 });

    Ok(v_t.transpose() * DMatrix::from_diagonal(&s_inv) * u.transpose())
}

/// L+ = Q diag(1/lambda) Q^T over eigenvalues with `|lambda| > tol`.
pub fn pinv_eigh(m: &DMatrix<f64>, tol: f64) -> Result<DMatrix<f64>> {
    let (vals, q) = symmetric_eigenpairs(m)?;
    let inv = vals.map(|lam| if lam.abs() > tol { 1.0 / lam } else { 0.0 });

    Ok(&q * DMatrix::from_diagonal(&inv) * q.transpose())
}

/// Eigenvalues of a symmetric matrix in ascending order.
pub fn symmetric_eigenvalues(m: &DMatrix<f64>) -> Result<Vec<f64>> {
    Ok(symmetric_eigenpairs(m)?.0.iter().copied().collect())
}

/// Ascending eigenpairs of a symmetric matrix; column `k` of the returned
/// matrix belongs to eigenvalue `k`.
pub fn symmetric_eigenpairs(m: &DMatrix<f64>) -> Result<(DVector<f64>, DMatrix<f64>)> {
    let n = check_input(m)?;
    if n == 0 {
        return Ok((DVector::zeros(0), DMatrix::zeros(0, 0)));
    }
    let eig = SymmetricEigen::try_new(m.clone(), CONVERGENCE_EPS, MAX_ITERATIONS)
        .ok_or(NumericsError::Decomposition("symmetric eigen"))?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eig.eigenvalues[a].total_cmp(&eig.eigenvalues[b]));

    let vals = DVector::from_iterator(n, order.iter().map(|&k| eig.eigenvalues[k]));
    let vecs = DMatrix::from_fn(n, n, |i, j| eig.eigenvectors[(i, order[j])]);
    Ok((vals, vecs))
}

/// Spectral (2-) norm: the largest singular value.
pub fn operator_norm(m: &DMatrix<f64>) -> Result<f64> {
    if m.is_empty() {
        return Ok(0.0);
    }
    ensure_finite(m)?;
    let svd = SVD::try_new(m.clone(), false, false, CONVERGENCE_EPS, MAX_ITERATIONS)
        .ok_or(NumericsError::Decomposition("svd"))?;
    Ok(svd.singular_values.max())
}

/// Max-abs residuals of the four Penrose conditions for `(a, a_pinv)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenroseResiduals {
    /// A A+ A = A
    pub reconstruct: f64,
    /// A+ A A+ = A+
    pub weak_inverse: f64,
    /// (A A+)^T = A A+
    pub left_symmetric: f64,
    /// (A+ A)^T = A+ A
    pub right_symmetric: f64,
}

impl PenroseResiduals {
    pub fn max(&self) -> f64 {
        self.reconstruct
            .max(self.weak_inverse)
            .max(self.left_symmetric)
            .max(self.right_symmetric)
    }
}

pub fn penrose_residuals(a: &DMatrix<f64>, a_pinv: &DMatrix<f64>) -> PenroseResiduals {
    let a_ap = a * a_pinv;
    let ap_a = a_pinv * a;
    PenroseResiduals {
        reconstruct: max_abs_diff(&(&a_ap * a), a),
        weak_inverse: max_abs_diff(&(&ap_a * a_pinv), a_pinv),
        left_symmetric: max_abs_diff(&a_ap.transpose(), &a_ap),
        right_symmetric: max_abs_diff(&ap_a.transpose(), &ap_a),
    }
}

pub fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
    (a - b).amax()
}
