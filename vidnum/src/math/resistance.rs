use nalgebra::DMatrix;

use crate::error::{ensure_square, Result};

/// Effective-resistance matrix from a Laplacian pseudoinverse:
/// R[i,j] = L+[i,i] + L+[j,j] - 2 L+[i,j].
pub fn effective_resistance(l_pinv: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = ensure_square(l_pinv.nrows(), l_pinv.ncols())?;
    let diag = l_pinv.diagonal();
    Ok(DMatrix::from_fn(n, n, |i, j| {
        diag[i] + diag[j] - 2.0 * l_pinv[(i, j)]
    }))
}

/// Kirchhoff index: sum of effective resistances over unordered pairs.
pub fn kirchhoff_index(resistance: &DMatrix<f64>) -> f64 {
    resistance.sum() / 2.0
}
