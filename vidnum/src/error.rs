use std::path::PathBuf;

/// Failure conditions of the numeric routines.
///
/// Ill-conditioning is not an error: the pseudoinverse tolerance decides how
/// near-zero modes are treated.
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("invalid input size: {topology} graph requires n >= {min}, got {n}")]
    InvalidSize {
        topology: &'static str,
        min: usize,
        n: usize,
    },
    #[error("matrix file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix entry ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },
    #[error("invalid edge ({u}, {v}) for a graph on {n} vertices")]
    InvalidEdge { u: usize, v: usize, n: usize },
    #[error("decomposition did not converge: {0}")]
    Decomposition(&'static str),
}

pub type Result<T> = std::result::Result<T, NumericsError>;

pub(crate) fn ensure_square(rows: usize, cols: usize) -> Result<usize> {
    if rows != cols {
        return Err(NumericsError::NotSquare { rows, cols });
    }
    Ok(rows)
}
