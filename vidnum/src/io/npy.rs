use std::path::Path;

use anyhow::Context;
use nalgebra::DMatrix;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};

use crate::error::NumericsError;

/// Write a dense matrix as a 2-D `.npy` array (C order, little-endian f64),
/// creating parent directories as needed.
pub fn save_matrix(path: impl AsRef<Path>, m: &DMatrix<f64>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir failed (path={:?})", parent))?;
    }

    let arr = Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)]);
    write_npy(path, &arr).with_context(|| format!("write npy failed (path={:?})", path))?;
    log::debug!("saved {}x{} matrix to {:?}", m.nrows(), m.ncols(), path);
    Ok(())
}

/// Read a 2-D f64 `.npy` array back into a matrix. A missing file is
/// reported as [`NumericsError::NotFound`].
pub fn load_matrix(path: impl AsRef<Path>) -> anyhow::Result<DMatrix<f64>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(NumericsError::NotFound(path.to_path_buf()).into());
    }

    let arr: Array2<f64> =
        read_npy(path).with_context(|| format!("read npy failed (path={:?})", path))?;
    let (rows, cols) = arr.dim();
    Ok(DMatrix::from_fn(rows, cols, |i, j| arr[[i, j]]))
}
