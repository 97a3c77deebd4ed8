use std::path::PathBuf;

use clap::Parser;

use vidnum::io::{load_matrix, save_matrix};
use vidnum::math::linalg::penrose_residuals;
use vidnum::{pseudoinverse, PinvMethod, DEFAULT_TOLERANCE};

/// Compute the Moore-Penrose pseudoinverse of a saved Laplacian.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input .npy file (Laplacian).
    #[arg(long = "in")]
    input: PathBuf,

    /// Output .npy file (pseudoinverse).
    #[arg(long)]
    out: PathBuf,

    /// Singular values at or below this are treated as zero.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tol: f64,

    /// Decomposition used: `svd` or `eigh`.
    #[arg(long, default_value = "svd")]
    method: PinvMethod,
}

fn main() -> anyhow::Result<()> {
    vidnum::init_logging();
    let args = Args::parse();

    let l = load_matrix(&args.input)?;
    let l_pinv = pseudoinverse(&l, args.tol, args.method)?;

    let residuals = penrose_residuals(&l, &l_pinv);
    log::debug!("Penrose residuals: {:?}", residuals);
    if residuals.reconstruct > 1e-8 {
        log::warn!(
            "L L+ L differs from L by {:.3e}; check --tol {}",
            residuals.reconstruct,
            args.tol
        );
    }

    save_matrix(&args.out, &l_pinv)?;
    log::info!("[+] Saved pseudoinverse L+ -> {}", args.out.display());
    Ok(())
}
