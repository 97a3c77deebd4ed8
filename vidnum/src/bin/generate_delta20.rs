use std::path::PathBuf;

use clap::Parser;

use vidnum::diagnostics::projection_probe;
use vidnum::io::{save_matrix, ParameterBlock};
use vidnum::timing::timed;
use vidnum::{pseudoinverse, PinvMethod, Topology, DEFAULT_TOLERANCE};

const PROBES: usize = 8;

/// Generate Delta20.npy, Delta20_pinv.npy and parameters.json.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the artifacts are written into.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    vidnum::init_logging();
    let args = Args::parse();
    let params = ParameterBlock::default();

    let delta = Topology::Dodecahedral.laplacian()?;
    let delta_pinv = timed("Delta20 pseudoinverse", || {
        pseudoinverse(&delta, DEFAULT_TOLERANCE, PinvMethod::Eigh)
    })?;

    let worst = projection_probe(&delta, &delta_pinv, params.random_seed, PROBES);
    anyhow::ensure!(
        worst < 1e-8,
        "Delta20 L L+ is not the expected projection (residual {:.3e})",
        worst
    );

    let delta_path = args.out_dir.join("Delta20.npy");
    let pinv_path = args.out_dir.join("Delta20_pinv.npy");
    let params_path = args.out_dir.join("parameters.json");
    save_matrix(&delta_path, &delta)?;
    save_matrix(&pinv_path, &delta_pinv)?;
    params.save(&params_path)?;

    log::info!("Generated:");
    for p in [&delta_path, &pinv_path, &params_path] {
        log::info!("  {}", p.display());
    }
    Ok(())
}
