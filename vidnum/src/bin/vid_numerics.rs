use std::path::PathBuf;

use clap::Parser;

use vidnum::diagnostics::{count_zero_modes, log_spectrum_report};
use vidnum::io::series::write_convergence_csv;
use vidnum::math::linalg::{symmetric_eigenvalues, ZERO_MODE_TOLERANCE};
use vidnum::math::resistance::kirchhoff_index;
use vidnum::model::convergence::{infinity_sector_series, DEFAULT_RHO, DEFAULT_TERMS};
use vidnum::model::toy::CoherenceToy;
use vidnum::plot::plot_convergence;
use vidnum::{effective_resistance, pseudoinverse, PinvMethod, Topology, DEFAULT_TOLERANCE};

/// Dodecahedral-cell numerics walkthrough: spectrum, pseudoinverse,
/// effective resistance, toy model and the infinity-sector convergence plot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the convergence figure and its CSV data.
    #[arg(long, default_value = "figures")]
    figures: PathBuf,
}

fn main() -> anyhow::Result<()> {
    vidnum::init_logging();
    let args = Args::parse();

    log::info!("[1] Building dodecahedral Laplacian Delta20...");
    let graph = Topology::Dodecahedral.build()?;
    let a = graph.adjacency();
    let l = graph.laplacian();
    log::info!("    A shape: {}x{}, L shape: {}x{}", a.nrows(), a.ncols(), l.nrows(), l.ncols());

    log::info!("[2] Spectral decomposition and pseudoinverse Delta+...");
    let vals = symmetric_eigenvalues(&l)?;
    let rounded: Vec<String> = vals.iter().map(|v| format!("{:.6}", v)).collect();
    log::info!("    eigenvalues: [{}]", rounded.join(", "));
    log::info!("    zero modes: {}", count_zero_modes(&vals, ZERO_MODE_TOLERANCE));
    let l_plus = pseudoinverse(&l, DEFAULT_TOLERANCE, PinvMethod::Eigh)?;
    log_spectrum_report(&l_plus, "Delta20+", 3)?;

    log::info!("[3] Effective-resistance matrix...");
    let r = effective_resistance(&l_plus)?;
    log::info!("    R[0,1] = {:.6}", r[(0, 1)]);
    log::info!("    Kirchhoff index = {:.6}", kirchhoff_index(&r));

    log::info!("[4] Three-node toy coherence-gradient example...");
    let toy = CoherenceToy::default().solve()?;
    let toy_vals: Vec<String> = toy.evals.iter().map(|v| format!("{:.6}", v)).collect();
    log::info!("    H_toy eigenvalues: [{}]", toy_vals.join(", "));

    log::info!("[5] infinity-sector convergence demo...");
    let series = infinity_sector_series(&a, DEFAULT_RHO, DEFAULT_TERMS)?;
    let fig_path = args.figures.join("infty_convergence.svg");
    plot_convergence(&series, &fig_path)?;
    write_convergence_csv(args.figures.join("infty_convergence.csv"), &series)?;
    log::info!("    Saved convergence plot to {}", fig_path.display());
    Ok(())
}
