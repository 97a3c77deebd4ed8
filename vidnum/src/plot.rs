use std::path::Path;

use anyhow::Context;
use plotters::prelude::*;

use crate::model::convergence::ConvergenceSeries;

/// Semilog-y plot of the term and partial-sum norms against m, written as SVG.
pub fn plot_convergence(series: &ConvergenceSeries, outpath: impl AsRef<Path>) -> anyhow::Result<()> {
    let outpath = outpath.as_ref();
    anyhow::ensure!(!series.is_empty(), "convergence series is empty");
    anyhow::ensure!(
        series.term_norms.iter().chain(&series.partial_norms).all(|v| *v > 0.0),
        "log-scale plot needs strictly positive norms"
    );
    if let Some(parent) = outpath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create figure dir failed (path={:?})", parent))?;
    }

    let terms: Vec<(f64, f64)> = series
        .term_norms
        .iter()
        .enumerate()
        .map(|(i, v)| ((i + 1) as f64, *v))
        .collect();
    let partials: Vec<(f64, f64)> = series
        .partial_norms
        .iter()
        .enumerate()
        .map(|(i, v)| ((i + 1) as f64, *v))
        .collect();

    let all = series.term_norms.iter().chain(&series.partial_norms);
    let y_min = all.clone().cloned().fold(f64::INFINITY, f64::min) * 0.5;
    let y_max = all.cloned().fold(0.0_f64, f64::max) * 2.0;
    let x_max = series.len() as f64 + 0.5;

    let root = SVGBackend::new(outpath, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("infinity-sector convergence on the dodecahedral cell", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5_f64..x_max, (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("m")
        .y_desc("Operator norm (2-norm)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(terms.clone(), &BLUE))?
        .label("||T^(m)||")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart.draw_series(terms.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))?;

    chart
        .draw_series(LineSeries::new(partials.clone(), &RED))?
        .label("||sum_{k<=m} T^(k)||")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart.draw_series(
        partials
            .iter()
            .map(|&(x, y)| Rectangle::new([(x - 0.1, y * 0.95), (x + 0.1, y * 1.05)], RED.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    log::info!("saved convergence plot to {:?}", outpath);
    Ok(())
}
