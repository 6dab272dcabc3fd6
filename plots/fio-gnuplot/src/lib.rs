use std::path::Path;

use common::{
    config::SweepConfig,
    error::HarnessError,
    results::{METRICS, Metric, ResultTable},
    util::{CommandRunner, checked_output},
};
use tokio::fs::{create_dir_all, write};
use tracing::{debug, error};

pub mod script;

/// Which metrics produced an image
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderSummary {
    pub plotted: Vec<Metric>,
    pub failed: Vec<(Metric, String)>,
}

pub fn data_path(output: &str, metric: Metric, mode: &str) -> String {
    format!("{output}_{}_{mode}.dat", metric.id())
}

pub fn script_path(output: &str, metric: Metric) -> String {
    format!("{output}_{}.gnuplot", metric.id())
}

pub fn image_path(output: &str, metric: Metric) -> String {
    format!("{output}_{}.png", metric.id())
}

/// Writes data files and a script for every metric, then runs gnuplot on each script.
///
/// A gnuplot failure is logged and the next metric is rendered anyway. Failing to write
/// a data file or script aborts.
pub async fn render(
    table: &ResultTable,
    config: &SweepConfig,
    runner: &dyn CommandRunner,
) -> Result<RenderSummary, HarnessError> {
    let output = config.output.as_str();
    if let Some(parent) = Path::new(output).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        create_dir_all(parent).await?;
    }

    let modes = table.modes();
    let mut summary = RenderSummary::default();
    for metric in METRICS.iter().copied() {
        let mut series = Vec::new();
        for mode in &modes {
            let path = data_path(output, metric, mode.as_str());
            let points = table.series(*mode, metric);
            write(&path, script::data_file(metric, *mode, &points)).await?;
            series.push((*mode, path));
        }

        let script_file = script_path(output, metric);
        let image = image_path(output, metric);
        write(&script_file, script::plot_script(metric, &image, &series)).await?;
        debug!("Wrote {script_file}");

        match checked_output(runner, &config.programs.gnuplot, &[script_file]).await {
            Ok(_) => summary.plotted.push(metric),
            Err(err @ (HarnessError::Execution { .. } | HarnessError::Spawn { .. })) => {
                error!("Failed to plot {}: {err}", metric.id());
                summary.failed.push((metric, err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }
    Ok(summary)
}
