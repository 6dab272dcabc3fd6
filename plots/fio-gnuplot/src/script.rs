use common::{config::Mode, results::Metric};

pub const TERMINAL: &str = "png size 1280,720";

/// gnuplot single-quoted string, embedded quotes doubled
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Builds the gnuplot script for one metric. `series` is `(mode, data file)` in plot order.
pub fn plot_script(metric: Metric, image: &str, series: &[(Mode, String)]) -> String {
    let title = format!("{} vs queue depth", metric.label());
    let plots = series
        .iter()
        .map(|(mode, data_file)| {
            format!(
                "{} using 1:2 title {} with linespoints",
                quote(data_file),
                quote(mode.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut script = String::new();
    script.push_str(&format!("set terminal {TERMINAL}\n"));
    script.push_str(&format!("set output {}\n", quote(image)));
    script.push_str(&format!("set title {}\n", quote(&title)));
    script.push_str("set xlabel 'Queue depth'\n");
    script.push_str(&format!("set ylabel {}\n", quote(metric.label())));
    script.push_str("set grid\n");
    script.push_str("set key outside\n");
    script.push_str(&format!("plot {plots}\n"));
    script
}

/// Two-column data file body, `<queue_depth> <value>` per line after a comment header.
pub fn data_file(metric: Metric, mode: Mode, points: &[(usize, f64)]) -> String {
    let mut body = format!("# queue_depth {} ({mode})\n", metric.id());
    for (depth, value) in points {
        body.push_str(&format!("{depth} {value:?}\n"));
    }
    body
}
