use clap::Parser;
use common::{config::SweepConfig, util::SystemRunner};
use eyre::Result;
use tracing::{debug, error};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const MODULES: &[&str] = &["fio_sweep", "common", "fio", "fio_gnuplot"];

/// Sweep fio across access patterns and queue depths, then plot each metric with gnuplot
#[derive(Parser)]
struct Cli {
    /// fio job name
    #[arg(short, long)]
    name: String,
    /// File or device fio runs against
    #[arg(short, long)]
    filename: String,
    /// Base path for generated data files, scripts and images
    #[arg(short, long)]
    output: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new("");
    for module in MODULES {
        env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    let config = SweepConfig::new(args.name, args.filename, args.output);
    debug!("{config:?}");

    if let Err(err) = run(&config).await {
        error!("{err:#?}");
        return Err(err);
    }
    Ok(())
}

async fn run(config: &SweepConfig) -> Result<()> {
    let runner = SystemRunner;

    println!("running tests");
    let table = fio::sweep::run_sweep(config, &runner).await?;

    println!("saving results");
    let summary = fio_gnuplot::render(&table, config, &runner).await?;
    for (metric, err) in &summary.failed {
        println!("plot for {} failed: {err}", metric.id());
    }

    println!("Results saved to {}_*", config.output);
    Ok(())
}
