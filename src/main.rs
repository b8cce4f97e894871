use hydrostat::{HydrostatError, Pipeline, RunOutcome};
use log::info;

#[tokio::main]
async fn main() -> Result<(), HydrostatError> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let pipeline = Pipeline::builder().build();
    match pipeline.run().await? {
        RunOutcome::Rendered { records, map } => info!(
            "Done: {} records, {} markers, {} without coordinates, pages in {}",
            records,
            map.plotted,
            map.skipped,
            pipeline.output_dir().display()
        ),
        RunOutcome::NoData => info!("Done: no data, nothing rendered"),
    }

    Ok(())
}
