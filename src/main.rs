use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mindexr::{Config, index::TabixIntervalIndex, mindex, output, positions::ShardStart};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Position listing: {:?}", config.position_list);
    tracing::info!("Interval index: {:?}", config.index_file);

    let positions = ShardStart::from_file(&config.position_list)?;
    let index = TabixIntervalIndex::from_path(&config.index_file)?;

    let buf = mindex::build(&positions, &index, config.shard_count)?;
    let total = output::write_mindex(&buf, &config.output_file)?;

    println!(
        "{} bytes written. Output in {}",
        total,
        config.output_file.display()
    );

    Ok(())
}
