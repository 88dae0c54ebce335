//! gamedata-geo - Country dataset generator (remote translations)
//!
//! Single linear pass: fetch → merge → validate → enrich → sort → write.
//! Any source failure is fatal and exits non-zero; the previous output file
//! is left untouched because the writer only runs after every prior stage
//! has succeeded.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use gamedata_common::fetch::SourceClient;
use gamedata_common::output::write_json_pretty;
use gamedata_geo::merge::FlagStyle;
use gamedata_geo::{pipeline, sources, summary, OUTPUT_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting GeoTriad data generator (gamedata-geo) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let client = SourceClient::new()?;

    let base = sources::load_base_countries(&client).await?;
    let german = sources::load_german_translations(&client).await?;
    let continents = sources::load_continent_mapping(&client).await?;

    let dataset = pipeline::build_dataset(&base, &german, &continents, FlagStyle::Plain);
    write_json_pretty(Path::new(OUTPUT_PATH), &dataset.records)?;

    summary::log_summary(&dataset);
    Ok(())
}
