//! gamedata-geo-offline - Country dataset generator (hardcoded translations)
//!
//! Same pipeline as `gamedata-geo`, but German names come from the static
//! table in `translations` and the flag prefers the source's emoji field.
//! Only the base countries are fetched remotely; the continent mapping must
//! load from `data/continents.json` or its remote fallback as usual.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use gamedata_common::fetch::SourceClient;
use gamedata_common::output::write_json_pretty;
use gamedata_geo::merge::FlagStyle;
use gamedata_geo::{pipeline, sources, summary, translations, OUTPUT_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting GeoTriad data generator (gamedata-geo-offline) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let client = SourceClient::new()?;

    let base = sources::load_base_countries(&client).await?;
    let german = translations::german_translations();
    info!("Loaded {} German translations (static table)", german.len());
    let continents = sources::load_continent_mapping(&client).await?;

    let dataset = pipeline::build_dataset(&base, &german, &continents, FlagStyle::PreferEmoji);
    write_json_pretty(Path::new(OUTPUT_PATH), &dataset.records)?;

    summary::log_summary(&dataset);
    Ok(())
}
