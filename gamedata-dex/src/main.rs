//! gamedata-dex - Generation 2 appender for the Pokémon dataset
//!
//! Single linear pass: read the existing dataset, append the static Johto
//! roster with derived artwork URLs, write the file back. A missing or
//! malformed dataset file is fatal and exits non-zero without touching it.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use gamedata_common::fetch::read_json_file;
use gamedata_common::output::write_json_pretty;
use gamedata_dex::model::PokemonRecord;
use gamedata_dex::{pipeline, DATASET_PATH};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Pokémon dataset appender (gamedata-dex) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let path = Path::new(DATASET_PATH);
    let existing: Vec<PokemonRecord> = read_json_file(path)?;
    info!("Loaded {} existing Pokémon from {}", existing.len(), path.display());

    let outcome = pipeline::append_gen2(existing);
    write_json_pretty(path, &outcome.records)?;

    info!("✓ Successfully added {} Gen 2 Pokémon!", outcome.added);
    if outcome.skipped > 0 {
        info!("Skipped {} already-present entries", outcome.skipped);
    }
    info!("Total Pokémon in dataset: {}", outcome.records.len());

    Ok(())
}
