//! Generation 2 appender for the Pokémon dataset
//!
//! Reads `data/pokemon.json`, appends the static Johto roster with derived
//! artwork URLs, and writes the file back. Ids already present are skipped,
//! so re-running the tool is a no-op.

pub mod enrich;
pub mod gen2;
pub mod model;
pub mod pipeline;

/// The dataset file this tool reads and rewrites
pub const DATASET_PATH: &str = "data/pokemon.json";
