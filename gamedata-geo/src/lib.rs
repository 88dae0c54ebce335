//! Country dataset generator for the GeoTriad game
//!
//! Joins three sources by ISO alpha-2 code — base country facts, German
//! translations, and a country→continent mapping — then drops incomplete
//! records, tags extraordinary names, sorts by English name, and writes
//! `data/geo.json`.
//!
//! Two binaries share this pipeline: `gamedata-geo` fetches the German
//! translations remotely, `gamedata-geo-offline` uses the hardcoded table
//! in [`translations`].

pub mod continent;
pub mod enrich;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod sources;
pub mod summary;
pub mod translations;
pub mod validate;

/// Output location of the generated dataset
pub const OUTPUT_PATH: &str = "data/geo.json";
