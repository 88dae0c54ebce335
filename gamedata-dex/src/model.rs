//! Pokémon dataset record type

use serde::{Deserialize, Serialize};

/// One dataset entry, as stored in `data/pokemon.json`
///
/// Serialized field order is the declaration order; the JSON uses camelCase
/// keys (`germanName`, `imageUrl`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub german_name: String,
    pub region: String,
    /// Artwork URL, derived by the enricher; older entries may lack it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
