//! Source and output record types for the country dataset

use serde::{Deserialize, Serialize};

/// One entry of the base countries source (Khodour/countries.json)
#[derive(Debug, Clone, Deserialize)]
pub struct BaseCountry {
    /// ISO alpha-2 code; entries without one contribute nothing
    pub alpha2: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub flag: String,
    /// Emoji flag, present in some revisions of the source; preferred by the
    /// offline generator
    #[serde(default)]
    pub emoji: String,
}

/// One entry of the German translation source (stefangabos/world_countries)
#[derive(Debug, Clone, Deserialize)]
pub struct GermanCountry {
    pub alpha2: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capital: String,
}

/// Candidate record after the merge, before validation
///
/// Fields drawn from a missing supplementary source stay empty; the
/// validator decides whether the record survives.
#[derive(Debug, Clone, Default)]
pub struct GeoCandidate {
    pub id: String,
    pub country_en: String,
    pub capital_en: String,
    pub region_en: String,
    pub flag: String,
    pub country_de: String,
    pub capital_de: String,
    pub region_de: String,
}

/// Final output record
///
/// Serialized field order is the declaration order; the games diff these
/// files, so it must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoRecord {
    pub id: String,
    pub country_en: String,
    pub country_de: String,
    pub continent_en: String,
    pub continent_de: String,
    pub region_en: String,
    pub region_de: String,
    pub capital_en: String,
    pub capital_de: String,
    pub flag: String,
    pub tags: Vec<String>,
}
