//! The merge → validate → enrich → sort pass over loaded sources
//!
//! Pure over its inputs: loading happens upstream, writing downstream, so
//! the whole pass is testable with in-memory mappings.

use std::collections::BTreeMap;

use gamedata_common::sort::sort_by_display;

use crate::enrich::tags_for;
use crate::merge::{merge_sources, FlagStyle};
use crate::model::{BaseCountry, GeoRecord, GermanCountry};
use crate::validate::validate;

/// Result of one generator pass
pub struct Dataset {
    /// Accepted records, sorted ascending by `country_en`
    pub records: Vec<GeoRecord>,
    /// Candidates dropped by the validator
    pub excluded: usize,
}

/// Run the full in-memory pass over loaded sources.
pub fn build_dataset(
    base: &BTreeMap<String, BaseCountry>,
    german: &BTreeMap<String, GermanCountry>,
    continents: &BTreeMap<String, String>,
    flag_style: FlagStyle,
) -> Dataset {
    let candidates = merge_sources(base, german, flag_style);

    let mut records = Vec::with_capacity(candidates.len());
    let mut excluded = 0usize;

    for (alpha2, candidate) in candidates {
        let continent = match validate(&candidate, continents) {
            Ok(continent) => continent,
            Err(_) => {
                excluded += 1;
                continue;
            }
        };

        records.push(GeoRecord {
            id: candidate.id,
            country_en: candidate.country_en,
            country_de: candidate.country_de,
            continent_en: continent.en().to_string(),
            continent_de: continent.de().to_string(),
            region_en: candidate.region_en,
            region_de: candidate.region_de,
            capital_en: candidate.capital_en,
            capital_de: candidate.capital_de,
            flag: candidate.flag,
            tags: tags_for(&alpha2),
        });
    }

    // Stable sort over key-ordered candidates: equal names keep key order
    sort_by_display(&mut records, |r| &r.country_en);

    Dataset { records, excluded }
}
