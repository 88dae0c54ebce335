//! Append pass for the Generation 2 roster

use std::collections::BTreeSet;

use crate::enrich;
use crate::gen2::{GEN2_POKEMON, GEN2_REGION};
use crate::model::PokemonRecord;

/// Result of one append pass
pub struct AppendOutcome {
    /// The full dataset, existing entries first, new entries in id order
    pub records: Vec<PokemonRecord>,
    pub added: usize,
    pub skipped: usize,
}

/// Append the Gen 2 roster to an existing dataset.
///
/// Ids already present are skipped, so no two records ever share an id and
/// re-running the tool changes nothing.
pub fn append_gen2(mut existing: Vec<PokemonRecord>) -> AppendOutcome {
    let present: BTreeSet<u32> = existing.iter().map(|p| p.id).collect();

    let mut added = 0usize;
    let mut skipped = 0usize;

    for &(id, name, german_name) in GEN2_POKEMON {
        if present.contains(&id) {
            skipped += 1;
            continue;
        }

        let mut record = PokemonRecord {
            id,
            name: name.to_string(),
            german_name: german_name.to_string(),
            region: GEN2_REGION.to_string(),
            image_url: None,
        };
        enrich::enrich(&mut record);

        existing.push(record);
        added += 1;
    }

    AppendOutcome {
        records: existing,
        added,
        skipped,
    }
}
