//! Human-readable run summary

use std::collections::BTreeMap;

use tracing::info;

use crate::enrich::EXTRAORDINARY_NAME;
use crate::pipeline::Dataset;

/// Log counts, the continent distribution, and a few example entries.
pub fn log_summary(dataset: &Dataset) {
    info!("✓ Generated {} countries", dataset.records.len());
    info!(
        "✗ Excluded {} countries (missing required fields)",
        dataset.excluded
    );

    let mut by_continent: BTreeMap<&str, usize> = BTreeMap::new();
    let mut extraordinary = 0usize;
    for record in &dataset.records {
        *by_continent.entry(record.continent_en.as_str()).or_default() += 1;
        if record.tags.iter().any(|t| t.as_str() == EXTRAORDINARY_NAME) {
            extraordinary += 1;
        }
    }

    info!("Continent distribution:");
    for (continent, count) in &by_continent {
        info!("  {}: {}", continent, count);
    }

    info!("Extraordinary names tagged: {}", extraordinary);

    info!("Example entries:");
    for record in dataset.records.iter().take(3) {
        info!(
            "  {} ({}) - {} - {}",
            record.country_en, record.id, record.capital_en, record.continent_en
        );
    }
}
