//! Source descriptors and loaders for the country dataset
//!
//! Each loader decodes its document into a mapping keyed by alpha-2 code.
//! Entries without a code contribute nothing. The continent mapping prefers
//! a local file and falls back to the remote gist.

use std::collections::BTreeMap;
use std::path::Path;

use gamedata_common::fetch::{read_json_file, SourceClient};
use gamedata_common::{Error, Result};
use tracing::info;

use crate::model::{BaseCountry, GermanCountry};

pub const COUNTRIES_JSON_URL: &str =
    "https://raw.githubusercontent.com/Khodour/countries.json/master/countries.json";
pub const GERMAN_COUNTRIES_URL: &str =
    "https://raw.githubusercontent.com/stefangabos/world_countries/master/data/countries/de/countries.json";
pub const CONTINENT_MAPPING_URL: &str =
    "https://gist.githubusercontent.com/tiagodealmeida/0b97ccf117252d742dddf098bc6cc58a/raw/3d3a409b2c844e30ac35a0ad734ad7f5fc0ca5f0/country-to-continent.json";

/// Local continent mapping tried before the remote gist
pub const CONTINENTS_LOCAL_PATH: &str = "data/continents.json";

/// Fetch the base country facts, keyed by alpha-2 code.
pub async fn load_base_countries(client: &SourceClient) -> Result<BTreeMap<String, BaseCountry>> {
    let raw: Vec<BaseCountry> = client.fetch_json(COUNTRIES_JSON_URL).await?;
    let countries = key_by_alpha2(raw, |c| c.alpha2.clone());

    info!("Loaded {} base countries", countries.len());
    Ok(countries)
}

/// Fetch the German country and capital names, keyed by alpha-2 code.
pub async fn load_german_translations(
    client: &SourceClient,
) -> Result<BTreeMap<String, GermanCountry>> {
    let raw: Vec<GermanCountry> = client.fetch_json(GERMAN_COUNTRIES_URL).await?;
    let translations = key_by_alpha2(raw, |c| c.alpha2.clone());

    info!("Loaded {} German translations", translations.len());
    Ok(translations)
}

/// Load the country→continent mapping, preferring the local file.
///
/// A missing local file falls back to the remote gist; a malformed local
/// file is fatal, the same as any other decode failure.
pub async fn load_continent_mapping(client: &SourceClient) -> Result<BTreeMap<String, String>> {
    let mapping: BTreeMap<String, String> = match read_json_file(Path::new(CONTINENTS_LOCAL_PATH)) {
        Ok(mapping) => {
            info!("Loaded continent mapping from local file");
            mapping
        }
        Err(Error::SourceUnavailable(_)) => client.fetch_json(CONTINENT_MAPPING_URL).await?,
        Err(e) => return Err(e),
    };

    info!("Loaded {} continent mappings", mapping.len());
    Ok(mapping)
}

fn key_by_alpha2<T>(items: Vec<T>, alpha2: impl Fn(&T) -> Option<String>) -> BTreeMap<String, T> {
    let mut map = BTreeMap::new();
    for item in items {
        if let Some(code) = alpha2(&item) {
            map.insert(code, item);
        }
    }
    map
}
