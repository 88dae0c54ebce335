//! Artwork URL derivation

use crate::model::PokemonRecord;

const IMAGE_URL_BASE: &str = "https://img.pokemondb.net/artwork/large";

/// URL-safe artwork name: lowercase, apostrophes stripped, hyphens kept.
///
/// "Ho-Oh" → "ho-oh", "Farfetch'd" → "farfetchd".
pub fn url_name(name: &str) -> String {
    name.to_lowercase().replace('\'', "")
}

/// Full artwork URL for an English species name.
pub fn image_url(name: &str) -> String {
    format!("{}/{}.jpg", IMAGE_URL_BASE, url_name(name))
}

/// Attach the derived artwork URL.
///
/// Plain assignment from the (unchanged) name, so applying this twice yields
/// the same record.
pub fn enrich(record: &mut PokemonRecord) {
    record.image_url = Some(image_url(&record.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_plain_names() {
        assert_eq!(url_name("Chikorita"), "chikorita");
    }

    #[test]
    fn test_hyphens_preserved() {
        assert_eq!(url_name("Ho-Oh"), "ho-oh");
    }

    #[test]
    fn test_apostrophes_stripped() {
        assert_eq!(url_name("Farfetch'd"), "farfetchd");
    }

    #[test]
    fn test_image_url_template() {
        assert_eq!(
            image_url("Ho-Oh"),
            "https://img.pokemondb.net/artwork/large/ho-oh.jpg"
        );
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let mut record = PokemonRecord {
            id: 250,
            name: "Ho-Oh".to_string(),
            german_name: "Ho-Oh".to_string(),
            region: "Johto".to_string(),
            image_url: None,
        };

        enrich(&mut record);
        let once = record.clone();
        enrich(&mut record);

        assert_eq!(record, once);
    }
}
