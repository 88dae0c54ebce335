//! Merge of base facts and translations by alpha-2 key

use std::collections::BTreeMap;

use crate::model::{BaseCountry, GeoCandidate, GermanCountry};

/// Which source field supplies the flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStyle {
    /// Use the `flag` field as-is (networked generator)
    Plain,
    /// Prefer the `emoji` field, falling back to `flag` (offline generator)
    PreferEmoji,
}

/// Join the primary (base) map against the translation map.
///
/// One candidate per key present in the primary source; keys absent from it
/// are never fabricated. A missing translation leaves the German fields
/// empty — not an error here, the validator judges completeness.
pub fn merge_sources(
    base: &BTreeMap<String, BaseCountry>,
    german: &BTreeMap<String, GermanCountry>,
    flag_style: FlagStyle,
) -> BTreeMap<String, GeoCandidate> {
    base.iter()
        .map(|(alpha2, country)| {
            let translation = german.get(alpha2);

            let flag = match flag_style {
                FlagStyle::Plain => country.flag.clone(),
                FlagStyle::PreferEmoji if !country.emoji.is_empty() => country.emoji.clone(),
                FlagStyle::PreferEmoji => country.flag.clone(),
            };

            let candidate = GeoCandidate {
                id: alpha2.clone(),
                country_en: country.name.clone(),
                capital_en: country.capital.clone(),
                region_en: country.region.clone(),
                flag,
                country_de: translation.map(|t| t.name.clone()).unwrap_or_default(),
                capital_de: translation.map(|t| t.capital.clone()).unwrap_or_default(),
                // The translation source carries no region names
                region_de: String::new(),
            };

            (alpha2.clone(), candidate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_entry(alpha2: &str, name: &str, capital: &str) -> (String, BaseCountry) {
        (
            alpha2.to_string(),
            BaseCountry {
                alpha2: Some(alpha2.to_string()),
                name: name.to_string(),
                capital: capital.to_string(),
                region: String::new(),
                flag: "flag.svg".to_string(),
                emoji: "🇨🇭".to_string(),
            },
        )
    }

    fn german_entry(alpha2: &str, name: &str, capital: &str) -> (String, GermanCountry) {
        (
            alpha2.to_string(),
            GermanCountry {
                alpha2: Some(alpha2.to_string()),
                name: name.to_string(),
                capital: capital.to_string(),
            },
        )
    }

    #[test]
    fn test_merges_translation_fields() {
        let base = BTreeMap::from([base_entry("CH", "Switzerland", "Bern")]);
        let german = BTreeMap::from([german_entry("CH", "Schweiz", "Bern")]);

        let merged = merge_sources(&base, &german, FlagStyle::Plain);
        let candidate = merged.get("CH").unwrap();

        assert_eq!(candidate.country_en, "Switzerland");
        assert_eq!(candidate.country_de, "Schweiz");
        assert_eq!(candidate.capital_de, "Bern");
    }

    #[test]
    fn test_missing_translation_leaves_fields_empty() {
        let base = BTreeMap::from([base_entry("TV", "Tuvalu", "Funafuti")]);
        let german = BTreeMap::new();

        let merged = merge_sources(&base, &german, FlagStyle::Plain);
        let candidate = merged.get("TV").unwrap();

        assert_eq!(candidate.country_de, "");
        assert_eq!(candidate.capital_de, "");
    }

    #[test]
    fn test_no_keys_fabricated_from_supplementary_source() {
        let base = BTreeMap::from([base_entry("CH", "Switzerland", "Bern")]);
        let german = BTreeMap::from([
            german_entry("CH", "Schweiz", "Bern"),
            german_entry("AT", "Österreich", "Wien"),
        ]);

        let merged = merge_sources(&base, &german, FlagStyle::Plain);
        assert_eq!(merged.len(), 1);
        assert!(!merged.contains_key("AT"));
    }

    #[test]
    fn test_flag_style_prefers_emoji_when_asked() {
        let base = BTreeMap::from([base_entry("CH", "Switzerland", "Bern")]);
        let german = BTreeMap::new();

        let plain = merge_sources(&base, &german, FlagStyle::Plain);
        assert_eq!(plain.get("CH").unwrap().flag, "flag.svg");

        let emoji = merge_sources(&base, &german, FlagStyle::PreferEmoji);
        assert_eq!(emoji.get("CH").unwrap().flag, "🇨🇭");
    }
}
