//! Static extraordinary-name annotations
//!
//! The game's categorization feature needs countries whose name or capital
//! is considered unusual to be tagged. The table is a fixed input loaded
//! once; tags are assigned, never appended, so enrichment is idempotent.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Tag marking an unusual country or capital name
pub const EXTRAORDINARY_NAME: &str = "extraordinary_name";

static EXTRAORDINARY_TAGS: Lazy<BTreeMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    BTreeMap::from([
        ("CH", vec![EXTRAORDINARY_NAME]), // Switzerland - Bern
        ("BF", vec![EXTRAORDINARY_NAME]), // Burkina Faso - Ouagadougou
        ("TD", vec![EXTRAORDINARY_NAME]), // Chad - N'Djamena
        ("TV", vec![EXTRAORDINARY_NAME]), // Tuvalu - Funafuti
        ("MN", vec![EXTRAORDINARY_NAME]), // Mongolia - Ulaanbaatar
        ("CI", vec![EXTRAORDINARY_NAME]), // Côte d'Ivoire - Yamoussoukro
        ("BW", vec![EXTRAORDINARY_NAME]), // Botswana - Gaborone
        ("HT", vec![EXTRAORDINARY_NAME]), // Haiti - Port-au-Prince
        ("BI", vec![EXTRAORDINARY_NAME]), // Burundi - Bujumbura
        ("MW", vec![EXTRAORDINARY_NAME]), // Malawi - Lilongwe
        ("SB", vec![EXTRAORDINARY_NAME]), // Solomon Islands - Honiara
    ])
});

/// Tags for a country code; empty for untagged countries.
pub fn tags_for(alpha2: &str) -> Vec<String> {
    EXTRAORDINARY_TAGS
        .get(alpha2)
        .map(|tags| tags.iter().map(|t| (*t).to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_country() {
        assert_eq!(tags_for("CH"), vec![EXTRAORDINARY_NAME.to_string()]);
    }

    #[test]
    fn test_untagged_country_gets_no_tags() {
        assert!(tags_for("DE").is_empty());
        assert!(tags_for("").is_empty());
    }

    #[test]
    fn test_repeated_lookup_is_identical() {
        // Assignment semantics: looking tags up twice never accumulates
        assert_eq!(tags_for("MN"), tags_for("MN"));
        assert_eq!(tags_for("MN").len(), 1);
    }
}
