//! Continent classification
//!
//! The permitted set is a closed six-continent enum. Antarctica is not
//! representable here; a mapping to it surfaces downstream as an excluded
//! classification.

/// The continents the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    /// Parse the English continent name used by the mapping source.
    pub fn from_en(name: &str) -> Option<Self> {
        match name {
            "Africa" => Some(Self::Africa),
            "Asia" => Some(Self::Asia),
            "Europe" => Some(Self::Europe),
            "North America" => Some(Self::NorthAmerica),
            "South America" => Some(Self::SouthAmerica),
            "Oceania" => Some(Self::Oceania),
            _ => None,
        }
    }

    /// English display name
    pub fn en(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
        }
    }

    /// German display name
    pub fn de(&self) -> &'static str {
        match self {
            Self::Africa => "Afrika",
            Self::Asia => "Asien",
            Self::Europe => "Europa",
            Self::NorthAmerica => "Nordamerika",
            Self::SouthAmerica => "Südamerika",
            Self::Oceania => "Ozeanien",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_continents_round_trip() {
        for name in [
            "Africa",
            "Asia",
            "Europe",
            "North America",
            "South America",
            "Oceania",
        ] {
            let continent = Continent::from_en(name).unwrap();
            assert_eq!(continent.en(), name);
        }
    }

    #[test]
    fn test_antarctica_is_not_permitted() {
        assert_eq!(Continent::from_en("Antarctica"), None);
    }

    #[test]
    fn test_unknown_name_is_not_permitted() {
        assert_eq!(Continent::from_en("Atlantis"), None);
        assert_eq!(Continent::from_en(""), None);
    }

    #[test]
    fn test_german_names() {
        assert_eq!(Continent::Europe.de(), "Europa");
        assert_eq!(Continent::SouthAmerica.de(), "Südamerika");
        assert_eq!(Continent::Oceania.de(), "Ozeanien");
    }
}
