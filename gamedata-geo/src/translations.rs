//! Hardcoded German translations for the offline generator
//!
//! Static input data, not logic. Covers the UN member and observer states;
//! the networked generator fetches equivalent data remotely instead.

use std::collections::BTreeMap;

use crate::model::GermanCountry;

/// (alpha2, country_de, capital_de)
const GERMAN_TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("AF", "Afghanistan", "Kabul"),
    ("AL", "Albanien", "Tirana"),
    ("DZ", "Algerien", "Algier"),
    ("AD", "Andorra", "Andorra la Vella"),
    ("AO", "Angola", "Luanda"),
    ("AG", "Antigua und Barbuda", "Saint John's"),
    ("AR", "Argentinien", "Buenos Aires"),
    ("AM", "Armenien", "Eriwan"),
    ("AU", "Australien", "Canberra"),
    ("AT", "Österreich", "Wien"),
    ("AZ", "Aserbaidschan", "Baku"),
    ("BS", "Bahamas", "Nassau"),
    ("BH", "Bahrain", "Manama"),
    ("BD", "Bangladesch", "Dhaka"),
    ("BB", "Barbados", "Bridgetown"),
    ("BY", "Belarus", "Minsk"),
    ("BE", "Belgien", "Brüssel"),
    ("BZ", "Belize", "Belmopan"),
    ("BJ", "Benin", "Porto-Novo"),
    ("BT", "Bhutan", "Thimphu"),
    ("BO", "Bolivien", "Sucre"),
    ("BA", "Bosnien und Herzegowina", "Sarajevo"),
    ("BW", "Botswana", "Gaborone"),
    ("BR", "Brasilien", "Brasília"),
    ("BN", "Brunei", "Bandar Seri Begawan"),
    ("BG", "Bulgarien", "Sofia"),
    ("BF", "Burkina Faso", "Ouagadougou"),
    ("BI", "Burundi", "Gitega"),
    ("CV", "Kap Verde", "Praia"),
    ("KH", "Kambodscha", "Phnom Penh"),
    ("CM", "Kamerun", "Yaoundé"),
    ("CA", "Kanada", "Ottawa"),
    ("CF", "Zentralafrikanische Republik", "Bangui"),
    ("TD", "Tschad", "N'Djamena"),
    ("CL", "Chile", "Santiago de Chile"),
    ("CN", "China", "Peking"),
    ("CO", "Kolumbien", "Bogotá"),
    ("KM", "Komoren", "Moroni"),
    ("CG", "Republik Kongo", "Brazzaville"),
    ("CD", "Demokratische Republik Kongo", "Kinshasa"),
    ("CR", "Costa Rica", "San José"),
    ("CI", "Elfenbeinküste", "Yamoussoukro"),
    ("HR", "Kroatien", "Zagreb"),
    ("CU", "Kuba", "Havanna"),
    ("CY", "Zypern", "Nikosia"),
    ("CZ", "Tschechien", "Prag"),
    ("DK", "Dänemark", "Kopenhagen"),
    ("DJ", "Dschibuti", "Dschibuti"),
    ("DM", "Dominica", "Roseau"),
    ("DO", "Dominikanische Republik", "Santo Domingo"),
    ("EC", "Ecuador", "Quito"),
    ("EG", "Ägypten", "Kairo"),
    ("SV", "El Salvador", "San Salvador"),
    ("GQ", "Äquatorialguinea", "Malabo"),
    ("ER", "Eritrea", "Asmara"),
    ("EE", "Estland", "Tallinn"),
    ("SZ", "Eswatini", "Mbabane"),
    ("ET", "Äthiopien", "Addis Abeba"),
    ("FJ", "Fidschi", "Suva"),
    ("FI", "Finnland", "Helsinki"),
    ("FR", "Frankreich", "Paris"),
    ("GA", "Gabun", "Libreville"),
    ("GM", "Gambia", "Banjul"),
    ("GE", "Georgien", "Tiflis"),
    ("DE", "Deutschland", "Berlin"),
    ("GH", "Ghana", "Accra"),
    ("GR", "Griechenland", "Athen"),
    ("GD", "Grenada", "Saint George's"),
    ("GT", "Guatemala", "Guatemala-Stadt"),
    ("GN", "Guinea", "Conakry"),
    ("GW", "Guinea-Bissau", "Bissau"),
    ("GY", "Guyana", "Georgetown"),
    ("HT", "Haiti", "Port-au-Prince"),
    ("HN", "Honduras", "Tegucigalpa"),
    ("HU", "Ungarn", "Budapest"),
    ("IS", "Island", "Reykjavík"),
    ("IN", "Indien", "Neu-Delhi"),
    ("ID", "Indonesien", "Jakarta"),
    ("IR", "Iran", "Teheran"),
    ("IQ", "Irak", "Bagdad"),
    ("IE", "Irland", "Dublin"),
    ("IL", "Israel", "Jerusalem"),
    ("IT", "Italien", "Rom"),
    ("JM", "Jamaika", "Kingston"),
    ("JP", "Japan", "Tokio"),
    ("JO", "Jordanien", "Amman"),
    ("KZ", "Kasachstan", "Astana"),
    ("KE", "Kenia", "Nairobi"),
    ("KI", "Kiribati", "Tarawa"),
    ("KP", "Nordkorea", "Pjöngjang"),
    ("KR", "Südkorea", "Seoul"),
    ("KW", "Kuwait", "Kuwait-Stadt"),
    ("KG", "Kirgisistan", "Bischkek"),
    ("LA", "Laos", "Vientiane"),
    ("LV", "Lettland", "Riga"),
    ("LB", "Libanon", "Beirut"),
    ("LS", "Lesotho", "Maseru"),
    ("LR", "Liberia", "Monrovia"),
    ("LY", "Libyen", "Tripolis"),
    ("LI", "Liechtenstein", "Vaduz"),
    ("LT", "Litauen", "Vilnius"),
    ("LU", "Luxemburg", "Luxemburg"),
    ("MG", "Madagaskar", "Antananarivo"),
    ("MW", "Malawi", "Lilongwe"),
    ("MY", "Malaysia", "Kuala Lumpur"),
    ("MV", "Malediven", "Malé"),
    ("ML", "Mali", "Bamako"),
    ("MT", "Malta", "Valletta"),
    ("MH", "Marshallinseln", "Majuro"),
    ("MR", "Mauretanien", "Nouakchott"),
    ("MU", "Mauritius", "Port Louis"),
    ("MX", "Mexiko", "Mexiko-Stadt"),
    ("FM", "Mikronesien", "Palikir"),
    ("MD", "Moldau", "Chișinău"),
    ("MC", "Monaco", "Monaco"),
    ("MN", "Mongolei", "Ulaanbaatar"),
    ("ME", "Montenegro", "Podgorica"),
    ("MA", "Marokko", "Rabat"),
    ("MZ", "Mosambik", "Maputo"),
    ("MM", "Myanmar", "Naypyidaw"),
    ("NA", "Namibia", "Windhoek"),
    ("NR", "Nauru", "Yaren"),
    ("NP", "Nepal", "Kathmandu"),
    ("NL", "Niederlande", "Amsterdam"),
    ("NZ", "Neuseeland", "Wellington"),
    ("NI", "Nicaragua", "Managua"),
    ("NE", "Niger", "Niamey"),
    ("NG", "Nigeria", "Abuja"),
    ("MK", "Nordmazedonien", "Skopje"),
    ("NO", "Norwegen", "Oslo"),
    ("OM", "Oman", "Maskat"),
    ("PK", "Pakistan", "Islamabad"),
    ("PW", "Palau", "Ngerulmud"),
    ("PS", "Palästina", "Ramallah"),
    ("PA", "Panama", "Panama-Stadt"),
    ("PG", "Papua-Neuguinea", "Port Moresby"),
    ("PY", "Paraguay", "Asunción"),
    ("PE", "Peru", "Lima"),
    ("PH", "Philippinen", "Manila"),
    ("PL", "Polen", "Warschau"),
    ("PT", "Portugal", "Lissabon"),
    ("QA", "Katar", "Doha"),
    ("RO", "Rumänien", "Bukarest"),
    ("RU", "Russland", "Moskau"),
    ("RW", "Ruanda", "Kigali"),
    ("KN", "St. Kitts und Nevis", "Basseterre"),
    ("LC", "St. Lucia", "Castries"),
    ("VC", "St. Vincent und die Grenadinen", "Kingstown"),
    ("WS", "Samoa", "Apia"),
    ("SM", "San Marino", "San Marino"),
    ("ST", "São Tomé und Príncipe", "São Tomé"),
    ("SA", "Saudi-Arabien", "Riad"),
    ("SN", "Senegal", "Dakar"),
    ("RS", "Serbien", "Belgrad"),
    ("SC", "Seychellen", "Victoria"),
    ("SL", "Sierra Leone", "Freetown"),
    ("SG", "Singapur", "Singapur"),
    ("SK", "Slowakei", "Bratislava"),
    ("SI", "Slowenien", "Ljubljana"),
    ("SB", "Salomonen", "Honiara"),
    ("SO", "Somalia", "Mogadischu"),
    ("ZA", "Südafrika", "Pretoria"),
    ("SS", "Südsudan", "Juba"),
    ("ES", "Spanien", "Madrid"),
    ("LK", "Sri Lanka", "Colombo"),
    ("SD", "Sudan", "Khartum"),
    ("SR", "Suriname", "Paramaribo"),
    ("SE", "Schweden", "Stockholm"),
    ("CH", "Schweiz", "Bern"),
    ("SY", "Syrien", "Damaskus"),
    ("TJ", "Tadschikistan", "Duschanbe"),
    ("TZ", "Tansania", "Dodoma"),
    ("TH", "Thailand", "Bangkok"),
    ("TL", "Osttimor", "Dili"),
    ("TG", "Togo", "Lomé"),
    ("TO", "Tonga", "Nuku'alofa"),
    ("TT", "Trinidad und Tobago", "Port of Spain"),
    ("TN", "Tunesien", "Tunis"),
    ("TR", "Türkei", "Ankara"),
    ("TM", "Turkmenistan", "Aschgabat"),
    ("TV", "Tuvalu", "Funafuti"),
    ("UG", "Uganda", "Kampala"),
    ("UA", "Ukraine", "Kiew"),
    ("AE", "Vereinigte Arabische Emirate", "Abu Dhabi"),
    ("GB", "Vereinigtes Königreich", "London"),
    ("US", "Vereinigte Staaten", "Washington, D.C."),
    ("UY", "Uruguay", "Montevideo"),
    ("UZ", "Usbekistan", "Taschkent"),
    ("VU", "Vanuatu", "Port Vila"),
    ("VA", "Vatikanstadt", "Vatikanstadt"),
    ("VE", "Venezuela", "Caracas"),
    ("VN", "Vietnam", "Hanoi"),
    ("YE", "Jemen", "Sanaa"),
    ("ZM", "Sambia", "Lusaka"),
    ("ZW", "Simbabwe", "Harare"),
];

/// Materialize the static table in the shape the merge expects.
pub fn german_translations() -> BTreeMap<String, GermanCountry> {
    GERMAN_TRANSLATIONS
        .iter()
        .map(|(alpha2, country, capital)| {
            (
                (*alpha2).to_string(),
                GermanCountry {
                    alpha2: Some((*alpha2).to_string()),
                    name: (*country).to_string(),
                    capital: (*capital).to_string(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let table = german_translations();
        assert_eq!(table.len(), GERMAN_TRANSLATIONS.len());
    }

    #[test]
    fn test_entries_are_complete() {
        for (alpha2, country, capital) in GERMAN_TRANSLATIONS {
            assert_eq!(alpha2.len(), 2, "bad code {:?}", alpha2);
            assert!(!country.is_empty(), "empty country for {}", alpha2);
            assert!(!capital.is_empty(), "empty capital for {}", alpha2);
        }
    }

    #[test]
    fn test_known_translations() {
        let table = german_translations();

        let ch = table.get("CH").unwrap();
        assert_eq!(ch.name, "Schweiz");
        assert_eq!(ch.capital, "Bern");

        let ci = table.get("CI").unwrap();
        assert_eq!(ci.name, "Elfenbeinküste");
    }

    #[test]
    fn test_covers_all_tagged_countries() {
        // Every extraordinary-tagged country must survive validation in the
        // offline pipeline, so its translation has to exist here.
        let table = german_translations();
        for code in [
            "CH", "BF", "TD", "TV", "MN", "CI", "BW", "HT", "BI", "MW", "SB",
        ] {
            assert!(table.contains_key(code), "missing translation for {}", code);
        }
    }
}
