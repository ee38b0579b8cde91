//! District → region table.
//!
//! A request's `location` is always `"<District> - <Region>"` with the pair
//! drawn from this table. The dashboard groups on that exact string, so the
//! separator and spelling here are load-bearing.

use serde::Serialize;
use utoipa::ToSchema;

/// Separator between district and region in a composed location.
pub const LOCATION_SEPARATOR: &str = " - ";

/// Every district with its regions, in display order.
pub static DISTRICTS: &[(&str, &[&str])] = &[
    (
        "Gampaha",
        &[
            "Negombo", "Gampaha City", "Kelaniya", "Wattala", "Ja-Ela", "Minuwangoda",
            "Mirigama", "Attanagalla", "Divulapitiya", "Mahara", "Dompe", "Biyagama",
        ],
    ),
    (
        "Colombo",
        &[
            "Colombo Fort", "Pettah", "Borella", "Cinnamon Gardens", "Maradana",
            "Havelock Town", "Wellawatte", "Dehiwala", "Mount Lavinia", "Moratuwa", "Kotte",
            "Battaramulla", "Nugegoda", "Maharagama", "Homagama", "Avissawella", "Kolonnawa",
            "Kaduwela", "Kesbewa", "Padukka",
        ],
    ),
    (
        "Puttalam",
        &[
            "Puttalam Town", "Chilaw", "Nattandiya", "Wennappuwa", "Mahawewa", "Anamaduwa",
            "Kalpitiya", "Mundel", "Dankotuwa", "Karuwalagaswewa", "Nawagattegama",
            "Vanathavilluwa",
        ],
    ),
    (
        "Mannar",
        &["Mannar Town", "Nanattan", "Musali", "Madhu", "Manthai West"],
    ),
    (
        "Trincomalee",
        &[
            "Trincomalee Town", "Kantale", "Kinniya", "Mutur", "Kuchchaveli", "Seruvila",
            "Thampalakamam", "Gomarankadawala", "Morawewa", "Padavi Sripura", "Verugal",
        ],
    ),
    (
        "Batticaloa",
        &[
            "Batticaloa", "Kattankudy", "Eravur Town", "Eravur Pattu",
            "Koralai Pattu (Valaichchenai)", "Manmunai North", "Porativu Pattu",
            "Kaluwanchikudy", "Vavunathivu",
        ],
    ),
    (
        "Kandy",
        &[
            "Kandy City", "Peradeniya", "Katugastota", "Gampola", "Nawalapitiya", "Kundasale",
            "Gangawata Korale", "Pathadumbara", "Udunuwara", "Yatinuwara", "Harispattuwa",
            "Teldeniya", "Digana",
        ],
    ),
    (
        "Badulla",
        &[
            "Badulla", "Bandarawela", "Haputale", "Mahiyanganaya", "Welimada", "Hali-Ela",
            "Ella", "Passara", "Uva Paranagama", "Soranathota",
        ],
    ),
    (
        "Matale",
        &[
            "Matale", "Dambulla", "Sigiriya", "Rattota", "Ukuwela", "Yatawatta", "Pallepola",
            "Naula", "Galewela", "Wilgamuwa", "Laggala-Pallegama",
        ],
    ),
    (
        "Kurunegala",
        &[
            "Kurunegala", "Kuliyapitiya", "Narammala", "Wariyapola", "Nikaweratiya",
            "Mawathagama", "Polgahawela", "Ibbagamuwa", "Pannala", "Giriulla", "Hettipola",
            "Bingiriya",
        ],
    ),
    (
        "Ampara",
        &[
            "Ampara", "Kalmunai", "Sammanthurai", "Akkaraipattu", "Pottuvil", "Uhana",
            "Damana", "Dehiattakandiya", "Padiyathalawa", "Mahaoya", "Addalaichenai",
            "Alayadivembu",
        ],
    ),
    (
        "Rathnapura",
        &[
            "Rathnapura", "Embilipitiya", "Balangoda", "Pelmadulla", "Eheliyagoda", "Kuruwita",
            "Nivitigala", "Imbulpe", "Godakawela", "Kahawatta", "Rakwana", "Weligepola",
        ],
    ),
    (
        "Mullaitivu",
        &[
            "Mullaitivu Town", "Puthukkudiyiruppu", "Oddusuddan", "Tunukkai", "Manthai East",
            "Welioya",
        ],
    ),
    (
        "Killinochchi",
        &["Killinochchi Town", "Poonakary", "Karachchi", "Pachchilaipalli", "Kandavalai"],
    ),
    (
        "Vavuniya",
        &[
            "Vavuniya Town", "Vavuniya South", "Vavuniya North", "Cheddikulam",
            "Venkalacheddikulam",
        ],
    ),
    (
        "Jaffna",
        &[
            "Jaffna Town", "Nallur", "Chavakachcheri", "Point Pedro", "Kankesanthurai", "Kopay",
            "Sandilipay", "Tellippalai", "Uduvil", "Chankanai", "Karainagar", "Velanai", "Kayts",
            "Delft",
        ],
    ),
];

/// Units offered by the submission form.
pub const UNITS: &[&str] = &["units", "packs", "kg", "liters", "boxes", "pairs", "sets"];

pub fn districts() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|(district, _)| *district)
}

/// Regions of `district`, exact spelling.
pub fn regions_of(district: &str) -> Option<&'static [&'static str]> {
    DISTRICTS
        .iter()
        .find(|(name, _)| *name == district)
        .map(|(_, regions)| *regions)
}

/// Whether `region` belongs to `district` (exact spelling).
pub fn is_valid(district: &str, region: &str) -> bool {
    regions_of(district).is_some_and(|regions| regions.contains(&region))
}

pub fn compose_location(district: &str, region: &str) -> String {
    format!("{district}{LOCATION_SEPARATOR}{region}")
}

/// Splits a composed location back into its district and region.
pub fn split_location(location: &str) -> Option<(&str, &str)> {
    location.split_once(LOCATION_SEPARATOR)
}

/// Case-insensitive district lookup returning the canonical spelling.
pub fn match_district(name: &str) -> Option<&'static str> {
    let name = name.trim();
    districts().find(|district| district.eq_ignore_ascii_case(name))
}

/// Case-insensitive region lookup within a district.
pub fn match_region(district: &str, name: &str) -> Option<&'static str> {
    let name = name.trim();
    regions_of(district)?
        .iter()
        .copied()
        .find(|region| region.eq_ignore_ascii_case(name))
}

/// Every composed location, district order then region order.
pub fn all_locations() -> Vec<String> {
    DISTRICTS
        .iter()
        .flat_map(|(district, regions)| {
            regions
                .iter()
                .map(move |region| compose_location(district, region))
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DistrictRegions {
    pub district: String,
    pub regions: Vec<String>,
}

/// Response for `GET /api/locations`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationsResponse {
    pub districts: Vec<DistrictRegions>,
    pub locations: Vec<String>,
    pub units: Vec<String>,
}

impl LocationsResponse {
    pub fn from_table() -> Self {
        Self {
            districts: DISTRICTS
                .iter()
                .map(|(district, regions)| DistrictRegions {
                    district: district.to_string(),
                    regions: regions.iter().map(|r| r.to_string()).collect(),
                })
                .collect(),
            locations: all_locations(),
            units: UNITS.iter().map(|u| u.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_sixteen_districts() {
        assert_eq!(DISTRICTS.len(), 16);
        assert_eq!(districts().next(), Some("Gampaha"));
    }

    #[test]
    fn test_is_valid_pairs() {
        assert!(is_valid("Colombo", "Dehiwala"));
        assert!(is_valid("Kandy", "Peradeniya"));
        assert!(!is_valid("Kandy", "Dehiwala"));
        assert!(!is_valid("Atlantis", "Dehiwala"));
        assert!(!is_valid("colombo", "Dehiwala"));
    }

    #[test]
    fn test_compose_and_split_location() {
        let location = compose_location("Gampaha", "Negombo");
        assert_eq!(location, "Gampaha - Negombo");
        assert_eq!(split_location(&location), Some(("Gampaha", "Negombo")));
    }

    #[test]
    fn test_region_with_hyphen_splits_on_spaced_separator() {
        let location = compose_location("Gampaha", "Ja-Ela");
        assert_eq!(split_location(&location), Some(("Gampaha", "Ja-Ela")));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(match_district(" jaffna "), Some("Jaffna"));
        assert_eq!(match_region("Jaffna", "point pedro"), Some("Point Pedro"));
        assert_eq!(match_region("Jaffna", "Negombo"), None);
        assert_eq!(match_district("Nowhere"), None);
    }

    #[test]
    fn test_all_locations_covers_every_region() {
        let expected: usize = DISTRICTS.iter().map(|(_, regions)| regions.len()).sum();
        let locations = all_locations();
        assert_eq!(locations.len(), expected);
        assert!(locations.contains(&"Colombo - Dehiwala".to_string()));
    }

    #[test]
    fn test_locations_response_from_table() {
        let response = LocationsResponse::from_table();
        assert_eq!(response.districts.len(), 16);
        assert_eq!(response.units.len(), UNITS.len());
    }
}
