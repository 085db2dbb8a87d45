use serde::{Deserialize, Serialize};

pub type LocationId = usize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Disease {
    Blue,
    Black,
    Red,
    Yellow,
}

impl Disease {
    pub const ALL: [Disease; 4] = [Disease::Blue, Disease::Black, Disease::Red, Disease::Yellow];

    pub fn index(self) -> usize {
        match self {
            Disease::Blue => 0,
            Disease::Black => 1,
            Disease::Red => 2,
            Disease::Yellow => 3,
        }
    }
}

/// Immutable board lookup: per-location neighbor sets and disease colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMap {
    neighbors: Vec<Vec<LocationId>>,
    colors: Vec<Disease>,
}

impl WorldMap {
    /// Builds a map from an undirected edge list. Edges referencing ids
    /// outside `colors` are ignored; duplicates collapse to one link.
    pub fn from_edges(colors: Vec<Disease>, edges: &[(LocationId, LocationId)]) -> Self {
        let count = colors.len();
        let mut neighbors = vec![Vec::new(); count];
        for &(a, b) in edges {
            if a >= count || b >= count || a == b {
                continue;
            }
            if !neighbors[a].contains(&b) {
                neighbors[a].push(b);
            }
            if !neighbors[b].contains(&a) {
                neighbors[b].push(a);
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }
        Self { neighbors, colors }
    }

    pub fn city_count(&self) -> usize {
        self.colors.len()
    }

    pub fn neighbors(&self, location: LocationId) -> &[LocationId] {
        &self.neighbors[location]
    }

    pub fn disease(&self, location: LocationId) -> Disease {
        self.colors[location]
    }

    /// The standard 48-city board: four blocks of twelve cities per color,
    /// ids following the `city` module constants.
    pub fn standard() -> Self {
        let mut colors = Vec::with_capacity(48);
        for disease in Disease::ALL {
            colors.extend(std::iter::repeat(disease).take(12));
        }
        Self::from_edges(colors, city::LINKS)
    }
}

/// Location ids for the standard board.
pub mod city {
    use super::LocationId;

    pub const SAN_FRANCISCO: LocationId = 0;
    pub const CHICAGO: LocationId = 1;
    pub const MONTREAL: LocationId = 2;
    pub const NEW_YORK: LocationId = 3;
    pub const WASHINGTON: LocationId = 4;
    pub const ATLANTA: LocationId = 5;
    pub const MADRID: LocationId = 6;
    pub const LONDON: LocationId = 7;
    pub const PARIS: LocationId = 8;
    pub const ESSEN: LocationId = 9;
    pub const MILAN: LocationId = 10;
    pub const ST_PETERSBURG: LocationId = 11;
    pub const ALGIERS: LocationId = 12;
    pub const ISTANBUL: LocationId = 13;
    pub const MOSCOW: LocationId = 14;
    pub const CAIRO: LocationId = 15;
    pub const BAGHDAD: LocationId = 16;
    pub const TEHRAN: LocationId = 17;
    pub const DELHI: LocationId = 18;
    pub const KARACHI: LocationId = 19;
    pub const RIYADH: LocationId = 20;
    pub const MUMBAI: LocationId = 21;
    pub const CHENNAI: LocationId = 22;
    pub const KOLKATA: LocationId = 23;
    pub const BEIJING: LocationId = 24;
    pub const SEOUL: LocationId = 25;
    pub const TOKYO: LocationId = 26;
    pub const SHANGHAI: LocationId = 27;
    pub const HONG_KONG: LocationId = 28;
    pub const TAIPEI: LocationId = 29;
    pub const OSAKA: LocationId = 30;
    pub const BANGKOK: LocationId = 31;
    pub const HO_CHI_MINH_CITY: LocationId = 32;
    pub const MANILA: LocationId = 33;
    pub const JAKARTA: LocationId = 34;
    pub const SYDNEY: LocationId = 35;
    pub const KHARTOUM: LocationId = 36;
    pub const JOHANNESBURG: LocationId = 37;
    pub const KINSHASA: LocationId = 38;
    pub const LAGOS: LocationId = 39;
    pub const SAO_PAULO: LocationId = 40;
    pub const BUENOS_AIRES: LocationId = 41;
    pub const SANTIAGO: LocationId = 42;
    pub const LIMA: LocationId = 43;
    pub const BOGOTA: LocationId = 44;
    pub const MEXICO_CITY: LocationId = 45;
    pub const LOS_ANGELES: LocationId = 46;
    pub const MIAMI: LocationId = 47;

    pub const NAMES: [&str; 48] = [
        "San Francisco",
        "Chicago",
        "Montreal",
        "New York",
        "Washington",
        "Atlanta",
        "Madrid",
        "London",
        "Paris",
        "Essen",
        "Milan",
        "St. Petersburg",
        "Algiers",
        "Istanbul",
        "Moscow",
        "Cairo",
        "Baghdad",
        "Tehran",
        "Delhi",
        "Karachi",
        "Riyadh",
        "Mumbai",
        "Chennai",
        "Kolkata",
        "Beijing",
        "Seoul",
        "Tokyo",
        "Shanghai",
        "Hong Kong",
        "Taipei",
        "Osaka",
        "Bangkok",
        "Ho Chi Minh City",
        "Manila",
        "Jakarta",
        "Sydney",
        "Khartoum",
        "Johannesburg",
        "Kinshasa",
        "Lagos",
        "Sao Paulo",
        "Buenos Aires",
        "Santiago",
        "Lima",
        "Bogota",
        "Mexico City",
        "Los Angeles",
        "Miami",
    ];

    pub const LINKS: &[(LocationId, LocationId)] = &[
        (SAN_FRANCISCO, CHICAGO),
        (SAN_FRANCISCO, LOS_ANGELES),
        (SAN_FRANCISCO, TOKYO),
        (SAN_FRANCISCO, MANILA),
        (CHICAGO, MONTREAL),
        (CHICAGO, ATLANTA),
        (CHICAGO, LOS_ANGELES),
        (CHICAGO, MEXICO_CITY),
        (MONTREAL, NEW_YORK),
        (MONTREAL, WASHINGTON),
        (NEW_YORK, WASHINGTON),
        (NEW_YORK, LONDON),
        (NEW_YORK, MADRID),
        (WASHINGTON, ATLANTA),
        (WASHINGTON, MIAMI),
        (ATLANTA, MIAMI),
        (MADRID, LONDON),
        (MADRID, PARIS),
        (MADRID, ALGIERS),
        (MADRID, SAO_PAULO),
        (LONDON, PARIS),
        (LONDON, ESSEN),
        (PARIS, ESSEN),
        (PARIS, MILAN),
        (PARIS, ALGIERS),
        (ESSEN, MILAN),
        (ESSEN, ST_PETERSBURG),
        (MILAN, ISTANBUL),
        (ST_PETERSBURG, ISTANBUL),
        (ST_PETERSBURG, MOSCOW),
        (ALGIERS, ISTANBUL),
        (ALGIERS, CAIRO),
        (ISTANBUL, MOSCOW),
        (ISTANBUL, BAGHDAD),
        (ISTANBUL, CAIRO),
        (MOSCOW, TEHRAN),
        (CAIRO, BAGHDAD),
        (CAIRO, RIYADH),
        (CAIRO, KHARTOUM),
        (BAGHDAD, TEHRAN),
        (BAGHDAD, KARACHI),
        (BAGHDAD, RIYADH),
        (TEHRAN, KARACHI),
        (TEHRAN, DELHI),
        (DELHI, KARACHI),
        (DELHI, MUMBAI),
        (DELHI, CHENNAI),
        (DELHI, KOLKATA),
        (KARACHI, RIYADH),
        (KARACHI, MUMBAI),
        (MUMBAI, CHENNAI),
        (CHENNAI, KOLKATA),
        (CHENNAI, BANGKOK),
        (CHENNAI, JAKARTA),
        (KOLKATA, BANGKOK),
        (KOLKATA, HONG_KONG),
        (BEIJING, SHANGHAI),
        (BEIJING, SEOUL),
        (SEOUL, SHANGHAI),
        (SEOUL, TOKYO),
        (TOKYO, SHANGHAI),
        (TOKYO, OSAKA),
        (SHANGHAI, TAIPEI),
        (SHANGHAI, HONG_KONG),
        (HONG_KONG, TAIPEI),
        (HONG_KONG, MANILA),
        (HONG_KONG, HO_CHI_MINH_CITY),
        (HONG_KONG, BANGKOK),
        (TAIPEI, OSAKA),
        (TAIPEI, MANILA),
        (BANGKOK, HO_CHI_MINH_CITY),
        (BANGKOK, JAKARTA),
        (HO_CHI_MINH_CITY, MANILA),
        (HO_CHI_MINH_CITY, JAKARTA),
        (MANILA, SYDNEY),
        (JAKARTA, SYDNEY),
        (SYDNEY, LOS_ANGELES),
        (KHARTOUM, LAGOS),
        (KHARTOUM, KINSHASA),
        (KHARTOUM, JOHANNESBURG),
        (JOHANNESBURG, KINSHASA),
        (KINSHASA, LAGOS),
        (LAGOS, SAO_PAULO),
        (SAO_PAULO, BOGOTA),
        (SAO_PAULO, BUENOS_AIRES),
        (BUENOS_AIRES, BOGOTA),
        (SANTIAGO, LIMA),
        (LIMA, MEXICO_CITY),
        (LIMA, BOGOTA),
        (BOGOTA, MEXICO_CITY),
        (BOGOTA, MIAMI),
        (MEXICO_CITY, LOS_ANGELES),
        (MEXICO_CITY, MIAMI),
    ];
}
