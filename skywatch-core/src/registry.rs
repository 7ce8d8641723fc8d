//! Static registry of cities the dashboard knows how to locate.

/// A city the dashboard can show weather for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Stable lookup key, lowercase.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

const CITIES: &[City] = &[
    City { key: "guayaquil", name: "Guayaquil", latitude: -2.1962, longitude: -79.8862 },
    City { key: "quito", name: "Quito", latitude: -0.1807, longitude: -78.4678 },
    City { key: "manta", name: "Manta", latitude: -0.9470, longitude: -80.7080 },
    City { key: "cuenca", name: "Cuenca", latitude: -2.9006, longitude: -79.0045 },
];

/// Every city in the registry, in display order.
pub fn all() -> &'static [City] {
    CITIES
}

/// Look up a city by key, case-insensitively.
pub fn find(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.key.eq_ignore_ascii_case(key.trim()))
}

/// City used when nothing is selected or configured.
pub fn default_city() -> &'static City {
    &CITIES[0]
}
