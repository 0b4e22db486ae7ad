//! Postal addresses and coordinates.

use super::{numerify, pick, Builtin};
use crate::generators::person::{FIRST_NAMES, LAST_NAMES};
use rand::{Rng, RngCore};

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

const CITY_PREFIXES: &[&str] = &["North", "South", "East", "West", "New", "Lake", "Port"];

const CITY_SUFFIXES: &[&str] = &[
    "ville", "town", "burgh", "field", "port", "side", "haven", "mouth", "view", "land",
];

const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Arizona", "AZ"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Illinois", "IL"),
    ("Maine", "ME"),
    ("Michigan", "MI"),
    ("Nevada", "NV"),
    ("New York", "NY"),
    ("Ohio", "OH"),
    ("Oregon", "OR"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Washington", "WA"),
];

const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("India", "IN"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("Kenya", "KE"),
    ("Mexico", "MX"),
    ("Netherlands", "NL"),
    ("Norway", "NO"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("address", address),
    Builtin::new("street_address", street_address),
    Builtin::new("street_name", street_name),
    Builtin::new("street_suffix", street_suffix),
    Builtin::new("building_number", building_number),
    Builtin::new("secondary_address", secondary_address),
    Builtin::new("city", city),
    Builtin::new("state", state),
    Builtin::new("state_abbr", state_abbr),
    Builtin::new("country", country),
    Builtin::new("country_code", country_code),
    Builtin::new("postcode", postcode),
    Builtin::new("postalcode", postcode),
    Builtin::new("zipcode", postcode),
    Builtin::new("latitude", latitude),
    Builtin::new("longitude", longitude),
];

pub fn street_suffix(rng: &mut dyn RngCore) -> String {
    pick(rng, STREET_SUFFIXES).to_string()
}

pub fn street_name(rng: &mut dyn RngCore) -> String {
    let stem = if rng.gen_bool(0.5) {
        pick(rng, FIRST_NAMES)
    } else {
        pick(rng, LAST_NAMES)
    };
    format!("{} {}", stem, street_suffix(rng))
}

pub fn building_number(rng: &mut dyn RngCore) -> String {
    let pattern = match rng.gen_range(0..3) {
        0 => "%##",
        1 => "%###",
        _ => "%####",
    };
    numerify(rng, pattern)
}

pub fn street_address(rng: &mut dyn RngCore) -> String {
    format!("{} {}", building_number(rng), street_name(rng))
}

pub fn secondary_address(rng: &mut dyn RngCore) -> String {
    let kind = if rng.gen_bool(0.5) { "Apt." } else { "Suite" };
    format!("{} {}", kind, numerify(rng, "%##"))
}

pub fn city(rng: &mut dyn RngCore) -> String {
    let stem = pick(rng, LAST_NAMES);
    if rng.gen_bool(0.3) {
        format!("{} {}", pick(rng, CITY_PREFIXES), stem)
    } else {
        format!("{}{}", stem, pick(rng, CITY_SUFFIXES))
    }
}

pub fn state(rng: &mut dyn RngCore) -> String {
    STATES[rng.gen_range(0..STATES.len())].0.to_string()
}

pub fn state_abbr(rng: &mut dyn RngCore) -> String {
    STATES[rng.gen_range(0..STATES.len())].1.to_string()
}

pub fn country(rng: &mut dyn RngCore) -> String {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())].0.to_string()
}

pub fn country_code(rng: &mut dyn RngCore) -> String {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())].1.to_string()
}

/// Five-digit postal code.
pub fn postcode(rng: &mut dyn RngCore) -> String {
    numerify(rng, "#####")
}

/// Street line, then `City, ST 12345`.
pub fn address(rng: &mut dyn RngCore) -> String {
    format!(
        "{}\n{}, {} {}",
        street_address(rng),
        city(rng),
        state_abbr(rng),
        postcode(rng)
    )
}

pub fn latitude(rng: &mut dyn RngCore) -> String {
    format!("{:.6}", rng.gen_range(-90.0..=90.0f64))
}

pub fn longitude(rng: &mut dyn RngCore) -> String {
    format!("{:.6}", rng.gen_range(-180.0..=180.0f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_postcode_five_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = postcode(&mut rng);
            assert_eq!(value.len(), 5);
            assert!(value.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_address_has_two_lines() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = address(&mut rng);
        let lines: Vec<&str> = value.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(", "));
    }

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let lat: f64 = latitude(&mut rng).parse().unwrap();
            let lon: f64 = longitude(&mut rng).parse().unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }
}
