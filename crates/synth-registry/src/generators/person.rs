//! Personal names.

use super::{pick, Builtin};
use rand::{Rng, RngCore};

pub(crate) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark", "Sandra",
    "Steven", "Ashley", "Andrew", "Emily", "Joshua", "Donna", "Kevin", "Michelle", "Brian",
    "Carol", "George", "Amanda",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
];

const PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

const SUFFIXES: &[&str] = &["Jr.", "Sr.", "II", "III", "PhD", "MD", "DDS"];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("name", name),
    Builtin::new("first_name", first_name),
    Builtin::new("last_name", last_name),
    Builtin::new("prefix", prefix),
    Builtin::new("suffix", suffix),
    Builtin::new("initials", initials),
];

pub fn first_name(rng: &mut dyn RngCore) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name(rng: &mut dyn RngCore) -> String {
    pick(rng, LAST_NAMES).to_string()
}

/// Full name, occasionally with an honorific or suffix.
pub fn name(rng: &mut dyn RngCore) -> String {
    let core = format!("{} {}", first_name(rng), last_name(rng));
    match rng.gen_range(0..10) {
        0 => format!("{} {}", prefix(rng), core),
        1 => format!("{} {}", core, suffix(rng)),
        _ => core,
    }
}

pub fn prefix(rng: &mut dyn RngCore) -> String {
    pick(rng, PREFIXES).to_string()
}

pub fn suffix(rng: &mut dyn RngCore) -> String {
    pick(rng, SUFFIXES).to_string()
}

pub fn initials(rng: &mut dyn RngCore) -> String {
    (0..2).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect()
}
