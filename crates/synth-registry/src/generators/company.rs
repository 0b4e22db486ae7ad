//! Company names and job titles.

use super::{pick, Builtin};
use crate::generators::person::LAST_NAMES;
use rand::{Rng, RngCore};

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "and Sons", "PLC", "Co"];

const JOBS: &[&str] = &[
    "Accountant",
    "Architect",
    "Civil engineer",
    "Data scientist",
    "Dentist",
    "Editor",
    "Electrician",
    "Graphic designer",
    "Journalist",
    "Librarian",
    "Mechanical engineer",
    "Nurse",
    "Paramedic",
    "Pharmacist",
    "Photographer",
    "Physicist",
    "Product manager",
    "Software engineer",
    "Surveyor",
    "Translator",
    "Urban planner",
    "Veterinarian",
];

const CATCH_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Cross-platform", "Decentralized", "Ergonomic",
    "Focused", "Integrated", "Optimized", "Proactive", "Robust", "Seamless", "Streamlined",
];

const CATCH_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "dynamic", "fault-tolerant", "global", "hybrid",
    "incremental", "modular", "real-time", "scalable", "systematic",
];

const CATCH_NOUNS: &[&str] = &[
    "ability", "architecture", "capacity", "encoding", "framework", "hub", "infrastructure",
    "interface", "middleware", "paradigm", "portal", "solution", "workforce",
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("company", company),
    Builtin::new("company_suffix", company_suffix),
    Builtin::new("job", job),
    Builtin::new("catch_phrase", catch_phrase),
];

pub fn company_suffix(rng: &mut dyn RngCore) -> String {
    pick(rng, COMPANY_SUFFIXES).to_string()
}

pub fn company(rng: &mut dyn RngCore) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), company_suffix(rng)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn job(rng: &mut dyn RngCore) -> String {
    pick(rng, JOBS).to_string()
}

pub fn catch_phrase(rng: &mut dyn RngCore) -> String {
    format!(
        "{} {} {}",
        pick(rng, CATCH_ADJECTIVES),
        pick(rng, CATCH_DESCRIPTORS),
        pick(rng, CATCH_NOUNS)
    )
}
