//! Built-in fake-data providers.
//!
//! Each provider module declares a static table of `(name, function)` pairs.
//! The registry is built by walking [`providers()`]; adding a capability means
//! adding a row to one of these tables (or a new provider to the list below).

pub mod address;
pub mod color;
pub mod company;
pub mod datetime;
pub mod finance;
pub mod hex;
pub mod identifiers;
pub mod internet;
pub mod numeric;
pub mod person;
pub mod phone;
pub mod text;

use rand::{Rng, RngCore};

/// Signature shared by every built-in generator.
pub type GeneratorFn = fn(&mut dyn RngCore) -> String;

/// One named generator in a provider table.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub generate: GeneratorFn,
}

impl Builtin {
    pub const fn new(name: &'static str, generate: GeneratorFn) -> Self {
        Self { name, generate }
    }
}

/// A named group of generators.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub name: &'static str,
    pub generators: &'static [Builtin],
}

const PROVIDERS: &[Provider] = &[
    Provider {
        name: "person",
        generators: person::GENERATORS,
    },
    Provider {
        name: "address",
        generators: address::GENERATORS,
    },
    Provider {
        name: "company",
        generators: company::GENERATORS,
    },
    Provider {
        name: "internet",
        generators: internet::GENERATORS,
    },
    Provider {
        name: "phone",
        generators: phone::GENERATORS,
    },
    Provider {
        name: "text",
        generators: text::GENERATORS,
    },
    Provider {
        name: "numeric",
        generators: numeric::GENERATORS,
    },
    Provider {
        name: "datetime",
        generators: datetime::GENERATORS,
    },
    Provider {
        name: "identifiers",
        generators: identifiers::GENERATORS,
    },
    Provider {
        name: "color",
        generators: color::GENERATORS,
    },
    Provider {
        name: "finance",
        generators: finance::GENERATORS,
    },
    Provider {
        name: "hexadecimal",
        generators: hex::GENERATORS,
    },
];

/// Every built-in provider, in registration order.
pub fn providers() -> &'static [Provider] {
    PROVIDERS
}

/// Pick one entry from a non-empty table.
pub(crate) fn pick<'a>(rng: &mut dyn RngCore, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Replace `#` with a random digit and `%` with a random non-zero digit.
pub(crate) fn numerify(rng: &mut dyn RngCore, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => digit(rng, 0),
            '%' => digit(rng, 1),
            other => other,
        })
        .collect()
}

/// Random string of exactly `count` decimal digits, without a leading zero.
pub(crate) fn digits(rng: &mut dyn RngCore, count: usize) -> String {
    (0..count)
        .map(|i| digit(rng, if i == 0 { 1 } else { 0 }))
        .collect()
}

fn digit(rng: &mut dyn RngCore, min: u32) -> char {
    char::from(b'0' + rng.gen_range(min..10) as u8)
}
