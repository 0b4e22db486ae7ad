//! Payment and currency values.

use super::{pick, Builtin};
use rand::{Rng, RngCore};

const CURRENCY_CODES: &[&str] = &[
    "AUD", "BRL", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "KES", "MXN", "NOK", "SEK",
    "USD", "ZAR",
];

/// Issuer prefixes; every generated card number is 16 digits.
const CARD_PREFIXES: &[&str] = &["4", "51", "52", "53", "54", "55", "6011"];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("currency_code", currency_code),
    Builtin::new("credit_card_number", credit_card_number),
    Builtin::new("credit_card_expire", credit_card_expire),
    Builtin::new("credit_card_security_code", credit_card_security_code),
    Builtin::new("pricetag", pricetag),
];

pub fn currency_code(rng: &mut dyn RngCore) -> String {
    pick(rng, CURRENCY_CODES).to_string()
}

/// Sixteen-digit card number passing the Luhn check.
pub fn credit_card_number(rng: &mut dyn RngCore) -> String {
    let prefix = pick(rng, CARD_PREFIXES);
    let mut number: Vec<u32> = prefix.chars().filter_map(|c| c.to_digit(10)).collect();
    while number.len() < 15 {
        number.push(rng.gen_range(0..10));
    }
    number.push(luhn_check_digit(&number));
    number
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

/// `MM/YY`
pub fn credit_card_expire(rng: &mut dyn RngCore) -> String {
    format!("{:02}/{:02}", rng.gen_range(1..=12), rng.gen_range(25..=35))
}

pub fn credit_card_security_code(rng: &mut dyn RngCore) -> String {
    format!("{:03}", rng.gen_range(0..1000))
}

/// Dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn pricetag(rng: &mut dyn RngCore) -> String {
    let cents: u64 = rng.gen_range(100..10_000_000);
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

fn luhn_check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                *d
            }
        })
        .sum();
    (10 - sum % 10) % 10
}
