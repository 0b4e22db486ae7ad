//! Identifier generators: UUIDs, ISBN/EAN codes, SSNs, license plates.

use super::{numerify, Builtin};
use rand::{Rng, RngCore};
use uuid::Builder;

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("uuid4", uuid4),
    Builtin::new("ssn", ssn),
    Builtin::new("isbn10", isbn10),
    Builtin::new("isbn13", isbn13),
    Builtin::new("ean13", ean13),
    Builtin::new("license_plate", license_plate),
];

/// Random UUID v4 drawn from the provided RNG.
pub fn uuid4(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

pub fn ssn(rng: &mut dyn RngCore) -> String {
    numerify(rng, "%##-%#-####")
}

/// ISBN-10 with a valid mod-11 check character.
pub fn isbn10(rng: &mut dyn RngCore) -> String {
    let body: Vec<u32> = (0..9).map(|_| rng.gen_range(0..10)).collect();
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    let check = (11 - sum % 11) % 11;

    let mut result: String = body.iter().map(|d| digit_char(*d)).collect();
    result.push(if check == 10 { 'X' } else { digit_char(check) });
    result
}

/// ISBN-13 in the 978 prefix with a valid check digit.
pub fn isbn13(rng: &mut dyn RngCore) -> String {
    let mut body = vec![9, 7, 8];
    body.extend((0..9).map(|_| rng.gen_range(0..10)));
    with_ean_check(&body)
}

pub fn ean13(rng: &mut dyn RngCore) -> String {
    let body: Vec<u32> = (0..12).map(|_| rng.gen_range(0..10)).collect();
    with_ean_check(&body)
}

pub fn license_plate(rng: &mut dyn RngCore) -> String {
    let letters: String = (0..3)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect();
    format!("{}-{}", letters, numerify(rng, "####"))
}

fn with_ean_check(body: &[u32]) -> String {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    let check = (10 - sum % 10) % 10;

    let mut result: String = body.iter().map(|d| digit_char(*d)).collect();
    result.push(digit_char(check));
    result
}

fn digit_char(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('0')
}
