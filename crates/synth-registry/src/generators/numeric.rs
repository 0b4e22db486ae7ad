//! Numeric and boolean generators, rendered as strings.

use super::{digits, Builtin};
use rand::{Rng, RngCore};

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("random_digit", random_digit),
    Builtin::new("random_digit_not_null", random_digit_not_null),
    Builtin::new("random_int", random_int),
    Builtin::new("random_number", random_number),
    Builtin::new("pyint", random_int),
    Builtin::new("pyfloat", pyfloat),
    Builtin::new("pydecimal", pydecimal),
    Builtin::new("percentage", percentage),
    Builtin::new("boolean", boolean),
    Builtin::new("pybool", boolean),
];

pub fn random_digit(rng: &mut dyn RngCore) -> String {
    rng.gen_range(0..=9).to_string()
}

pub fn random_digit_not_null(rng: &mut dyn RngCore) -> String {
    rng.gen_range(1..=9).to_string()
}

/// Integer in `0..=9999`.
pub fn random_int(rng: &mut dyn RngCore) -> String {
    rng.gen_range(0..=9999).to_string()
}

/// Number with one to nine digits.
pub fn random_number(rng: &mut dyn RngCore) -> String {
    let count = rng.gen_range(1..=9);
    digits(rng, count)
}

pub fn pyfloat(rng: &mut dyn RngCore) -> String {
    format!("{:.4}", rng.gen_range(-10_000.0..10_000.0f64))
}

/// Decimal with two fractional digits.
pub fn pydecimal(rng: &mut dyn RngCore) -> String {
    format!("{:.2}", rng.gen_range(0.0..100_000.0f64))
}

pub fn percentage(rng: &mut dyn RngCore) -> String {
    format!("{}%", rng.gen_range(0..=100))
}

pub fn boolean(rng: &mut dyn RngCore) -> String {
    rng.gen_bool(0.5).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value: i64 = random_int(&mut rng).parse().unwrap();
            assert!((0..=9999).contains(&value));
        }
    }

    #[test]
    fn test_random_digit_not_null() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_ne!(random_digit_not_null(&mut rng), "0");
        }
    }

    #[test]
    fn test_pydecimal_two_places() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = pydecimal(&mut rng);
        let (_, fraction) = value.split_once('.').unwrap();
        assert_eq!(fraction.len(), 2);
    }

    #[test]
    fn test_boolean_values() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let value = boolean(&mut rng);
            assert!(value == "true" || value == "false");
        }
    }
}
