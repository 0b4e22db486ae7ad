//! Phone numbers.

use super::{numerify, pick, Builtin};
use rand::RngCore;

const FORMATS: &[&str] = &[
    "%##-%##-####",
    "(%##)%##-####",
    "%##.%##.####",
    "+1-%##-%##-####",
    "%##-%##-#### x###",
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("phone_number", phone_number),
    Builtin::new("msisdn", msisdn),
];

pub fn phone_number(rng: &mut dyn RngCore) -> String {
    let format = pick(rng, FORMATS);
    numerify(rng, format)
}

/// Thirteen-digit mobile subscriber number.
pub fn msisdn(rng: &mut dyn RngCore) -> String {
    numerify(rng, "%############")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phone_number_has_ten_digits_at_least() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = phone_number(&mut rng);
            assert!(value.chars().filter(char::is_ascii_digit).count() >= 10);
        }
    }

    #[test]
    fn test_msisdn_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(msisdn(&mut rng).len(), 13);
    }
}
