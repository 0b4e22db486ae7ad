//! Hexadecimal string provider.
//!
//! Registered alongside the other providers to show that the table is open:
//! any name with a zero-configuration generator can be added.

use super::Builtin;
use rand::{Rng, RngCore};

/// Length of `hexadecimal_string` values.
pub const DEFAULT_HEX_LENGTH: usize = 8;

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

pub const GENERATORS: &[Builtin] = &[Builtin::new("hexadecimal_string", hexadecimal_string)];

pub fn hexadecimal_string(rng: &mut dyn RngCore) -> String {
    random_hex(rng, DEFAULT_HEX_LENGTH)
}

/// Lowercase hexadecimal string of exactly `length` characters.
pub fn random_hex(rng: &mut dyn RngCore, length: usize) -> String {
    (0..length)
        .map(|_| char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hexadecimal_string() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = hexadecimal_string(&mut rng);
        assert_eq!(value.len(), DEFAULT_HEX_LENGTH);
        assert!(value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_random_hex_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_hex(&mut rng, 32).len(), 32);
        assert_eq!(random_hex(&mut rng, 0), "");
    }
}
