//! Internet identifiers: user names, e-mail addresses, URLs and IPs.

use super::{pick, Builtin};
use crate::generators::person::{FIRST_NAMES, LAST_NAMES};
use rand::{Rng, RngCore};

const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

const SAFE_EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const TLDS: &[&str] = &["com", "net", "org", "info", "biz", "io"];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("user_name", user_name),
    Builtin::new("email", email),
    Builtin::new("free_email", free_email),
    Builtin::new("safe_email", safe_email),
    Builtin::new("company_email", company_email),
    Builtin::new("domain_word", domain_word),
    Builtin::new("domain_name", domain_name),
    Builtin::new("tld", tld),
    Builtin::new("url", url),
    Builtin::new("ipv4", ipv4),
    Builtin::new("ipv6", ipv6),
    Builtin::new("mac_address", mac_address),
];

pub fn user_name(rng: &mut dyn RngCore) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{}{}", &first[..1], last),
        _ => format!("{}{}", first, rng.gen_range(1..100)),
    }
}

pub fn domain_word(rng: &mut dyn RngCore) -> String {
    pick(rng, LAST_NAMES).to_lowercase()
}

pub fn tld(rng: &mut dyn RngCore) -> String {
    pick(rng, TLDS).to_string()
}

pub fn domain_name(rng: &mut dyn RngCore) -> String {
    format!("{}.{}", domain_word(rng), tld(rng))
}

pub fn free_email(rng: &mut dyn RngCore) -> String {
    format!("{}@{}", user_name(rng), pick(rng, FREE_EMAIL_DOMAINS))
}

pub fn safe_email(rng: &mut dyn RngCore) -> String {
    format!("{}@{}", user_name(rng), pick(rng, SAFE_EMAIL_DOMAINS))
}

pub fn company_email(rng: &mut dyn RngCore) -> String {
    format!("{}@{}", user_name(rng), domain_name(rng))
}

pub fn email(rng: &mut dyn RngCore) -> String {
    if rng.gen_bool(0.5) {
        free_email(rng)
    } else {
        company_email(rng)
    }
}

pub fn url(rng: &mut dyn RngCore) -> String {
    let scheme = if rng.gen_bool(0.8) { "https" } else { "http" };
    let host = if rng.gen_bool(0.5) { "www." } else { "" };
    format!("{}://{}{}/", scheme, host, domain_name(rng))
}

pub fn ipv4(rng: &mut dyn RngCore) -> String {
    let octets: [u8; 4] = rng.gen();
    std::net::Ipv4Addr::from(octets).to_string()
}

pub fn ipv6(rng: &mut dyn RngCore) -> String {
    let segments: [u16; 8] = rng.gen();
    std::net::Ipv6Addr::from(segments).to_string()
}

pub fn mac_address(rng: &mut dyn RngCore) -> String {
    let bytes: [u8; 6] = rng.gen();
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = email(&mut rng);
            let (local, domain) = value.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_ip_addresses_parse() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(ipv4(&mut rng).parse::<std::net::Ipv4Addr>().is_ok());
        assert!(ipv6(&mut rng).parse::<std::net::Ipv6Addr>().is_ok());
    }

    #[test]
    fn test_mac_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = mac_address(&mut rng);
        assert_eq!(value.len(), 17);
        assert_eq!(value.matches(':').count(), 5);
    }
}
