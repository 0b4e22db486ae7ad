//! Free-form text generators.
//!
//! `text` is the registry's fallback generator: it must always succeed and
//! always return a non-empty string.

use super::{pick, Builtin};
use rand::{Rng, RngCore};

/// Upper bound on the length of `text` output, in characters.
pub const MAX_TEXT_CHARS: usize = 200;

const WORDS: &[&str] = &[
    "account", "across", "action", "against", "agency", "already", "amount", "answer", "anyone",
    "area", "article", "author", "available", "beautiful", "behind", "better", "between",
    "billion", "budget", "building", "camera", "capital", "career", "carry", "central",
    "certain", "chance", "change", "citizen", "collection", "common", "community", "company",
    "country", "culture", "current", "decade", "decision", "describe", "design", "detail",
    "develop", "different", "direction", "discover", "economy", "effort", "either", "energy",
    "enough", "environment", "evening", "evidence", "experience", "federal", "field", "figure",
    "finally", "financial", "foreign", "forward", "friend", "future", "general", "government",
    "ground", "history", "however", "hundred", "identify", "image", "impact", "indeed",
    "individual", "industry", "interest", "language", "leader", "letter", "machine", "manage",
    "market", "matter", "measure", "member", "memory", "method", "minute", "modern", "moment",
    "morning", "movement", "nature", "network", "number", "office", "option", "order", "paper",
    "particular", "pattern", "people", "perform", "picture", "policy", "popular", "position",
    "present", "process", "produce", "program", "project", "public", "question", "reason",
    "record", "region", "report", "research", "resource", "result", "season", "second",
    "section", "service", "simple", "society", "source", "special", "station", "strategy",
    "structure", "student", "success", "support", "system", "tension", "theory", "thought",
    "together", "travel", "treatment", "various", "version", "window", "within", "without",
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("word", word),
    Builtin::new("sentence", sentence),
    Builtin::new("paragraph", paragraph),
    Builtin::new("text", text),
    Builtin::new("pystr", pystr),
    Builtin::new("slug", slug),
];

pub fn word(rng: &mut dyn RngCore) -> String {
    pick(rng, WORDS).to_string()
}

/// Capitalized sentence of 4 to 12 words ending in a period.
pub fn sentence(rng: &mut dyn RngCore) -> String {
    let count = rng.gen_range(4..=12);
    let mut result = (0..count)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ");
    capitalize(&mut result);
    result.push('.');
    result
}

/// Three to six sentences.
pub fn paragraph(rng: &mut dyn RngCore) -> String {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentences joined until just under [`MAX_TEXT_CHARS`].
///
/// The first sentence is always kept, truncated at a word boundary if needed.
pub fn text(rng: &mut dyn RngCore) -> String {
    let mut result = sentence(rng);
    if result.len() > MAX_TEXT_CHARS {
        truncate_words(&mut result, MAX_TEXT_CHARS);
        return result;
    }

    loop {
        let next = sentence(rng);
        if result.len() + 1 + next.len() > MAX_TEXT_CHARS {
            break;
        }
        result.push(' ');
        result.push_str(&next);
    }
    result
}

/// Twenty random ASCII letters.
pub fn pystr(rng: &mut dyn RngCore) -> String {
    (0..20)
        .map(|_| {
            let c = rng.gen_range(b'a'..=b'z');
            if rng.gen_bool(0.5) {
                char::from(c.to_ascii_uppercase())
            } else {
                char::from(c)
            }
        })
        .collect()
}

pub fn slug(rng: &mut dyn RngCore) -> String {
    let count = rng.gen_range(2..=4);
    (0..count)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(s: &mut String) {
    if let Some(first) = s.get_mut(..1) {
        first.make_ascii_uppercase();
    }
}

fn truncate_words(s: &mut String, max: usize) {
    let cut = s[..max].rfind(' ').unwrap_or(max);
    s.truncate(cut);
    s.push('.');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = sentence(&mut rng);
            assert!(value.ends_with('.'));
            assert!(value.chars().next().unwrap().is_ascii_uppercase());
            let words = value.split(' ').count();
            assert!((4..=12).contains(&words));
        }
    }

    #[test]
    fn test_text_bounded_and_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = text(&mut rng);
            assert!(!value.is_empty());
            assert!(value.len() <= MAX_TEXT_CHARS + 1);
        }
    }

    #[test]
    fn test_pystr_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = pystr(&mut rng);
        assert_eq!(value.len(), 20);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_truncate_words() {
        let mut s = "alpha beta gamma delta".to_string();
        truncate_words(&mut s, 12);
        assert_eq!(s, "alpha beta.");
    }
}
