//! Color names and codes.

use super::{pick, Builtin};
use rand::{Rng, RngCore};

const COLOR_NAMES: &[&str] = &[
    "AliceBlue", "Aqua", "Beige", "Black", "Blue", "BlueViolet", "Brown", "Chocolate", "Coral",
    "Crimson", "DarkGreen", "DarkOrange", "Gold", "Gray", "Green", "Indigo", "Ivory", "Khaki",
    "Lavender", "Lime", "Magenta", "Maroon", "Navy", "Olive", "Orange", "Orchid", "Pink", "Plum",
    "Purple", "Red", "Salmon", "Silver", "SkyBlue", "Tan", "Teal", "Tomato", "Turquoise",
    "Violet", "Wheat", "White", "Yellow",
];

const SAFE_COLOR_NAMES: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

pub const GENERATORS: &[Builtin] = &[
    Builtin::new("color_name", color_name),
    Builtin::new("safe_color_name", safe_color_name),
    Builtin::new("hex_color", hex_color),
    Builtin::new("rgb_color", rgb_color),
];

pub fn color_name(rng: &mut dyn RngCore) -> String {
    pick(rng, COLOR_NAMES).to_string()
}

pub fn safe_color_name(rng: &mut dyn RngCore) -> String {
    pick(rng, SAFE_COLOR_NAMES).to_string()
}

/// `#rrggbb`
pub fn hex_color(rng: &mut dyn RngCore) -> String {
    let [r, g, b]: [u8; 3] = rng.gen();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `r,g,b`
pub fn rgb_color(rng: &mut dyn RngCore) -> String {
    let [r, g, b]: [u8; 3] = rng.gen();
    format!("{r},{g},{b}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hex_color() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = hex_color(&mut rng);
        assert_eq!(value.len(), 7);
        assert!(value.starts_with('#'));
        assert!(value[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_rgb_color_components() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = rgb_color(&mut rng);
        let parts: Vec<u8> = value.split(',').map(|p| p.parse().unwrap()).collect();
        assert_eq!(parts.len(), 3);
    }
}
