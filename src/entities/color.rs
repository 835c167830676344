/// An sRGB color as picked from the projectile palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 215, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const CYAN: Rgb = Rgb::new(0, 170, 170);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const MAGENTA: Rgb = Rgb::new(200, 0, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, the format an HTML color input reports
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors offered by the projectile color picker, in key order (1-8)
pub const PALETTE: [(&str, Rgb); 8] = [
    ("Black", Rgb::BLACK),
    ("Red", Rgb::RED),
    ("Orange", Rgb::ORANGE),
    ("Yellow", Rgb::YELLOW),
    ("Green", Rgb::GREEN),
    ("Cyan", Rgb::CYAN),
    ("Blue", Rgb::BLUE),
    ("Magenta", Rgb::MAGENTA),
];

/// Looks up a palette entry by its 1-based picker slot
pub fn palette_slot(slot: usize) -> Option<Rgb> {
    slot.checked_sub(1)
        .and_then(|idx| PALETTE.get(idx))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::RED));
        assert_eq!(Rgb::from_hex("00aaaa"), Some(Rgb::CYAN));
        assert_eq!(Rgb::from_hex("#FFA500"), Some(Rgb::ORANGE));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#ff00ééé"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::MAGENTA.to_hex(), "#c800c8");
    }

    #[test]
    fn test_palette_slot() {
        assert_eq!(palette_slot(1), Some(Rgb::BLACK));
        assert_eq!(palette_slot(8), Some(Rgb::MAGENTA));
        assert_eq!(palette_slot(0), None);
        assert_eq!(palette_slot(9), None);
    }
}
