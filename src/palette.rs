// Fixed colors for the fork glyph and the flat fills

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();

        match digits.len() {
            6 => Some(Self::opaque(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

// --- Glyph ---
pub const BLUE_DARK: Rgba = Rgba::opaque(30, 64, 175); // #1E40AF
pub const BLUE: Rgba = Rgba::opaque(37, 99, 235); // #2563EB
pub const BLUE_LIGHT: Rgba = Rgba::opaque(59, 130, 246); // #3B82F6

// --- Backgrounds ---
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
pub const ICON_BACKGROUND: Rgba = Rgba::opaque(232, 244, 253); // #E8F4FD
pub const ANDROID_BACKGROUND: Rgba = Rgba::opaque(230, 244, 254);
pub const MONOCHROME: Rgba = Rgba::opaque(255, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::from_hex("#E8F4FD"), Some(ICON_BACKGROUND));
        assert_eq!(Rgba::from_hex("2563eb"), Some(BLUE));
        assert_eq!(Rgba::from_hex("#00000000"), Some(TRANSPARENT));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex("#E8F4F"), None);
        assert_eq!(Rgba::from_hex("#GGGGGG"), None);
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#é8F4FD"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BLUE_DARK.to_string(), "#1E40AF");
        assert_eq!(TRANSPARENT.to_string(), "#00000000");
    }
}
