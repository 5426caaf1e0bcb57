pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

/// Garment colors offered in the palette, in display order
pub static SHIRT_COLORS: [&str; 12] = [
    "#FFFFFF", "#000000", "#FF0000", "#0000FF",
    "#FFFF00", "#00FF00", "#FFA500", "#800080",
    "#FF69B4", "#1ABC9C", "#D3D3D3", "#8B4513",
];

/// One palette entry. Defaults to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShirtColor(&'static str);

impl Default for ShirtColor {
    fn default() -> Self {
        Self(WHITE)
    }
}

impl ShirtColor {
    /// Look up a palette entry by hex string (case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Self> {
        SHIRT_COLORS
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(hex))
            .map(Self)
    }

    pub fn all() -> impl Iterator<Item = ShirtColor> {
        SHIRT_COLORS.iter().copied().map(ShirtColor)
    }

    pub fn hex(self) -> &'static str {
        self.0
    }

    pub fn is_white(self) -> bool {
        self.0 == WHITE
    }

    pub fn is_black(self) -> bool {
        self.0 == BLACK
    }
}

/// Parse `#RRGGBB` (or `#RGB`) into its channels
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = digits.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            let r = channels.next()??;
            let g = channels.next()??;
            let b = channels.next()??;
            Some((r, g, b))
        }
        _ => None,
    }
}
