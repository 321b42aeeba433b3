//! Background color for letterboxed output.
//!
//! Parses hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) and a small table
//! of named colors.

/// Canvas background color, sRGB with alpha (8 bits per channel).
///
/// Defaults to opaque white.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for CanvasColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl CanvasColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a hex or named color. Names are case-insensitive.
    ///
    /// ```
    /// use framefit::CanvasColor;
    ///
    /// assert_eq!(CanvasColor::parse("#808080"), Some(CanvasColor::GRAY));
    /// assert_eq!(CanvasColor::parse("f00"), Some(CanvasColor::rgb(255, 0, 0)));
    /// assert_eq!(CanvasColor::parse("LightGray"), Some(CanvasColor::LIGHT_GRAY));
    /// assert_eq!(CanvasColor::parse("mauve"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        parse_hex(hex).or_else(|| lookup_named(s))
    }
}

fn parse_hex(hex: &str) -> Option<CanvasColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let b = hex.as_bytes();
    match b.len() {
        3 => Some(CanvasColor::rgb(
            expand_nibble(b[0])?,
            expand_nibble(b[1])?,
            expand_nibble(b[2])?,
        )),
        4 => Some(CanvasColor::rgba(
            expand_nibble(b[0])?,
            expand_nibble(b[1])?,
            expand_nibble(b[2])?,
            expand_nibble(b[3])?,
        )),
        6 => Some(CanvasColor::rgb(
            parse_byte(&b[0..2])?,
            parse_byte(&b[2..4])?,
            parse_byte(&b[4..6])?,
        )),
        8 => Some(CanvasColor::rgba(
            parse_byte(&b[0..2])?,
            parse_byte(&b[2..4])?,
            parse_byte(&b[4..6])?,
            parse_byte(&b[6..8])?,
        )),
        _ => None,
    }
}

/// 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(pair: &[u8]) -> Option<u8> {
    Some(hex_val(pair[0])? << 4 | hex_val(pair[1])?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn lookup_named(name: &str) -> Option<CanvasColor> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

const NAMED_COLORS: &[(&str, CanvasColor)] = &[
    ("black", CanvasColor::BLACK),
    ("blue", CanvasColor::rgb(0, 0, 255)),
    ("cyan", CanvasColor::rgb(0, 255, 255)),
    ("darkgray", CanvasColor::DARK_GRAY),
    ("darkgrey", CanvasColor::DARK_GRAY),
    ("gray", CanvasColor::GRAY),
    ("green", CanvasColor::rgb(0, 255, 0)),
    ("grey", CanvasColor::GRAY),
    ("lightgray", CanvasColor::LIGHT_GRAY),
    ("lightgrey", CanvasColor::LIGHT_GRAY),
    ("magenta", CanvasColor::rgb(255, 0, 255)),
    ("orange", CanvasColor::rgb(255, 200, 0)),
    ("pink", CanvasColor::rgb(255, 175, 175)),
    ("red", CanvasColor::rgb(255, 0, 0)),
    ("transparent", CanvasColor::TRANSPARENT),
    ("white", CanvasColor::WHITE),
    ("yellow", CanvasColor::rgb(255, 255, 0)),
];
