use crate::foundation::core::Rgba8;
use serde::Deserialize;

impl Rgba8 {
    /// `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `#FF0000`
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// `#0000FF`
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// `#008000`
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// `#FFFF00`
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// `#800080`
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    /// `#006400`
    pub const DARK_GREEN: Self = Self::rgb(0, 100, 0);
    /// `#00FF00`
    pub const LIME: Self = Self::rgb(0, 255, 0);
    /// `#FFA500`
    pub const ORANGE: Self = Self::rgb(255, 165, 0);

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }
}

/// Colors the Add button picks from, in pick order.
pub(crate) fn default_palette() -> Vec<Rgba8> {
    vec![
        Rgba8::RED,
        Rgba8::BLUE,
        Rgba8::GREEN,
        Rgba8::YELLOW,
        Rgba8::PURPLE,
    ]
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}
