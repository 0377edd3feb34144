//! CSS color values.
//!
//! Supports:
//!
//! - Hex: `#f60` or `#ff6600` (case-insensitive)
//! - Keywords: `aqua`, `black`, `blue`, `fuchsia`, `gray`/`grey`, `green`,
//!   `indigo`, `lime`, `maroon`, `navy`, `olive`, `orange`, `purple`, `red`,
//!   `silver`, `teal`, `violet`, `white`, `yellow`
//!
//! A color always renders in hex, using the three-digit form when it is exact.
//!
//! # Example
//!
//! ```rust
//! use markweave::Color;
//!
//! let orange: Color = "orange".parse().unwrap();
//! assert_eq!(orange.to_string(), "#ffa500");
//!
//! let white: Color = "#FFFFFF".parse().unwrap();
//! assert_eq!(white.to_string(), "#fff");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::buffer::OutputBuffer;
use crate::content::Css;
use crate::context::RenderContext;
use crate::error::{RenderError, Result};
use crate::render::Render;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

static KEYWORDS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    [
        ("aqua", Color::rgb(0x00, 0xff, 0xff)),
        ("black", Color::rgb(0x00, 0x00, 0x00)),
        ("blue", Color::rgb(0x00, 0x00, 0xff)),
        ("fuchsia", Color::rgb(0xff, 0x00, 0xff)),
        ("gray", Color::rgb(0x80, 0x80, 0x80)),
        ("green", Color::rgb(0x00, 0x80, 0x00)),
        ("grey", Color::rgb(0x80, 0x80, 0x80)),
        ("indigo", Color::rgb(0x4b, 0x00, 0x82)),
        ("lime", Color::rgb(0x00, 0xff, 0x00)),
        ("maroon", Color::rgb(0x80, 0x00, 0x00)),
        ("navy", Color::rgb(0x00, 0x00, 0x80)),
        ("olive", Color::rgb(0x80, 0x80, 0x00)),
        ("orange", Color::rgb(0xff, 0xa5, 0x00)),
        ("purple", Color::rgb(0x80, 0x00, 0x80)),
        ("red", Color::rgb(0xff, 0x00, 0x00)),
        ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
        ("teal", Color::rgb(0x00, 0x80, 0x80)),
        ("violet", Color::rgb(0xee, 0x82, 0xee)),
        ("white", Color::rgb(0xff, 0xff, 0xff)),
        ("yellow", Color::rgb(0xff, 0xff, 0x00)),
    ]
    .into_iter()
    .collect()
});

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from the low 24 bits of `rgb` (`0xRRGGBB`).
    pub const fn from_24bit_rgb(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Looks up a color keyword (case-insensitive).
    pub fn from_keyword(name: &str) -> Option<Self> {
        KEYWORDS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self> {
        let invalid = || RenderError::InvalidArgument(format!("invalid hex color: #{}", hex));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let component = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::rgb(
                component(&hex[0..1])? * 0x11,
                component(&hex[1..2])? * 0x11,
                component(&hex[2..3])? * 0x11,
            )),
            6 => Ok(Self::rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(RenderError::InvalidArgument(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            ))),
        }
    }

    fn is_short(&self) -> bool {
        [self.red, self.green, self.blue]
            .iter()
            .all(|c| c % 0x11 == 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_short() {
            write!(
                f,
                "#{:x}{:x}{:x}",
                self.red / 0x11,
                self.green / 0x11,
                self.blue / 0x11
            )
        } else {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        }
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::from_keyword(s)
            .ok_or_else(|| RenderError::InvalidArgument(format!("unknown color name: {}", s)))
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl Render<Css> for Color {
    fn render(&self, out: &mut OutputBuffer, _ctx: &RenderContext) -> Result<()> {
        out.append(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff6b35".parse::<Color>().unwrap(), Color::rgb(255, 107, 53));
        assert_eq!("#FFF".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!("#a0B".parse::<Color>().unwrap(), Color::rgb(0xaa, 0x00, 0xbb));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!("#ff".parse::<Color>().unwrap_err().is_invalid_argument());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#éé".parse::<Color>().is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!("aqua".parse::<Color>().unwrap(), Color::rgb(0, 255, 255));
        assert_eq!("Indigo".parse::<Color>().unwrap(), Color::rgb(75, 0, 130));
        assert_eq!(Color::from_keyword("grey"), Color::from_keyword("gray"));
        assert_eq!(Color::from_keyword("violet"), Some(Color::rgb(238, 130, 238)));
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_short_and_long() {
        assert_eq!(Color::rgb(0, 0, 0).to_string(), "#000");
        assert_eq!(Color::rgb(0xff, 0x66, 0x00).to_string(), "#f60");
        assert_eq!(Color::rgb(0x80, 0x80, 0x80).to_string(), "#808080");
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_string(), "#123456");
    }

    #[test]
    fn test_from_24bit_rgb() {
        assert_eq!(Color::from_24bit_rgb(0x00c0ffee), Color::rgb(0xc0, 0xff, 0xee));
        assert_eq!(Color::from_24bit_rgb(0xff123456).red(), 0x12);
    }

    #[test]
    fn test_render_css() {
        let color = Color::from_keyword("navy").unwrap();
        let css = RenderContext::sgml()
            .get_string(|out, ctx| Render::<Css>::render(&color, out, ctx))
            .unwrap();
        assert_eq!(css, "#000080");
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Palette {
            accent: Color,
        }
        let palette: Palette = serde_yaml::from_str("accent: teal").unwrap();
        assert_eq!(palette.accent, Color::rgb(0, 0x80, 0x80));
        assert_eq!(serde_json::to_string(&palette).unwrap(), r##"{"accent":"#008080"}"##);
        assert!(serde_yaml::from_str::<Palette>("accent: nope").is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }
}
