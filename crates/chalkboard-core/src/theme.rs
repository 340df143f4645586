//! Colour tokens and the chalk palette.

use crate::error::ColorParseError;
use std::fmt;
use std::str::FromStr;

/// Opaque sRGB colour token as exchanged with the panel (`#rrggbb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChalkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChalkColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear-space RGBA for the GPU.
    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            alpha.clamp(0.0, 1.0),
        ]
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for ChalkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ChalkColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Miku,
    Rin,
    Ren,
    Luka,
    Kaito,
    Meiko,
    Blackboard,
    White,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 8] = [
        ThemeColor::Miku,
        ThemeColor::Rin,
        ThemeColor::Ren,
        ThemeColor::Luka,
        ThemeColor::Kaito,
        ThemeColor::Meiko,
        ThemeColor::Blackboard,
        ThemeColor::White,
    ];

    /// Element id used by the chalk buttons.
    pub fn id(self) -> &'static str {
        match self {
            ThemeColor::Miku => "miku",
            ThemeColor::Rin => "rin",
            ThemeColor::Ren => "ren",
            ThemeColor::Luka => "luka",
            ThemeColor::Kaito => "kaito",
            ThemeColor::Meiko => "meiko",
            ThemeColor::Blackboard => "blackboard",
            ThemeColor::White => "white",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn color(self) -> ChalkColor {
        match self {
            ThemeColor::Miku => ChalkColor::rgb(0x54, 0xc5, 0xa3),
            ThemeColor::Rin => ChalkColor::rgb(0xc5, 0xb0, 0x54),
            ThemeColor::Ren => ChalkColor::rgb(0xff, 0xee, 0x77),
            ThemeColor::Luka => ChalkColor::rgb(0xc5, 0x54, 0x8d),
            ThemeColor::Kaito => ChalkColor::rgb(0x54, 0x5c, 0xc5),
            ThemeColor::Meiko => ChalkColor::rgb(0xc5, 0x54, 0x54),
            ThemeColor::Blackboard => ChalkColor::rgb(0x3d, 0x53, 0x47),
            ThemeColor::White => ChalkColor::rgb(0xff, 0xff, 0xff),
        }
    }
}

// Board frame colours (wood and its inner shadow).
pub const FRAME_COLOR: ChalkColor = ChalkColor::rgb(0x8a, 0x6a, 0x45);
pub const FRAME_SHADOW_COLOR: ChalkColor = ChalkColor::rgb(0x26, 0x33, 0x2c);
