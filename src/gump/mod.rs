//! Gump value types and the layout entries that create text boxes.

mod entry;

pub use entry::{split_layout_command, TextEntryDef, TextEntryKind};

use std::str::FromStr;

use crate::error::GumpError;

/// Palette hue applied to text and art. `0` means "no hue".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hue(pub u16);

impl Hue {
    pub const NONE: Hue = Hue(0);
}

/// Art id of a gump graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Graphic(pub u16);

/// Parse a 16-bit id written in decimal or as `0x`-prefixed hexadecimal.
pub(crate) fn parse_u16(name: &'static str, value: &str) -> Result<u16, GumpError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| GumpError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl FromStr for Hue {
    type Err = GumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_u16("hue", s).map(Hue)
    }
}

impl FromStr for Graphic {
    type Err = GumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_u16("graphic", s).map(Graphic)
    }
}
