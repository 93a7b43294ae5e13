use std::str::FromStr;

use super::{Graphic, Hue};
use crate::error::{GumpError, Result};
use crate::widgets::Rect;

/// The two layout commands that produce a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEntryKind {
    /// `textentry x y width height hue graphic text_id`
    TextEntry,
    /// `textentrylimited x y width height hue graphic text_id limit`
    TextEntryLimited,
}

impl TextEntryKind {
    pub fn command(self) -> &'static str {
        match self {
            TextEntryKind::TextEntry => "textentry",
            TextEntryKind::TextEntryLimited => "textentrylimited",
        }
    }
}

impl FromStr for TextEntryKind {
    type Err = GumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "textentry" => Ok(TextEntryKind::TextEntry),
            "textentrylimited" => Ok(TextEntryKind::TextEntryLimited),
            _ => Err(GumpError::UnknownCommand(s.to_string())),
        }
    }
}

/// A parsed text entry layout command, with its initial text resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntryDef {
    pub kind: TextEntryKind,
    pub bounds: Rect,
    pub hue: Hue,
    pub graphic: Graphic,
    pub text_id: usize,
    pub text: String,
    /// Maximum number of characters, `0` for unlimited
    pub max_char_count: usize,
}

/// Split one `{ command arg arg ... }` layout entry into its tokens.
pub fn split_layout_command(command: &str) -> Vec<&str> {
    let trimmed = command.trim();
    let trimmed = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('}').unwrap_or(trimmed);
    trimmed.split_whitespace().collect()
}

fn arg<'a>(
    parts: &[&'a str],
    index: usize,
    kind: TextEntryKind,
    name: &'static str,
) -> Result<&'a str> {
    parts.get(index).copied().ok_or(GumpError::MissingArgument {
        command: kind.command(),
        name,
    })
}

fn number<T: FromStr>(
    parts: &[&str],
    index: usize,
    kind: TextEntryKind,
    name: &'static str,
) -> Result<T> {
    let value = arg(parts, index, kind, name)?;
    value.parse().map_err(|_| GumpError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl TextEntryDef {
    /// Build an entry from the tokens of a layout command and the gump's
    /// text lines.
    pub fn parse<S: AsRef<str>>(parts: &[&str], lines: &[S]) -> Result<Self> {
        let kind: TextEntryKind = parts.first().ok_or(GumpError::EmptyCommand)?.parse()?;

        let x = number(parts, 1, kind, "x")?;
        let y = number(parts, 2, kind, "y")?;
        let width = number(parts, 3, kind, "width")?;
        let height = number(parts, 4, kind, "height")?;
        let hue: Hue = arg(parts, 5, kind, "hue")?.parse()?;
        let graphic: Graphic = arg(parts, 6, kind, "graphic")?.parse()?;
        let text_id: usize = number(parts, 7, kind, "text_id")?;

        let text = lines
            .get(text_id)
            .map(|line| line.as_ref().to_string())
            .ok_or(GumpError::TextIdOutOfRange {
                id: text_id,
                count: lines.len(),
            })?;

        let max_char_count = match kind {
            TextEntryKind::TextEntry => 0,
            TextEntryKind::TextEntryLimited => number(parts, 8, kind, "limit")?,
        };

        Ok(Self {
            kind,
            bounds: Rect::new(x, y, width, height),
            hue,
            graphic,
            text_id,
            text,
            max_char_count,
        })
    }

    /// Parse a whole `{ ... }` layout command.
    pub fn parse_command<S: AsRef<str>>(command: &str, lines: &[S]) -> Result<Self> {
        Self::parse(&split_layout_command(command), lines)
    }
}
