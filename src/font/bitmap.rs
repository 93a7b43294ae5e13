use std::collections::HashMap;

use super::FontMetrics;
use crate::layout::Size;
use crate::widgets::Point;

const DEFAULT_ADVANCE: i32 = 8;
const DEFAULT_LINE_HEIGHT: i32 = 16;

/// Metrics for a bitmap game font: a per-glyph advance table and a fixed
/// line height. Wrapping breaks between characters.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    default_advance: i32,
    line_height: i32,
    advances: HashMap<char, i32>,
}

impl BitmapFont {
    /// Every glyph has the same advance.
    pub fn monospace(advance: i32, line_height: i32) -> Self {
        Self {
            default_advance: advance.max(0),
            line_height: line_height.max(1),
            advances: HashMap::new(),
        }
    }

    /// Override the advance of a single glyph.
    pub fn with_advance(mut self, c: char, advance: i32) -> Self {
        self.advances.insert(c, advance.max(0));
        self
    }

    pub fn advance(&self, c: char) -> i32 {
        match c {
            '\n' => 0,
            c => self.advances.get(&c).copied().unwrap_or(self.default_advance),
        }
    }

    /// Caret positions for every index `0..=len`.
    fn caret_stops(&self, text: &str, max_width: Option<i32>) -> Vec<Point> {
        let mut stops = Vec::with_capacity(text.len() + 1);
        let (mut x, mut y) = (0, 0);

        for c in text.chars() {
            if c == '\n' {
                stops.push(Point::new(x, y));
                x = 0;
                y += self.line_height;
                continue;
            }

            let advance = self.advance(c);
            if let Some(limit) = max_width {
                if x > 0 && x + advance > limit {
                    x = 0;
                    y += self.line_height;
                }
            }
            stops.push(Point::new(x, y));
            x += advance;
        }
        stops.push(Point::new(x, y));
        stops
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::monospace(DEFAULT_ADVANCE, DEFAULT_LINE_HEIGHT)
    }
}

impl FontMetrics for BitmapFont {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn measure(&self, text: &str, max_width: Option<i32>) -> Size {
        let stops = self.caret_stops(text, max_width);
        let width = text
            .chars()
            .zip(&stops)
            .map(|(c, stop)| stop.x + self.advance(c))
            .chain(stops.last().map(|end| end.x))
            .max()
            .unwrap_or(0);
        let height = stops.last().map_or(0, |end| end.y) + self.line_height;
        Size::new(width, height)
    }

    fn caret_position(&self, text: &str, index: usize, max_width: Option<i32>) -> Point {
        let stops = self.caret_stops(text, max_width);
        let last = stops.len() - 1;
        stops[index.min(last)]
    }

    fn caret_index_at(&self, text: &str, x: i32, y: i32, max_width: Option<i32>) -> usize {
        let stops = self.caret_stops(text, max_width);
        let last_line = stops.last().map_or(0, |end| end.y);
        let line_y = ((y.max(0) / self.line_height) * self.line_height).min(last_line);

        let mut best = None;
        let mut best_distance = i32::MAX;
        for (index, stop) in stops.iter().enumerate() {
            if stop.y != line_y {
                continue;
            }
            let distance = (stop.x - x).abs();
            if distance < best_distance {
                best = Some(index);
                best_distance = distance;
            }
        }

        best.unwrap_or(stops.len() - 1)
    }
}
