pub mod commands;

pub use commands::DrawCommand;

use crate::font::FontKey;
use crate::gump::Hue;

/// Collects draw commands for one frame.
///
/// Controls paint into the context in back-to-front order; the host then
/// feeds the commands to its sprite batch.
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        hue: Hue,
        font: FontKey,
        max_width: Option<i32>,
    ) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            hue,
            font,
            max_width,
        });
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take all commands, leaving the context empty for the next frame
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
