//! Recording renderer
//!
//! Captures draw calls as plain data. Used by the headless binary and by
//! render tests; a host can also replay a buffer onto a real canvas.

use glam::Vec2;
use serde::Serialize;

use super::sprites::SheetId;
use super::{Renderer, TextAlign};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear { size: Vec2 },
    Save,
    Restore,
    SetFill { color: [f32; 4] },
    SetFont { px: f32 },
    SetTextAlign { align: TextAlign },
    SetShadow { offset: Vec2, color: [f32; 4] },
    DrawImage { sheet: SheetId, src: Rect, dest: Rect },
    FillRect { rect: Rect },
    StrokeRect { rect: Rect },
    FillText { text: String, pos: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping the allocation for the next frame
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Image draws from one sheet, as (source, destination) pairs
    pub fn images(&self, sheet: SheetId) -> impl Iterator<Item = (Rect, Rect)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::DrawImage { sheet: s, src, dest } if *s == sheet => Some((*src, *dest)),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl Renderer for CommandBuffer {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_fill(&mut self, color: [f32; 4]) {
        self.commands.push(DrawCommand::SetFill { color });
    }

    fn set_font(&mut self, px: f32) {
        self.commands.push(DrawCommand::SetFont { px });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::SetTextAlign { align });
    }

    fn set_shadow(&mut self, offset: Vec2, color: [f32; 4]) {
        self.commands.push(DrawCommand::SetShadow { offset, color });
    }

    fn draw_image(&mut self, sheet: SheetId, src: Rect, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage { sheet, src, dest });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect { rect });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect { rect });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
        });
    }
}
