//! UI rendering system.
//!
//! Widgets and views emit render commands; the renderer collects them per
//! frame and hands the finished frame to whatever backend draws it.

use crate::layout::Rect;
use crate::style::{Color, FontWeight};

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius (half the height draws a capsule).
        corner_radius: f32,
    },
    /// Text run, top-left anchored.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Font weight.
        weight: FontWeight,
    },
    /// Named symbol glyph (e.g. `"person.2"`), drawn filled.
    Symbol {
        /// Bounds.
        bounds: Rect,
        /// Symbol name.
        name: String,
        /// Tint color.
        color: Color,
        /// Glyph size.
        size: f32,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
    /// Composite the following commands as one group with an effect.
    PushEffect {
        /// Group opacity (0-1).
        opacity: f32,
        /// Gaussian blur radius.
        blur: f32,
        /// Vertical translation.
        offset_y: f32,
    },
    /// End the current effect group.
    PopEffect,
}

/// The commands of one finished frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct UIBatch {
    /// Commands in draw order.
    pub commands: Vec<RenderCommand>,
}

impl UIBatch {
    /// Returns every text run in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// UI renderer that collects one frame of commands.
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
    /// Open effect groups.
    effect_depth: usize,
    /// Last finished frame.
    frame: UIBatch,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip_stack: Vec::with_capacity(8),
            effect_depth: 0,
            frame: UIBatch::default(),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.effect_depth = 0;
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, bounds: Rect) {
        // Intersect with current clip if any
        let actual_clip = if let Some(current) = self.current_clip() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(RenderCommand::PopClip);
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Opens an effect group.
    pub fn push_effect(&mut self, opacity: f32, blur: f32, offset_y: f32) {
        self.effect_depth += 1;
        self.commands.push(RenderCommand::PushEffect { opacity, blur, offset_y });
    }

    /// Closes the current effect group.
    pub fn pop_effect(&mut self) {
        self.effect_depth = self.effect_depth.saturating_sub(1);
        self.commands.push(RenderCommand::PopEffect);
    }

    /// Ends the frame and returns its commands.
    pub fn end_frame(&mut self) -> &UIBatch {
        debug_assert!(self.clip_stack.is_empty(), "unbalanced clip stack");
        debug_assert_eq!(self.effect_depth, 0, "unbalanced effect groups");

        self.frame.commands.clear();
        self.frame.commands.append(&mut self.commands);
        &self.frame
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_frame() {
        let mut renderer = UIRenderer::new();

        renderer.begin_frame();
        renderer.push(RenderCommand::Rect {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            color: Color::WHITE,
            corner_radius: 0.0,
        });
        assert_eq!(renderer.end_frame().commands.len(), 1);

        renderer.begin_frame();
        assert!(renderer.end_frame().commands.is_empty());
    }

    #[test]
    fn test_clip_stack() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        renderer.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(renderer.current_clip(), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));

        renderer.pop_clip();
        renderer.pop_clip();
        assert!(renderer.current_clip().is_none());
    }

    #[test]
    fn test_nested_effects_balance() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.push_effect(0.5, 0.0, 0.0);
        renderer.push_effect(0.5, 2.0, 10.0);
        renderer.pop_effect();
        renderer.pop_effect();

        let frame = renderer.end_frame();
        assert_eq!(frame.commands.len(), 4);
        assert_eq!(frame.commands[3], RenderCommand::PopEffect);
    }
}
