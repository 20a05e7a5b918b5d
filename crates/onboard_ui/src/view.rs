//! Stateless views: measure under constraints, render into bounds.
//!
//! Views carry no input state. Anything interactive is a
//! [`Widget`](crate::widget::Widget).

use crate::layout::{Constraints, Direction, Insets, Layout, Rect};
use crate::render::RenderCommand;
use crate::style::{Color, FontWeight, Theme};

/// Estimated glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.55;
/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Something that can be measured and drawn.
pub trait View {
    /// Returns the size this view wants under the given constraints.
    fn measure(&self, constraints: Constraints) -> (f32, f32);

    /// Emits render commands for this view inside `bounds`.
    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>);

    /// Wraps this view in edge insets.
    fn padded(self, insets: Insets) -> Padded<Self>
    where
        Self: Sized,
    {
        Padded { inner: self, insets }
    }
}

impl View for Box<dyn View> {
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        self.as_ref().measure(constraints)
    }

    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        self.as_ref().render(bounds, theme, commands);
    }
}

/// A view that draws nothing and takes no space.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyView;

impl View for EmptyView {
    fn measure(&self, _constraints: Constraints) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn render(&self, _bounds: Rect, _theme: &Theme, _commands: &mut Vec<RenderCommand>) {}
}

/// Fixed-size blank space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Spacer {
    /// Vertical gap of the given height.
    #[must_use]
    pub const fn vertical(height: f32) -> Self {
        Self { width: 0.0, height }
    }
}

impl View for Spacer {
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        constraints.clamp(self.width, self.height)
    }

    fn render(&self, _bounds: Rect, _theme: &Theme, _commands: &mut Vec<RenderCommand>) {}
}

/// Wrapped, optionally line-limited text.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    font_size: f32,
    weight: FontWeight,
    color: Option<Color>,
    line_limit: Option<usize>,
}

impl Text {
    /// Body text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 17.0,
            weight: FontWeight::Regular,
            color: None,
            line_limit: None,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Overrides the theme text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Limits the number of lines; overflow ends in an ellipsis.
    #[must_use]
    pub fn line_limit(mut self, lines: usize) -> Self {
        self.line_limit = Some(lines.max(1));
        self
    }

    /// The unwrapped content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn glyph_width(&self) -> f32 {
        self.font_size * GLYPH_ADVANCE
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT
    }

    /// Breaks the content into lines that fit `max_width`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lines(&self, max_width: f32) -> Vec<String> {
        let max_chars = if max_width.is_finite() {
            ((max_width / self.glyph_width()).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut lines: Vec<String> = Vec::new();
        let mut line = String::new();
        let mut line_len = 0usize;

        for word in self.content.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            loop {
                let needed = if line.is_empty() { word.len() } else { line_len + 1 + word.len() };
                if needed <= max_chars {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.extend(word.iter());
                    line_len = needed;
                    break;
                }
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                    continue;
                }
                // Longer than a whole line: hard break.
                let rest = word.split_off(max_chars);
                lines.push(word.iter().collect());
                word = rest;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }

        if let Some(limit) = self.line_limit {
            if lines.len() > limit {
                lines.truncate(limit);
                if let Some(last) = lines.last_mut() {
                    ellipsize(last, max_chars);
                }
            }
        }

        lines
    }
}

fn ellipsize(line: &mut String, max_chars: usize) {
    let keep = max_chars.saturating_sub(1);
    if line.chars().count() > keep {
        *line = line.chars().take(keep).collect();
    }
    line.truncate(line.trim_end().len());
    line.push('…');
}

impl View for Text {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        let lines = self.lines(constraints.max_width);
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = widest as f32 * self.glyph_width();
        let height = lines.len() as f32 * self.line_height();
        constraints.clamp(width, height)
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        let color = self.color.unwrap_or(theme.text);
        for (index, line) in self.lines(bounds.width).into_iter().enumerate() {
            commands.push(RenderCommand::Text {
                text: line,
                x: bounds.x,
                y: bounds.y + index as f32 * self.line_height(),
                color,
                font_size: self.font_size,
                weight: self.weight,
            });
        }
    }
}

/// A named symbol glyph.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    size: f32,
    color: Option<Color>,
}

impl Symbol {
    /// Creates a symbol at body size.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 17.0,
            color: None,
        }
    }

    /// Sets the glyph size.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Overrides the theme text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl View for Symbol {
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        let side = self.size * LINE_HEIGHT;
        constraints.clamp(side, side)
    }

    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        let side = self.size * LINE_HEIGHT;
        let (cx, cy) = bounds.center();
        commands.push(RenderCommand::Symbol {
            bounds: Rect::new(cx - side * 0.5, cy - side * 0.5, side, side),
            name: self.name.clone(),
            color: self.color.unwrap_or(theme.text),
            size: self.size,
        });
    }
}

/// A symbol on a rounded, filled tile, centered in a taller frame.
///
/// The usual app-icon treatment at the top of a sheet.
#[derive(Debug, Clone)]
pub struct Badge {
    symbol: Symbol,
    fill: Color,
    side: f32,
    corner_radius: f32,
}

impl Badge {
    /// Height of the frame the tile is centered in.
    const FRAME_HEIGHT: f32 = 180.0;

    /// Creates a 100x100 tile with a 50pt white glyph in a 180 tall frame.
    #[must_use]
    pub fn new(symbol: impl Into<String>, fill: Color) -> Self {
        Self {
            symbol: Symbol::new(symbol).size(50.0).color(Color::WHITE),
            fill,
            side: 100.0,
            corner_radius: 25.0,
        }
    }
}

impl View for Badge {
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        constraints.clamp(self.side, Self::FRAME_HEIGHT.max(self.side))
    }

    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        let (cx, cy) = bounds.center();
        let tile = Rect::new(cx - self.side * 0.5, cy - self.side * 0.5, self.side, self.side);
        commands.push(RenderCommand::Rect {
            bounds: tile,
            color: self.fill,
            corner_radius: self.corner_radius,
        });
        self.symbol.render(tile, theme, commands);
    }
}

/// Children arranged along one axis.
pub struct Stack {
    children: Vec<Box<dyn View>>,
    layout: Layout,
}

impl Stack {
    /// Top-to-bottom stack.
    #[must_use]
    pub fn vertical(spacing: f32) -> Self {
        Self {
            children: Vec::new(),
            layout: Layout::vertical().with_gap(spacing),
        }
    }

    /// Left-to-right stack.
    #[must_use]
    pub fn horizontal(spacing: f32) -> Self {
        Self {
            children: Vec::new(),
            layout: Layout::horizontal().with_gap(spacing),
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the stack has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn child_sizes(&self, constraints: Constraints) -> Vec<(f32, f32)> {
        let inner = Constraints::max_width((constraints.max_width - self.layout.padding * 2.0).max(0.0));
        self.children.iter().map(|child| child.measure(inner)).collect()
    }
}

impl View for Stack {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        if self.children.is_empty() {
            return constraints.clamp(0.0, 0.0);
        }
        let sizes = self.child_sizes(constraints);
        let gaps = self.layout.gap * (sizes.len() - 1) as f32;
        let padding = self.layout.padding * 2.0;
        let (width, height) = match self.layout.direction {
            Direction::Vertical => (
                sizes.iter().map(|s| s.0).fold(0.0, f32::max),
                sizes.iter().map(|s| s.1).sum::<f32>() + gaps,
            ),
            Direction::Horizontal => (
                sizes.iter().map(|s| s.0).sum::<f32>() + gaps,
                sizes.iter().map(|s| s.1).fold(0.0, f32::max),
            ),
        };
        constraints.clamp(width + padding, height + padding)
    }

    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        let sizes = self.child_sizes(Constraints::max_width(bounds.width));
        let frames = self.layout.arrange(bounds, &sizes);
        for (child, frame) in self.children.iter().zip(frames) {
            child.render(frame, theme, commands);
        }
    }
}

/// A view surrounded by edge insets.
#[derive(Debug, Clone)]
pub struct Padded<V> {
    inner: V,
    insets: Insets,
}

impl<V: View> View for Padded<V> {
    fn measure(&self, constraints: Constraints) -> (f32, f32) {
        let inner = Constraints::max_width((constraints.max_width - self.insets.horizontal()).max(0.0));
        let (w, h) = self.inner.measure(inner);
        constraints.clamp(w + self.insets.horizontal(), h + self.insets.vertical())
    }

    fn render(&self, bounds: Rect, theme: &Theme, commands: &mut Vec<RenderCommand>) {
        self.inner.render(bounds.inset(self.insets), theme, commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_wraps_on_words() {
        // 10pt font → 5.5 per glyph → 10 glyphs in 55.
        let text = Text::new("alpha beta gamma").size(10.0);
        let lines = text.lines(55.0);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_text_line_limit_ellipsis() {
        let text = Text::new("one two three four five six").size(10.0).line_limit(1);
        let lines = text.lines(55.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('…'));
        assert!(lines[0].chars().count() <= 10);
    }

    #[test]
    fn test_text_hard_breaks_long_words() {
        let text = Text::new("abcdefghijklmnop").size(10.0);
        let lines = text.lines(55.0);
        assert_eq!(lines, vec!["abcdefghij", "klmnop"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let text = Text::new("   ");
        assert!(text.lines(100.0).is_empty());
        assert_eq!(text.measure(Constraints::max_width(100.0)), (0.0, 0.0));
    }

    #[test]
    fn test_vertical_stack_measure() {
        let stack = Stack::vertical(6.0)
            .child(Spacer { width: 20.0, height: 10.0 })
            .child(Spacer { width: 40.0, height: 10.0 });

        let (w, h) = stack.measure(Constraints::max_width(330.0));
        assert_eq!(w, 40.0);
        assert_eq!(h, 26.0);
    }

    #[test]
    fn test_badge_renders_tile_then_symbol() {
        let badge = Badge::new("gamecontroller.fill", Color::RED);
        let mut commands = Vec::new();
        badge.render(Rect::new(0.0, 0.0, 330.0, 180.0), &Theme::LIGHT, &mut commands);

        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], RenderCommand::Rect { corner_radius, .. } if corner_radius == 25.0));
        assert!(matches!(&commands[1], RenderCommand::Symbol { name, .. } if name == "gamecontroller.fill"));
    }

    #[test]
    fn test_padding_adds_insets() {
        let view = Spacer { width: 10.0, height: 10.0 }.padded(Insets::vertical_only(15.0));
        assert_eq!(view.measure(Constraints::max_width(100.0)), (10.0, 40.0));
    }
}
