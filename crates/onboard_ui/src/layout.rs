//! Layout primitives: rectangles, edge insets, constraints and stack arrangement.

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside. Right and bottom edges are exclusive.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area of two rectangles, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > x && bottom > y).then(|| Self::new(x, y, right - x, bottom - y))
    }

    /// Shrinks the rectangle by per-edge insets, never below zero size.
    #[must_use]
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }

    /// The rectangle moved vertically by `dy`.
    #[must_use]
    pub fn offset_y(&self, dy: f32) -> Self {
        Self::new(self.x, self.y + dy, self.width, self.height)
    }
}

/// Per-edge spacing around content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    /// Top edge.
    pub top: f32,
    /// Left edge.
    pub left: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Right edge.
    pub right: f32,
}

impl Insets {
    /// No spacing.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Same spacing on every edge.
    #[must_use]
    pub const fn all(amount: f32) -> Self {
        Self {
            top: amount,
            left: amount,
            bottom: amount,
            right: amount,
        }
    }

    /// Spacing on the left and right edges only.
    #[must_use]
    pub const fn horizontal_only(amount: f32) -> Self {
        Self {
            top: 0.0,
            left: amount,
            bottom: 0.0,
            right: amount,
        }
    }

    /// Spacing on the top and bottom edges only.
    #[must_use]
    pub const fn vertical_only(amount: f32) -> Self {
        Self {
            top: amount,
            left: 0.0,
            bottom: amount,
            right: 0.0,
        }
    }

    /// Total horizontal spacing.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical spacing.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Layout constraints for widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints {
    /// Minimum width.
    pub min_width: f32,
    /// Maximum width.
    pub max_width: f32,
    /// Minimum height.
    pub min_height: f32,
    /// Maximum height.
    pub max_height: f32,
}

impl Constraints {
    /// Unconstrained (any size).
    pub const UNBOUNDED: Self = Self {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    /// Constraints bounded only by a maximum width.
    #[must_use]
    pub const fn max_width(max_width: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }

    /// Clamps a size to these constraints.
    #[must_use]
    pub fn clamp(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}

/// Layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal (left to right).
    #[default]
    Horizontal,
    /// Vertical (top to bottom).
    Vertical,
}

/// Layout alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to start (left/top).
    #[default]
    Start,
    /// Align to center.
    Center,
    /// Align to end (right/bottom).
    End,
    /// Stretch to fill available space.
    Stretch,
}

/// Arranges children one after another along an axis.
///
/// Sizes are `(width, height)` pairs; the main axis is the layout direction
/// and the cross axis the other one.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Axis children are placed along.
    pub direction: Direction,
    /// Placement of the whole run on the main axis.
    pub main_alignment: Alignment,
    /// Placement of each child on the cross axis.
    pub cross_alignment: Alignment,
    /// Gap between children.
    pub gap: f32,
    /// Padding on every edge of the bounds.
    pub padding: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            main_alignment: Alignment::Start,
            cross_alignment: Alignment::Start,
            gap: 0.0,
            padding: 0.0,
        }
    }
}

impl Layout {
    /// Left-to-right layout.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Top-to-bottom layout.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Self::default()
        }
    }

    /// Sets the gap between children.
    #[must_use]
    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the padding on every edge.
    #[must_use]
    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets main axis alignment.
    #[must_use]
    pub const fn align_main(mut self, alignment: Alignment) -> Self {
        self.main_alignment = alignment;
        self
    }

    /// Sets cross axis alignment.
    #[must_use]
    pub const fn align_cross(mut self, alignment: Alignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Places children of the given sizes inside `bounds`, in order.
    ///
    /// `bounds` may be unbounded on the main axis when the run starts at
    /// [`Alignment::Start`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn arrange(&self, bounds: Rect, sizes: &[(f32, f32)]) -> Vec<Rect> {
        if sizes.is_empty() {
            return Vec::new();
        }

        let inner = bounds.inset(Insets::all(self.padding));
        let vertical = self.direction == Direction::Vertical;
        let along = |(w, h): (f32, f32)| if vertical { (h, w) } else { (w, h) };
        let (main_len, cross_len) = along((inner.width, inner.height));
        let (main_start, cross_start) = if vertical { (inner.y, inner.x) } else { (inner.x, inner.y) };

        let run: f32 = sizes.iter().map(|&size| along(size).0).sum::<f32>()
            + self.gap * (sizes.len() - 1) as f32;
        let mut cursor = main_start + self.main_alignment.offset(main_len - run);

        sizes
            .iter()
            .map(|&size| {
                let (main, cross) = along(size);
                let (cross_pos, cross_size) = if self.cross_alignment == Alignment::Stretch {
                    (cross_start, cross_len)
                } else {
                    (cross_start + self.cross_alignment.offset(cross_len - cross), cross)
                };
                let frame = if vertical {
                    Rect::new(cross_pos, cursor, cross_size, main)
                } else {
                    Rect::new(cursor, cross_pos, main, cross_size)
                };
                cursor += main + self.gap;
                frame
            })
            .collect()
    }
}

impl Alignment {
    /// Offset from the start edge given the free space on an axis.
    fn offset(self, free: f32) -> f32 {
        match self {
            Self::Start | Self::Stretch => 0.0,
            Self::Center => free * 0.5,
            Self::End => free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::new(0.0, 0.0, 30.0, 10.0);
        let inner = rect.inset(Insets::horizontal_only(20.0));

        assert_eq!(inner.x, 20.0);
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 10.0);
    }

    #[test]
    fn test_layout_vertical_stretch() {
        let layout = Layout::vertical().with_gap(20.0).align_cross(Alignment::Stretch);
        let bounds = Rect::new(0.0, 0.0, 330.0, 600.0);
        let sizes = vec![(100.0, 180.0), (200.0, 30.0)];

        let result = layout.arrange(bounds, &sizes);

        assert_eq!(result[0].width, 330.0);
        assert_eq!(result[1].y, 200.0); // 180 + 20 gap
    }

    #[test]
    fn test_layout_horizontal() {
        let layout = Layout::horizontal().with_gap(10.0);
        let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);
        let sizes = vec![(30.0, 20.0), (40.0, 20.0), (30.0, 20.0)];

        let result = layout.arrange(bounds, &sizes);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].x, 0.0);
        assert_eq!(result[1].x, 40.0); // 30 + 10 gap
        assert_eq!(result[2].x, 90.0); // 40 + 40 + 10 gap
    }

    #[test]
    fn test_layout_centered_run() {
        let layout = Layout::horizontal()
            .with_padding(10.0)
            .align_main(Alignment::Center)
            .align_cross(Alignment::End);
        let result = layout.arrange(Rect::new(0.0, 0.0, 120.0, 60.0), &[(40.0, 20.0), (20.0, 10.0)]);

        assert_eq!(result[0], Rect::new(30.0, 30.0, 40.0, 20.0));
        assert_eq!(result[1], Rect::new(70.0, 40.0, 20.0, 10.0));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(a.intersection(&Rect::new(50.0, 80.0, 100.0, 100.0)), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));
        assert_eq!(a.intersection(&Rect::new(100.0, 0.0, 10.0, 10.0)), None);
    }
}
