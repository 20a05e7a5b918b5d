//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::UIRenderer;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget takes part in hit-testing and receives input.
    pub const ENABLED: u32 = 1 << 1;
    /// Widget is focused.
    pub const FOCUSED: u32 = 1 << 2;
    /// Widget is hovered.
    pub const HOVERED: u32 = 1 << 3;
    /// Widget is pressed.
    pub const PRESSED: u32 = 1 << 4;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (set after layout).
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
    /// Parent widget ID (None for root).
    pub parent: Option<WidgetId>,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
            parent: None,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget accepts input.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }

    /// Returns true if the widget can be hit at the given point.
    #[inline]
    #[must_use]
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.is_visible() && self.is_enabled() && self.rect.contains(x, y)
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget was activated (pointer released inside, or Enter/Space while focused).
    pub clicked: bool,
    /// Widget gained focus.
    pub focused: bool,
    /// Widget was hovered (just entered).
    pub hovered: bool,
    /// Widget was unhovered (just left).
    pub unhovered: bool,
    /// Widget content changed (scrolled, animated).
    pub changed: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and advances animations by `dt` seconds.
    ///
    /// Called every frame, even without input events.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Emits render commands for this widget.
    fn render(&self, renderer: &mut UIRenderer);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Returns the preferred size of this widget.
    fn preferred_size(&self) -> (f32, f32) {
        self.min_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_assign() {
        let mut flags = WidgetFlags::new();
        assert!(flags.has(WidgetFlags::ENABLED));

        flags.assign(WidgetFlags::ENABLED, false);
        assert!(!flags.has(WidgetFlags::ENABLED));
        assert!(flags.has(WidgetFlags::VISIBLE));

        flags.assign(WidgetFlags::PRESSED, true);
        assert!(flags.has(WidgetFlags::PRESSED));
    }

    #[test]
    fn test_disabled_widget_is_not_hit() {
        let mut state = WidgetState::new(WidgetId::new(1));
        state.rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(state.hit(5.0, 5.0));

        state.flags.clear(WidgetFlags::ENABLED);
        assert!(!state.hit(5.0, 5.0));
    }
}
