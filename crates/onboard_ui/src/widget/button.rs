//! Prominent capsule button.

use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::{Constraints, Rect};
use crate::render::{RenderCommand, UIRenderer};
use crate::style::{Color, FontWeight, Theme};
use crate::view::{Text, View};

/// A filled, capsule-shaped button with a centered label.
///
/// Activation: pointer pressed and released inside the bounds, or Enter /
/// Space while focused. A disabled button ignores all input.
#[derive(Debug, Clone)]
pub struct Button {
    state: WidgetState,
    label: Text,
    fill: Color,
    vertical_padding: f32,
}

impl Button {
    /// Label font size.
    pub const LABEL_SIZE: f32 = 17.0;
    /// Built-in inset between the capsule edge and the label.
    pub const CONTENT_INSET: f32 = 7.0;

    /// Creates a button.
    #[must_use]
    pub fn new(id: WidgetId, label: impl Into<String>, fill: Color, label_color: Color) -> Self {
        Self {
            state: WidgetState::new(id),
            label: Text::new(label)
                .size(Self::LABEL_SIZE)
                .weight(FontWeight::Semibold)
                .color(label_color)
                .line_limit(1),
            fill,
            vertical_padding: 4.0,
        }
    }

    /// Sets the padding above and below the label.
    #[must_use]
    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }

    /// Places the button.
    pub fn set_rect(&mut self, rect: Rect) {
        self.state.rect = rect;
    }

    /// Enables or disables input handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.flags.assign(WidgetFlags::ENABLED, enabled);
        if !enabled {
            self.state.flags.clear(WidgetFlags::HOVERED);
            self.state.flags.clear(WidgetFlags::PRESSED);
        }
    }

    /// The label text.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.content()
    }
}

impl Widget for Button {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, _dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        if !self.state.is_enabled() || !self.state.is_visible() {
            return response;
        }

        let inside = self.state.rect.contains(input.mouse_x, input.mouse_y);
        let was_hovered = self.state.is_hovered();
        self.state.flags.assign(WidgetFlags::HOVERED, inside);
        response.hovered = inside && !was_hovered;
        response.unhovered = !inside && was_hovered;

        if input.key_pressed(Key::Tab) && !self.state.flags.has(WidgetFlags::FOCUSED) {
            self.state.flags.set(WidgetFlags::FOCUSED);
            response.focused = true;
        }

        if inside && input.mouse_clicked(MouseButton::Left) {
            self.state.flags.set(WidgetFlags::PRESSED);
        }
        if input.mouse_released(MouseButton::Left) {
            if self.state.is_pressed() && inside {
                response.clicked = true;
            }
            self.state.flags.clear(WidgetFlags::PRESSED);
        }

        if self.state.flags.has(WidgetFlags::FOCUSED)
            && (input.key_pressed(Key::Enter) || input.key_pressed(Key::Space))
        {
            response.clicked = true;
        }

        if response.clicked {
            tracing::trace!("button {:?} activated", self.state.id);
        }
        response
    }

    fn render(&self, renderer: &mut UIRenderer) {
        let rect = self.state.rect;
        let fill = if self.state.is_pressed() {
            self.fill.lerp(Color::BLACK, 0.15)
        } else {
            self.fill
        };
        renderer.push(RenderCommand::Rect {
            bounds: rect,
            color: fill,
            corner_radius: rect.height * 0.5,
        });

        let (label_w, label_h) = self.label.measure(Constraints::max_width(rect.width));
        let (cx, cy) = rect.center();
        let label_rect = Rect::new(cx - label_w * 0.5, cy - label_h * 0.5, label_w, label_h);

        // Label color is explicit; the theme is never consulted.
        let mut commands = Vec::with_capacity(1);
        self.label.render(label_rect, &Theme::LIGHT, &mut commands);
        renderer.extend(commands);
    }

    fn min_size(&self) -> (f32, f32) {
        let (w, h) = self.label.measure(Constraints::UNBOUNDED);
        (w + Self::CONTENT_INSET * 4.0, h + (self.vertical_padding + Self::CONTENT_INSET) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        let mut button = Button::new(WidgetId::new(1), "Continue", Color::RED, Color::WHITE);
        button.set_rect(Rect::new(0.0, 500.0, 330.0, 50.0));
        button
    }

    #[test]
    fn test_tap_inside_clicks_once() {
        let mut button = button();
        let mut input = InputState::new();

        input.tap(100.0, 520.0);
        assert!(button.update(&input, 0.016).clicked);

        input.begin_frame();
        assert!(!button.update(&input, 0.016).clicked);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut button = button();
        let mut input = InputState::new();

        input.set_mouse_pos(100.0, 520.0);
        input.mouse_button_down(MouseButton::Left);
        assert!(!button.update(&input, 0.016).clicked);
        assert!(button.state().is_pressed());

        input.begin_frame();
        input.set_mouse_pos(100.0, 10.0);
        input.mouse_button_up(MouseButton::Left);
        assert!(!button.update(&input, 0.016).clicked);
        assert!(!button.state().is_pressed());
    }

    #[test]
    fn test_disabled_button_ignores_tap() {
        let mut button = button();
        button.set_enabled(false);
        let mut input = InputState::new();

        input.tap(100.0, 520.0);
        assert_eq!(button.update(&input, 0.016), WidgetResponse::default());
    }

    #[test]
    fn test_enter_activates_after_focus() {
        let mut button = button();
        let mut input = InputState::new();

        input.key_down(Key::Enter);
        assert!(!button.update(&input, 0.016).clicked);

        input.begin_frame();
        input.key_up(Key::Enter);
        input.key_down(Key::Tab);
        assert!(button.update(&input, 0.016).focused);

        input.begin_frame();
        input.key_down(Key::Enter);
        assert!(button.update(&input, 0.016).clicked);
    }

    #[test]
    fn test_min_size_includes_padding() {
        let desktop = button().with_vertical_padding(8.0);
        let phone = button();
        assert!(desktop.min_size().1 > phone.min_size().1);
        assert!((desktop.min_size().1 - phone.min_size().1 - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_render_is_capsule_with_label() {
        let button = button();
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();
        button.render(&mut renderer);

        let batch = renderer.end_frame();
        assert!(matches!(batch.commands[0], RenderCommand::Rect { corner_radius, .. } if corner_radius == 25.0));
        assert_eq!(batch.texts().collect::<Vec<_>>(), vec!["Continue"]);
    }
}
