//! Input handling for UI.
//!
//! Per-frame mouse, scroll and keyboard state fed to widgets.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button (or a touch).
    Left,
    /// Right mouse button.
    Right,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Space bar.
    Space,
    /// Tab key.
    Tab,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub mouse_x: f32,
    /// Current pointer Y position.
    pub mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Scroll delta (x, y).
    pub scroll_delta: (f32, f32),
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Keys currently held.
    keys_down: Vec<Key>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed = 0;
        self.buttons_released = 0;
        self.scroll_delta = (0.0, 0.0);
        self.keys_pressed.clear();
    }

    /// Updates pointer position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Records a full press + release at a point within one frame (a tap).
    pub fn tap(&mut self, x: f32, y: f32) {
        self.set_mouse_pos(x, y);
        self.mouse_button_down(MouseButton::Left);
        self.mouse_button_up(MouseButton::Left);
    }

    /// Records scroll input.
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        self.scroll_delta.0 += dx;
        self.scroll_delta.1 += dy;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.push(key);
            self.keys_down.push(key);
        }
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Returns true if the mouse button was pressed this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true if this frame carries no pointer, scroll or key activity.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.buttons_pressed == 0
            && self.buttons_released == 0
            && self.scroll_delta == (0.0, 0.0)
            && self.keys_pressed.is_empty()
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.begin_frame();
        assert!(!input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_tap_is_cleared_next_frame() {
        let mut input = InputState::new();
        input.tap(10.0, 20.0);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.is_idle());

        input.begin_frame();
        assert!(input.is_idle());
        assert_eq!((input.mouse_x, input.mouse_y), (10.0, 20.0));
    }

    #[test]
    fn test_key_repeat_is_single_press() {
        let mut input = InputState::new();
        input.key_down(Key::Enter);
        input.key_down(Key::Enter);
        assert!(input.key_pressed(Key::Enter));

        input.begin_frame();
        input.key_down(Key::Enter);
        assert!(!input.key_pressed(Key::Enter));

        input.key_up(Key::Enter);
        input.key_down(Key::Enter);
        assert!(input.key_pressed(Key::Enter));
    }
}
