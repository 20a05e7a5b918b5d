//! Colors, font weights and the sheet theme.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// System red.
    pub const RED: Self = Self::rgba(1.0, 0.23, 0.19, 1.0);
    /// System blue.
    pub const BLUE: Self = Self::rgba(0.0, 0.48, 1.0, 1.0);
    /// System gray.
    pub const GRAY: Self = Self::rgba(0.56, 0.56, 0.58, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Font weight for text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Body weight.
    #[default]
    Regular,
    /// Button labels.
    Semibold,
    /// Headlines.
    Bold,
}

/// Colors shared by every sheet section.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Sheet background.
    pub background: Color,
    /// Primary text color.
    pub text: Color,
    /// Secondary text (captions, disclaimers).
    pub text_muted: Color,
    /// Label color on filled (tinted) controls.
    pub on_tint: Color,
}

impl Theme {
    /// Light system appearance.
    pub const LIGHT: Self = Self {
        background: Color::WHITE,
        text: Color::BLACK,
        text_muted: Color::GRAY,
        on_tint: Color::WHITE,
    };

    /// Dark system appearance.
    pub const DARK: Self = Self {
        background: Color::rgba(0.11, 0.11, 0.12, 1.0),
        text: Color::WHITE,
        text_muted: Color::GRAY,
        on_tint: Color::WHITE,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let black = Color::BLACK;
        let white = Color::WHITE;
        let mid = black.lerp(white, 0.5);

        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }
}
